// src/core_ftpcommand/pwd.rs
use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use crate::session::Session;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

pub async fn handle_pwd_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    session: &Arc<Mutex<Session>>,
) -> Result<(), std::io::Error> {
    let response = {
        let session = session.lock().await;
        replies::pwd(&session.current_dir)
    };
    send_response(writer, response.as_bytes()).await
}
