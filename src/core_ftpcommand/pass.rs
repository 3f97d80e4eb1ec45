use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the PASS FTP command. Whatever the password, the login "succeeds".
pub async fn handle_pass_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::PASS_OK).await
}
