use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use crate::session::Session;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the CWD FTP command against the virtual directory.
///
/// The "change" always succeeds: there is no filesystem behind it, the
/// argument is simply appended to the session's virtual path. An empty
/// argument changes nothing but is acknowledged all the same.
pub async fn handle_cwd_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    session: &Arc<Mutex<Session>>,
    arg: String,
) -> Result<(), std::io::Error> {
    {
        let mut session = session.lock().await;
        session.change_dir(&arg);
    }
    send_response(writer, replies::CWD_OK).await
}
