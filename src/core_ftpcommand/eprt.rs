use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the EPRT FTP command. Active mode is never actually entered; the
/// decoy just claims success so the client moves on.
pub async fn handle_eprt_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::EPRT_OK).await
}
