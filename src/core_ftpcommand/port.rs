use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the PORT FTP command, the same pretence as EPRT: no connection
/// back to the client is ever made.
pub async fn handle_port_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::PORT_OK).await
}
