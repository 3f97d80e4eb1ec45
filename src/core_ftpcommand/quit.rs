use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use log::info;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the QUIT FTP command.
///
/// Sends the goodbye reply; the caller ends the command loop without reading
/// any further input.
pub async fn handle_quit_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    info!("Received QUIT command. Closing connection.");
    send_response(writer, replies::GOODBYE).await
}
