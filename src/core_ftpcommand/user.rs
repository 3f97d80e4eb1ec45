use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the USER FTP command.
///
/// Any username is welcome; the decoy only keeps the conversation going by
/// asking for a password.
///
/// # Arguments
///
/// * `writer` - A shared, locked control stream for writing responses to the client.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_user_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::USER_OK).await
}
