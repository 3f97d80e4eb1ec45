use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles `TYPE I`. Binary mode is the only type the decoy acknowledges;
/// other TYPE variants fall through the parser as unknown commands.
pub async fn handle_type_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::TYPE_BINARY).await
}
