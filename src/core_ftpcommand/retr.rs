use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use crate::session::Session;
use log::info;
use std::sync::Arc;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Handles the RETR (Retrieve) FTP command.
///
/// This is the whole point of the decoy: the requested path, joined onto the
/// virtual directory, is recorded for the capture log. The client gets the
/// usual `150`/`226` pair as two separate writes and no file bytes at all.
///
/// # Arguments
///
/// * `writer` - A shared, locked control stream for writing responses to the client.
/// * `session` - A shared, locked session holding the virtual directory and recorded paths.
/// * `arg` - The path the client asked for.
///
/// # Returns
///
/// Result<(), std::io::Error> indicating the success or failure of the operation.
pub async fn handle_retr_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    session: &Arc<Mutex<Session>>,
    arg: String,
) -> Result<(), std::io::Error> {
    let full_path = {
        let mut session = session.lock().await;
        session.record_retrieval(&arg)
    };
    info!("RETR path recorded: {}", full_path);

    send_response(writer, replies::DATA_OPENING).await?;
    send_response(writer, replies::TRANSFER_COMPLETE).await?;
    Ok(())
}
