use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// Sends a response to the client.
///
/// The write half of the control connection is shared between the command
/// loop and any data-channel tasks it spawned; each reply grabs the lock for
/// one write only, so replies from concurrent tasks may interleave with the
/// loop's own. That mirrors the behaviour FTP clients actually observe here.
pub async fn send_response(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    message: &[u8],
) -> Result<(), std::io::Error> {
    let mut writer = writer.lock().await;
    writer.write_all(message).await?;
    Ok(())
}
