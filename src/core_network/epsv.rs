use crate::constants::DATA_PROBE_LIMIT;
use crate::core_ftpcommand::replies;
use crate::helpers::send_response;
use log::{debug, error, info};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Replies to `EPSV ALL`. Nothing to restrict on our side, so a plain ack.
pub async fn handle_epsv_all_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
) -> Result<(), std::io::Error> {
    send_response(writer, replies::EPSV_ALL_OK).await
}

/// Handles a bare EPSV by spawning one detached data-channel task.
///
/// The task owns the whole exchange: it binds the ephemeral listener, tells
/// the client the port over the shared control stream, waits for exactly one
/// inbound connection, plays out a fake transfer, and reports `426` if any
/// of that fails. The command loop never waits on it, so a client may stack
/// several EPSVs and their replies may interleave with later command replies.
pub async fn handle_epsv_command(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    pasv_ip: IpAddr,
) -> Result<(), std::io::Error> {
    let writer = Arc::clone(writer);
    tokio::spawn(async move {
        if let Err(e) = serve_data_connection(&writer, pasv_ip).await {
            error!("Data connection error: {}", e);
            if let Err(e) = send_response(&writer, replies::TRANSFER_ABORTED).await {
                error!("Failed to send abort reply: {}", e);
            }
        }
    });
    Ok(())
}

/// One accept-and-probe cycle on a freshly bound ephemeral listener.
///
/// The listener lives in this scope only, so it is released on every exit
/// path, success or not.
async fn serve_data_connection(
    writer: &Arc<Mutex<OwnedWriteHalf>>,
    pasv_ip: IpAddr,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind((pasv_ip, 0)).await?;
    let port = listener.local_addr()?.port();
    debug!("EPSV listener bound on {}:{}", pasv_ip, port);
    send_response(writer, replies::epsv(port).as_bytes()).await?;

    let (mut data_stream, peer) = listener.accept().await?;
    info!("Data connection from {}", peer);
    send_response(writer, replies::DATA_OPENING).await?;

    // Best-effort probe: some clients push a payload here, most just
    // connect. Either way the "transfer" completes.
    let mut probe = vec![0u8; DATA_PROBE_LIMIT];
    let n = data_stream.read(&mut probe).await?;
    if n > 0 {
        info!(
            "Data received on data connection: {}",
            String::from_utf8_lossy(&probe[..n]).trim_end()
        );
    }

    send_response(writer, replies::TRANSFER_COMPLETE).await?;
    Ok(())
}
