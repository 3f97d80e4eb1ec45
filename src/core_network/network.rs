use crate::config::Config;
use crate::constants::{CONTROL_BUFFER_SIZE, HOST_PROBE_ADDR};
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::handlers::{dispatch_command, LoopAction};
use crate::core_ftpcommand::replies;
use crate::core_log::logger;
use crate::helpers::send_response;
use crate::session::Session;
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// Binds the control listener and accepts decoy sessions forever.
///
/// One task per accepted connection, no cap and no admission control: a
/// scanner hammering the port costs tasks, not correctness. Session failures
/// stay inside their own task.
pub async fn start_server(config: Config) -> Result<()> {
    let listener = TcpListener::bind(format!(
        "{}:{}",
        config.server.listen_address, config.server.listen_port
    ))
    .await
    .with_context(|| {
        format!(
            "Failed to bind control listener on {}:{}",
            config.server.listen_address, config.server.listen_port
        )
    })?;

    let pasv_ip = resolve_pasv_address(&config.server.pasv_address);
    info!(
        "Decoy listening on {}:{}, data channels will bind on {}",
        config.server.listen_address, config.server.listen_port, pasv_ip
    );
    if let Some(path) = &config.server.capture_log {
        info!("Recording retrieval paths to {}", path);
    }

    let config = Arc::new(config);
    loop {
        let (socket, addr) = listener.accept().await?;
        info!("New connection from {}", addr);

        let config = Arc::clone(&config);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, config, addr, pasv_ip).await {
                error!("Connection error for {}: {:?}", addr, e);
            }
            info!("Connection from {} closed", addr);
        });
    }
}

/// Runs one decoy session over an accepted control connection.
///
/// The read half stays with this loop; the write half is shared so EPSV
/// data-channel tasks can reply on the same control stream while the loop
/// keeps reading. Any control-channel I/O error ends the session, and the
/// recorded paths are flushed on every way out.
pub async fn handle_connection(
    socket: TcpStream,
    config: Arc<Config>,
    addr: SocketAddr,
    pasv_ip: IpAddr,
) -> Result<(), std::io::Error> {
    let (mut reader, writer) = socket.into_split();
    let writer = Arc::new(Mutex::new(writer));
    let session = Arc::new(Mutex::new(Session::new(addr)));

    send_response(&writer, replies::GREETING).await?;

    let mut buffer = vec![0u8; CONTROL_BUFFER_SIZE];
    let outcome = loop {
        let n = match reader.read(&mut buffer).await {
            Ok(0) => {
                debug!("Client {} disconnected", addr);
                break Ok(());
            }
            Ok(n) => n,
            Err(e) => break Err(e),
        };

        // Lossy decode: malformed bytes never kill the session, they just
        // end up as a command the decoy does not know.
        let line = String::from_utf8_lossy(&buffer[..n]).into_owned();
        info!("[{}] {}", addr, line.trim_end());

        match dispatch_command(&writer, &session, pasv_ip, FtpCommand::parse(&line)).await {
            Ok(LoopAction::Continue) => {}
            Ok(LoopAction::Quit) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    flush_session(&config, &session).await;

    // A pending EPSV task still holds a clone of the write half, so dropping
    // our handles alone would not close the socket. Shut the write side down
    // here so the client gets its FIN with the session; a data-channel task
    // that replies after this point just hits the abort-logging path.
    if let Err(e) = writer.lock().await.shutdown().await {
        debug!("Control stream shutdown for {}: {}", addr, e);
    }

    outcome
}

/// Session teardown: logs what was harvested and appends it to the capture
/// log when one is configured. A flush failure is logged, never fatal.
async fn flush_session(config: &Config, session: &Arc<Mutex<Session>>) {
    let session = session.lock().await;
    if session.recorded_paths.is_empty() {
        return;
    }

    info!("RETR paths received from {}:", session.peer_addr);
    for path in &session.recorded_paths {
        info!("    {}", path);
    }

    if let Some(path) = &config.server.capture_log {
        match logger::append_paths(path, &session.recorded_paths).await {
            Ok(()) => info!("Paths saved to {}", path),
            Err(e) => error!("{}", e),
        }
    }
}

/// Picks the address EPSV data listeners bind to, once, at startup.
pub fn resolve_pasv_address(configured: &str) -> IpAddr {
    if !configured.is_empty() {
        match configured.parse() {
            Ok(ip) => return ip,
            Err(e) => warn!(
                "Invalid pasv_address {:?} in configuration, discovering instead: {}",
                configured, e
            ),
        }
    }
    match discover_host_ip() {
        Ok(ip) => ip,
        Err(e) => {
            warn!("Host address discovery failed, using loopback: {}", e);
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

/// Asks the routing table which local address faces the outside world.
/// Connecting a UDP socket sends nothing; it only selects a source address.
fn discover_host_ip() -> Result<IpAddr, std::io::Error> {
    let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(HOST_PROBE_ADDR)?;
    Ok(socket.local_addr()?.ip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
    use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

    const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    struct DecoyClient {
        reader: BufReader<OwnedReadHalf>,
        writer: OwnedWriteHalf,
    }

    impl DecoyClient {
        /// Starts one decoy session on an ephemeral loopback port and
        /// connects to it.
        async fn connect(config: Config) -> DecoyClient {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                let (socket, peer) = listener.accept().await.unwrap();
                let _ = handle_connection(socket, Arc::new(config), peer, LOOPBACK).await;
            });

            let stream = TcpStream::connect(addr).await.unwrap();
            let (reader, writer) = stream.into_split();
            DecoyClient {
                reader: BufReader::new(reader),
                writer,
            }
        }

        async fn send(&mut self, line: &str) {
            self.writer
                .write_all(format!("{}\r\n", line).as_bytes())
                .await
                .unwrap();
        }

        /// Reads exactly one CRLF-terminated reply line.
        async fn reply(&mut self) -> String {
            let mut line = String::new();
            self.reader.read_line(&mut line).await.unwrap();
            line
        }

        async fn expect_eof(&mut self) {
            let mut line = String::new();
            let n = self.reader.read_line(&mut line).await.unwrap();
            assert_eq!(n, 0, "expected EOF, got {:?}", line);
        }
    }

    fn epsv_port(reply: &str) -> u16 {
        reply
            .split("|||")
            .nth(1)
            .and_then(|rest| rest.split('|').next())
            .and_then(|port| port.parse().ok())
            .unwrap_or_else(|| panic!("not an EPSV reply: {:?}", reply))
    }

    #[tokio::test]
    async fn test_greeting_login_and_quit() {
        let mut client = DecoyClient::connect(Config::default()).await;
        assert_eq!(client.reply().await, "220 (vsFTPd 3.0.3)\r\n");

        client.send("USER admin").await;
        assert_eq!(client.reply().await, "331 Please specify the password.\r\n");

        client.send("PASS hunter2").await;
        assert_eq!(client.reply().await, "230 Login successful.\r\n");

        client.send("QUIT").await;
        assert_eq!(client.reply().await, "221 Goodbye.\r\n");
        client.expect_eof().await;
    }

    #[tokio::test]
    async fn test_pwd_tracks_virtual_directory() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("PWD").await;
        assert_eq!(
            client.reply().await,
            "257 \"/home/user\" is the current directory.\r\n"
        );

        client.send("CWD a").await;
        assert_eq!(
            client.reply().await,
            "250 Directory successfully changed.\r\n"
        );
        client.send("CWD b").await;
        client.reply().await;

        client.send("PWD").await;
        assert_eq!(
            client.reply().await,
            "257 \"a/b\" is the current directory.\r\n"
        );
    }

    #[tokio::test]
    async fn test_mode_negotiation_replies() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("TYPE I").await;
        assert_eq!(client.reply().await, "200 Switching to Binary mode.\r\n");
        client.send("EPSV ALL").await;
        assert_eq!(client.reply().await, "200 EPSV ALL ok.\r\n");
        client.send("EPRT |1|127.0.0.1|5000|").await;
        assert_eq!(client.reply().await, "200 EPRT command successful.\r\n");
        client.send("PORT 127,0,0,1,19,136").await;
        assert_eq!(client.reply().await, "200 PORT command successful.\r\n");
        client.send("TYPE A").await;
        assert_eq!(client.reply().await, "500 Unknown command.\r\n");
    }

    #[tokio::test]
    async fn test_unknown_commands_mutate_nothing() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("FOO bar").await;
        assert_eq!(client.reply().await, "500 Unknown command.\r\n");
        // lowercase verbs are not recognized either
        client.send("user admin").await;
        assert_eq!(client.reply().await, "500 Unknown command.\r\n");

        client.send("PWD").await;
        assert_eq!(
            client.reply().await,
            "257 \"/home/user\" is the current directory.\r\n"
        );
    }

    #[tokio::test]
    async fn test_retr_two_replies_and_capture_file() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("paths.log");
        let mut config = Config::default();
        config.server.capture_log = Some(capture.to_string_lossy().into_owned());

        let mut client = DecoyClient::connect(config).await;
        client.reply().await;

        client.send("CWD secret").await;
        client.reply().await;

        client.send("RETR a.txt").await;
        assert_eq!(
            client.reply().await,
            "150 Opening BINARY mode data connection.\r\n"
        );
        assert_eq!(client.reply().await, "226 Transfer complete.\r\n");

        client.send("RETR b.txt").await;
        client.reply().await;
        client.reply().await;

        client.send("QUIT").await;
        client.reply().await;
        client.expect_eof().await;

        let logged = std::fs::read_to_string(&capture).unwrap();
        assert_eq!(logged, "secret/a.txt\nsecret/b.txt\n");
    }

    #[tokio::test]
    async fn test_no_capture_file_without_retr() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("paths.log");
        let mut config = Config::default();
        config.server.capture_log = Some(capture.to_string_lossy().into_owned());

        let mut client = DecoyClient::connect(config).await;
        client.reply().await;
        client.send("USER admin").await;
        client.reply().await;
        client.send("QUIT").await;
        client.reply().await;
        client.expect_eof().await;

        assert!(!capture.exists());
    }

    #[tokio::test]
    async fn test_epsv_distinct_ports_and_probe() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("EPSV").await;
        let first = epsv_port(&client.reply().await);
        client.send("EPSV").await;
        let second = epsv_port(&client.reply().await);
        assert_ne!(first, second);

        // First data channel gets a probe payload.
        let mut data = TcpStream::connect(("127.0.0.1", first)).await.unwrap();
        assert_eq!(
            client.reply().await,
            "150 Opening BINARY mode data connection.\r\n"
        );
        data.write_all(b"PROBE").await.unwrap();
        assert_eq!(client.reply().await, "226 Transfer complete.\r\n");
        drop(data);

        // Second one just connects and hangs up; still a completed cycle.
        let data = TcpStream::connect(("127.0.0.1", second)).await.unwrap();
        assert_eq!(
            client.reply().await,
            "150 Opening BINARY mode data connection.\r\n"
        );
        drop(data);
        assert_eq!(client.reply().await, "226 Transfer complete.\r\n");

        client.send("QUIT").await;
        assert_eq!(client.reply().await, "221 Goodbye.\r\n");
    }

    #[tokio::test]
    async fn test_quit_closes_connection_while_epsv_pending() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("EPSV").await;
        let _port = epsv_port(&client.reply().await);

        // Never connect to the data port: the task blocked in accept must
        // not keep the control channel open past the end of the session.
        client.send("QUIT").await;
        assert_eq!(client.reply().await, "221 Goodbye.\r\n");
        client.expect_eof().await;
    }

    #[tokio::test]
    async fn test_data_connection_reset_yields_abort_reply() {
        let mut client = DecoyClient::connect(Config::default()).await;
        client.reply().await;

        client.send("EPSV").await;
        let port = epsv_port(&client.reply().await);

        let data = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
        assert_eq!(
            client.reply().await,
            "150 Opening BINARY mode data connection.\r\n"
        );

        // Linger 0 turns the close into an RST, so the payload read on the
        // server side fails instead of seeing a clean EOF.
        data.set_linger(Some(std::time::Duration::from_secs(0)))
            .unwrap();
        drop(data);

        assert_eq!(
            client.reply().await,
            "426 Connection closed; transfer aborted.\r\n"
        );
    }
}
