use std::net::SocketAddr;

/// Per-connection decoy state.
///
/// The working directory is purely virtual: it is never checked against any
/// real filesystem and only ever grows. Recorded paths keep the order the
/// client requested them in and are flushed, not cleared, at teardown.
#[derive(Debug)]
pub struct Session {
    pub current_dir: String,
    pub recorded_paths: Vec<String>,
    pub peer_addr: SocketAddr,
}

impl Session {
    pub fn new(peer_addr: SocketAddr) -> Self {
        Self {
            current_dir: String::new(),
            recorded_paths: Vec::new(),
            peer_addr,
        }
    }

    /// Appends a non-empty CWD argument to the virtual directory. There is
    /// no `..` handling and no absolute-path reset, on purpose.
    pub fn change_dir(&mut self, arg: &str) {
        if arg.is_empty() {
            return;
        }
        if self.current_dir.is_empty() {
            self.current_dir = arg.to_string();
        } else {
            self.current_dir = format!("{}/{}", self.current_dir, arg);
        }
    }

    /// Records the full path a RETR asked for and returns it.
    pub fn record_retrieval(&mut self, arg: &str) -> String {
        let full_path = if self.current_dir.is_empty() {
            arg.to_string()
        } else {
            format!("{}/{}", self.current_dir, arg)
        };
        self.recorded_paths.push(full_path.clone());
        full_path
    }
}
