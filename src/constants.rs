// src/constants.rs

/// Directory reported by PWD while no CWD has been issued yet.
pub const FAKE_HOME_DIR: &str = "/home/user";

/// One control-channel read per command, matching what the clients we
/// imitate send.
pub const CONTROL_BUFFER_SIZE: usize = 1024;

/// Upper bound on the probe read from an accepted data connection.
pub const DATA_PROBE_LIMIT: usize = 1024;

/// Address the host-IP discovery socket connects to. No packet is sent,
/// connect() only selects the outbound interface.
pub const HOST_PROBE_ADDR: &str = "8.8.8.8:80";

#[cfg(target_os = "windows")]
pub const DEFAULT_CONFIG_PATH: &str = "C:\\leurreftpd\\etc\\leurreftpd.conf";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_CONFIG_PATH: &str = "/etc/leurreftpd.conf";
