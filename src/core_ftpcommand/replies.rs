//! The literal FTP status lines the decoy emits.
//!
//! Everything a client ever sees comes from here, greeting included, so the
//! wire output stays byte-for-byte stable. The greeting imitates a stock
//! vsftpd banner.

use crate::constants::FAKE_HOME_DIR;

pub const GREETING: &[u8] = b"220 (vsFTPd 3.0.3)\r\n";
pub const USER_OK: &[u8] = b"331 Please specify the password.\r\n";
pub const PASS_OK: &[u8] = b"230 Login successful.\r\n";
pub const TYPE_BINARY: &[u8] = b"200 Switching to Binary mode.\r\n";
pub const EPSV_ALL_OK: &[u8] = b"200 EPSV ALL ok.\r\n";
pub const EPRT_OK: &[u8] = b"200 EPRT command successful.\r\n";
pub const PORT_OK: &[u8] = b"200 PORT command successful.\r\n";
pub const CWD_OK: &[u8] = b"250 Directory successfully changed.\r\n";
pub const DATA_OPENING: &[u8] = b"150 Opening BINARY mode data connection.\r\n";
pub const TRANSFER_COMPLETE: &[u8] = b"226 Transfer complete.\r\n";
pub const GOODBYE: &[u8] = b"221 Goodbye.\r\n";
pub const UNKNOWN_COMMAND: &[u8] = b"500 Unknown command.\r\n";
pub const TRANSFER_ABORTED: &[u8] = b"426 Connection closed; transfer aborted.\r\n";

/// PWD reply. An untouched session reports the fake home directory.
pub fn pwd(current_dir: &str) -> String {
    let dir = if current_dir.is_empty() {
        FAKE_HOME_DIR
    } else {
        current_dir
    };
    format!("257 \"{}\" is the current directory.\r\n", dir)
}

/// EPSV reply carrying the ephemeral data port.
pub fn epsv(port: u16) -> String {
    format!("229 Entering Extended Passive Mode (|||{}|)\r\n", port)
}
