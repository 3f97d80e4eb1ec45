/// One decoded control-channel command.
///
/// CWD and RETR are the only verbs whose argument matters to the decoy; the
/// rest collapse to bare variants.
#[derive(Debug, PartialEq, Eq)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum FtpCommand {
    USER,
    PASS,
    PWD,
    TYPEI,
    EPSVALL,
    EPSV,
    EPRT,
    PORT,
    CWD(String),
    RETR(String),
    QUIT,
    UNKNOWN,
}

impl FtpCommand {
    /// Decodes a raw control-channel line.
    ///
    /// Matching is a case-sensitive literal prefix test, most specific
    /// prefix first: `EPSV ALL` must be tried before `EPSV`, and `TYPE I`
    /// is the whole prefix (`TYPE A` is not a command the decoy knows).
    /// Arguments keep whatever the client sent after the verb, with the
    /// surrounding whitespace and the CRLF trimmed off.
    pub fn parse(line: &str) -> FtpCommand {
        if line.starts_with("USER") {
            FtpCommand::USER
        } else if line.starts_with("PASS") {
            FtpCommand::PASS
        } else if line.starts_with("PWD") {
            FtpCommand::PWD
        } else if line.starts_with("TYPE I") {
            FtpCommand::TYPEI
        } else if line.starts_with("EPSV ALL") {
            FtpCommand::EPSVALL
        } else if line.starts_with("EPSV") {
            FtpCommand::EPSV
        } else if line.starts_with("EPRT") {
            FtpCommand::EPRT
        } else if line.starts_with("PORT") {
            FtpCommand::PORT
        } else if line.starts_with("CWD") {
            FtpCommand::CWD(line[3..].trim().to_string())
        } else if line.starts_with("RETR") {
            FtpCommand::RETR(line[4..].trim().to_string())
        } else if line.starts_with("QUIT") {
            FtpCommand::QUIT
        } else {
            FtpCommand::UNKNOWN
        }
    }
}
