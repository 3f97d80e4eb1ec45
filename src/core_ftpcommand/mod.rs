// Here's the list of the FTP commands the decoy answers
pub mod cwd;
pub mod eprt;
pub mod pass;
pub mod port;
pub mod pwd;
pub mod quit;
pub mod retr;
pub mod type_;
pub mod user;

// Command decoding, the reply lines, and the dispatch glue
pub mod ftpcommand;
pub mod handlers;
pub mod replies;
