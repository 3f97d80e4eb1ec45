use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "leurreftpd",
    about = "A decoy FTP server that records which paths clients try to retrieve."
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    pub config: String,

    /// Control port to listen on (overrides the configuration file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// File the captured retrieval paths are appended to (overrides the
    /// configuration file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}
