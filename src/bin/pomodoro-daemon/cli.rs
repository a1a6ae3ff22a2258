use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Path to a custom configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Path where the daemon creates the UNIX socket
    #[arg(short, long, env = "SOCKET_PATH")]
    pub socket: Option<PathBuf>,
    /// Work period length in minutes [default: 25]
    #[arg(short, long)]
    pub work: Option<u64>,
    /// Rest period length in minutes [default: 5]
    #[arg(short, long)]
    pub rest: Option<u64>,
    /// Maximum logging level the subscriber should use
    #[arg(short, long, default_value_t = Level::INFO)]
    pub verbosity: Level,
}
