use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pomodoro::client::app::Command as ClientCommand;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// Path to a custom configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Path to the daemon's UNIX socket
    #[arg(short, long, env = "SOCKET_PATH")]
    pub socket: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Show the current period and remaining time
    Get,
    /// Start the timer if it is stopped, stop it otherwise
    Toggle,
}

impl From<Command> for ClientCommand {
    fn from(value: Command) -> Self {
        match value {
            Command::Get => Self::Get,
            Command::Toggle => Self::Toggle,
        }
    }
}
