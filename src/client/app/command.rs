#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the current period and remaining time
    Get,
    /// Start the timer if it is stopped, stop it otherwise
    Toggle,
}
