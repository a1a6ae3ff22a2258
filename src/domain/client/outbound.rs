use std::error::Error as StdError;
use std::time::Duration;

use snafu::prelude::*;

use crate::domain::entity::Period;

/// The timer's status as reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub period: Period,
    pub remaining: Duration,
    pub remaining_formatted: String,
}

/// A public port for requesting the daemon's current status.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GetPort: Send + Sync + 'static {
    /// Do the get operation.
    ///
    /// # Errors
    ///
    /// This function will return an error if the operation failed.
    async fn get(&self) -> Result<StatusReport, RequestDaemonError>;
}

/// A public port for requesting the daemon to start or stop the timer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SwitchPort: Send + Sync + 'static {
    /// Do the switch operation and return the status after it.
    ///
    /// # Errors
    ///
    /// This function will return an error if the operation failed.
    async fn switch(&self) -> Result<StatusReport, RequestDaemonError>;
}

/// An error type of sending requests to daemon.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum RequestDaemonError {
    #[snafu(display("Endpoint {endpoint} is unavailable, is the daemon running?"))]
    Unavailable { endpoint: String },
    #[snafu(display("Daemon error: {message}"))]
    Rejected { message: String },
    #[snafu(display("Could not receive a valid response"))]
    BadResponse,
    #[snafu(whatever, display("Request failed: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
