use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::{NotificationMessage, Period};

/// A public port for announcing that the timer entered a new period.
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Show `message` for the period that just began.
    ///
    /// # Errors
    ///
    /// This function will return an error if the announcement could not be
    /// delivered.
    async fn notify(&self, period: Period, message: &NotificationMessage)
        -> Result<(), NotifyError>;
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError + Send + Sync>, Some)))]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}
