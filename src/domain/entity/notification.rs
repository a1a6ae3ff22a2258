use snafu::prelude::*;

/// The title and optional body shown when the timer enters a new period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    summary: String,
    body: Option<String>,
}

impl NotificationMessage {
    /// Try to create a [`NotificationMessage`]. An empty body is treated as
    /// no body at all.
    ///
    /// # Errors
    ///
    /// This function will return an error if the summary is blank.
    pub fn try_new(
        summary: String,
        body: Option<String>,
    ) -> Result<Self, TryNewNotificationMessageError> {
        ensure!(!summary.trim().is_empty(), EmptySummarySnafu);
        let body = body.filter(|body| !body.is_empty());
        Ok(Self { summary, body })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// An error type of creating a [`NotificationMessage`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewNotificationMessageError {
    #[snafu(display("Summary of a notification must not be blank"))]
    #[non_exhaustive]
    EmptySummary,
}
