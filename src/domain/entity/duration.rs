use std::time::Duration;

use snafu::prelude::*;

const SECONDS_IN_MINUTE: u64 = 60;
const SECONDS_IN_HOUR: u64 = 3600;

/// The length of a work or rest period, at least one second long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodDuration(Duration);

impl PeriodDuration {
    /// Try to create a [`PeriodDuration`] from a number of seconds.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(seconds: u64) -> Result<Self, TryNewPeriodDurationError> {
        ensure!(seconds > 0, ZeroSnafu);
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Try to create a [`PeriodDuration`] from a number of minutes.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero or too large.
    pub fn try_from_minutes(minutes: u64) -> Result<Self, TryNewPeriodDurationError> {
        let seconds = minutes
            .checked_mul(SECONDS_IN_MINUTE)
            .context(OverflowSnafu)?;
        Self::try_new(seconds)
    }

    /// Returns the inner [`Duration`].
    pub fn inner(&self) -> Duration {
        self.0
    }
}

/// An error type of creating a [`PeriodDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewPeriodDurationError {
    #[snafu(display("Duration must be greater than zero"))]
    #[non_exhaustive]
    Zero,
    #[snafu(display("Duration is too large"))]
    #[non_exhaustive]
    Overflow,
}

/// Format whole seconds of a duration as `MM:SS`, or `HH:MM:SS` once it
/// reaches an hour.
pub fn format_clock(duration: Duration) -> String {
    let mut seconds = duration.as_secs();
    let hours = seconds / SECONDS_IN_HOUR;
    seconds %= SECONDS_IN_HOUR;
    let minutes = seconds / SECONDS_IN_MINUTE;
    seconds %= SECONDS_IN_MINUTE;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
