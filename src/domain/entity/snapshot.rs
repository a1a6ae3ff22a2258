use std::time::Duration;

use crate::domain::entity::duration::format_clock;
use crate::domain::entity::Period;

/// A consistent read of the timer at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    period: Period,
    remaining: Duration,
}

impl TimerSnapshot {
    /// Creates a new [`TimerSnapshot`]. A stopped snapshot never carries
    /// remaining time.
    pub fn new(period: Period, remaining: Duration) -> Self {
        let remaining = match period {
            Period::Stopped => Duration::ZERO,
            _ => remaining,
        };
        Self { period, remaining }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns the remaining time formatted as a clock.
    pub fn formatted_remaining(&self) -> String {
        format_clock(self.remaining)
    }
}
