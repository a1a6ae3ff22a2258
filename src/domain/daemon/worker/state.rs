use std::time::Duration;

use crate::domain::entity::{Period, PeriodDuration, TimerSnapshot};

const TICK: Duration = Duration::from_secs(1);

/// Configured lengths of the two running periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodLengths {
    pub work: PeriodDuration,
    pub rest: PeriodDuration,
}

impl PeriodLengths {
    /// Get the configured length of `period`. Periods that never count down
    /// have no length.
    pub fn of(&self, period: Period) -> Duration {
        match period {
            Period::Work => self.work.inner(),
            Period::Rest => self.rest.inner(),
            Period::Stopped | Period::Unknown => Duration::ZERO,
        }
    }
}

/// What a single [`TimerState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer is stopped and nothing changed.
    Idle,
    /// One second was taken off the current period.
    Elapsed,
    /// The current period ran out and the timer entered the given one.
    Switched(Period),
}

/// The authoritative state of the timer.
///
/// While stopped, the remaining duration is always zero. While running, it
/// never exceeds the configured length of the current period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    period: Period,
    remaining: Duration,
    lengths: PeriodLengths,
}

impl TimerState {
    /// Creates a new [`TimerState`] at the start of a work period.
    pub fn new(lengths: PeriodLengths) -> Self {
        Self {
            period: Period::Work,
            remaining: lengths.of(Period::Work),
            lengths,
        }
    }

    /// Advance the timer by one second, switching between work and rest when
    /// the current period has at most one second left.
    pub fn tick(&mut self) -> Tick {
        if self.period == Period::Stopped {
            return Tick::Idle;
        }

        if self.remaining <= TICK {
            self.period = self.period.opposite();
            self.remaining = self.lengths.of(self.period);
            Tick::Switched(self.period)
        } else {
            self.remaining -= TICK;
            Tick::Elapsed
        }
    }

    /// Start a fresh work period if stopped, otherwise stop. Progress of the
    /// period that was running is discarded.
    pub fn toggle(&mut self) {
        if self.period == Period::Stopped {
            self.period = Period::Work;
            self.remaining = self.lengths.of(Period::Work);
        } else {
            self.stop();
        }
    }

    /// Stop the timer.
    pub fn stop(&mut self) {
        self.period = Period::Stopped;
        self.remaining = Duration::ZERO;
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::new(self.period, self.remaining)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK: Duration = Duration::from_secs(1500);
    const REST: Duration = Duration::from_secs(300);

    fn new_lengths() -> PeriodLengths {
        PeriodLengths {
            work: PeriodDuration::try_new(WORK.as_secs()).unwrap(),
            rest: PeriodDuration::try_new(REST.as_secs()).unwrap(),
        }
    }

    fn new_state(period: Period, remaining: Duration) -> TimerState {
        TimerState {
            period,
            remaining,
            lengths: new_lengths(),
        }
    }

    #[test]
    fn state_new() {
        let state = TimerState::new(new_lengths());
        assert_eq!(state.period(), Period::Work);
        assert_eq!(state.remaining(), WORK);
    }

    #[test]
    fn state_tick_elapsed() {
        for period in [Period::Work, Period::Rest] {
            for secs in [2, 3, 120, 299] {
                let mut state = new_state(period, Duration::from_secs(secs));
                assert_eq!(state.tick(), Tick::Elapsed);
                assert_eq!(state.period(), period);
                assert_eq!(state.remaining(), Duration::from_secs(secs - 1));
            }
        }
    }

    #[test]
    fn state_tick_switched() {
        let remainings = [
            Duration::from_secs(1),
            Duration::from_millis(400),
            Duration::ZERO,
        ];
        for remaining in remainings {
            let mut state = new_state(Period::Work, remaining);
            assert_eq!(state.tick(), Tick::Switched(Period::Rest));
            assert_eq!(state.period(), Period::Rest);
            assert_eq!(state.remaining(), REST);

            let mut state = new_state(Period::Rest, remaining);
            assert_eq!(state.tick(), Tick::Switched(Period::Work));
            assert_eq!(state.period(), Period::Work);
            assert_eq!(state.remaining(), WORK);
        }
    }

    #[test]
    fn state_tick_stopped() {
        let mut state = new_state(Period::Stopped, Duration::ZERO);
        let before = state.clone();
        for _ in 0..5 {
            assert_eq!(state.tick(), Tick::Idle);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn state_tick_full_cycle() {
        let lengths = PeriodLengths {
            work: PeriodDuration::try_new(3).unwrap(),
            rest: PeriodDuration::try_new(2).unwrap(),
        };
        let mut state = TimerState::new(lengths);
        let ticks: Vec<_> = (0..6).map(|_| state.tick()).collect();
        assert_eq!(
            ticks,
            [
                Tick::Elapsed,
                Tick::Elapsed,
                Tick::Switched(Period::Rest),
                Tick::Elapsed,
                Tick::Switched(Period::Work),
                Tick::Elapsed,
            ]
        );
        assert_eq!(state.remaining(), Duration::from_secs(2));
    }

    #[test]
    fn state_toggle() {
        let mut state = new_state(Period::Stopped, Duration::ZERO);
        state.toggle();
        assert_eq!(state.snapshot(), TimerSnapshot::new(Period::Work, WORK));

        for period in [Period::Work, Period::Rest] {
            let mut state = new_state(period, Duration::from_secs(42));
            state.toggle();
            assert_eq!(state.period(), Period::Stopped);
            assert_eq!(state.remaining(), Duration::ZERO);
        }
    }

    #[test]
    fn state_toggle_discards_progress() {
        let mut state = new_state(Period::Rest, Duration::from_secs(42));
        state.toggle();
        state.toggle();
        assert_eq!(state.period(), Period::Work);
        assert_eq!(state.remaining(), WORK);
    }

    #[test]
    fn state_stop() {
        let mut state = TimerState::new(new_lengths());
        state.stop();
        assert_eq!(state.snapshot(), TimerSnapshot::new(Period::Stopped, Duration::ZERO));
        assert_eq!(state.snapshot().formatted_remaining(), "00:00");
    }
}
