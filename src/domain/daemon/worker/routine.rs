use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

use crate::domain::daemon::outbound::NotifyPort;
use crate::domain::daemon::worker::state::{PeriodLengths, Tick, TimerState};
use crate::domain::entity::{NotificationMessage, Period};
use crate::tracing_report;

/// Interval between two ticks of the timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A type that stores configurations required by [`WorkerRoutine`]
/// initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub lengths: PeriodLengths,
    pub work_notification: NotificationMessage,
    pub rest_notification: NotificationMessage,
}

impl WorkerConfig {
    /// Get the message announcing the start of `period`.
    pub fn notification(&self, period: Period) -> Option<&NotificationMessage> {
        match period {
            Period::Work => Some(&self.work_notification),
            Period::Rest => Some(&self.rest_notification),
            Period::Stopped | Period::Unknown => None,
        }
    }
}

/// A type that advances the shared [`TimerState`] once per [`TICK_PERIOD`]
/// in the background.
pub struct WorkerRoutine {
    state: Arc<RwLock<TimerState>>,
    config: WorkerConfig,
    notifier: Arc<dyn NotifyPort>,
}

impl WorkerRoutine {
    /// Spawn a running [`WorkerRoutine`] on background.
    pub fn spawn(
        state: Arc<RwLock<TimerState>>,
        config: WorkerConfig,
        notifier: Arc<dyn NotifyPort>,
    ) -> JoinHandle<()> {
        let routine = Self {
            state,
            config,
            notifier,
        };
        tokio::spawn(routine.run())
    }

    async fn run(self) {
        let mut timer = tokio::time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            timer.tick().await;
            self.handle_tick().await;
        }
    }

    async fn handle_tick(&self) -> Tick {
        let tick = self.state.write().await.tick();

        match tick {
            Tick::Switched(period) => {
                tracing::info!(%period, "Entered a new period");
                self.notify(period);
            }
            Tick::Elapsed => tracing::trace!("Ticked"),
            Tick::Idle => {}
        }

        tick
    }

    /// Emit the notification for `period` without waiting for it.
    fn notify(&self, period: Period) {
        let Some(message) = self.config.notification(period).cloned() else {
            return;
        };

        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(period, &message).await {
                tracing_report!(err);
            }
        });
    }
}
