mod handle;
mod routine;
mod state;

pub use handle::WorkerHandle;
pub use state::{PeriodLengths, Tick, TimerState};

use std::sync::Arc;

use snafu::prelude::*;
use tokio::sync::RwLock;

use crate::domain::daemon::outbound::NotifyPort;
use crate::domain::entity::Period;
use crate::domain::repository::duration::{DurationRepository, GetDurationError};
use crate::domain::repository::notification::{GetNotificationError, NotificationRepository};

use routine::{WorkerConfig, WorkerRoutine};

/// Load the configuration, then start ticking a timer that begins stopped.
///
/// # Errors
///
/// This function will return an error if any configuration fails to load.
pub async fn spawn(
    duration_repository: Arc<dyn DurationRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    notifier: Arc<dyn NotifyPort>,
) -> Result<WorkerHandle, SpawnWorkerError> {
    let config = load_config(duration_repository, notification_repository).await?;

    let mut state = TimerState::new(config.lengths);
    state.stop();
    let state = Arc::new(RwLock::new(state));

    let routine = WorkerRoutine::spawn(Arc::clone(&state), config, notifier);
    Ok(WorkerHandle::new(state, routine))
}

async fn load_config(
    duration_repository: Arc<dyn DurationRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
) -> Result<WorkerConfig, SpawnWorkerError> {
    let work = duration_repository
        .work_duration()
        .await
        .context(DurationConfigSnafu { key: Period::Work })?;
    let rest = duration_repository
        .rest_duration()
        .await
        .context(DurationConfigSnafu { key: Period::Rest })?;
    let work_notification = notification_repository
        .work_notification()
        .await
        .context(NotificationConfigSnafu { key: Period::Work })?;
    let rest_notification = notification_repository
        .rest_notification()
        .await
        .context(NotificationConfigSnafu { key: Period::Rest })?;

    Ok(WorkerConfig {
        lengths: PeriodLengths { work, rest },
        work_notification,
        rest_notification,
    })
}

/// An error for spawning the background worker.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SpawnWorkerError {
    #[snafu(display("Could not load duration configuration for {key} from repository"))]
    DurationConfig {
        key: Period,
        source: GetDurationError,
    },
    #[snafu(display("Could not load notification configuration for {key} from repository"))]
    NotificationConfig {
        key: Period,
        source: GetNotificationError,
    },
}
