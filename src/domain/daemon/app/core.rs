use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::daemon::app::service::{GetService, SwitchService};
use crate::domain::daemon::inbound::{GetPort, SwitchPort};
use crate::domain::daemon::outbound::NotifyPort;
use crate::domain::daemon::worker::{self, SpawnWorkerError};
use crate::domain::repository::{DurationRepository, NotificationRepository};

/// Entrance to the domain logic, providing ports for external adapters.
pub struct ApplicationCore {
    pub get: Arc<dyn GetPort>,
    pub switch: Arc<dyn SwitchPort>,
}

impl ApplicationCore {
    /// Initialize the application by injecting external repositories and
    /// adapters. The timer starts stopped and ticks in the background for as
    /// long as the returned core is alive.
    ///
    /// # Errors
    ///
    /// This function will return an error if initialization failed.
    pub async fn setup(
        notify_port: Arc<dyn NotifyPort>,
        duration_repository: Arc<dyn DurationRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
    ) -> Result<ApplicationCore, SetupApplicationCoreError> {
        let worker = worker::spawn(duration_repository, notification_repository, notify_port)
            .await
            .context(WorkerSnafu)?;
        let worker = Arc::new(worker);

        let get_port = Arc::new(GetService::new(Arc::clone(&worker)));
        let switch_port = Arc::new(SwitchService::new(worker));

        Ok(ApplicationCore {
            get: get_port,
            switch: switch_port,
        })
    }
}

/// An error for initializing the application.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SetupApplicationCoreError {
    #[snafu(display("Could not spawn a background worker"))]
    Worker { source: SpawnWorkerError },
}
