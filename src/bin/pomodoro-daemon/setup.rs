use std::sync::Arc;

use pomodoro::config::{self, Configuration};
use pomodoro::daemon::app::UnixListener;
use pomodoro::daemon::outbound::NotifyService;
use pomodoro::daemon::repository::{DurationConfiguration, NotificationConfiguration};
use pomodoro::daemon::Server;
use pomodoro::domain::daemon::ApplicationCore;
use pomodoro::domain::entity::PeriodDuration;
use snafu::{prelude::*, Whatever};

use crate::cli::Arguments;

const APP_NAME: &str = "pomodoro";
const NOTIFICATION_APP_NAME: &str = "Pomodoro Timer";

pub async fn bootstrap(arg: Arguments) -> Result<Server, Whatever> {
    let configuration = configuration(&arg)?;
    let socket = config::socket_path(arg.socket.as_deref(), &configuration);

    // An invalid configuration must fail before the socket file is created.
    let core = core(configuration).await?;
    let listener = UnixListener::new(&socket)
        .whatever_context(format!("Could not listen on {}", socket.display()))?;

    tracing::info!(socket = %socket.display(), "Daemon started");
    Ok(Server::new(Box::new(listener), core))
}

fn configuration(arg: &Arguments) -> Result<Arc<Configuration>, Whatever> {
    let res = match &arg.config {
        Some(path) => config::load_with_path(path),
        None => config::load_with_xdg(APP_NAME),
    };
    let mut configuration = res.whatever_context("Could not load configuration")?;

    if let Some(minutes) = arg.work {
        configuration.duration.work = minutes_to_seconds(minutes, "work")?;
    }
    if let Some(minutes) = arg.rest {
        configuration.duration.rest = minutes_to_seconds(minutes, "rest")?;
    }

    Ok(Arc::new(configuration))
}

fn minutes_to_seconds(minutes: u64, key: &str) -> Result<u64, Whatever> {
    let duration = PeriodDuration::try_from_minutes(minutes)
        .whatever_context(format!("Invalid {key} duration: {minutes} minutes"))?;
    Ok(duration.inner().as_secs())
}

async fn core(config: Arc<Configuration>) -> Result<ApplicationCore, Whatever> {
    let notify_port = Arc::new(NotifyService::new(NOTIFICATION_APP_NAME.to_owned()));
    let duration_repository = Arc::new(DurationConfiguration::new(Arc::clone(&config)));
    let notification_repository = Arc::new(NotificationConfiguration::new(config));

    let core = ApplicationCore::setup(notify_port, duration_repository, notification_repository)
        .await
        .whatever_context("Could not setup application core")?;

    Ok(core)
}
