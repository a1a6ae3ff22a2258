use std::sync::Arc;

use snafu::prelude::*;

use crate::client::app::command::Command;
use crate::domain::client::outbound::{RequestDaemonError, StatusReport};
use crate::domain::client::ApplicationCore;
use crate::domain::entity::Period;

/// Main business logic implementation in client side.
pub struct Client {
    core: Arc<ApplicationCore>,
}

impl Client {
    /// Creates a new [`Client`].
    pub fn new(core: Arc<ApplicationCore>) -> Self {
        Self { core }
    }

    /// Run specific function according to `command`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the client fails to receive a
    /// valid response.
    pub async fn run(&self, command: Command) -> Result<(), ClientError> {
        let output = self.render(command).await?;
        println!("{output}");
        Ok(())
    }

    async fn render(&self, command: Command) -> Result<String, ClientError> {
        match command {
            Command::Get => {
                let report = self.core.get.get().await.context(RequestSnafu)?;
                Ok(formatted_view(&report))
            }
            Command::Toggle => {
                let report = self.core.switch.switch().await.context(RequestSnafu)?;
                Ok(toggled_view(&report))
            }
        }
    }
}

fn glyph(period: Period) -> &'static str {
    match period {
        Period::Work => "🍅",
        Period::Rest => "😋",
        Period::Stopped => "⏸️",
        Period::Unknown => "❓",
    }
}

fn formatted_view(report: &StatusReport) -> String {
    format!("{} {}", glyph(report.period), report.remaining_formatted)
}

fn toggled_view(report: &StatusReport) -> String {
    format!(
        "Timer toggled. Status: {} {}",
        report.period, report.remaining_formatted
    )
}

/// An error for client's operations.
#[derive(Debug, Snafu)]
pub enum ClientError {
    #[snafu(display("Could not request daemon"))]
    Request { source: RequestDaemonError },
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;

    use crate::client::app::connector::{Connector, DuplexConnector};
    use crate::client::outbound::{GetService, SwitchService};
    use crate::domain::client::outbound::{MockGetPort, MockSwitchPort};

    use super::*;

    fn report(period: Period, secs: u64, formatted: &str) -> StatusReport {
        StatusReport {
            period,
            remaining: Duration::from_secs(secs),
            remaining_formatted: formatted.to_owned(),
        }
    }

    fn new_client(get: MockGetPort, switch: MockSwitchPort) -> Client {
        Client::new(Arc::new(ApplicationCore::setup(
            Arc::new(get),
            Arc::new(switch),
        )))
    }

    #[test]
    fn client_formatted_view() {
        assert_eq!(
            formatted_view(&report(Period::Work, 1500, "25:00")),
            "🍅 25:00"
        );
        assert_eq!(
            formatted_view(&report(Period::Rest, 299, "04:59")),
            "😋 04:59"
        );
        assert_eq!(
            formatted_view(&report(Period::Stopped, 0, "00:00")),
            "⏸️ 00:00"
        );
        assert_eq!(
            formatted_view(&report(Period::Unknown, 0, "00:00")),
            "❓ 00:00"
        );
    }

    #[test]
    fn client_toggled_view() {
        assert_eq!(
            toggled_view(&report(Period::Work, 1500, "25:00")),
            "Timer toggled. Status: Work 25:00"
        );
        assert_eq!(
            toggled_view(&report(Period::Stopped, 0, "00:00")),
            "Timer toggled. Status: Stopped 00:00"
        );
    }

    #[tokio::test]
    async fn client_render_get() {
        let mut get = MockGetPort::new();
        get.expect_get()
            .times(1)
            .returning(|| Ok(report(Period::Rest, 61, "01:01")));
        let client = new_client(get, MockSwitchPort::new());

        assert_eq!(client.render(Command::Get).await.unwrap(), "😋 01:01");
    }

    #[tokio::test]
    async fn client_render_toggle() {
        let mut switch = MockSwitchPort::new();
        switch
            .expect_switch()
            .times(1)
            .returning(|| Ok(report(Period::Work, 1500, "25:00")));
        let client = new_client(MockGetPort::new(), switch);

        assert_eq!(
            client.render(Command::Toggle).await.unwrap(),
            "Timer toggled. Status: Work 25:00"
        );
    }

    #[tokio::test]
    async fn client_render_unknown_period_from_daemon() {
        let (connector, mut daemon) = DuplexConnector::new(1024);
        tokio::spawn(async move {
            let mut daemon = daemon.recv().await.unwrap();
            daemon
                .write_all(br#"{"status":{"period":"Unknown","rest_of_time":0,"rest_of_time_str":"00:00"}}"#)
                .await
                .unwrap();
        });

        let connector: Arc<dyn Connector> = Arc::new(connector);
        let client = Client::new(Arc::new(ApplicationCore::setup(
            Arc::new(GetService::new(Arc::clone(&connector))),
            Arc::new(SwitchService::new(connector)),
        )));

        assert_eq!(client.render(Command::Get).await.unwrap(), "❓ 00:00");
    }

    #[tokio::test]
    async fn client_run_error_request() {
        let mut get = MockGetPort::new();
        get.expect_get().times(1).returning(|| {
            Err(RequestDaemonError::Unavailable {
                endpoint: "/tmp/pomodoro.sock".to_owned(),
            })
        });
        let client = new_client(get, MockSwitchPort::new());

        assert!(matches!(
            client.run(Command::Get).await,
            Err(ClientError::Request {
                source: RequestDaemonError::Unavailable { .. }
            })
        ));
    }
}
