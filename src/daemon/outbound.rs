use notify_rust::{Notification, Timeout};
use snafu::prelude::*;

use crate::domain::daemon::outbound::{NotifyError, NotifyPort};
use crate::domain::entity::{NotificationMessage, Period};

/// How long a notification stays on screen.
const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

/// A [`NotifyPort`] implementation showing desktop notifications.
#[derive(Debug, Clone)]
pub struct NotifyService {
    app_name: String,
}

impl NotifyService {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    fn build(&self, message: &NotificationMessage) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(message.summary())
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS));

        if let Some(body) = message.body() {
            notification.body(body);
        }

        notification
    }
}

#[async_trait::async_trait]
impl NotifyPort for NotifyService {
    async fn notify(
        &self,
        period: Period,
        message: &NotificationMessage,
    ) -> Result<(), NotifyError> {
        let notification = self.build(message);
        whatever!(
            notification.show_async().await,
            "Could not announce {period} period",
        );
        tracing::debug!(%period, "Notification shown");
        Ok(())
    }
}
