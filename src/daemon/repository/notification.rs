use std::sync::Arc;

use snafu::prelude::*;

use crate::config::{Configuration, MessageContent};
use crate::domain::entity::NotificationMessage;
use crate::domain::repository::notification::{
    GetNotificationError, InvalidSnafu, NotificationRepository,
};

/// A [`NotificationRepository`] implementation which reads configuration files.
pub struct NotificationConfiguration {
    config: Arc<Configuration>,
}

impl NotificationConfiguration {
    /// Creates a new [`NotificationConfiguration`].
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    fn message(section: &MessageContent) -> Result<NotificationMessage, GetNotificationError> {
        NotificationMessage::try_new(section.summary.clone(), section.body.clone())
            .context(InvalidSnafu)
    }
}

#[async_trait::async_trait]
impl NotificationRepository for NotificationConfiguration {
    async fn work_notification(&self) -> Result<NotificationMessage, GetNotificationError> {
        Self::message(&self.config.notification.work)
    }

    async fn rest_notification(&self) -> Result<NotificationMessage, GetNotificationError> {
        Self::message(&self.config.notification.rest)
    }
}
