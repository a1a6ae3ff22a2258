use std::sync::Arc;

use crate::client::app::connector::Connector;
use crate::domain::client::outbound::{RequestDaemonError, StatusReport, SwitchPort};
use crate::protocol::Request;

/// A [`SwitchPort`] implementation
pub struct SwitchService {
    connector: Arc<dyn Connector>,
}

impl SwitchService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }
}

#[async_trait::async_trait]
impl SwitchPort for SwitchService {
    async fn switch(&self) -> Result<StatusReport, RequestDaemonError> {
        super::exchange(self.connector.as_ref(), Request::Switch).await
    }
}
