use std::sync::Arc;

use crate::client::app::connector::Connector;
use crate::domain::client::outbound::{GetPort, RequestDaemonError, StatusReport};
use crate::protocol::Request;

/// A [`GetPort`] implementation
pub struct GetService {
    connector: Arc<dyn Connector>,
}

impl GetService {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self { connector }
    }
}

#[async_trait::async_trait]
impl GetPort for GetService {
    async fn get(&self) -> Result<StatusReport, RequestDaemonError> {
        super::exchange(self.connector.as_ref(), Request::Get).await
    }
}
