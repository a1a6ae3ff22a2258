use std::sync::Arc;

use crate::domain::daemon::inbound::{GetPort, SwitchPort};
use crate::domain::daemon::worker::WorkerHandle;
use crate::domain::entity::TimerSnapshot;

#[derive(Debug)]
pub struct GetService {
    worker: Arc<WorkerHandle>,
}

impl GetService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl GetPort for GetService {
    async fn get(&self) -> TimerSnapshot {
        self.worker.snapshot().await
    }
}

#[derive(Debug)]
pub struct SwitchService {
    worker: Arc<WorkerHandle>,
}

impl SwitchService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl SwitchPort for SwitchService {
    async fn switch(&self) -> TimerSnapshot {
        self.worker.toggle().await
    }
}
