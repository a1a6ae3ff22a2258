use crate::domain::entity::TimerSnapshot;

/// A public port for reading the timer without changing it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GetPort: Send + Sync + 'static {
    /// Take a consistent snapshot of the timer.
    async fn get(&self) -> TimerSnapshot;
}

/// A public port for starting or stopping the timer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SwitchPort: Send + Sync + 'static {
    /// Toggle the timer and return the state right after toggling.
    async fn switch(&self) -> TimerSnapshot;
}
