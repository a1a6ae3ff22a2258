pub mod inbound;
pub mod outbound;

mod app;
mod worker;

pub use app::{ApplicationCore, SetupApplicationCoreError};
pub use worker::{PeriodLengths, SpawnWorkerError, Tick, TimerState};
