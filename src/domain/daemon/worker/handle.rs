use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::domain::daemon::worker::state::TimerState;
use crate::domain::entity::TimerSnapshot;

/// Handle that shares the [`TimerState`] with a running [`WorkerRoutine`].
///
/// Reads take the shared lock and may run alongside each other, while
/// toggling takes the same exclusive lock as a tick. Dropping the handle
/// stops the routine.
///
/// [`WorkerRoutine`]: crate::domain::daemon::worker::routine::WorkerRoutine
#[derive(Debug)]
pub struct WorkerHandle {
    state: Arc<RwLock<TimerState>>,
    routine: JoinHandle<()>,
}

impl WorkerHandle {
    /// Creates a new [`WorkerHandle`].
    pub fn new(state: Arc<RwLock<TimerState>>, routine: JoinHandle<()>) -> Self {
        Self { state, routine }
    }

    /// Take a snapshot of the timer under the shared lock.
    pub async fn snapshot(&self) -> TimerSnapshot {
        self.state.read().await.snapshot()
    }

    /// Toggle the timer under the exclusive lock and return the state the
    /// toggle produced.
    pub async fn toggle(&self) -> TimerSnapshot {
        let mut state = self.state.write().await;
        state.toggle();
        state.snapshot()
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.routine.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future;
    use std::time::Duration;

    use tokio::sync::oneshot;

    use crate::domain::daemon::worker::state::PeriodLengths;
    use crate::domain::entity::{Period, PeriodDuration};

    fn new_handle() -> WorkerHandle {
        let mut state = TimerState::new(PeriodLengths {
            work: PeriodDuration::try_new(1500).unwrap(),
            rest: PeriodDuration::try_new(300).unwrap(),
        });
        state.stop();
        let routine = tokio::spawn(future::pending());
        WorkerHandle::new(Arc::new(RwLock::new(state)), routine)
    }

    #[tokio::test]
    async fn worker_handle_toggle() {
        let handle = new_handle();
        assert_eq!(handle.snapshot().await.period(), Period::Stopped);

        let snapshot = handle.toggle().await;
        assert_eq!(snapshot.period(), Period::Work);
        assert_eq!(snapshot.remaining(), Duration::from_secs(1500));
        assert_eq!(handle.snapshot().await, snapshot);

        let snapshot = handle.toggle().await;
        assert_eq!(snapshot.period(), Period::Stopped);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn worker_handle_concurrent_reads() {
        let handle = Arc::new(new_handle());
        let stopped = TimerSnapshot::new(Period::Stopped, Duration::ZERO);
        let running = TimerSnapshot::new(Period::Work, Duration::from_secs(1500));

        let mut tasks = Vec::new();
        for i in 0..64 {
            let handle = Arc::clone(&handle);
            tasks.push(tokio::spawn(async move {
                if i % 8 == 0 {
                    handle.toggle().await
                } else {
                    handle.snapshot().await
                }
            }));
        }

        for task in tasks {
            let snapshot = task.await.unwrap();
            assert!(snapshot == stopped || snapshot == running);
        }
    }

    #[tokio::test]
    async fn worker_handle_drop_aborts_routine() {
        let (sender, receiver) = oneshot::channel::<()>();
        let routine = tokio::spawn(async move {
            let _sender = sender;
            future::pending::<()>().await
        });
        let state = Arc::new(RwLock::new(TimerState::new(PeriodLengths {
            work: PeriodDuration::try_new(5).unwrap(),
            rest: PeriodDuration::try_new(5).unwrap(),
        })));

        drop(WorkerHandle::new(state, routine));
        assert!(receiver.await.is_err());
    }
}
