//! Tokio-backed scheduler.
//!
//! Each scheduled task becomes a spawned tokio task that sleeps for the delay
//! and then runs. Cancelling aborts the spawned task.
//!
//! The runtime must have the time driver enabled.
//!
//! # Testing
//!
//! See `ManualScheduler` (in `crate::infrastructure::mocks`) for a
//! virtual-time scheduler that runs tasks synchronously. Available with the
//! `test-helpers` feature or in test builds:
//!
//! ```toml
//! [dev-dependencies]
//! utilkit = { version = "*", features = ["test-helpers"] }
//! ```

use crate::application::ports::{ScheduledTask, Scheduler, Task};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Scheduler that spawns onto a tokio runtime.
///
/// Holds a runtime handle, so tasks may be scheduled from threads that are
/// not part of the runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Create a scheduler that spawns onto `handle`.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Create a scheduler for the runtime the caller is running in.
    ///
    /// Returns `None` outside of a tokio runtime.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask> {
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Box::new(TokioTask { join })
    }
}

#[derive(Debug)]
struct TokioTask {
    join: JoinHandle<()>,
}

impl ScheduledTask for TokioTask {
    fn cancel(&self) {
        self.join.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_try_current_outside_runtime() {
        assert!(TokioScheduler::try_current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let scheduler = TokioScheduler::try_current().unwrap();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let _task = scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let scheduler = TokioScheduler::try_current().unwrap();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let task = scheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        task.cancel();
        // Second cancel is a no-op
        task.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_schedule_from_outside_runtime() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let scheduler = TokioScheduler::new(runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();

        let _task = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                tx.send("fired").unwrap();
            }),
        );

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            "fired"
        );
    }
}
