//! Ports (interfaces) for the application layer.
//!
//! The debouncer needs a timer service to run work after a delay. Infrastructure
//! adapters implement these ports.

use std::fmt::Debug;
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a task that has been scheduled but may not have run yet.
pub trait ScheduledTask: Send + Debug {
    /// Prevent the task from running if it has not started.
    ///
    /// Cancelling a task that already ran, or cancelling twice, is a no-op.
    fn cancel(&self);
}

/// Port for scheduling deferred work.
///
/// This abstraction allows the debouncer to defer calls without depending on
/// a particular runtime. Infrastructure provides concrete implementations
/// (TokioScheduler, ManualScheduler).
pub trait Scheduler: Send + Sync + Debug {
    /// Run `task` once `delay` has elapsed.
    ///
    /// Must not block the caller and must not run `task` inline.
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask>;
}
