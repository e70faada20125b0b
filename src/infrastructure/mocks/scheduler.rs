//! Manual scheduler for testing.

use crate::application::ports::{ScheduledTask, Scheduler, Task};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Virtual-time scheduler for deterministic tests.
///
/// Nothing runs until the test calls [`advance`](Self::advance), which moves
/// the virtual clock forward and runs every due task on the calling thread,
/// in deadline order. Tasks with the same deadline run in the order they were
/// scheduled.
///
/// # Examples
///
/// ```
/// use utilkit::infrastructure::mocks::ManualScheduler;
/// use utilkit::application::ports::Scheduler;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// scheduler.schedule(Duration::from_secs(1), Box::new(move || flag.store(true, Ordering::SeqCst)));
///
/// scheduler.advance(Duration::from_millis(999));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// assert_eq!(scheduler.elapsed(), Duration::from_secs(1));
/// ```
///
/// # Thread Safety
///
/// `ManualScheduler` is thread-safe and can be cloned. All clones share the
/// same virtual clock and task queue.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

struct Entry {
    deadline: Duration,
    seq: u64,
    cancelled: Arc<AtomicBool>,
    task: Task,
}

impl fmt::Debug for ManualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualState")
            .field("now", &self.now)
            .field("queued", &self.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    /// Create a scheduler with its virtual clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualState> {
        self.state
            .lock()
            .expect("ManualScheduler mutex poisoned - a test thread panicked while holding the lock")
    }

    /// Virtual time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.state().now
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    pub fn pending_count(&self) -> usize {
        self.state()
            .queue
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Advance the virtual clock by `duration`, running every task that
    /// becomes due.
    ///
    /// Tasks run without the internal lock held, so they may schedule more
    /// work. Newly scheduled tasks that fall due within the same advance also
    /// run. Panics from tasks propagate to the caller.
    pub fn advance(&self, duration: Duration) {
        let target = self.state().now + duration;

        while let Some(task) = self.pop_due(target) {
            task();
        }

        self.state().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state();
        state
            .queue
            .retain(|entry| !entry.cancelled.load(Ordering::SeqCst));

        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline <= target)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(index, _)| index)?;

        let entry = state.queue.remove(index);
        state.now = state.now.max(entry.deadline);
        Some(entry.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Box<dyn ScheduledTask> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut state = self.state();
        state
            .queue
            .retain(|entry| !entry.cancelled.load(Ordering::SeqCst));

        let seq = state.next_seq;
        state.next_seq += 1;
        let deadline = state.now + delay;
        state.queue.push(Entry {
            deadline,
            seq,
            cancelled: Arc::clone(&cancelled),
            task,
        });
        Box::new(ManualTask { cancelled })
    }
}

#[derive(Debug)]
struct ManualTask {
    cancelled: Arc<AtomicBool>,
}

impl ScheduledTask for ManualTask {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}
