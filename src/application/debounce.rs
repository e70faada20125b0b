//! Debounced function wrappers.
//!
//! A [`Debouncer`] collapses bursts of calls into a single deferred call of
//! the wrapped function. Each [`call`](Debouncer::call) cancels the pending
//! call (if any) and schedules a new one with the latest arguments. The
//! function runs only once the delay elapses without another call.
//!
//! There is no maximum wait: a steady stream of calls spaced closer than the
//! delay postpones execution indefinitely.
//!
//! # Example
//! ```
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//! use utilkit::Debouncer;
//! use utilkit::infrastructure::mocks::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let search = Debouncer::builder(move |query: String| sink.lock().unwrap().push(query))
//!     .with_delay(Duration::from_millis(300))
//!     .with_scheduler(Arc::new(scheduler.clone()))
//!     .build()
//!     .unwrap();
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//!
//! scheduler.advance(Duration::from_millis(300));
//! assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string()]);
//! ```

use crate::application::metrics::DebounceMetrics;
use crate::application::ports::{ScheduledTask, Scheduler};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Error returned when building a debouncer fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No delay was configured
    MissingDelay,
    /// No scheduler was supplied and no tokio runtime is available
    NoRuntime,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingDelay => write!(f, "debounce delay must be set"),
            BuildError::NoRuntime => write!(
                f,
                "no scheduler configured and no tokio runtime available"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Configuration for a debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Quiet period that must pass after the last call before the target runs
    pub delay: Duration,
}

impl DebounceConfig {
    /// Create a config with the given delay. A zero delay defers to the next
    /// scheduler tick.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a config with a delay in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

type Target<A> = Arc<dyn Fn(A) + Send + Sync>;

#[derive(Debug, Default)]
struct PendingSlot {
    /// Identifies the most recent invocation
    generation: u64,
    task: Option<Box<dyn ScheduledTask>>,
}

struct Shared<A> {
    target: Target<A>,
    config: DebounceConfig,
    scheduler: Arc<dyn Scheduler>,
    metrics: DebounceMetrics,
    pending: Mutex<PendingSlot>,
}

impl<A> Shared<A> {
    // The target never runs under this lock, so poisoning can only come from a
    // panicking scheduler and the slot is still consistent.
    fn slot(&self) -> MutexGuard<'_, PendingSlot> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wraps a function so that rapid repeated calls collapse into one.
///
/// Clones share the same pending call, so any clone can supersede a call made
/// through another.
///
/// Dropping a debouncer does not cancel a call that is already scheduled.
pub struct Debouncer<A> {
    shared: Arc<Shared<A>>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.shared.slot();
        f.debug_struct("Debouncer")
            .field("delay", &self.shared.config.delay)
            .field("scheduler", &self.shared.scheduler)
            .field("generation", &slot.generation)
            .field("pending", &slot.task.is_some())
            .finish()
    }
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    /// Start building a debouncer around `func`.
    pub fn builder<F>(func: F) -> DebouncerBuilder<A>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        DebouncerBuilder {
            target: Arc::new(func),
            delay: None,
            scheduler: None,
            metrics: None,
        }
    }

    /// Create a debouncer with an explicit scheduler.
    pub fn new<F>(func: F, delay: Duration, scheduler: Arc<dyn Scheduler>) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::from_parts(
            Arc::new(func),
            DebounceConfig::new(delay),
            scheduler,
            DebounceMetrics::new(),
        )
    }

    fn from_parts(
        target: Target<A>,
        config: DebounceConfig,
        scheduler: Arc<dyn Scheduler>,
        metrics: DebounceMetrics,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                target,
                config,
                scheduler,
                metrics,
                pending: Mutex::new(PendingSlot::default()),
            }),
        }
    }

    /// Invoke the debounced function.
    ///
    /// Cancels the pending call, if any, and schedules `args` to be passed to
    /// the target once the delay elapses without another call. Never blocks
    /// and never runs the target inline.
    pub fn call(&self, args: A) {
        let shared = &self.shared;
        shared.metrics.record_invocation();

        let mut slot = shared.slot();
        if let Some(previous) = slot.task.take() {
            previous.cancel();
            shared.metrics.record_superseded();
            tracing::debug!(superseded = slot.generation, "debounced call superseded");
        }

        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        let delay = shared.config.delay;

        let task_shared = Arc::clone(shared);
        let task = shared.scheduler.schedule(
            delay,
            Box::new(move || Self::fire(&task_shared, generation, args)),
        );
        slot.task = Some(task);

        tracing::trace!(
            generation,
            delay_ms = delay.as_millis() as u64,
            "debounced call scheduled"
        );
    }

    fn fire(shared: &Shared<A>, generation: u64, args: A) {
        {
            let mut slot = shared.slot();
            if slot.generation != generation {
                // Cancellation raced with the timer; a newer call owns the slot.
                shared.metrics.record_stale_dropped();
                tracing::debug!(
                    generation,
                    current = slot.generation,
                    "dropping stale debounced call"
                );
                return;
            }
            slot.task = None;
        }

        tracing::trace!(generation, "running debounced call");
        shared.metrics.record_executed();
        (shared.target)(args);
    }
}

impl<A> Debouncer<A> {
    /// Whether a call is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.slot().task.is_some()
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.shared.config.delay
    }

    /// Metrics for this debouncer.
    pub fn metrics(&self) -> &DebounceMetrics {
        &self.shared.metrics
    }
}

/// Builder for constructing a [`Debouncer`].
pub struct DebouncerBuilder<A> {
    target: Target<A>,
    delay: Option<Duration>,
    scheduler: Option<Arc<dyn Scheduler>>,
    metrics: Option<DebounceMetrics>,
}

impl<A> DebouncerBuilder<A>
where
    A: Send + 'static,
{
    /// Set the quiet period before the target runs.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the quiet period in milliseconds.
    pub fn with_delay_millis(self, millis: u64) -> Self {
        self.with_delay(Duration::from_millis(millis))
    }

    /// Apply a [`DebounceConfig`].
    pub fn with_config(self, config: DebounceConfig) -> Self {
        self.with_delay(config.delay)
    }

    /// Use a specific scheduler instead of the current tokio runtime.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Record into existing metrics, e.g. to aggregate several debouncers.
    pub fn with_metrics(mut self, metrics: DebounceMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the debouncer.
    ///
    /// # Errors
    /// Returns `BuildError::MissingDelay` if no delay was set, and
    /// `BuildError::NoRuntime` if no scheduler was set and there is no tokio
    /// runtime to fall back to.
    pub fn build(self) -> Result<Debouncer<A>, BuildError> {
        let delay = self.delay.ok_or(BuildError::MissingDelay)?;
        let scheduler = match self.scheduler {
            Some(scheduler) => scheduler,
            None => default_scheduler()?,
        };

        Ok(Debouncer::from_parts(
            self.target,
            DebounceConfig::new(delay),
            scheduler,
            self.metrics.unwrap_or_default(),
        ))
    }
}

#[cfg(feature = "async")]
fn default_scheduler() -> Result<Arc<dyn Scheduler>, BuildError> {
    crate::infrastructure::scheduler::TokioScheduler::try_current()
        .map(|scheduler| Arc::new(scheduler) as Arc<dyn Scheduler>)
        .ok_or(BuildError::NoRuntime)
}

#[cfg(not(feature = "async"))]
fn default_scheduler() -> Result<Arc<dyn Scheduler>, BuildError> {
    Err(BuildError::NoRuntime)
}

/// Wrap `func` in a debouncer driven by the current tokio runtime.
///
/// # Errors
/// Returns `BuildError::NoRuntime` when called outside a tokio runtime.
///
/// # Example
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::time::Duration;
///
/// let save = utilkit::debounce(|doc: String| println!("saving {doc}"), Duration::from_millis(50))
///     .expect("inside a runtime");
/// save.call("draft 1".to_string());
/// save.call("draft 2".to_string());
/// assert!(save.is_pending());
/// # }
/// ```
#[cfg(feature = "async")]
pub fn debounce<A, F>(func: F, delay: Duration) -> Result<Debouncer<A>, BuildError>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::builder(func).with_delay(delay).build()
}
