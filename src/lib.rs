//! # utilkit
//!
//! Small, independent utilities:
//!
//! - **Debouncing**: wrap a function so bursts of calls collapse into one
//!   deferred call with the latest arguments.
//! - **Indexed folds**: left folds whose combiner also sees the element index
//!   and the whole sequence, with or without a seed.
//! - **Class names**: join conditional CSS class descriptors into a single
//!   space separated string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use utilkit::{class_names, debounce, fold, ClassDictionary};
//!
//! # #[tokio::main]
//! # async fn main() {
//! // Only the last of a burst of calls runs, 200ms after the burst ends
//! let resize = debounce(|(w, h): (u32, u32)| println!("{w}x{h}"), Duration::from_millis(200))
//!     .unwrap();
//! resize.call((800, 600));
//! resize.call((1024, 768));
//!
//! // Sum with and without a seed
//! assert_eq!(fold(&[1, 2, 3, 4], |a, b, _, _| a + b, None), Ok(10));
//! assert_eq!(fold(&[1, 2, 3, 4], |a, b, _, _| a + b, Some(10)), Ok(20));
//!
//! // Conditional class names
//! let classes = class_names!("btn", ClassDictionary::new().with("active", true));
//! assert_eq!(classes, "btn active");
//! # }
//! ```
//!
//! ## Debouncing
//!
//! Each [`Debouncer::call`] cancels the pending call and schedules a new one.
//! The target runs once the delay passes without another call, exactly once,
//! with the arguments of the last call. There is no maximum wait.
//!
//! Deferred calls run on a [`Scheduler`]. With the default `async` feature,
//! [`debounce`] and [`DebouncerBuilder::build`] use the tokio runtime the
//! caller is in. Any other timer service can be plugged in through
//! [`DebouncerBuilder::with_scheduler`].
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use utilkit::Debouncer;
//! use utilkit::infrastructure::mocks::ManualScheduler;
//!
//! let scheduler = ManualScheduler::new();
//! let autosave = Debouncer::builder(|text: String| println!("saved {text}"))
//!     .with_delay(Duration::from_secs(1))
//!     .with_scheduler(Arc::new(scheduler.clone()))
//!     .build()
//!     .unwrap();
//!
//! autosave.call("hel".into());
//! autosave.call("hello".into());
//! assert_eq!(autosave.metrics().superseded(), 1);
//!
//! scheduler.advance(Duration::from_secs(1));
//! assert_eq!(autosave.metrics().executed(), 1);
//! ```
//!
//! Debouncers log through `tracing`: scheduling and execution at `TRACE`,
//! supersession and dropped stale calls at `DEBUG`. The crate never installs
//! a subscriber.
//!
//! ## Folding
//!
//! [`fold_seeded`] never fails. [`reduce`] seeds with the first element and
//! returns [`EmptySequenceError`] on empty input. [`fold`] takes an optional
//! seed. The [`SequenceFold`] trait offers the same as methods on slices.
//!
//! ## Class Names
//!
//! Descriptors are [`ClassValue`]s: strings, numbers, booleans, null, nested
//! lists, or [`ClassDictionary`] maps from class name to condition. Falsy
//! values are skipped, lists are flattened, and dictionaries contribute the
//! keys whose values are truthy, in insertion order.
//!
//! ## Feature Flags
//!
//! - `async` (default): tokio-backed scheduling and the [`debounce`] helper
//! - `test-helpers`: exposes [`infrastructure::mocks`] for downstream tests

// Domain layer - pure logic
pub mod domain;

// Application layer - deferred execution
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    class_names::{join_class_names, ClassDictionary, ClassValue},
    fold::{fold, fold_seeded, reduce, EmptySequenceError, SequenceFold},
};

pub use application::{
    debounce::{BuildError, DebounceConfig, Debouncer, DebouncerBuilder},
    metrics::{DebounceMetrics, DebounceMetricsSnapshot},
    ports::{ScheduledTask, Scheduler, Task},
};

#[cfg(feature = "async")]
pub use application::debounce::debounce;

#[cfg(feature = "async")]
pub use infrastructure::scheduler::TokioScheduler;
