//! Application layer - deferred execution.
//!
//! This layer coordinates work that runs later:
//! - Debounced function wrappers
//! - Debounce metrics
//!
//! ## Ports
//!
//! The application layer defines the scheduler port that infrastructure
//! adapters must implement, keeping it independent of any particular runtime.

pub mod debounce;
pub mod metrics;
pub mod ports;
