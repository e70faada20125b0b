//! Mock implementations for testing.
//!
//! This module provides test doubles for infrastructure adapters,
//! enabling deterministic testing of deferred calls.

pub mod scheduler;

pub use scheduler::ManualScheduler;
