//! Infrastructure layer - external adapters and integrations.
//!
//! This layer provides adapters for:
//! - Scheduling deferred work on a tokio runtime

#[cfg(feature = "async")]
pub mod scheduler;

/// Mock implementations for testing.
///
/// This module is only available when the `test-helpers` feature is enabled,
/// or during test builds. It provides a virtual-time scheduler for testing
/// debounced calls without real delays.
///
/// To use these mocks in integration tests, add to your `Cargo.toml`:
/// ```toml
/// [dev-dependencies]
/// utilkit = { version = "*", features = ["test-helpers"] }
/// ```
#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
