//! Domain layer - pure logic with no runtime dependencies.
//!
//! This layer contains the synchronous utilities:
//! - Indexed folds over slices
//! - Conditional class-name joining
//!
//! All types in this layer are pure and easily testable.

pub mod class_names;
pub mod fold;
