//! Crate-level tests.
//!
//! Organized into separate files by category:
//! - `apply.rs` - move application scenarios
//! - `proptest.rs` - property-based tests
//! - `serde.rs` - serialization round trips (feature-gated)

mod apply;
