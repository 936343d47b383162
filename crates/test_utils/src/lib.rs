//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! registry client test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data (the example company, keys, sessions)
//! - `builders`: Builder patterns for search rows and logged-in clients
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based and fake data generators
//! - `logging`: Log output for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
