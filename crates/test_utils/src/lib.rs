//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rental allocation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built vehicles, dates and the reference scenarios
//! - `builders`: Builder patterns for test bookings and modifications
//! - `assertions`: Custom assertion helpers for ledger actions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
