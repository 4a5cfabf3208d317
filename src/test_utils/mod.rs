//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory implementations of the persistence and email ports
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod factories;
mod registration_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use registration_mocks::*;
