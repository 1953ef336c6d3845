//! Testing infrastructure for drsla tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `fixtures`: Builders for protection group snapshots and job histories
//! - `TestWorld`: Isolated temp environment for CLI integration tests
//! - `assertions`: Checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{GroupBuilder, fixed_now};
pub use world::TestWorld;
