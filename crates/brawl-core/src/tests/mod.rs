//! Determinism and integration tests for whole matches.
//!
//! - `determinism.rs`: the same seed and inputs replay the same match
//! - `integration.rs`: scripted matches through the controller and terminal frontend
//! - `helpers.rs`: roster fixtures and scripted frontends

mod helpers;

pub use helpers::*;
