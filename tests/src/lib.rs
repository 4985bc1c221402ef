//! Integration test framework for the gNB integrator
#![allow(missing_docs)]
//!
//! This crate provides fixtures and mock peers for driving the integrator
//! through complete event sequences against an in-memory host.
//!
//! # Components
//!
//! - [`mock_peers`] - Mock core network and mock RAN simulator peers
//! - [`test_fixtures`] - Host model builders for common scenarios
//! - [`test_utils`] - Logging setup and data bag helpers
//!
//! # Test Categories
//!
//! 1. **gNB identity** - TAC configuration, identity requests, leadership
//! 2. **Core gNB** - Status resolution and gNB name publication
//! 3. **Event task** - Serial event delivery through the task channel

pub mod mock_peers;
pub mod test_fixtures;
pub mod test_utils;

pub use mock_peers::{MockCore, MockGnbSimulator};
pub use test_fixtures::{TestModel, TEST_APP_NAME, TEST_MODEL_NAME};
pub use test_utils::{init_test_logging, local_value, TestResult};
