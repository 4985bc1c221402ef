//! Test utility functions for integration tests
//!
//! Provides common utilities for test setup, logging, and assertions.

use gnbint_charm::{CharmHost, RelationId};
use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Returns a value from this application's bag of a relation.
pub fn local_value<H: CharmHost>(host: &H, relation_id: RelationId, key: &str) -> Option<String> {
    host.relation(relation_id)?
        .local_app_data()
        .get(key)
        .cloned()
}
