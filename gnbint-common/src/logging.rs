//! Logging infrastructure for the gNB integrator
//!
//! This module provides configurable logging using the `tracing` crate and
//! helpers for logging relation data bags as they are read and published.

use std::collections::BTreeMap;
use std::fmt;
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// This should be called once at application startup. The log level can be
/// overridden by the `RUST_LOG` environment variable.
///
/// # Example
///
/// ```
/// use gnbint_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string.
///
/// ```
/// use gnbint_common::logging::init_logging_with_filter;
///
/// // Set default to info, but enable debug for the reconciler
/// init_logging_with_filter("info,gnbint_charm::charm::reconciler=debug");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

/// Data bag direction for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read from the peer application's namespace
    Rx,
    /// Published into this application's namespace
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rx => write!(f, "RX"),
            Direction::Tx => write!(f, "TX"),
        }
    }
}

/// Wrapper formatting a data bag as `{key=value, ...}` in key order.
pub struct BagDump<'a>(pub &'a BTreeMap<String, String>);

impl fmt::Display for BagDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// Log a relation data bag at debug level with its contents at trace level.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use gnbint_common::logging::{log_relation_data, Direction};
///
/// let mut bag = BTreeMap::new();
/// bag.insert("gnb-name".to_string(), "m-gnb-a".to_string());
/// log_relation_data("fiveg_core_gnb", 0, Direction::Tx, &bag);
/// ```
pub fn log_relation_data(
    relation: &str,
    relation_id: u32,
    direction: Direction,
    bag: &BTreeMap<String, String>,
) {
    tracing::debug!(
        relation = relation,
        relation_id = relation_id,
        direction = %direction,
        keys = bag.len(),
        "{} {} data bag",
        direction,
        relation
    );
    tracing::trace!(
        relation = relation,
        bag = %BagDump(bag),
        "{} contents",
        relation
    );
}
