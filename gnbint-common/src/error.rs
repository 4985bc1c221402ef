//! Error types for the gNB integrator

use thiserror::Error;

/// Reasons a configured Tracking Area Code cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTac {
    /// The option is absent or blank.
    #[error("TAC is empty")]
    Empty,

    /// The option contains a character that is not a hexadecimal digit.
    #[error("TAC {0:?} is not a hexadecimal value")]
    NotHex(String),

    /// The value does not fit in the 24-bit TAC field.
    #[error("TAC {0:?} exceeds maximum 24-bit value (0xffffff)")]
    OutOfRange(String),
}
