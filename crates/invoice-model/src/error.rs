//! Error types for model parsing.

use thiserror::Error;

/// Errors raised when converting text into model values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Invoice identifier is not a positive decimal number.
    #[error("invalid invoice id '{0}': expected a positive number such as \"001\"")]
    InvalidId(String),

    /// Status text does not name a known status.
    #[error("unknown invoice status '{0}': expected pending, paid, or overdue")]
    UnknownStatus(String),
}
