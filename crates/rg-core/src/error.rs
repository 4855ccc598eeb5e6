//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they call into `rg-core` parsing helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("day index {0} out of range (expected 0..=6)")]
    InvalidDay(u8),
}

/// Shorthand result type for `rg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
