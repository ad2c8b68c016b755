//! Error types for the humanization library
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for humanization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring the formatter or loading raw records.
///
/// Formatting itself never fails; these are all caller mistakes to fix
/// rather than conditions to retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown `fieldLabels` mode
    #[error("invalid fieldLabels value: {0}")]
    InvalidFieldLabels(String),

    /// Options document could not be deserialized
    #[error("invalid format options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    /// Raw validation error record could not be deserialized
    #[error("malformed validation error record: {0}")]
    MalformedRecord(#[source] serde_json::Error),
}
