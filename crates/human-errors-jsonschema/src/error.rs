//! Error types for the jsonschema bridge
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing a schema for humanized validation
#[derive(Error, Debug)]
pub enum Error {
    /// The schema could not be compiled
    #[error("invalid schema: {reason}")]
    InvalidSchema { reason: String },

    /// Error from the humanization core, e.g. bad options
    #[error(transparent)]
    Core(#[from] human_errors::Error),
}
