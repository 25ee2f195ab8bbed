//! Core error types

use thiserror::Error;

/// Errors produced by the text pipeline core
///
/// "No template available" is deliberately not represented here: it is a
/// defined outcome of generation (see [`crate::CopyGenerator::generate`])
/// rather than a failure.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// A structural pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
