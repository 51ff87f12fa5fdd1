//! Error types for Service Layer core operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Core errors raised by identifier normalization and registry loading.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A Hash160 string decoded to the wrong number of bytes.
    #[error("expected {expected}-byte Hash160, got {actual} bytes")]
    Hash160Length { expected: usize, actual: usize },

    /// Hexadecimal decoding error.
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The deployed contract registry file is absent.
    #[error("Deployed contracts file not found: {0}")]
    RegistryNotFound(PathBuf),

    /// IO error propagated from the standard library.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation/deserialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
