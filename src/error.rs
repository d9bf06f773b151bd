//! Error types for the outline extraction library.
//!
//! This module defines all error types that can occur while deriving a
//! document's structure or running the batch driver.

/// Result type alias for outline extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No line carried a usable font size, so the "normal text" baseline
    /// cannot be inferred.
    ///
    /// This is a precondition failure distinct from the empty-document case:
    /// an empty document yields an absent result, while a document whose
    /// lines all lack a size cannot be classified at all.
    #[error("no line carries a font size; body style is undeterminable")]
    NoBodyStyle,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Interchange (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
