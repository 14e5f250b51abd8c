//! Unified error type for matryoshka.

use thiserror::Error;

/// Errors that can occur while rendering or generating an image.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred (output directory or file write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rendered canvas could not be encoded as PNG.
    #[error("Image encoding error: {0}")]
    Encode(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// An image backend failed while generating.
    #[error("Backend '{backend}' failed: {message}")]
    Backend {
        /// The backend name.
        backend: String,
        /// Error message reported by the backend.
        message: String,
    },
}
