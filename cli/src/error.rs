//! Error types for the verimeta CLI.

use thiserror::Error;
use verimeta_core::error::ManifestError;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// A manifest operation failed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Failed to write command output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
