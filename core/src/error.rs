//! Error types for verification-manifest processing.
//!
//! Each variant names the manifest construct that failed and the constraint
//! that was violated. Every condition here is fatal to the invocation that
//! raised it; a missing secondary manifest during a merge is tolerated
//! before these errors can arise and never reaches this type.

use crate::checksum::HashAlgorithm;
use thiserror::Error;

/// Errors arising while reading, transforming, or writing verification
/// manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A component, artifact, or hash element is missing a required
    /// attribute.
    #[error("malformed manifest: <{element}> element is missing its \"{attribute}\" attribute")]
    MalformedManifest {
        /// Local name of the offending element.
        element: String,
        /// Name of the absent attribute.
        attribute: String,
    },

    /// A hex digest could not be decoded.
    #[error("invalid {algorithm} digest \"{value}\"")]
    InvalidHash {
        /// Algorithm tag of the rejected digest.
        algorithm: HashAlgorithm,
        /// The rejected digest string.
        value: String,
        /// The underlying hex decoding failure.
        #[source]
        source: hex::FromHexError,
    },

    /// An artifact carries no recognized hash element, so no integrity
    /// string can be derived for it.
    #[error("artifact \"{artifact}\" has no recognized hash element")]
    MissingHash {
        /// Name of the hashless artifact.
        artifact: String,
    },

    /// The manifest is not a well-formed XML document.
    #[error("unreadable manifest: {0}")]
    Read(#[from] xmltree::ParseError),

    /// Serializing a manifest document failed.
    #[error("failed to write manifest: {0}")]
    Write(#[from] xmltree::Error),

    /// An I/O operation on a manifest file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;
