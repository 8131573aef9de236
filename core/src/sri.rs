//! Integrity-string hash encoding.
//!
//! Downstream fetch tooling consumes checksums in the Subresource-Integrity
//! convention: the algorithm tag, a dash, and the standard padded base64
//! encoding of the raw digest bytes.

use crate::checksum::{Checksum, HashAlgorithm};
use crate::error::{ManifestError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::fmt;

/// An integrity string in the form `<algorithm>-<base64 digest>`.
///
/// # Examples
///
/// ```
/// use verimeta_core::checksum::HashAlgorithm;
/// use verimeta_core::sri::SriHash;
///
/// let hash = SriHash::encode(HashAlgorithm::Sha256, "deadbeef").expect("valid digest");
/// assert_eq!(hash.as_str(), "sha256-3q2+7w==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SriHash(String);

impl SriHash {
    /// Encode a hex digest into an integrity string.
    ///
    /// Decoding is case-insensitive; `DEADBEEF` and `deadbeef` produce the
    /// same integrity string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidHash`] if the digest has odd length
    /// or contains a non-hex character.
    pub fn encode(algorithm: HashAlgorithm, hex_digest: &str) -> Result<Self> {
        let bytes = hex::decode(hex_digest).map_err(|source| ManifestError::InvalidHash {
            algorithm,
            value: hex_digest.to_owned(),
            source,
        })?;
        Ok(Self(format!("{algorithm}-{}", STANDARD.encode(bytes))))
    }

    /// Encode a raw checksum pair into an integrity string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidHash`] if the checksum's digest is
    /// not valid hex.
    pub fn from_checksum(checksum: &Checksum) -> Result<Self> {
        Self::encode(checksum.algorithm, &checksum.value)
    }

    /// Return the integrity string as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SriHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
