//! Hash algorithm tags and raw checksum pairs.
//!
//! A manifest records at most one hash element per algorithm under each
//! artifact element. Extraction walks [`HashAlgorithm::SCAN_ORDER`] in
//! full and keeps the last algorithm present, so a later entry in the scan
//! order always supersedes an earlier one.

use serde::Serialize;
use std::fmt;

/// Hash algorithms recognized in a verification manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// PGP signature fingerprint.
    Pgp,
    /// MD5 digest.
    Md5,
    /// SHA-1 digest.
    Sha1,
    /// SHA-256 digest.
    Sha256,
    /// SHA-512 digest.
    Sha512,
}

impl HashAlgorithm {
    /// Fixed scan order used during hash extraction. The last algorithm in
    /// this order present on an artifact element wins.
    pub const SCAN_ORDER: [HashAlgorithm; 5] = [
        HashAlgorithm::Pgp,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ];

    /// Return the lowercase element name used for this algorithm in a
    /// manifest.
    ///
    /// # Examples
    ///
    /// ```
    /// use verimeta_core::checksum::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::Sha256.as_str(), "sha256");
    /// ```
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Pgp => "pgp",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw `(algorithm, hex digest)` pair as recorded in a manifest.
///
/// The digest is kept verbatim. It is validated only when encoded into an
/// integrity string; the manifest itself is trusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    /// Algorithm the digest was produced with.
    pub algorithm: HashAlgorithm,
    /// Hex-encoded digest, unvalidated.
    pub value: String,
}

impl Checksum {
    /// Create a checksum pair.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, value: impl Into<String>) -> Self {
        Self {
            algorithm,
            value: value.into(),
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn scan_order_matches_manifest_schema() {
        let names: Vec<&str> = HashAlgorithm::SCAN_ORDER
            .iter()
            .map(|algorithm| algorithm.as_str())
            .collect();
        assert_eq!(names, ["pgp", "md5", "sha1", "sha256", "sha512"]);
    }

    #[rstest]
    #[case::pgp(HashAlgorithm::Pgp, "pgp")]
    #[case::md5(HashAlgorithm::Md5, "md5")]
    #[case::sha1(HashAlgorithm::Sha1, "sha1")]
    #[case::sha256(HashAlgorithm::Sha256, "sha256")]
    #[case::sha512(HashAlgorithm::Sha512, "sha512")]
    fn display_uses_lowercase_element_name(#[case] algorithm: HashAlgorithm, #[case] name: &str) {
        assert_eq!(format!("{algorithm}"), name);
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&HashAlgorithm::Sha512).expect("serializable");
        assert_eq!(json, "\"sha512\"");
    }

    #[test]
    fn checksum_display_joins_algorithm_and_value() {
        let checksum = Checksum::new(HashAlgorithm::Md5, "00ff");
        assert_eq!(format!("{checksum}"), "md5:00ff");
    }
}
