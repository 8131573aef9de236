//! Fetch-verification record derivation.
//!
//! Walks a parsed artifact sequence and produces one JSON-shaped record
//! per artifact, carrying the download URL prefixes, the repository path,
//! and the encoded hashes a downstream fetcher needs to verify content.

use crate::artifact::Artifact;
use crate::checksum::HashAlgorithm;
use crate::error::{ManifestError, Result};
use crate::sri::SriHash;
use serde::Serialize;

/// Component identity fields of an export record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    /// Group identifier, dot-separated.
    pub group: String,
    /// Component name.
    pub name: String,
    /// Component version.
    pub version: String,
}

/// Module-metadata block of an export record, present when the artifact
/// follows a `.module` artifact in its component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRecord {
    /// Name of the module-metadata artifact.
    pub name: String,
    /// Integrity string of the module-metadata artifact.
    pub hash: SriHash,
    /// Algorithm of the raw module digest.
    pub hash_algo: HashAlgorithm,
    /// Hex digest of the module-metadata artifact.
    pub hash_value: String,
}

/// One fetch-verification record per artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// Repository-relative directory of the component.
    pub path: String,
    /// Download URL prefixes, one per repository base URL.
    pub url_prefixes: Vec<String>,
    /// Artifact file name.
    pub name: String,
    /// Module-metadata linkage, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRecord>,
    /// Component identity.
    pub component: ComponentRecord,
    /// Integrity string of the artifact itself.
    pub hash: SriHash,
    /// Algorithm of the artifact digest.
    pub hash_algo: HashAlgorithm,
    /// Hex digest of the artifact.
    pub hash_value: String,
}

/// Derive one export record per artifact, preserving input order.
///
/// Trailing path separators on the repository base URLs are stripped
/// before the URL prefixes are assembled.
///
/// # Errors
///
/// - [`ManifestError::MissingHash`] when an artifact has no checksum.
/// - [`ManifestError::InvalidHash`] when a digest is not valid hex.
pub fn export_artifacts(artifacts: &[Artifact], repositories: &[String]) -> Result<Vec<ExportRecord>> {
    let bases: Vec<&str> = repositories
        .iter()
        .map(|repository| repository.trim_end_matches('/'))
        .collect();
    artifacts
        .iter()
        .map(|artifact| export_record(artifact, &bases))
        .collect()
}

fn export_record(artifact: &Artifact, bases: &[&str]) -> Result<ExportRecord> {
    let checksum = artifact
        .checksum
        .as_ref()
        .ok_or_else(|| ManifestError::MissingHash {
            artifact: artifact.name.clone(),
        })?;
    let hash = SriHash::from_checksum(checksum)?;
    let path = artifact.component.repository_path();
    let url_prefixes = bases.iter().map(|base| format!("{base}/{path}")).collect();
    let module = artifact.module.as_ref().map(|module| ModuleRecord {
        name: module.name.clone(),
        hash: module.hash.clone(),
        hash_algo: module.checksum.algorithm,
        hash_value: module.checksum.value.clone(),
    });

    Ok(ExportRecord {
        path,
        url_prefixes,
        name: artifact.name.clone(),
        module,
        component: ComponentRecord {
            group: artifact.component.group.clone(),
            name: artifact.component.name.clone(),
            version: artifact.component.version.clone(),
        },
        hash,
        hash_algo: checksum.algorithm,
        hash_value: checksum.value.clone(),
    })
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
