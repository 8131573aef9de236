//! Manifest parsing into ordered artifact sequences.
//!
//! One parse pass walks the components section in document order and
//! produces one [`Artifact`] record per artifact element. The records are
//! read-only afterwards; the manifest document itself stays the source of
//! truth.

use crate::artifact::{Artifact, MODULE_METADATA_SUFFIX, ModuleRef};
use crate::checksum::{Checksum, HashAlgorithm};
use crate::component::Component;
use crate::document::{ARTIFACT_ELEMENT, ManifestDocument, child_elements, require_attribute};
use crate::error::{ManifestError, Result};
use crate::namespace::NamespaceContext;
use crate::sri::SriHash;
use log::trace;
use std::rc::Rc;
use xmltree::Element;

/// Parse every artifact of a manifest, preserving document order of
/// components and, within each component, of artifacts.
///
/// Module linkage is carried forward per component: each artifact is
/// assigned the linkage accumulated *before* it, and an artifact whose
/// name ends in `.module` then replaces the carried linkage with itself.
/// A module artifact therefore never references itself, and artifacts
/// preceding any module artifact carry no linkage.
///
/// # Errors
///
/// - [`ManifestError::MalformedManifest`] when a component misses `group`,
///   `name`, or `version`, an artifact misses `name`, or a hash element
///   misses `value`.
/// - [`ManifestError::MissingHash`] when a `.module` artifact has no
///   recognized hash element.
/// - [`ManifestError::InvalidHash`] when a `.module` artifact's digest is
///   not valid hex.
pub fn parse_artifacts(document: &ManifestDocument) -> Result<Vec<Artifact>> {
    let namespace = document.namespace();
    let mut artifacts = Vec::new();

    for component_element in document.component_elements() {
        let component = Rc::new(Component::new(
            require_attribute(component_element, "group")?,
            require_attribute(component_element, "name")?,
            require_attribute(component_element, "version")?,
        ));

        let mut carried: Option<ModuleRef> = None;
        for artifact_element in child_elements(component_element, namespace, ARTIFACT_ELEMENT) {
            let name = require_attribute(artifact_element, "name")?;
            let checksum = extract_checksum(artifact_element, namespace)?;
            let module = carried.clone();

            if name.ends_with(MODULE_METADATA_SUFFIX) {
                let checksum = checksum
                    .clone()
                    .ok_or_else(|| ManifestError::MissingHash {
                        artifact: name.clone(),
                    })?;
                let hash = SriHash::from_checksum(&checksum)?;
                carried = Some(ModuleRef {
                    name: name.clone(),
                    hash,
                    checksum,
                });
            }

            artifacts.push(Artifact {
                name,
                checksum,
                component: Rc::clone(&component),
                module,
            });
        }
    }

    trace!("parsed {} artifact(s)", artifacts.len());
    Ok(artifacts)
}

/// Scan the fixed algorithm list on an artifact element; the last
/// algorithm present wins.
fn extract_checksum(
    artifact_element: &Element,
    namespace: &NamespaceContext,
) -> Result<Option<Checksum>> {
    let mut checksum = None;
    for algorithm in HashAlgorithm::SCAN_ORDER {
        if let Some(element) =
            child_elements(artifact_element, namespace, algorithm.as_str()).next()
        {
            checksum = Some(Checksum::new(algorithm, require_attribute(element, "value")?));
        }
    }
    Ok(checksum)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
