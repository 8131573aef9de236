//! In-place union merge of verification manifests.
//!
//! Operates on the raw document tree: component subtrees are keyed by
//! their `(group, name, version)` attributes and artifact subtrees by
//! their `name` attribute, and are copied verbatim from secondary
//! manifests into the primary. Collisions keep whatever the primary (or
//! an earlier secondary) already recorded; conflicting hash values are
//! never reconciled.

use crate::document::{
    ARTIFACT_ELEMENT, COMPONENT_ELEMENT, ManifestDocument, child_elements, require_attribute,
};
use crate::error::Result;
use crate::namespace::NamespaceContext;
use log::debug;
use std::collections::{HashMap, HashSet};
use xmltree::{Element, XMLNode};

/// Counts of subtrees appended to the primary manifest during a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Component subtrees copied into the primary manifest.
    pub components_added: usize,
    /// Artifact subtrees appended to components already present.
    pub artifacts_added: usize,
}

type ComponentKey = (String, String, String);

/// Merge the components of every secondary manifest into the primary, in
/// place.
///
/// Components unknown to the primary are appended whole; for components
/// already present, only artifacts with unseen names are appended. The
/// operation is idempotent: merging the same secondary again adds
/// nothing. The primary keeps its top-level structure and namespace
/// declaration; only the components section is mutated, and one is
/// created when absent.
///
/// # Errors
///
/// Returns [`crate::error::ManifestError::MalformedManifest`] when a
/// component or artifact element on either side is missing one of its key
/// attributes.
pub fn merge_documents(
    primary: &mut ManifestDocument,
    secondaries: Vec<ManifestDocument>,
) -> Result<MergeOutcome> {
    let namespace = primary.namespace().clone();
    let mut outcome = MergeOutcome::default();
    let container = primary.ensure_components();

    let mut index: HashMap<ComponentKey, usize> = HashMap::new();
    for (position, node) in container.children.iter().enumerate() {
        let Some(element) = node.as_element() else {
            continue;
        };
        if !is_component(element, &namespace) {
            continue;
        }
        index.insert(component_key(element)?, position);
    }

    for secondary in secondaries {
        let Some(secondary_container) = secondary.into_components() else {
            continue;
        };
        for node in secondary_container.children {
            let XMLNode::Element(component) = node else {
                continue;
            };
            if !is_component(&component, &namespace) {
                continue;
            }
            let key = component_key(&component)?;
            match index.get(&key) {
                Some(&position) => {
                    let Some(XMLNode::Element(existing)) = container.children.get_mut(position)
                    else {
                        continue;
                    };
                    let appended = append_missing_artifacts(existing, component, &namespace)?;
                    if appended > 0 {
                        debug!(
                            "appended {appended} artifact(s) to {}:{}:{}",
                            key.0, key.1, key.2
                        );
                    }
                    outcome.artifacts_added += appended;
                }
                None => {
                    index.insert(key, container.children.len());
                    container.children.push(XMLNode::Element(component));
                    outcome.components_added += 1;
                }
            }
        }
    }

    Ok(outcome)
}

fn is_component(element: &Element, namespace: &NamespaceContext) -> bool {
    element.name == COMPONENT_ELEMENT && namespace.matches(element.namespace.as_deref())
}

fn component_key(element: &Element) -> Result<ComponentKey> {
    Ok((
        require_attribute(element, "group")?,
        require_attribute(element, "name")?,
        require_attribute(element, "version")?,
    ))
}

/// Append artifact subtrees from `incoming` whose names are unseen under
/// `existing`. Colliding names keep the existing subtree untouched.
fn append_missing_artifacts(
    existing: &mut Element,
    incoming: Element,
    namespace: &NamespaceContext,
) -> Result<usize> {
    let mut seen: HashSet<String> = HashSet::new();
    for artifact in child_elements(existing, namespace, ARTIFACT_ELEMENT) {
        seen.insert(require_attribute(artifact, "name")?);
    }

    let mut appended = 0;
    for node in incoming.children {
        let XMLNode::Element(artifact) = node else {
            continue;
        };
        if artifact.name != ARTIFACT_ELEMENT || !namespace.matches(artifact.namespace.as_deref()) {
            continue;
        }
        let name = require_attribute(&artifact, "name")?;
        if seen.insert(name) {
            existing.children.push(XMLNode::Element(artifact));
            appended += 1;
        }
    }
    Ok(appended)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
