//! Removal of the verified-components section.

use crate::document::ManifestDocument;

/// Remove the components section from a manifest document.
///
/// Returns whether a section was present and removed. A document without
/// a components section is left unchanged; no other section is touched.
///
/// # Examples
///
/// ```
/// use verimeta_core::document::ManifestDocument;
/// use verimeta_core::namespace::NamespaceContext;
/// use verimeta_core::strip::strip_components;
///
/// let xml = "<verification-metadata><components/></verification-metadata>";
/// let mut doc = ManifestDocument::parse_str(xml, NamespaceContext::default()).unwrap();
/// assert!(strip_components(&mut doc));
/// assert!(!strip_components(&mut doc));
/// ```
pub fn strip_components(document: &mut ManifestDocument) -> bool {
    document.take_components().is_some()
}
