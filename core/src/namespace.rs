//! Explicit per-document XML namespace context.
//!
//! The verification schema binds a default namespace. Rather than
//! registering a prefix process-wide, every [`crate::document::ManifestDocument`]
//! carries its own context, consulted when matching existing elements and
//! when stamping elements created during a merge.

/// Default namespace of Gradle dependency-verification manifests.
pub const VERIFICATION_NAMESPACE: &str = "https://schema.gradle.org/dependency-verification";

/// Namespace context for one manifest document.
///
/// # Examples
///
/// ```
/// use verimeta_core::namespace::{NamespaceContext, VERIFICATION_NAMESPACE};
///
/// let context = NamespaceContext::default();
/// assert_eq!(context.uri(), VERIFICATION_NAMESPACE);
/// assert!(context.matches(Some(VERIFICATION_NAMESPACE)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceContext {
    uri: String,
}

impl NamespaceContext {
    /// Create a context for the given namespace URI.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Return the namespace URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Return whether an element namespace belongs to this context.
    ///
    /// Elements without any namespace are accepted so that manifests
    /// written without a default namespace declaration still resolve.
    #[must_use]
    pub fn matches(&self, namespace: Option<&str>) -> bool {
        namespace.is_none_or(|uri| uri == self.uri)
    }
}

impl Default for NamespaceContext {
    fn default() -> Self {
        Self::new(VERIFICATION_NAMESPACE)
    }
}
