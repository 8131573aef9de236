//! Artifact records and module-metadata linkage.

use crate::checksum::Checksum;
use crate::component::Component;
use crate::sri::SriHash;
use std::rc::Rc;

/// Filename suffix identifying a Gradle module-metadata artifact.
pub const MODULE_METADATA_SUFFIX: &str = ".module";

/// Back-reference to the module-metadata artifact that precedes an artifact
/// in its component's artifact list.
///
/// The linkage is forward-carried in document order: once a `.module`
/// artifact is seen, every subsequent artifact of the same component
/// carries this reference until a later `.module` artifact replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    /// Name of the module-metadata artifact.
    pub name: String,
    /// Integrity string of the module-metadata artifact.
    pub hash: SriHash,
    /// Raw checksum pair of the module-metadata artifact.
    pub checksum: Checksum,
}

/// One downloadable file belonging to a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name of the artifact.
    pub name: String,
    /// Last recognized checksum in scan order, if any.
    pub checksum: Option<Checksum>,
    /// The component this artifact belongs to. Shared by all artifacts of
    /// the component; an artifact never owns its component.
    pub component: Rc<Component>,
    /// Module-metadata linkage carried forward in document order, absent
    /// for artifacts that precede any `.module` artifact.
    pub module: Option<ModuleRef>,
}

impl Artifact {
    /// Return whether this artifact is itself a module-metadata descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use verimeta_core::artifact::Artifact;
    /// use verimeta_core::component::Component;
    ///
    /// let artifact = Artifact {
    ///     name: "lib-1.0.module".to_owned(),
    ///     checksum: None,
    ///     component: Rc::new(Component::new("org.example", "lib", "1.0")),
    ///     module: None,
    /// };
    /// assert!(artifact.is_module_metadata());
    /// ```
    #[must_use]
    pub fn is_module_metadata(&self) -> bool {
        self.name.ends_with(MODULE_METADATA_SUFFIX)
    }
}
