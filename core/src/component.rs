//! Component identity values.

use std::fmt;

/// A logical library release, identified by group, name, and version.
///
/// Immutable once created. Every artifact of a component holds a shared
/// reference to the same value for the lifetime of the parsed manifest.
///
/// # Examples
///
/// ```
/// use verimeta_core::component::Component;
///
/// let component = Component::new("org.example", "lib", "1.0");
/// assert_eq!(component.repository_path(), "org/example/lib/1.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    /// Group identifier, dot-separated.
    pub group: String,
    /// Component name.
    pub name: String,
    /// Component version.
    pub version: String,
}

impl Component {
    /// Create a component identity.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Return the repository-relative directory of this component: the
    /// group with dots replaced by path separators, followed by the name
    /// and version segments.
    #[must_use]
    pub fn repository_path(&self) -> String {
        format!("{}/{}/{}", self.group.replace('.', "/"), self.name, self.version)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::dotted_group("org.example.deep", "lib", "2.1", "org/example/deep/lib/2.1")]
    #[case::single_segment_group("acme", "tool", "0.1", "acme/tool/0.1")]
    fn repository_path_replaces_group_dots(
        #[case] group: &str,
        #[case] name: &str,
        #[case] version: &str,
        #[case] expected: &str,
    ) {
        let component = Component::new(group, name, version);
        assert_eq!(component.repository_path(), expected);
    }

    #[test]
    fn display_joins_coordinates_with_colons() {
        let component = Component::new("org.example", "lib", "1.0");
        assert_eq!(format!("{component}"), "org.example:lib:1.0");
    }
}
