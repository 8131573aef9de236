//! Manifest document access over an ordered XML element tree.
//!
//! A manifest is held as the parsed root element plus the namespace
//! context used to resolve its children. The merger and stripper mutate
//! this tree directly; the parser only reads it. Writing always emits a
//! textual XML declaration and keeps the document's original namespace
//! declarations.

use crate::error::{ManifestError, Result};
use crate::namespace::NamespaceContext;
use camino::Utf8Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use xmltree::{Element, EmitterConfig, XMLNode};

/// Local name of the verified-components container element.
pub const COMPONENTS_ELEMENT: &str = "components";
/// Local name of a component element.
pub const COMPONENT_ELEMENT: &str = "component";
/// Local name of an artifact element.
pub const ARTIFACT_ELEMENT: &str = "artifact";

/// A verification manifest as an ordered tree of elements and attributes.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    root: Element,
    namespace: NamespaceContext,
}

impl ManifestDocument {
    /// Parse a manifest from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the input is not well-formed XML.
    pub fn parse<R: Read>(reader: R, namespace: NamespaceContext) -> Result<Self> {
        Ok(Self {
            root: Element::parse(reader)?,
            namespace,
        })
    }

    /// Parse a manifest from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the input is not well-formed XML.
    pub fn parse_str(xml: &str, namespace: NamespaceContext) -> Result<Self> {
        Self::parse(xml.as_bytes(), namespace)
    }

    /// Parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be opened and
    /// [`ManifestError::Read`] if its content is not well-formed XML.
    pub fn parse_file(path: &Utf8Path, namespace: NamespaceContext) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file), namespace)
    }

    /// Parse a manifest file that may legitimately be absent.
    ///
    /// Returns `Ok(None)` when no file exists at `path`. A merge treats
    /// such a secondary manifest as contributing zero components.
    ///
    /// # Errors
    ///
    /// Same as [`Self::parse_file`] for files that do exist.
    pub fn parse_file_if_exists(
        path: &Utf8Path,
        namespace: NamespaceContext,
    ) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        Self::parse_file(path, namespace).map(Some)
    }

    /// Return the namespace context of this document.
    #[must_use]
    pub fn namespace(&self) -> &NamespaceContext {
        &self.namespace
    }

    /// Return the root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serialize the document, emitting a textual XML declaration.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Write`] if serialization fails.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let config = EmitterConfig::new()
            .write_document_declaration(true)
            .perform_indent(true);
        Ok(self.root.write_with_config(writer, config)?)
    }

    /// Rewrite a manifest file in place.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be created and
    /// [`ManifestError::Write`] if serialization fails.
    pub fn write_file(&self, path: &Utf8Path) -> Result<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }

    /// Serialize the document to a string.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Write`] if serialization fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Return the components container, if present.
    #[must_use]
    pub fn components(&self) -> Option<&Element> {
        let position = self.components_position()?;
        self.root.children.get(position).and_then(XMLNode::as_element)
    }

    /// Return the components container, creating an empty one under the
    /// root when absent.
    pub fn ensure_components(&mut self) -> &mut Element {
        let position = match self.components_position() {
            Some(position) => position,
            None => {
                let mut created = Element::new(COMPONENTS_ELEMENT);
                created.namespace = Some(self.namespace.uri().to_owned());
                created.namespaces = self.root.namespaces.clone();
                self.root.children.push(XMLNode::Element(created));
                self.root.children.len() - 1
            }
        };
        match self.root.children.get_mut(position) {
            Some(XMLNode::Element(element)) => element,
            _ => unreachable!("components container located at {position}"),
        }
    }

    /// Remove the components container, returning it when one was present.
    pub fn take_components(&mut self) -> Option<Element> {
        let position = self.components_position()?;
        match self.root.children.remove(position) {
            XMLNode::Element(element) => Some(element),
            node => {
                self.root.children.insert(position, node);
                None
            }
        }
    }

    /// Consume the document and return its components container, if any.
    #[must_use]
    pub fn into_components(mut self) -> Option<Element> {
        self.take_components()
    }

    /// Iterate component elements under the components container in
    /// document order.
    pub fn component_elements(&self) -> impl Iterator<Item = &Element> {
        self.components()
            .into_iter()
            .flat_map(move |container| {
                child_elements(container, &self.namespace, COMPONENT_ELEMENT)
            })
    }

    fn components_position(&self) -> Option<usize> {
        self.root.children.iter().position(|node| {
            node.as_element().is_some_and(|element| {
                element.name == COMPONENTS_ELEMENT
                    && self.namespace.matches(element.namespace.as_deref())
            })
        })
    }
}

/// Iterate child elements of `parent` with the given local name that
/// belong to the namespace context.
pub fn child_elements<'a>(
    parent: &'a Element,
    namespace: &'a NamespaceContext,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> {
    parent
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |element| {
            element.name == name && namespace.matches(element.namespace.as_deref())
        })
}

/// Fetch a required attribute from an element.
///
/// # Errors
///
/// Returns [`ManifestError::MalformedManifest`] naming the element and the
/// absent attribute.
pub fn require_attribute(element: &Element, attribute: &str) -> Result<String> {
    element
        .attributes
        .get(attribute)
        .cloned()
        .ok_or_else(|| ManifestError::MalformedManifest {
            element: element.name.clone(),
            attribute: attribute.to_owned(),
        })
}
