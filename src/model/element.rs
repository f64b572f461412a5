//! Parser-independent labeled tree for model documents.

use std::fmt;

use crate::error::{NmlGraphError, Result};

/// An element of a parsed model document.
///
/// Only element nodes are kept. Text, comments and processing instructions
/// are dropped during conversion, so [`Element::children`] yields exactly the
/// nested elements in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, returning the element.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element, returning the element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The element tag.
    ///
    /// Namespaced tags are rendered as `{namespace-uri}local-name`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check whether the tag contains `needle`.
    pub fn tag_contains(&self, needle: &str) -> bool {
        self.tag.contains(needle)
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up an attribute that must be present.
    pub fn required_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .ok_or_else(|| NmlGraphError::missing_attribute(&self.tag, name))
    }

    /// Immediate child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Pre-order traversal starting with this element.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Drive `visitor` over every element of this subtree in document order.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<()> {
        for element in self.descendants() {
            visitor.visit(element)?;
        }
        Ok(())
    }

    pub(crate) fn from_xml(node: roxmltree::Node<'_, '_>) -> Self {
        let tag = expanded_name(node.tag_name().namespace(), node.tag_name().name());
        let attributes = node
            .attributes()
            .map(|attr| (expanded_name(attr.namespace(), attr.name()), attr.value().to_string()))
            .collect();
        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(Element::from_xml)
            .collect();

        Self {
            tag,
            attributes,
            children,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = self.attribute("id") {
            write!(f, " id=\"{}\"", id)?;
        }
        write!(f, ">")
    }
}

fn expanded_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(uri) => format!("{{{}}}{}", uri, local),
        None => local.to_string(),
    }
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Callback invoked once per element during [`Element::accept`].
pub trait Visitor {
    /// Inspect one element. Returning an error stops the traversal.
    fn visit(&mut self, element: &Element) -> Result<()>;
}
