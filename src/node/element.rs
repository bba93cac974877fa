use crate::artifact::Artifacts;
use crate::style::{Style, StyleScope};
use once_cell::sync::Lazy;
use std::collections::HashSet;

use super::Node;

static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

/// Whether `tag_name` (lower case) can have neither children nor a closing tag.
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(tag_name)
}

/// A `name="value"` pair. Order is kept and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An HTML element with attributes, styles and children.
///
/// Mutators come in two flavours: `add_*` take `&mut self` for editing an
/// element in place, `with_*` consume and return it for building trees in a
/// single expression.
///
/// ```ignore
/// let card = Element::new("div")
///     .with_attribute("id", "root")
///     .with_style("color", "red")
///     .with_child(Node::text("hello"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag_name: String,
    attributes: Vec<Attribute>,
    styles: Vec<Style>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element. The tag name is lower-cased.
    pub fn new(tag_name: impl AsRef<str>) -> Self {
        Self {
            tag_name: tag_name.as_ref().to_ascii_lowercase(),
            attributes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag_name)
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn add_style(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.styles.push(Style::new(name, value));
        self
    }

    pub fn add_scoped_style(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: StyleScope,
    ) -> &mut Self {
        self.styles.push(Style::scoped(name, value, scope));
        self
    }

    /// Append a child. Children of void elements are kept but never rendered.
    pub fn add_child(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_style(name, value);
        self
    }

    pub fn with_scoped_style(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: StyleScope,
    ) -> Self {
        self.add_scoped_style(name, value, scope);
        self
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add_child(node);
        self
    }

    pub fn build(&self) -> Artifacts<'_> {
        Artifacts::from_element(self)
    }
}
