//! The node tree.
//!
//! A [`Node`] is the closed set of things a document can contain. Every
//! variant participates in the pipeline through one capability,
//! [`Node::build`], which yields the node's artifacts lazily in depth-first
//! pre-order.
//!
//! | Variant   | Artifacts                                          |
//! |-----------|----------------------------------------------------|
//! | Element   | `StyledClass`? `TagOpen` (children... `TagClose`)? |
//! | Text      | `Text`                                             |
//! | Raw       | `Raw`                                              |
//! | Fragment  | children only                                      |
//! | Doctype   | `Raw("<!DOCTYPE html>")`                           |
//! | Signature | `Raw(<signature comment>)`                         |

mod element;

pub use element::{is_void_element, Attribute, Element};

use crate::artifact::Artifacts;

pub const DOCTYPE: &str = "<!DOCTYPE html>";

pub const SIGNATURE: &str = "<!-- Created by htmlforge (https://github.com/tlonny/htmlforge) -->";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
    /// Markup passed through verbatim. The caller vouches for it.
    Raw(String),
    Fragment(Fragment),
    Doctype,
    Signature,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Node::Raw(content.into())
    }

    /// Walk this node and everything below it.
    ///
    /// The returned iterator borrows the tree; calling `build` again re-walks
    /// it and yields an equal sequence.
    pub fn build(&self) -> Artifacts<'_> {
        Artifacts::new(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Node::Fragment(fragment)
    }
}

/// A group of sibling nodes without markup of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    children: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self, node: impl Into<Node>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.add_child(node);
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
