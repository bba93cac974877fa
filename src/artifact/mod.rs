//! Defines the flat artifact stream representation of a node tree.
//!
//! The stream is the only channel between tree structure and rendering. It
//! is flatter than the tree so that nothing downstream needs recursion: the
//! [`Collector`](crate::collect::Collector) reorders it and the
//! [`Renderer`](crate::render::Renderer) turns each artifact into text.
//!
//! Artifacts borrow from the tree they were produced from. The only owned
//! data is the class name computed for a styled element.
//!
//! # Invariants
//!
//! - Every non-void `TagOpen` is followed, after zero or more complete
//!   subtrees, by exactly one `TagClose` with the same tag name.
//! - Void `TagOpen`s have no children and no `TagClose`.
//! - A `StyledClass` immediately precedes the `TagOpen` of the element that
//!   owns it, and that `TagOpen` carries the same class name.

mod nested_to_flat;

pub use nested_to_flat::Artifacts;

use crate::node::Attribute;
use crate::style::{ClassName, Style};

/// A single event in the artifact stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact<'a> {
    TagOpen {
        tag_name: &'a str,
        attributes: &'a [Attribute],
        /// Class derived from the element's styles, rendered as a `class`
        /// attribute.
        class_name: Option<ClassName>,
        is_void: bool,
    },
    TagClose {
        tag_name: &'a str,
    },
    Text(&'a str),
    Raw(&'a str),
    /// The style rules for one class, carrying the full declaration list.
    StyledClass {
        class_name: ClassName,
        styles: &'a [Style],
    },
}

impl<'a> Artifact<'a> {
    /// An open tag with no attributes and no class.
    pub fn open(tag_name: &'a str) -> Self {
        Artifact::TagOpen {
            tag_name,
            attributes: &[],
            class_name: None,
            is_void: false,
        }
    }

    pub fn close(tag_name: &'a str) -> Self {
        Artifact::TagClose { tag_name }
    }

    /// True for a `TagOpen` with the given tag name.
    pub fn opens(&self, tag: &str) -> bool {
        matches!(self, Artifact::TagOpen { tag_name, .. } if *tag_name == tag)
    }
}
