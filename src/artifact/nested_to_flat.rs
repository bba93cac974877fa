//! Converts a nested node tree into a flat artifact stream.
//!
//! # The Algorithm
//!
//! The walk is an explicit stack of frames instead of recursion, so the
//! stream can be pulled one artifact at a time and memory stays bounded by
//! tree depth.
//!
//! 1. **Visiting a node:** leaves emit their single artifact. Fragments push
//!    their children. Elements are entered (below).
//!
//! 2. **Entering an element:**
//!    - Non-void: push a `Close` frame, then a `Children` frame on top of it
//!    - Void: push nothing, the children are never visited
//!    - With styles: emit `StyledClass` now and park the `TagOpen` so it is
//!      returned by the next call
//!
//! 3. **Children frames:** take the next child, push the rest back and visit
//!    the child. An exhausted iterator is dropped, uncovering the `Close`.
//!
//! 4. **Close frames:** emit `TagClose`.

use std::iter::FusedIterator;
use std::slice;

use super::Artifact;
use crate::node::{Element, Node, DOCTYPE, SIGNATURE};
use crate::style::class_name_for;

enum Frame<'a> {
    Visit(&'a Node),
    Enter(&'a Element),
    Children(slice::Iter<'a, Node>),
    Close(&'a str),
}

/// Lazy depth-first pre-order artifact iterator over a borrowed tree.
pub struct Artifacts<'a> {
    stack: Vec<Frame<'a>>,
    parked: Option<Artifact<'a>>,
}

impl<'a> Artifacts<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![Frame::Visit(root)],
            parked: None,
        }
    }

    pub(crate) fn from_element(root: &'a Element) -> Self {
        Self {
            stack: vec![Frame::Enter(root)],
            parked: None,
        }
    }

    fn enter(&mut self, element: &'a Element) -> Artifact<'a> {
        let is_void = element.is_void();
        if is_void {
            if !element.children().is_empty() {
                tracing::debug!(
                    tag = element.tag_name(),
                    dropped = element.children().len(),
                    "ignoring children of void element"
                );
            }
        } else {
            self.stack.push(Frame::Close(element.tag_name()));
            self.stack.push(Frame::Children(element.children().iter()));
        }

        let class_name = if element.styles().is_empty() {
            None
        } else {
            Some(class_name_for(element.styles()))
        };

        let open = Artifact::TagOpen {
            tag_name: element.tag_name(),
            attributes: element.attributes(),
            class_name: class_name.clone(),
            is_void,
        };

        match class_name {
            Some(class_name) => {
                self.parked = Some(open);
                Artifact::StyledClass {
                    class_name,
                    styles: element.styles(),
                }
            }
            None => open,
        }
    }
}

impl<'a> Iterator for Artifacts<'a> {
    type Item = Artifact<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(parked) = self.parked.take() {
            return Some(parked);
        }

        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Visit(node) => match node {
                    Node::Element(element) => return Some(self.enter(element)),
                    Node::Text(text) => return Some(Artifact::Text(text.as_str())),
                    Node::Raw(raw) => return Some(Artifact::Raw(raw.as_str())),
                    Node::Fragment(fragment) => {
                        self.stack.push(Frame::Children(fragment.children().iter()))
                    }
                    Node::Doctype => return Some(Artifact::Raw(DOCTYPE)),
                    Node::Signature => return Some(Artifact::Raw(SIGNATURE)),
                },
                Frame::Enter(element) => return Some(self.enter(element)),
                Frame::Children(mut siblings) => {
                    if let Some(child) = siblings.next() {
                        self.stack.push(Frame::Children(siblings));
                        self.stack.push(Frame::Visit(child));
                    }
                }
                Frame::Close(tag_name) => return Some(Artifact::TagClose { tag_name }),
            }
        }

        None
    }
}

impl FusedIterator for Artifacts<'_> {}
