//! Whole HTML documents.
//!
//! A [`Document`] owns the `<head>` and `<body>` elements and wires the three
//! pipeline stages together:
//!
//! ```text
//! build (lazy)  →  Collector (dedup + hoist)  →  Renderer
//! ```
//!
//! In single-point mode the head starts with an empty marker element
//! (`<style>` by default) that receives every unique style rule.

use std::fmt;
use std::iter;

use crate::artifact::Artifact;
use crate::collect::{Collector, HoistPolicy};
use crate::error::ForgeError;
use crate::node::{Attribute, Element, Node};
use crate::render::Renderer;

static DOCTYPE_NODE: Node = Node::Doctype;
static SIGNATURE_NODE: Node = Node::Signature;

const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Spaces per nesting level. Zero renders everything on one line.
    pub indent_width: usize,
    /// Emit the generator comment after the doctype.
    pub signature: bool,
    pub hoist: HoistPolicy,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            signature: true,
            hoist: HoistPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    options: DocumentOptions,
    html_attributes: Vec<Attribute>,
    head: Element,
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    pub fn with_options(options: DocumentOptions) -> Self {
        let mut head = Element::new("head");
        if let HoistPolicy::SinglePoint { marker } = &options.hoist {
            head.add_child(Element::new(marker));
        }

        Self {
            options,
            html_attributes: Vec::new(),
            head,
            body: Element::new("body"),
        }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Add an attribute to the `<html>` element.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.html_attributes.push(Attribute::new(name, value));
        self
    }

    pub fn head(&self) -> &Element {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.head
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// The raw, unhoisted artifact stream of the whole document.
    pub fn build(&self) -> impl Iterator<Item = Artifact<'_>> {
        let signature = self
            .options
            .signature
            .then(|| SIGNATURE_NODE.build())
            .into_iter()
            .flatten();

        DOCTYPE_NODE
            .build()
            .chain(signature)
            .chain(iter::once(Artifact::TagOpen {
                tag_name: "html",
                attributes: &self.html_attributes,
                class_name: None,
                is_void: false,
            }))
            .chain(self.head.build())
            .chain(self.body.build())
            .chain(iter::once(Artifact::close("html")))
    }

    /// Run build → collect → render and return the document text.
    pub fn render(&self) -> Result<String, ForgeError> {
        let collected = Collector::new(self.options.hoist.clone()).collect(self.build())?;
        let renderer = Renderer::indented(self.options.indent_width);
        let html = renderer.render(collected.artifacts)?;

        tracing::debug!(
            bytes = html.len(),
            styles = collected.stats.unique,
            "rendered document"
        );
        Ok(html)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.render().map_err(|err| {
            tracing::error!(%err, "document failed to render");
            fmt::Error
        })?;
        f.write_str(&html)
    }
}
