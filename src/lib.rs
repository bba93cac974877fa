//! Programmatic HTML documents with content-addressed styles.
//!
//!     Documents are trees of [`Node`]s. Elements may carry CSS declarations;
//!     instead of inline `style` attributes every distinct declaration set
//!     becomes one class whose name is a digest of its content, and each class
//!     rule is written exactly once.
//!
//! Architecture
//!
//!     The hard part is the pipeline that turns a tree into text:
//!
//!     Node tree ─build─▶ artifact stream ─collect─▶ hoisted stream ─render─▶ String
//!
//!     - build: lazy depth-first walk producing flat [`Artifact`]s
//!       (see ./artifact/nested_to_flat.rs)
//!     - collect: drops repeated style blocks and moves the rest to the hoist
//!       point (see ./collect.rs)
//!     - render: artifacts to markup, compact or indented (see ./render.rs)
//!
//!     The file structure :
//!     .
//!     ├── artifact
//!     │   ├── mod.rs              # Artifact enum
//!     │   └── nested_to_flat.rs   # lazy tree → stream iterator
//!     ├── node
//!     │   ├── mod.rs              # Node enum, Fragment, fixed markers
//!     │   └── element.rs          # Element builder, void elements
//!     ├── style
//!     │   ├── mod.rs              # Style, StyleScope and qualifier newtypes
//!     │   └── identity.rs         # class-name digest, scope grouping
//!     ├── collect.rs              # dedup + hoisting
//!     ├── render.rs               # fragments and indentation
//!     ├── escape.rs
//!     ├── document.rs             # doctype/signature/html/head/body wiring
//!     ├── error.rs
//!     └── lib.rs
//!
//!     This is a pure lib: no I/O, no environment. Configuration files are
//!     handled by the htmlforge-config crate.
//!
//! What is trusted
//!
//!     Tag names, attribute names and CSS property/value strings pass through
//!     as given. Text and attribute values are always escaped, raw nodes never
//!     are.

pub mod artifact;
pub mod collect;
pub mod document;
pub mod error;
pub mod escape;
pub mod node;
pub mod render;
pub mod style;

pub use artifact::{Artifact, Artifacts};
pub use collect::{CollectStats, Collected, Collector, HoistPolicy};
pub use document::{Document, DocumentOptions};
pub use error::ForgeError;
pub use node::{Attribute, Element, Fragment, Node};
pub use render::Renderer;
pub use style::{ClassName, Style, StyleScope};

/// Build, collect and render a single node with the given settings.
///
/// Useful for fragments that are embedded into markup produced elsewhere.
pub fn render_node(
    node: &Node,
    hoist: HoistPolicy,
    renderer: &Renderer,
) -> Result<String, ForgeError> {
    let collected = Collector::new(hoist).collect(node.build())?;
    renderer.render(collected.artifacts)
}
