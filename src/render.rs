//! Artifact stream → markup text.
//!
//! Each artifact is first turned into one or more [`RenderFragment`]s. A
//! fragment is a piece of text plus what it does to the nesting depth. The
//! compact renderer concatenates fragments as they are. The indented renderer
//! puts each fragment on its own line behind the current indentation.
//!
//! | Artifact      | Fragments                                              |
//! |---------------|--------------------------------------------------------|
//! | `TagOpen`     | `<tag a="v"...>` (opens unless void)                   |
//! | `TagClose`    | `</tag>` (closes)                                      |
//! | `Text`        | escaped text                                           |
//! | `Raw`         | text as is                                             |
//! | `StyledClass` | per scope group: `@media {`? `@container {`? `.c:p {`, |
//! |               | one fragment per declaration, then the closing braces  |

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::artifact::Artifact;
use crate::error::ForgeError;
use crate::escape::escape_html;
use crate::node::Attribute;
use crate::style::{group_by_scope, ClassName, Style};

/// Effect of a fragment on the indentation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentAction {
    /// Written at the current depth, then the depth grows.
    Open,
    /// The depth shrinks, then the fragment is written.
    Close,
    Stay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFragment<'a> {
    pub text: Cow<'a, str>,
    pub action: IndentAction,
}

impl<'a> RenderFragment<'a> {
    fn new(text: impl Into<Cow<'a, str>>, action: IndentAction) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// Append the fragments for one artifact to `out`.
pub fn fragments<'a>(artifact: &Artifact<'a>, out: &mut Vec<RenderFragment<'a>>) {
    match artifact {
        Artifact::TagOpen {
            tag_name,
            attributes,
            class_name,
            is_void,
        } => {
            let action = if *is_void {
                IndentAction::Stay
            } else {
                IndentAction::Open
            };
            out.push(RenderFragment::new(
                open_tag(tag_name, attributes, class_name.as_ref()),
                action,
            ));
        }
        Artifact::TagClose { tag_name } => {
            out.push(RenderFragment::new(format!("</{tag_name}>"), IndentAction::Close));
        }
        Artifact::Text(text) => out.push(RenderFragment::new(escape_html(*text), IndentAction::Stay)),
        Artifact::Raw(raw) => out.push(RenderFragment::new(*raw, IndentAction::Stay)),
        Artifact::StyledClass { class_name, styles } => style_rules(class_name, styles, out),
    }
}

fn open_tag(tag_name: &str, attributes: &[Attribute], class_name: Option<&ClassName>) -> String {
    let mut tag = String::with_capacity(2 + tag_name.len() + attributes.len() * 16);
    tag.push('<');
    tag.push_str(tag_name);

    // A caller-supplied class attribute absorbs the derived class instead of
    // getting a second `class` attribute next to it.
    let mut pending_class = class_name;
    for attribute in attributes {
        tag.push(' ');
        tag.push_str(&attribute.name);
        tag.push_str("=\"");
        tag.push_str(&escape_html(&attribute.value));
        if attribute.name.eq_ignore_ascii_case("class") {
            if let Some(class_name) = pending_class.take() {
                if !attribute.value.is_empty() {
                    tag.push(' ');
                }
                tag.push_str(&escape_html(class_name.as_str()));
            }
        }
        tag.push('"');
    }
    if let Some(class_name) = pending_class {
        tag.push_str(" class=\"");
        tag.push_str(&escape_html(class_name.as_str()));
        tag.push('"');
    }

    tag.push('>');
    tag
}

fn style_rules<'a>(class_name: &ClassName, styles: &[Style], out: &mut Vec<RenderFragment<'a>>) {
    for group in group_by_scope(styles) {
        let scope = group.scope;
        if let Some(media) = &scope.media_query {
            out.push(RenderFragment::new(format!("{} {{", media.as_str()), IndentAction::Open));
        }
        if let Some(container) = &scope.container_query {
            out.push(RenderFragment::new(
                format!("{} {{", container.as_str()),
                IndentAction::Open,
            ));
        }

        let pseudo = scope.pseudo_selector.as_ref().map_or("", |p| p.as_str());
        out.push(RenderFragment::new(
            format!(".{class_name}{pseudo} {{"),
            IndentAction::Open,
        ));
        for style in group.styles {
            out.push(RenderFragment::new(style.to_string(), IndentAction::Stay));
        }
        out.push(RenderFragment::new("}", IndentAction::Close));

        if scope.container_query.is_some() {
            out.push(RenderFragment::new("}", IndentAction::Close));
        }
        if scope.media_query.is_some() {
            out.push(RenderFragment::new("}", IndentAction::Close));
        }
    }
}

/// Turns an artifact stream into text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    /// One level of indentation; `None` renders compact output.
    indent: Option<String>,
}

impl Renderer {
    /// Fragments are concatenated with no separators.
    pub fn compact() -> Self {
        Self { indent: None }
    }

    /// One fragment per line, indented by `width` spaces per level.
    /// A width of zero renders compact output.
    pub fn indented(width: usize) -> Self {
        if width == 0 {
            return Self::compact();
        }
        Self {
            indent: Some(" ".repeat(width)),
        }
    }

    pub fn is_compact(&self) -> bool {
        self.indent.is_none()
    }

    pub fn render<'a, I>(&self, artifacts: I) -> Result<String, ForgeError>
    where
        I: IntoIterator<Item = Artifact<'a>>,
    {
        let mut out = String::new();
        self.render_to(artifacts, &mut out)?;
        Ok(out)
    }

    pub fn render_to<'a, I, W>(&self, artifacts: I, out: &mut W) -> Result<(), ForgeError>
    where
        I: IntoIterator<Item = Artifact<'a>>,
        W: Write,
    {
        let mut buffer = Vec::new();
        let mut depth = 0usize;
        let mut first = true;

        for artifact in artifacts {
            buffer.clear();
            fragments(&artifact, &mut buffer);
            for fragment in &buffer {
                match &self.indent {
                    None => out.write_str(&fragment.text)?,
                    Some(unit) => {
                        write_indented(out, unit, &mut depth, first, fragment)?;
                        first = false;
                    }
                }
            }
        }

        Ok(())
    }
}

fn write_indented<W: Write>(
    out: &mut W,
    unit: &str,
    depth: &mut usize,
    first: bool,
    fragment: &RenderFragment<'_>,
) -> fmt::Result {
    if fragment.action == IndentAction::Close {
        *depth = depth.saturating_sub(1);
    }
    if !first {
        out.write_char('\n')?;
    }
    for _ in 0..*depth {
        out.write_str(unit)?;
    }
    out.write_str(&fragment.text)?;
    if fragment.action == IndentAction::Open {
        *depth += 1;
    }
    Ok(())
}
