//! Error type shared by the whole pipeline.

use thiserror::Error;

/// Errors raised while building or rendering a document.
///
/// Caller input such as tag names, attribute names and CSS property strings
/// is never validated. The only checked inputs are the scope qualifiers,
/// whose leading token decides how the rule is wrapped.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("pseudo selector must start with ':' (got {0:?})")]
    InvalidPseudoSelector(String),

    #[error("media query must start with '@media' (got {0:?})")]
    InvalidMediaQuery(String),

    #[error("container query must start with '@container' (got {0:?})")]
    InvalidContainerQuery(String),

    /// Single-point hoisting found no `<marker>` tag to splice styles into.
    #[error("no <{marker}> tag in the artifact stream to hoist {pending} style block(s) into")]
    MissingHoistPoint { marker: String, pending: usize },

    #[error("failed to write rendered output")]
    Write(#[from] std::fmt::Error),
}
