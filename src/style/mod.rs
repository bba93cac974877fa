//! Style declarations attached to elements.
//!
//! A [`Style`] is one `name: value` declaration plus the scope it applies in.
//! Declarations that share a scope are rendered together as one rule, see
//! [`identity::group_by_scope`].

pub mod identity;

use crate::error::ForgeError;
use std::fmt;

pub use identity::{class_name_for, group_by_scope, ClassName, ScopeGroup};

/// A pseudo selector such as `:hover` or `::before`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PseudoSelector(String);

impl PseudoSelector {
    pub fn new(selector: impl Into<String>) -> Result<Self, ForgeError> {
        let selector = selector.into();
        if selector.starts_with(':') {
            Ok(Self(selector))
        } else {
            Err(ForgeError::InvalidPseudoSelector(selector))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An `@media ...` prelude, for example `@media (max-width: 600px)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaQuery(String);

impl MediaQuery {
    pub fn new(query: impl Into<String>) -> Result<Self, ForgeError> {
        let query = query.into();
        if query.starts_with("@media") {
            Ok(Self(query))
        } else {
            Err(ForgeError::InvalidMediaQuery(query))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An `@container ...` prelude, for example `@container (min-width: 700px)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerQuery(String);

impl ContainerQuery {
    pub fn new(query: impl Into<String>) -> Result<Self, ForgeError> {
        let query = query.into();
        if query.starts_with("@container") {
            Ok(Self(query))
        } else {
            Err(ForgeError::InvalidContainerQuery(query))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Qualifiers that decide which rule a declaration lands in.
///
/// Built fluently; each qualifier is validated as it is set:
///
/// ```ignore
/// let scope = StyleScope::default()
///     .with_media("@media (max-width: 600px)")?
///     .with_pseudo(":hover")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleScope {
    pub pseudo_selector: Option<PseudoSelector>,
    pub media_query: Option<MediaQuery>,
    pub container_query: Option<ContainerQuery>,
}

impl StyleScope {
    pub fn with_pseudo(mut self, selector: impl Into<String>) -> Result<Self, ForgeError> {
        self.pseudo_selector = Some(PseudoSelector::new(selector)?);
        Ok(self)
    }

    pub fn with_media(mut self, query: impl Into<String>) -> Result<Self, ForgeError> {
        self.media_query = Some(MediaQuery::new(query)?);
        Ok(self)
    }

    pub fn with_container(mut self, query: impl Into<String>) -> Result<Self, ForgeError> {
        self.container_query = Some(ContainerQuery::new(query)?);
        Ok(self)
    }

    /// True when no qualifier is set and the rule is a bare class selector.
    pub fn is_bare(&self) -> bool {
        self.pseudo_selector.is_none() && self.media_query.is_none() && self.container_query.is_none()
    }
}

/// One CSS declaration as authored. Name and value are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style {
    pub name: String,
    pub value: String,
    pub scope: StyleScope,
}

impl Style {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::scoped(name, value, StyleScope::default())
    }

    pub fn scoped(name: impl Into<String>, value: impl Into<String>, scope: StyleScope) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            scope,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_qualifiers() {
        let scope = StyleScope::default()
            .with_pseudo(":hover")
            .and_then(|s| s.with_media("@media (max-width: 600px)"))
            .and_then(|s| s.with_container("@container (min-width: 700px)"))
            .expect("qualifiers to validate");

        assert_eq!(scope.pseudo_selector.as_ref().map(PseudoSelector::as_str), Some(":hover"));
        assert_eq!(
            scope.media_query.as_ref().map(MediaQuery::as_str),
            Some("@media (max-width: 600px)")
        );
        assert!(!scope.is_bare());
    }

    #[test]
    fn rejects_qualifiers_without_their_prefix() {
        assert!(matches!(
            PseudoSelector::new("hover"),
            Err(ForgeError::InvalidPseudoSelector(s)) if s == "hover"
        ));
        assert!(matches!(
            MediaQuery::new("(max-width: 600px)"),
            Err(ForgeError::InvalidMediaQuery(_))
        ));
        assert!(matches!(
            ContainerQuery::new("@media (min-width: 1px)"),
            Err(ForgeError::InvalidContainerQuery(_))
        ));
    }

    #[test]
    fn displays_as_declaration() {
        assert_eq!(Style::new("color", "red").to_string(), "color: red;");
    }
}
