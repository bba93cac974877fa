//! Content-addressed class names for style sets.
//!
//! An element's whole declaration list maps to exactly one class name. The
//! name is a digest of the list in authored order, so identical lists share a
//! class and any change (value, property, qualifier, order) produces a new
//! one. Rendering later splits the list into [`ScopeGroup`]s, one CSS rule per
//! distinct scope, all keyed on that single class selector.

use super::{Style, StyleScope};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;

/// CSS class names may not start with a digit.
const CLASS_PREFIX: char = 'f';

/// Bytes of the SHA-256 digest kept in the class name.
const DIGEST_LEN: usize = 8;

/// A class name derived from a style set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the class name for an ordered declaration list.
pub fn class_name_for(styles: &[Style]) -> ClassName {
    let mut hasher = Sha256::new();
    for style in styles {
        feed(&mut hasher, style.scope.media_query.as_ref().map(|q| q.as_str()));
        feed(&mut hasher, style.scope.container_query.as_ref().map(|q| q.as_str()));
        feed(&mut hasher, style.scope.pseudo_selector.as_ref().map(|p| p.as_str()));
        feed(&mut hasher, Some(style.name.as_str()));
        feed(&mut hasher, Some(style.value.as_str()));
    }
    let digest = hasher.finalize();

    let mut name = String::with_capacity(1 + 11);
    name.push(CLASS_PREFIX);
    URL_SAFE_NO_PAD.encode_string(&digest[..DIGEST_LEN], &mut name);
    ClassName(name)
}

// Length-prefixed so that field boundaries cannot be shifted between
// neighbouring declarations.
fn feed(hasher: &mut Sha256, field: Option<&str>) {
    match field {
        None => hasher.update([0u8]),
        Some(text) => {
            hasher.update([1u8]);
            hasher.update((text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
    }
}

/// Declarations sharing one scope, rendered as a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeGroup<'a> {
    pub scope: &'a StyleScope,
    pub styles: Vec<&'a Style>,
}

/// Partition declarations by scope.
///
/// Groups appear in the order their scope is first seen; declarations keep
/// their authored order inside a group.
pub fn group_by_scope(styles: &[Style]) -> Vec<ScopeGroup<'_>> {
    let mut groups: Vec<ScopeGroup<'_>> = Vec::new();
    let mut index: HashMap<&StyleScope, usize> = HashMap::new();

    for style in styles {
        match index.get(&style.scope) {
            Some(&at) => groups[at].styles.push(style),
            None => {
                index.insert(&style.scope, groups.len());
                groups.push(ScopeGroup {
                    scope: &style.scope,
                    styles: vec![style],
                });
            }
        }
    }

    groups
}
