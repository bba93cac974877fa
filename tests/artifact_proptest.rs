//! Property-based tests for the artifact pipeline
//!
//! Random trees are generated from a small vocabulary of tags (some void),
//! text with markup characters, raw passthrough and style declarations, and
//! the stream/rendering invariants are checked on each.

use htmlforge::{
    Artifact, Collector, Element, HoistPolicy, Node, Renderer, StyleScope,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn tag_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("div"),
        Just("span"),
        Just("section"),
        Just("p"),
        Just("br"),
        Just("img"),
        Just("hr"),
    ]
}

/// Text made mostly of characters that must be escaped
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z <>&\"']{0,12}"
}

fn scope_strategy() -> impl Strategy<Value = StyleScope> {
    (
        proptest::option::of(prop_oneof![Just(":hover"), Just(":focus")]),
        proptest::option::of(Just("@media (max-width: 600px)")),
        proptest::option::of(Just("@container (min-width: 700px)")),
    )
        .prop_map(|(pseudo, media, container)| {
            let mut scope = StyleScope::default();
            if let Some(pseudo) = pseudo {
                scope = scope.with_pseudo(pseudo).unwrap();
            }
            if let Some(media) = media {
                scope = scope.with_media(media).unwrap();
            }
            if let Some(container) = container {
                scope = scope.with_container(container).unwrap();
            }
            scope
        })
}

fn style_strategy() -> impl Strategy<Value = (String, String, StyleScope)> {
    (
        prop_oneof![Just("color"), Just("margin"), Just("padding")],
        prop_oneof![Just("0"), Just("red"), Just("4px")],
        scope_strategy(),
    )
        .prop_map(|(name, value, scope)| (name.to_string(), value.to_string(), scope))
}

fn element_strategy(children: impl Strategy<Value = Vec<Node>>) -> impl Strategy<Value = Node> {
    (
        tag_strategy(),
        proptest::collection::vec(("[a-z]{1,5}", text_strategy()), 0..3),
        proptest::collection::vec(style_strategy(), 0..3),
        children,
    )
        .prop_map(|(tag, attributes, styles, children)| {
            let mut element = Element::new(tag);
            for (name, value) in attributes {
                element.add_attribute(name, value);
            }
            for (name, value, scope) in styles {
                element.add_scoped_style(name, value, scope);
            }
            for child in children {
                element.add_child(child);
            }
            Node::Element(element)
        })
}

fn tree_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        text_strategy().prop_map(Node::text),
        Just(Node::raw("<!-- raw -->")),
        element_strategy(Just(Vec::new())),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        element_strategy(proptest::collection::vec(inner, 0..4))
    })
}

/// Check that the stream is well-parenthesized
fn assert_balanced(artifacts: &[Artifact]) -> Result<(), TestCaseError> {
    let mut open: Vec<&str> = Vec::new();
    for artifact in artifacts {
        match artifact {
            Artifact::TagOpen {
                tag_name, is_void, ..
            } => {
                prop_assert_eq!(*is_void, htmlforge::node::is_void_element(tag_name));
                if !*is_void {
                    open.push(*tag_name);
                }
            }
            Artifact::TagClose { tag_name } => {
                prop_assert_eq!(open.pop(), Some(*tag_name));
            }
            _ => {}
        }
    }
    prop_assert!(open.is_empty(), "unclosed tags: {:?}", open);
    Ok(())
}

proptest! {
    #[test]
    fn stream_is_balanced(tree in tree_strategy()) {
        let artifacts: Vec<Artifact> = tree.build().collect();
        assert_balanced(&artifacts)?;
    }

    #[test]
    fn void_elements_are_never_closed(tree in tree_strategy()) {
        for artifact in tree.build() {
            if let Artifact::TagClose { tag_name } = artifact {
                prop_assert!(!htmlforge::node::is_void_element(tag_name), "void <{}> closed", tag_name);
            }
        }
    }

    #[test]
    fn collection_keeps_balance_and_uniqueness(tree in tree_strategy()) {
        let collected = Collector::new(HoistPolicy::Inline).collect(tree.build()).unwrap();
        assert_balanced(&collected.artifacts)?;

        let mut seen = HashSet::new();
        for artifact in &collected.artifacts {
            if let Artifact::StyledClass { class_name, .. } = artifact {
                prop_assert!(seen.insert(class_name.clone()), "{} emitted twice", class_name);
            }
        }
        prop_assert_eq!(seen.len(), collected.stats.unique);
    }

    #[test]
    fn every_referenced_class_has_a_rule(tree in tree_strategy()) {
        let collected = Collector::new(HoistPolicy::Inline).collect(tree.build()).unwrap();

        let mut defined = HashSet::new();
        for artifact in &collected.artifacts {
            match artifact {
                Artifact::StyledClass { class_name, .. } => {
                    defined.insert(class_name.clone());
                }
                Artifact::TagOpen { class_name: Some(class_name), .. } => {
                    prop_assert!(defined.contains(class_name), "{} used before its rule", class_name);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn text_never_leaks_markup(text in text_strategy()) {
        let node = Node::Element(Element::new("p").with_attribute("title", text.clone()).with_child(Node::text(text)));
        let html = htmlforge::render_node(&node, HoistPolicy::Inline, &Renderer::compact()).unwrap();

        let inner = html
            .strip_prefix("<p title=\"")
            .and_then(|rest| rest.strip_suffix("</p>"))
            .unwrap();
        let (attr, body) = inner.split_once("\">").unwrap();
        for part in [attr, body] {
            prop_assert!(!part.contains(['<', '>', '"', '\'']), "{:?}", part);
            prop_assert_eq!(part.replace("&amp;", "").replace("&lt;", "").replace("&gt;", "")
                .replace("&quot;", "").replace("&#39;", "").contains('&'), false);
        }
    }

    #[test]
    fn rendering_is_deterministic(tree in tree_strategy()) {
        let render = || {
            let collected = Collector::new(HoistPolicy::Inline).collect(tree.build()).unwrap();
            Renderer::indented(2).render(collected.artifacts).unwrap()
        };
        prop_assert_eq!(render(), render());
    }
}
