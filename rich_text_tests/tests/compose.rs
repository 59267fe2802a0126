// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;
use rich_text::{
    AttributedTextComposer, Child, EmbeddedContent, NodeKind, OBJECT_REPLACEMENT_CHARACTER,
    RichTextTree,
};
use rich_text_dev::entity_paragraph;
use rich_text_style::{
    AttributeMask, FontWeight, StyleAttributes, TextDecoration, TextTransform,
};

use crate::util::{base, span_of};

#[test]
fn compose_sibling_example() {
    // root {color: black}; A {bold}; B {color: red}
    let mut tree = RichTextTree::new();
    let (root, leaves) = span_of(&mut tree, &["A", "B"]);
    tree.set_style(leaves[0], StyleAttributes::new().with_font_weight(FontWeight::BOLD))
        .unwrap();
    tree.set_style(leaves[1], StyleAttributes::new().with_foreground_color(css::RED))
        .unwrap();

    let root_style = StyleAttributes::new().with_foreground_color(css::BLACK);
    let composed = tree.composed_text(root, &root_style).unwrap();
    let runs = composed.runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(
        *runs[0].attributes,
        StyleAttributes::new()
            .with_foreground_color(css::BLACK)
            .with_font_weight(FontWeight::BOLD)
    );
    assert_eq!(
        *runs[1].attributes,
        StyleAttributes::new().with_foreground_color(css::RED)
    );
}

#[test]
fn compose_deep_chain_merges_top_down() {
    let mut tree = RichTextTree::new();
    let outer = tree.create_node(NodeKind::Span);
    let middle = tree.create_node(NodeKind::Span);
    let leaf = tree.create_node(NodeKind::text("deep"));
    tree.set_style(
        outer,
        StyleAttributes::new()
            .with_font_size(20.0)
            .with_text_decoration(TextDecoration::UNDERLINE),
    )
    .unwrap();
    tree.set_style(middle, StyleAttributes::new().with_font_size(12.0))
        .unwrap();
    tree.set_style(
        leaf,
        StyleAttributes::new().with_text_decoration(TextDecoration::NONE),
    )
    .unwrap();
    tree.set_children(middle, [Child::Node(leaf)]).unwrap();
    tree.set_children(outer, [Child::Node(middle)]).unwrap();

    let composed = tree.composed_text(outer, &base()).unwrap();
    let attrs = &composed.runs()[0].attributes;
    assert_eq!(attrs.font_size(), Some(12.0));
    assert_eq!(attrs.foreground_color(), Some(css::BLACK));
    assert_eq!(attrs.text_decoration(), Some(TextDecoration::NONE));
    assert_eq!(
        attrs.inherited_fields(tree.style(leaf).unwrap()),
        AttributeMask::FONT_SIZE.union(AttributeMask::FOREGROUND_COLOR)
    );
}

#[test]
fn compose_entity_sample() {
    let mut tree = RichTextTree::new();
    let sample = entity_paragraph(&mut tree).unwrap();
    let composed = tree.composed_text(sample.root, &base()).unwrap();
    assert_eq!(composed.as_str(), "This is entity in a paragraph.");
    let entity = composed.attributes_at(8).unwrap();
    assert_eq!(entity.font_weight(), Some(FontWeight::MEDIUM));
    assert_eq!(composed.coalesced_runs().count(), 3);
}

#[test]
fn compose_embedded_content_between_text() {
    let mut tree = RichTextTree::new();
    let root = tree.create_node(NodeKind::Span);
    let before = tree.create_node(NodeKind::text("see "));
    let after = tree.create_node(NodeKind::text(" here"));
    tree.set_children(
        root,
        [
            Child::Node(before),
            Child::Embedded(EmbeddedContent::new(42, 16.0, 16.0)),
            Child::Node(after),
        ],
    )
    .unwrap();

    let composed = tree.composed_text(root, &base()).unwrap();
    assert_eq!(composed.as_str(), "see \u{FFFC} here");
    let placeholder = composed.placeholders()[0];
    assert_eq!(placeholder.id, 42);
    assert_eq!(placeholder.index, 4);
    let run = &composed.runs()[1];
    assert_eq!(
        run.range.len(),
        OBJECT_REPLACEMENT_CHARACTER.len_utf8()
    );
}

#[test]
fn compose_empty_children() {
    let mut tree = RichTextTree::new();
    let (root, _) = span_of(&mut tree, &[]);
    let composed = tree.composed_text(root, &base()).unwrap();
    assert_eq!(composed.as_str(), "");
    assert!(composed.placeholders().is_empty());
}

#[test]
fn compose_uppercase_transform() {
    let mut tree = RichTextTree::new();
    let (root, _) = span_of(&mut tree, &["mixed ", "Case"]);
    tree.set_style(
        root,
        StyleAttributes::new().with_text_transform(TextTransform::Uppercase),
    )
    .unwrap();
    let composed = tree.composed_text(root, &base()).unwrap();
    assert_eq!(composed.as_str(), "MIXED CASE");
}

#[test]
fn compose_uncached_matches_composer() {
    let mut tree = RichTextTree::new();
    let (root, _) = span_of(&mut tree, &["one", "two"]);
    let direct = AttributedTextComposer::compose(&tree, root, &base()).unwrap();
    let cached = tree.composed_text(root, &base()).unwrap();
    assert_eq!(direct, *cached);
}
