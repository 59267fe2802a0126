// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::palette::css;
use rich_text::{Child, NodeId, NodeKind, RichTextTree};
use rich_text_dev::FixedAdvanceEngine;
use rich_text_style::StyleAttributes;

/// The attributes every test composes beneath.
pub(crate) fn base() -> StyleAttributes {
    StyleAttributes::new()
        .with_foreground_color(css::BLACK)
        .with_font_size(10.0)
}

/// Every character is 5px wide and lines are 10px tall at the base font size.
pub(crate) fn engine() -> FixedAdvanceEngine {
    FixedAdvanceEngine {
        advance_ratio: 0.5,
        line_height_ratio: 1.0,
    }
}

/// Creates a span whose children are text leaves with the given contents.
pub(crate) fn span_of(tree: &mut RichTextTree, texts: &[&str]) -> (NodeId, Vec<NodeId>) {
    let root = tree.create_node(NodeKind::Span);
    let leaves: Vec<NodeId> = texts
        .iter()
        .map(|text| tree.create_node(NodeKind::text(*text)))
        .collect();
    tree.set_children(root, leaves.iter().copied().map(Child::Node))
        .unwrap();
    (root, leaves)
}
