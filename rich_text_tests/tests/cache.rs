// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use peniko::color::palette::css;
use proptest::prelude::*;
use rich_text::{Child, EmbeddedContent, NodeId, NodeKind, RichTextTree};
use rich_text_style::{FontWeight, StyleAttributes, TextTransform};

use crate::util::{base, span_of};

#[test]
fn cache_idempotent_reads_share_result() {
    let mut tree = RichTextTree::new();
    let (root, _) = span_of(&mut tree, &["a", "b", "c"]);

    let first = tree.composed_text(root, &base()).unwrap();
    let stats = tree.stats();
    assert_eq!(stats.compositions, 4);

    let second = tree.composed_text(root, &base()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(tree.stats().compositions, stats.compositions);
    assert_eq!(tree.stats().cache_hits, stats.cache_hits + 1);
}

#[test]
fn cache_reuses_untouched_siblings() {
    let mut tree = RichTextTree::new();
    let (root, leaves) = span_of(&mut tree, &["left", "right"]);
    tree.composed_text(root, &base()).unwrap();

    tree.set_style(leaves[0], StyleAttributes::new().with_foreground_color(css::RED))
        .unwrap();
    assert!(!tree.is_cache_valid(root));
    assert!(!tree.is_cache_valid(leaves[0]));
    assert!(tree.is_cache_valid(leaves[1]));

    let before = tree.stats();
    tree.composed_text(root, &base()).unwrap();
    let after = tree.stats();
    // Root and the edited leaf are recomposed; the sibling is a cache hit.
    assert_eq!(after.compositions - before.compositions, 2);
    assert_eq!(after.cache_hits - before.cache_hits, 1);
}

#[test]
fn cache_base_change_recomposes_subtree() {
    let mut tree = RichTextTree::new();
    let (root, leaves) = span_of(&mut tree, &["x"]);
    tree.composed_text(root, &base()).unwrap();

    let blue = base().with_foreground_color(css::BLUE);
    let composed = tree.composed_text(root, &blue).unwrap();
    assert_eq!(
        composed.runs()[0].attributes.foreground_color(),
        Some(css::BLUE)
    );
    // The leaf was recomposed beneath the new effective attributes.
    assert!(tree.is_cache_valid(leaves[0]));
    assert_eq!(tree.stats().compositions, 4);
}

#[test]
fn cache_deep_edit_bumps_every_ancestor() {
    let mut tree = RichTextTree::new();
    let mut chain = vec![tree.create_node(NodeKind::Span)];
    for depth in 0..5 {
        let node = tree.create_node(NodeKind::text(format!("{depth}")));
        tree.set_children(*chain.last().unwrap(), [Child::Node(node)])
            .unwrap();
        chain.push(node);
    }
    tree.composed_text(chain[0], &base()).unwrap();
    let revisions: Vec<u64> = chain.iter().map(|n| tree.revision(*n).unwrap()).collect();

    tree.set_text(chain[5], "edited").unwrap();
    for (node, before) in chain.iter().zip(revisions) {
        assert!(tree.revision(*node).unwrap() > before);
        assert!(!tree.is_cache_valid(*node));
    }
    assert_eq!(
        tree.composed_text(chain[0], &base()).unwrap().as_str(),
        "edited3210"
    );
}

#[derive(Clone, Debug)]
enum Op {
    Create(bool),
    Style(usize, u8),
    Text(usize, String),
    Children(usize, Vec<usize>),
    Embed(usize, u16),
    Destroy(usize),
    Read(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Create),
        (any::<usize>(), 0_u8..4).prop_map(|(node, style)| Op::Style(node, style)),
        (any::<usize>(), "[a-z ]{0,6}").prop_map(|(node, text)| Op::Text(node, text)),
        (
            any::<usize>(),
            proptest::collection::vec(any::<usize>(), 0..4)
        )
            .prop_map(|(node, children)| Op::Children(node, children)),
        (any::<usize>(), any::<u16>()).prop_map(|(node, id)| Op::Embed(node, id)),
        any::<usize>().prop_map(Op::Destroy),
        any::<usize>().prop_map(Op::Read),
    ]
}

fn style_choice(choice: u8) -> StyleAttributes {
    match choice {
        0 => StyleAttributes::new(),
        1 => StyleAttributes::new().with_font_weight(FontWeight::BOLD),
        2 => StyleAttributes::new().with_foreground_color(css::RED),
        _ => StyleAttributes::new()
            .with_font_size(20.0)
            .with_text_transform(TextTransform::Uppercase),
    }
}

fn apply(tree: &mut RichTextTree, nodes: &mut Vec<NodeId>, op: Op) {
    if let Op::Create(text) = op {
        let kind = if text {
            NodeKind::text("t")
        } else {
            NodeKind::Span
        };
        nodes.push(tree.create_node(kind));
        return;
    }
    if nodes.is_empty() {
        return;
    }
    let pick = |ix: usize| nodes[ix % nodes.len()];
    // Host contract violations (stale handles, cycles, duplicates) are expected here and must
    // leave the tree unchanged.
    let _ = match op {
        Op::Create(_) => Ok(()),
        Op::Style(node, style) => tree.set_style(pick(node), style_choice(style)),
        Op::Text(node, text) => tree.set_text(pick(node), text),
        Op::Children(node, children) => tree.set_children(
            pick(node),
            children.into_iter().map(|child| Child::Node(pick(child))),
        ),
        Op::Embed(node, id) => {
            let node = pick(node);
            match tree.children(node).map(<[Child]>::to_vec) {
                Ok(mut children) => {
                    children.push(Child::Embedded(EmbeddedContent::new(
                        u64::from(id),
                        8.0,
                        8.0,
                    )));
                    tree.set_children(node, children)
                }
                Err(err) => Err(err),
            }
        }
        Op::Destroy(node) => tree.destroy_node(pick(node)),
        Op::Read(node) => tree.composed_text(pick(node), &base()).map(|_| ()),
    };
}

proptest! {
    #[test]
    fn cache_matches_uncached_after_random_edits(
        ops in proptest::collection::vec(arb_op(), 1..40)
    ) {
        let mut tree = RichTextTree::new();
        let mut nodes = Vec::new();
        for op in ops {
            apply(&mut tree, &mut nodes, op);
            for &node in &nodes {
                if !tree.is_alive(node) {
                    continue;
                }
                let cached = tree.composed_text(node, &base()).unwrap();
                let uncached = tree.compose_uncached(node, &base()).unwrap();
                prop_assert_eq!(&*cached, &uncached);
            }
        }
    }
}
