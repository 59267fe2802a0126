// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use rich_text_style::StyleAttributes;

use crate::{Child, ComposedText, NodeId, NodeKind, RichTextTree, TreeError};

/// Flattens a rich text subtree into a single [`ComposedText`].
///
/// For each node, the effective attributes are `merge(inherited, node.style)`. Children are
/// visited in document order: nested nodes are composed with the effective attributes as their
/// inherited value, and embedded content becomes one [`OBJECT_REPLACEMENT_CHARACTER`] tagged
/// with the effective attributes. The literal text of a [`NodeKind::Text`] node comes last,
/// with the effective text transform applied.
///
/// This is the uncached path; [`RichTextTree::composed_text`] memoizes the same computation.
/// Both recurse once per level of span nesting.
///
/// [`OBJECT_REPLACEMENT_CHARACTER`]: crate::OBJECT_REPLACEMENT_CHARACTER
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributedTextComposer;

impl AttributedTextComposer {
    /// Composes the subtree rooted at `node` beneath `inherited` attributes.
    pub fn compose(
        tree: &RichTextTree,
        node: NodeId,
        inherited: &StyleAttributes,
    ) -> Result<ComposedText, TreeError> {
        tree.validate(node)?;
        Ok(compose_subtree(tree, node, inherited))
    }
}

fn compose_subtree(tree: &RichTextTree, node: NodeId, inherited: &StyleAttributes) -> ComposedText {
    let Some(data) = tree.node_at(node.idx) else {
        return ComposedText::new();
    };
    compose_parts(
        &data.kind,
        &data.style,
        &data.children,
        inherited,
        |child, effective| Arc::new(compose_subtree(tree, child, effective)),
    )
}

/// Composes a single node given a way to obtain the composition of its nested children.
pub(crate) fn compose_parts<F>(
    kind: &NodeKind,
    style: &StyleAttributes,
    children: &[Child],
    inherited: &StyleAttributes,
    mut nested: F,
) -> ComposedText
where
    F: FnMut(NodeId, &StyleAttributes) -> Arc<ComposedText>,
{
    let effective = Arc::new(inherited.merged_with(style));
    let mut composed = ComposedText::new();
    for child in children {
        match *child {
            Child::Node(id) => composed.append(&nested(id, &effective)),
            Child::Embedded(content) => {
                composed.push_placeholder(content.id, content.width, content.height, &effective);
            }
        }
    }
    if let Some(text) = kind.literal_text() {
        let transform = effective.text_transform().unwrap_or_default();
        composed.push_text(&transform.apply(text), &effective);
    }
    composed
}
