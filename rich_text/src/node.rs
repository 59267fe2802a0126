// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use rich_text_style::StyleAttributes;

use crate::CompositionCache;

/// A handle to a node in a [`RichTextTree`](crate::RichTextTree).
///
/// Contains both a slot index and a generation counter so that stale handles can be detected
/// after a node is destroyed and its slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    /// Slot index into the tree's storage.
    pub(crate) idx: u32,
    /// Generation counter; must match the tree's generation for this slot.
    pub(crate) generation: u32,
}

impl NodeId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}@gen{})", self.idx, self.generation)
    }
}

/// What a node contributes to the composed text besides its children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    /// A styling container; only its children produce text.
    #[default]
    Span,
    /// A leaf carrying literal text, appended after any children.
    Text(Arc<str>),
}

impl NodeKind {
    /// Creates a text leaf.
    pub fn text(text: impl Into<Arc<str>>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the literal text, if this is a text leaf.
    pub fn literal_text(&self) -> Option<&str> {
        match self {
            Self::Span => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Non-text content embedded inline, such as an image or a nested view.
///
/// The content is measured externally; the composer only reserves a placeholder for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbeddedContent {
    /// Host-defined identity of the content.
    pub id: u64,
    /// Measured width in pixels.
    pub width: f32,
    /// Measured height in pixels.
    pub height: f32,
}

impl EmbeddedContent {
    /// Creates an embedded content reference.
    pub const fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// An entry in a node's ordered child sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Child {
    /// A nested rich text node.
    Node(NodeId),
    /// An opaque embedded content reference.
    Embedded(EmbeddedContent),
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<EmbeddedContent> for Child {
    fn from(content: EmbeddedContent) -> Self {
        Self::Embedded(content)
    }
}

/// Storage for a live node.
#[derive(Debug)]
pub(crate) struct RichTextNode {
    pub(crate) kind: NodeKind,
    pub(crate) style: StyleAttributes,
    pub(crate) children: Vec<Child>,
    pub(crate) parent: Option<u32>,
    /// Bumped whenever this node or any descendant changes.
    pub(crate) revision: u64,
    pub(crate) cache: CompositionCache,
}

impl RichTextNode {
    pub(crate) fn new(kind: NodeKind, revision: u64) -> Self {
        Self {
            kind,
            style: StyleAttributes::new(),
            children: Vec::new(),
            parent: None,
            revision,
            cache: CompositionCache::default(),
        }
    }

    pub(crate) fn child_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|child| match child {
            Child::Node(id) => Some(*id),
            Child::Embedded(_) => None,
        })
    }
}
