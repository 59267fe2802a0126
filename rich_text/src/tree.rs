// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational node storage with parent links and eager invalidation.

use alloc::sync::Arc;
use alloc::vec::Vec;

use rich_text_style::StyleAttributes;
use smallvec::SmallVec;

use crate::composer::compose_parts;
use crate::node::RichTextNode;
use crate::{
    AttributedTextComposer, Child, ComposedText, CompositionCache, CompositionStats, NodeId,
    NodeKind, TreeError,
};

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<RichTextNode>,
}

/// Storage for every rich text node owned by a host.
///
/// Nodes are addressed by [`NodeId`] handles. Destroyed nodes are recycled through a free list,
/// and generation counters make stale handles fail with [`TreeErrorKind::StaleNode`].
///
/// Every mutation bumps the revision of the mutated node and all of its ancestors and drops
/// their cached compositions, so the next read recomposes exactly the affected path while
/// reusing the caches of untouched siblings.
///
/// [`TreeErrorKind::StaleNode`]: crate::TreeErrorKind::StaleNode
#[derive(Debug, Default)]
pub struct RichTextTree {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    live: usize,
    clock: u64,
    stats: CompositionStats,
}

impl RichTextTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Allocation --

    /// Creates a detached node and returns its handle.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let revision = self.tick();
        let node = RichTextNode::new(kind, revision);
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize].node = Some(node);
            idx
        } else {
            let idx = u32::try_from(self.slots.len()).expect("node count should fit in u32");
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            idx
        };
        self.live += 1;
        NodeId {
            idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    /// Destroys a node and its whole subtree.
    ///
    /// The node is detached from its parent first, which invalidates the former ancestors.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.validate(id)?;
        if let Some(parent) = self.node_at(id.idx).and_then(|node| node.parent) {
            if let Some(parent_node) = self.node_at_mut(parent) {
                parent_node.children.retain(|child| *child != Child::Node(id));
            }
            self.invalidate_from(parent);
        }

        let mut stack: SmallVec<[u32; 16]> = SmallVec::new();
        stack.push(id.idx);
        let mut destroyed = 0_usize;
        while let Some(idx) = stack.pop() {
            let slot = &mut self.slots[idx as usize];
            let Some(node) = slot.node.take() else {
                continue;
            };
            stack.extend(node.child_nodes().map(|child| child.idx));
            // Bump the generation so old handles immediately fail validation.
            slot.generation = slot.generation.wrapping_add(1);
            self.free_list.push(idx);
            destroyed += 1;
        }
        self.live -= destroyed;
        log::debug!("destroyed {id:?} and {} descendant(s)", destroyed - 1);
        Ok(())
    }

    /// Returns whether the handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx as usize)
            .is_some_and(|slot| slot.generation == id.generation && slot.node.is_some())
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the tree holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    // -- Queries --

    /// Returns the parent of a node, or `None` for a root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        let parent = self.get(id)?.parent;
        Ok(parent.map(|idx| self.id_at(idx)))
    }

    /// Returns the root of the tree containing `id`.
    pub fn root_of(&self, id: NodeId) -> Result<NodeId, TreeError> {
        let mut idx = id.idx;
        let mut parent = self.get(id)?.parent;
        while let Some(p) = parent {
            idx = p;
            parent = self.node_at(p).and_then(|node| node.parent);
        }
        Ok(self.id_at(idx))
    }

    /// Returns the ordered children of a node.
    pub fn children(&self, id: NodeId) -> Result<&[Child], TreeError> {
        Ok(&self.get(id)?.children)
    }

    /// Returns the local (non-inherited) style of a node.
    pub fn style(&self, id: NodeId) -> Result<&StyleAttributes, TreeError> {
        Ok(&self.get(id)?.style)
    }

    /// Returns the kind of a node.
    pub fn kind(&self, id: NodeId) -> Result<&NodeKind, TreeError> {
        Ok(&self.get(id)?.kind)
    }

    /// Returns the revision of a node.
    ///
    /// The revision changes whenever the node or any of its descendants is mutated.
    pub fn revision(&self, id: NodeId) -> Result<u64, TreeError> {
        Ok(self.get(id)?.revision)
    }

    /// Returns `true` if the node holds a cached composition.
    ///
    /// Returns `false` for stale handles.
    #[must_use]
    pub fn is_cache_valid(&self, id: NodeId) -> bool {
        self.cache(id).is_ok_and(CompositionCache::is_valid)
    }

    /// Returns the composition cache of a node.
    pub fn cache(&self, id: NodeId) -> Result<&CompositionCache, TreeError> {
        Ok(&self.get(id)?.cache)
    }

    /// Returns composition counters accumulated since the tree was created.
    #[must_use]
    pub fn stats(&self) -> CompositionStats {
        self.stats
    }

    // -- Mutation --

    /// Replaces the local style of a node.
    pub fn set_style(&mut self, id: NodeId, style: StyleAttributes) -> Result<(), TreeError> {
        self.get_mut(id)?.style = style;
        self.invalidate_from(id.idx);
        Ok(())
    }

    /// Replaces the literal text of a node, turning it into a [`NodeKind::Text`] leaf.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<Arc<str>>) -> Result<(), TreeError> {
        self.get_mut(id)?.kind = NodeKind::Text(text.into());
        self.invalidate_from(id.idx);
        Ok(())
    }

    /// Replaces the ordered child sequence of a node.
    ///
    /// Children that are no longer listed become detached roots and have their cached
    /// compositions released. Listed nodes that are attached elsewhere are moved, which
    /// invalidates their former ancestors.
    ///
    /// The sequence is validated before anything changes: every listed node must be alive,
    /// must not be `id` or one of its ancestors, and must appear at most once.
    pub fn set_children(
        &mut self,
        id: NodeId,
        children: impl IntoIterator<Item = Child>,
    ) -> Result<(), TreeError> {
        self.validate(id)?;
        let children: Vec<Child> = children.into_iter().collect();

        let mut listed: SmallVec<[u32; 16]> = SmallVec::new();
        for child in &children {
            let Child::Node(child) = *child else {
                continue;
            };
            self.validate(child)?;
            if child == id || self.is_ancestor(child.idx, id.idx) {
                return Err(TreeError::cycle(child));
            }
            listed.push(child.idx);
        }
        listed.sort_unstable();
        if let Some(pair) = listed.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(TreeError::duplicate_child(self.id_at(pair[0])));
        }

        // Detach removed children.
        let previous: SmallVec<[u32; 16]> = self
            .get(id)?
            .child_nodes()
            .map(|child| child.idx)
            .filter(|idx| listed.binary_search(idx).is_err())
            .collect();
        for idx in previous {
            if let Some(node) = self.node_at_mut(idx) {
                node.parent = None;
            }
            self.release_subtree_caches(idx);
        }

        // Move children attached elsewhere.
        for &idx in &listed {
            let old_parent = self.node_at(idx).and_then(|node| node.parent);
            match old_parent {
                Some(old) if old == id.idx => {}
                Some(old) => {
                    let moved = Child::Node(self.id_at(idx));
                    if let Some(old_node) = self.node_at_mut(old) {
                        old_node.children.retain(|child| *child != moved);
                    }
                    self.invalidate_from(old);
                }
                None => {}
            }
            if let Some(node) = self.node_at_mut(idx) {
                node.parent = Some(id.idx);
            }
        }

        self.get_mut(id)?.children = children;
        self.invalidate_from(id.idx);
        Ok(())
    }

    // -- Composition --

    /// Returns the composed text of the subtree rooted at `id` beneath `base` attributes.
    ///
    /// A cached result is returned when the node's revision and `base` match the inputs it was
    /// computed from; otherwise the node is recomposed, reusing every still-valid descendant
    /// cache, and the result is stored.
    ///
    /// Composition recurses once per level of span nesting, so nesting depth is bounded by the
    /// stack of the calling thread.
    pub fn composed_text(
        &mut self,
        id: NodeId,
        base: &StyleAttributes,
    ) -> Result<Arc<ComposedText>, TreeError> {
        self.validate(id)?;
        Ok(self.compose_cached(id, base))
    }

    /// Composes the subtree rooted at `id` from scratch, ignoring and not updating caches.
    pub fn compose_uncached(
        &self,
        id: NodeId,
        base: &StyleAttributes,
    ) -> Result<ComposedText, TreeError> {
        AttributedTextComposer::compose(self, id, base)
    }

    fn compose_cached(&mut self, id: NodeId, base: &StyleAttributes) -> Arc<ComposedText> {
        let Some(node) = self.node_at(id.idx) else {
            return Arc::default();
        };
        if let Some(hit) = node.cache.lookup(base, node.revision).cloned() {
            log::trace!("composition cache hit for {id:?}");
            self.stats.cache_hits += 1;
            return hit;
        }
        log::trace!("composition cache miss for {id:?}");

        let revision = node.revision;
        let kind = node.kind.clone();
        let style = node.style.clone();
        let children = node.children.clone();
        let composed = Arc::new(compose_parts(
            &kind,
            &style,
            &children,
            base,
            |child, effective| self.compose_cached(child, effective),
        ));

        self.stats.compositions += 1;
        if let Some(node) = self.node_at_mut(id.idx) {
            node.cache.store(base.clone(), revision, composed.clone());
        }
        composed
    }

    // -- Internals --

    pub(crate) fn validate(&self, id: NodeId) -> Result<(), TreeError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(TreeError::stale(id))
        }
    }

    fn get(&self, id: NodeId) -> Result<&RichTextNode, TreeError> {
        self.slots
            .get(id.idx as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(TreeError::stale(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut RichTextNode, TreeError> {
        self.slots
            .get_mut(id.idx as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(TreeError::stale(id))
    }

    pub(crate) fn node_at(&self, idx: u32) -> Option<&RichTextNode> {
        self.slots.get(idx as usize)?.node.as_ref()
    }

    fn node_at_mut(&mut self, idx: u32) -> Option<&mut RichTextNode> {
        self.slots.get_mut(idx as usize)?.node.as_mut()
    }

    fn id_at(&self, idx: u32) -> NodeId {
        NodeId {
            idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Returns `true` if `candidate` is `idx` or one of its ancestors.
    fn is_ancestor(&self, candidate: u32, idx: u32) -> bool {
        let mut current = Some(idx);
        while let Some(i) = current {
            if i == candidate {
                return true;
            }
            current = self.node_at(i).and_then(|node| node.parent);
        }
        false
    }

    /// Bumps the revision and drops the cache of `idx` and every ancestor.
    fn invalidate_from(&mut self, idx: u32) {
        let revision = self.tick();
        let mut current = Some(idx);
        let mut depth = 0_usize;
        while let Some(i) = current {
            let Some(node) = self.node_at_mut(i) else {
                break;
            };
            node.revision = revision;
            node.cache.invalidate();
            current = node.parent;
            depth += 1;
        }
        log::debug!("invalidated slot {idx} and {} ancestor(s)", depth.saturating_sub(1));
    }

    fn release_subtree_caches(&mut self, idx: u32) {
        let mut stack: SmallVec<[u32; 16]> = SmallVec::new();
        stack.push(idx);
        while let Some(i) = stack.pop() {
            if let Some(node) = self.node_at_mut(i) {
                node.cache.invalidate();
                stack.extend(node.child_nodes().map(|child| child.idx));
            }
        }
    }
}
