// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use rich_text_style::StyleAttributes;

use crate::{
    Child, LayoutConstraints, LayoutConstraintsView, LayoutError, LayoutEventSink, MountError,
    MountErrorKind, MountOutcome, NodeId, NodeKind, PendingLayout, RichTextTree, TextLayout,
    TextLayoutEngine, TreeError,
};

/// A node tree together with the layout views of its top-level nodes.
///
/// This is the surface a host UI tree drives: it forwards node lifecycle and property updates
/// to the [`RichTextTree`] and keeps one [`LayoutConstraintsView`] per top-level node that
/// renders text. Views disappear with their node, and when their node is attached beneath
/// another node.
#[derive(Debug, Default)]
pub struct RichTextHost {
    tree: RichTextTree,
    views: HashMap<NodeId, LayoutConstraintsView>,
}

impl RichTextHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node tree.
    pub fn tree(&self) -> &RichTextTree {
        &self.tree
    }

    /// Creates a detached node.
    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        self.tree.create_node(kind)
    }

    /// Destroys a node and its subtree, dropping any views rooted in it.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.tree.destroy_node(id)?;
        let tree = &self.tree;
        self.views.retain(|root, _| tree.is_alive(*root));
        Ok(())
    }

    /// Replaces the local style of a node.
    pub fn update_style(&mut self, id: NodeId, style: StyleAttributes) -> Result<(), TreeError> {
        self.tree.set_style(id, style)
    }

    /// Replaces the literal text of a node.
    pub fn update_text(&mut self, id: NodeId, text: impl Into<Arc<str>>) -> Result<(), TreeError> {
        self.tree.set_text(id, text)
    }

    /// Replaces the children of a node.
    ///
    /// Views of nodes that become children are dropped.
    pub fn update_children(
        &mut self,
        id: NodeId,
        children: impl IntoIterator<Item = Child>,
    ) -> Result<(), TreeError> {
        self.tree.set_children(id, children)?;
        let tree = &self.tree;
        self.views.retain(|root, _| {
            let top_level = matches!(tree.parent(*root), Ok(None));
            if !top_level {
                log::debug!("{root:?} is no longer top-level; dropping its view");
            }
            top_level
        });
        Ok(())
    }

    /// Attaches a layout view to a top-level node, replacing any existing one.
    pub fn attach_view(
        &mut self,
        root: NodeId,
        constraints: LayoutConstraints,
    ) -> Result<&mut LayoutConstraintsView, MountError> {
        if self.tree.parent(root)?.is_some() {
            return Err(MountError::new(MountErrorKind::NotTopLevel, root));
        }
        self.views
            .insert(root, LayoutConstraintsView::new(root, constraints));
        self.view_or_err(root)
    }

    /// Returns the view of a top-level node.
    pub fn view(&self, root: NodeId) -> Option<&LayoutConstraintsView> {
        self.views.get(&root)
    }

    /// Returns the view of a top-level node for changing its settings.
    pub fn view_mut(&mut self, root: NodeId) -> Option<&mut LayoutConstraintsView> {
        self.views.get_mut(&root)
    }

    /// Replaces the constraints of a top-level node's view.
    pub fn set_constraints(
        &mut self,
        root: NodeId,
        constraints: LayoutConstraints,
    ) -> Result<(), MountError> {
        self.view_or_err(root)?.set_constraints(constraints);
        Ok(())
    }

    /// Runs a synchronous mounting pass for one view.
    pub fn request_mount<E, S>(
        &mut self,
        root: NodeId,
        engine: &mut E,
        events: &mut S,
    ) -> Result<MountOutcome, MountError>
    where
        E: TextLayoutEngine + ?Sized,
        S: LayoutEventSink + ?Sized,
    {
        let view = self
            .views
            .get_mut(&root)
            .ok_or(MountError::new(MountErrorKind::NoView, root))?;
        view.mount(&mut self.tree, engine, events)
    }

    /// Runs a synchronous mounting pass for every view, in node order.
    pub fn perform_mounting<E, S>(
        &mut self,
        engine: &mut E,
        events: &mut S,
    ) -> Vec<(NodeId, Result<MountOutcome, MountError>)>
    where
        E: TextLayoutEngine + ?Sized,
        S: LayoutEventSink + ?Sized,
    {
        let mut roots: Vec<NodeId> = self.views.keys().copied().collect();
        roots.sort_unstable();
        let mut outcomes = Vec::with_capacity(roots.len());
        for root in roots {
            let outcome = self.request_mount(root, engine, events);
            if let Err(err) = &outcome {
                log::warn!("mounting {root:?} failed: {err}");
            }
            outcomes.push((root, outcome));
        }
        outcomes
    }

    /// Starts an asynchronous mounting pass for one view.
    pub fn begin_mount(&mut self, root: NodeId) -> Result<Option<PendingLayout>, MountError> {
        let view = self
            .views
            .get_mut(&root)
            .ok_or(MountError::new(MountErrorKind::NoView, root))?;
        view.begin_mount(&mut self.tree)
    }

    /// Completes an asynchronous mounting pass.
    ///
    /// Results for nodes whose view is gone are discarded.
    pub fn complete_mount<S>(
        &mut self,
        pending: PendingLayout,
        result: Result<TextLayout, LayoutError>,
        events: &mut S,
    ) -> Result<MountOutcome, MountError>
    where
        S: LayoutEventSink + ?Sized,
    {
        let Some(view) = self.views.get_mut(&pending.node()) else {
            log::debug!("{:?} has no view; discarding layout", pending.node());
            return Ok(MountOutcome::Discarded);
        };
        view.complete_mount(&self.tree, pending, result, events)
    }

    /// Abandons an asynchronous mounting pass, for example when its worker was cancelled.
    ///
    /// Requests for nodes whose view is gone need no cancelling.
    pub fn cancel_mount(&mut self, pending: PendingLayout) -> Result<(), MountError> {
        match self.views.get_mut(&pending.node()) {
            Some(view) => view.cancel_mount(pending),
            None => Ok(()),
        }
    }

    fn view_or_err(&mut self, root: NodeId) -> Result<&mut LayoutConstraintsView, MountError> {
        self.views
            .get_mut(&root)
            .ok_or(MountError::new(MountErrorKind::NoView, root))
    }
}
