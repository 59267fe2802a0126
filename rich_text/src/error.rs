// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::NodeId;

/// Error returned by [`RichTextTree`](crate::RichTextTree) operations.
///
/// Composition itself never fails; these errors report host contract violations such as using a
/// handle after its node was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeError {
    /// The non-exhaustive category describing this error.
    kind: TreeErrorKind,

    /// The node the failing operation was about.
    node: NodeId,
}

impl TreeError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> TreeErrorKind {
        self.kind
    }

    /// The node the failing operation was about.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub(crate) fn stale(node: NodeId) -> Self {
        Self {
            kind: TreeErrorKind::StaleNode,
            node,
        }
    }

    pub(crate) fn cycle(node: NodeId) -> Self {
        Self {
            kind: TreeErrorKind::Cycle,
            node,
        }
    }

    pub(crate) fn duplicate_child(node: NodeId) -> Self {
        Self {
            kind: TreeErrorKind::DuplicateChild,
            node,
        }
    }
}

impl core::fmt::Display for TreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            TreeErrorKind::StaleNode => write!(f, "{:?} does not refer to a live node", self.node),
            TreeErrorKind::Cycle => {
                write!(f, "attaching {:?} would make it its own ancestor", self.node)
            }
            TreeErrorKind::DuplicateChild => {
                write!(f, "{:?} appears more than once in a child list", self.node)
            }
        }
    }
}

impl core::error::Error for TreeError {}

/// The non-exhaustive category of a [`TreeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeErrorKind {
    /// The handle's node was destroyed (or never existed in this tree).
    StaleNode,

    /// The requested child is the parent itself or one of its ancestors.
    Cycle,

    /// The same node was listed twice in one child sequence.
    DuplicateChild,
}

/// Error returned by the mounting API of [`LayoutConstraintsView`](crate::LayoutConstraintsView).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountError {
    /// The non-exhaustive category describing this error.
    kind: MountErrorKind,

    /// The root node of the view.
    node: NodeId,
}

impl MountError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> MountErrorKind {
        self.kind
    }

    /// The root node of the view.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub(crate) fn new(kind: MountErrorKind, node: NodeId) -> Self {
        Self { kind, node }
    }
}

impl From<TreeError> for MountError {
    fn from(err: TreeError) -> Self {
        Self::new(MountErrorKind::StaleNode, err.node())
    }
}

impl core::fmt::Display for MountError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            MountErrorKind::StaleNode => {
                write!(f, "cannot mount {:?}: node is not alive", self.node)
            }
            MountErrorKind::NoView => write!(f, "{:?} has no layout view", self.node),
            MountErrorKind::NotTopLevel => {
                write!(f, "{:?} has a parent and cannot own a layout view", self.node)
            }
            MountErrorKind::LayoutInFlight => {
                write!(f, "a layout request for {:?} is already in flight", self.node)
            }
            MountErrorKind::TicketMismatch => write!(
                f,
                "layout result for {:?} does not match the request in flight",
                self.node
            ),
        }
    }
}

impl core::error::Error for MountError {}

/// The non-exhaustive category of a [`MountError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MountErrorKind {
    /// The view's root node is not alive.
    StaleNode,

    /// No layout view is registered for the node.
    NoView,

    /// Layout views can only be attached to nodes without a parent.
    NotTopLevel,

    /// A layout request was started and has not completed yet.
    LayoutInFlight,

    /// The completed request is not the one currently in flight.
    TicketMismatch,
}
