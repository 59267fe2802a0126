// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::kurbo::Size;

use crate::{LineMetrics, NodeId, TextLayout};

/// Payload of the layout-result notification.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayoutEvent {
    /// Number of visible lines.
    pub line_count: usize,
    /// Bounding size of the visible lines.
    pub measured_size: Size,
    /// Applied font scale.
    pub used_font_scale: f32,
    /// Per-line metrics.
    pub lines: Vec<LineMetrics>,
    /// Whether any content was elided.
    pub truncated: bool,
    /// Set when the engine failed and the payload is empty.
    pub degraded: bool,
}

impl TextLayoutEvent {
    pub(crate) fn from_layout(layout: &TextLayout) -> Self {
        Self {
            line_count: layout.line_count(),
            measured_size: layout.measured_size,
            used_font_scale: layout.used_font_scale,
            lines: layout.lines.clone(),
            truncated: layout.truncated,
            degraded: false,
        }
    }

    pub(crate) fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::from_layout(&TextLayout::default())
        }
    }
}

/// Receives layout-result notifications for opted-in views.
pub trait LayoutEventSink {
    /// Called at most once per completed mounting pass of `node`.
    fn emit_layout_result(&mut self, node: NodeId, event: &TextLayoutEvent);
}

impl<F: FnMut(NodeId, &TextLayoutEvent)> LayoutEventSink for F {
    fn emit_layout_result(&mut self, node: NodeId, event: &TextLayoutEvent) {
        self(node, event);
    }
}
