// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text::{LayoutEventSink, NodeId, TextLayoutEvent};

/// An event sink that keeps every layout-result notification it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingEventSink {
    events: Vec<(NodeId, TextLayoutEvent)>,
}

impl RecordingEventSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the received notifications in order.
    pub fn events(&self) -> &[(NodeId, TextLayoutEvent)] {
        &self.events
    }

    /// Returns the notifications received for `node`.
    pub fn events_for(&self, node: NodeId) -> impl Iterator<Item = &TextLayoutEvent> + '_ {
        self.events
            .iter()
            .filter(move |(id, _)| *id == node)
            .map(|(_, event)| event)
    }

    /// Returns the most recent notification.
    pub fn last(&self) -> Option<&TextLayoutEvent> {
        self.events.last().map(|(_, event)| event)
    }

    /// Returns the number of received notifications.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was received.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes and returns all received notifications.
    pub fn take(&mut self) -> Vec<(NodeId, TextLayoutEvent)> {
        std::mem::take(&mut self.events)
    }
}

impl LayoutEventSink for RecordingEventSink {
    fn emit_layout_result(&mut self, node: NodeId, event: &TextLayoutEvent) {
        self.events.push((node, event.clone()));
    }
}
