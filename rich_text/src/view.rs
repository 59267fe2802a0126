// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constraints and the mounting state machine of a top-level rich text node.

use alloc::sync::Arc;

use rich_text_style::StyleAttributes;

use crate::{
    ComposedText, LayoutConstraints, LayoutError, LayoutEventSink, LayoutRequest,
    LineBreakMode, MountError, MountErrorKind, NodeId, RichTextTree, TextLayout,
    TextLayoutEngine, TextLayoutEvent,
};

/// Whether a view's last layout still reflects its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountState {
    /// The stored layout matches the current subtree and constraints.
    Clean,
    /// The subtree or the constraints changed since the last completed layout.
    Dirty,
}

/// What a mounting pass did.
#[derive(Clone, Debug, PartialEq)]
pub enum MountOutcome {
    /// The view was clean; nothing was submitted.
    Skipped,
    /// A layout was stored and the view is clean.
    Completed,
    /// The engine failed; an empty layout was stored and the view is clean.
    Degraded(LayoutError),
    /// The node was destroyed while the request was in flight.
    Discarded,
    /// The subtree or constraints changed while the request was in flight; the view stays dirty.
    Superseded,
}

/// A layout request that has been started and not yet completed.
///
/// Owns a shared reference to the composed text so the layout can run elsewhere, for example
/// on a worker thread, while the tree keeps being edited.
#[derive(Clone, Debug)]
pub struct PendingLayout {
    node: NodeId,
    ticket: u64,
    revision: u64,
    epoch: u64,
    text: Arc<ComposedText>,
    constraints: LayoutConstraints,
}

impl PendingLayout {
    /// Returns the root node this request lays out.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the composed text to lay out.
    pub fn text(&self) -> &Arc<ComposedText> {
        &self.text
    }

    /// Returns the constraints the request was started with.
    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    /// Builds the request to hand to a [`TextLayoutEngine`].
    pub fn request(&self) -> LayoutRequest<'_> {
        LayoutRequest {
            text: &self.text,
            max_lines: self.constraints.max_lines(),
            line_break_mode: self.constraints.line_break_mode(),
            auto_shrink: self.constraints.adjusts_font_size_to_fit(),
            minimum_font_scale: self.constraints.effective_minimum_font_scale(),
            max_width: self.constraints.max_width(),
            max_height: self.constraints.max_height(),
        }
    }
}

/// The request handed out by the last `begin_mount` and the inputs it was started from.
#[derive(Clone, Copy, Debug)]
struct InFlight {
    ticket: u64,
    revision: u64,
    epoch: u64,
}

/// Rendering constraints and layout state of a top-level rich text node.
///
/// The view is [`MountState::Dirty`] whenever the root's revision differs from the one that was
/// last laid out, or any constraint changed since. A mounting pass on a dirty view composes the
/// subtree, submits it to a [`TextLayoutEngine`], stores the result and notifies the event sink
/// when [`emits_layout_events`](Self::emits_layout_events) is set. A mounting pass on a clean
/// view does nothing.
#[derive(Clone, Debug)]
pub struct LayoutConstraintsView {
    root: NodeId,
    constraints: LayoutConstraints,
    base_attributes: StyleAttributes,
    emits_layout_events: bool,
    /// Bumped whenever a setting changes the layout inputs.
    epoch: u64,
    mounted: Option<(u64, u64)>,
    next_ticket: u64,
    in_flight: Option<InFlight>,
    composed: Option<Arc<ComposedText>>,
    layout: Option<TextLayout>,
}

impl LayoutConstraintsView {
    /// Creates a dirty view for the top-level node `root`.
    pub fn new(root: NodeId, constraints: LayoutConstraints) -> Self {
        Self {
            root,
            constraints,
            base_attributes: StyleAttributes::new(),
            emits_layout_events: false,
            epoch: 0,
            mounted: None,
            next_ticket: 0,
            in_flight: None,
            composed: None,
            layout: None,
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the current constraints.
    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    /// Returns the attributes the root's style is merged onto.
    pub fn base_attributes(&self) -> &StyleAttributes {
        &self.base_attributes
    }

    /// Returns `true` if completed passes notify the event sink.
    pub fn emits_layout_events(&self) -> bool {
        self.emits_layout_events
    }

    /// Returns the last stored layout.
    pub fn layout(&self) -> Option<&TextLayout> {
        self.layout.as_ref()
    }

    /// Returns the composed text the last stored layout was computed from.
    pub fn composed_text(&self) -> Option<&Arc<ComposedText>> {
        self.composed.as_ref()
    }

    /// Returns the font scale of the last stored layout, or `1` if there is none.
    pub fn used_font_scale(&self) -> f32 {
        self.layout.as_ref().map_or(1.0, |layout| layout.used_font_scale)
    }

    /// Returns `true` while a request started by [`begin_mount`](Self::begin_mount) is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the mounting state against the current contents of `tree`.
    ///
    /// A view whose root is no longer alive is reported dirty.
    pub fn state(&self, tree: &RichTextTree) -> MountState {
        match (self.mounted, tree.revision(self.root)) {
            (Some((revision, epoch)), Ok(current)) if revision == current && epoch == self.epoch => {
                MountState::Clean
            }
            _ => MountState::Dirty,
        }
    }

    // -- Settings --

    /// Replaces all constraints.
    pub fn set_constraints(&mut self, constraints: LayoutConstraints) {
        if self.constraints != constraints {
            self.constraints = constraints;
            self.touch();
        }
    }

    /// Sets the maximum number of lines; `0` means unlimited.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.set_constraints(self.constraints.with_max_lines(max_lines));
    }

    /// Sets the line break mode.
    pub fn set_line_break_mode(&mut self, mode: LineBreakMode) {
        self.set_constraints(self.constraints.with_line_break_mode(mode));
    }

    /// Enables or disables auto-shrink.
    pub fn set_adjusts_font_size_to_fit(&mut self, enabled: bool) {
        self.set_constraints(self.constraints.with_adjusts_font_size_to_fit(enabled));
    }

    /// Sets the minimum font scale for auto-shrink.
    pub fn set_minimum_font_scale(&mut self, scale: f32) {
        self.set_constraints(self.constraints.with_minimum_font_scale(scale));
    }

    /// Sets the available size.
    pub fn set_available_size(&mut self, max_width: Option<f32>, max_height: Option<f32>) {
        self.set_constraints(
            self.constraints
                .with_max_width(max_width)
                .with_max_height(max_height),
        );
    }

    /// Sets the attributes the root's style is merged onto.
    pub fn set_base_attributes(&mut self, base: StyleAttributes) {
        if self.base_attributes != base {
            self.base_attributes = base;
            self.touch();
        }
    }

    /// Opts in or out of layout-result notifications.
    pub fn set_emits_layout_events(&mut self, enabled: bool) {
        self.emits_layout_events = enabled;
    }

    fn touch(&mut self) {
        self.epoch += 1;
        log::debug!("layout constraints of {:?} changed", self.root);
    }

    // -- Mounting --

    /// Runs a full mounting pass synchronously.
    pub fn mount<E, S>(
        &mut self,
        tree: &mut RichTextTree,
        engine: &mut E,
        events: &mut S,
    ) -> Result<MountOutcome, MountError>
    where
        E: TextLayoutEngine + ?Sized,
        S: LayoutEventSink + ?Sized,
    {
        let Some(pending) = self.begin_mount(tree)? else {
            return Ok(MountOutcome::Skipped);
        };
        let result = engine.layout(&pending.request());
        self.complete_mount(tree, pending, result, events)
    }

    /// Starts a mounting pass.
    ///
    /// Returns `Ok(None)` if the view is clean. Otherwise composes the subtree and returns the
    /// pending request, which must be handed back to [`complete_mount`](Self::complete_mount)
    /// or [`cancel_mount`](Self::cancel_mount).
    ///
    /// Fails with [`MountErrorKind::LayoutInFlight`] while a request started from the same
    /// inputs is pending. Once the subtree or the constraints have changed, a new request
    /// replaces the pending one, whose result is then rejected with
    /// [`MountErrorKind::TicketMismatch`].
    pub fn begin_mount(
        &mut self,
        tree: &mut RichTextTree,
    ) -> Result<Option<PendingLayout>, MountError> {
        let revision = tree.revision(self.root)?;
        if let Some(in_flight) = self.in_flight {
            if in_flight.revision == revision && in_flight.epoch == self.epoch {
                return Err(MountError::new(MountErrorKind::LayoutInFlight, self.root));
            }
            log::debug!(
                "inputs of {:?} changed; replacing layout #{}",
                self.root,
                in_flight.ticket
            );
            self.in_flight = None;
        }
        if self.state(tree) == MountState::Clean {
            log::trace!("{:?} is clean; skipping layout", self.root);
            return Ok(None);
        }

        let text = tree.composed_text(self.root, &self.base_attributes)?;
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(InFlight {
            ticket,
            revision,
            epoch: self.epoch,
        });
        log::debug!("submitting layout #{ticket} for {:?}", self.root);
        Ok(Some(PendingLayout {
            node: self.root,
            ticket,
            revision,
            epoch: self.epoch,
            text,
            constraints: self.constraints,
        }))
    }

    /// Applies the result of a request started by [`begin_mount`](Self::begin_mount).
    ///
    /// Results for a destroyed root are dropped, and results computed from stale inputs are
    /// dropped while the view stays dirty. Engine failures are not retried: an empty layout is
    /// stored, the view becomes clean, and a degraded notification is emitted.
    pub fn complete_mount<S>(
        &mut self,
        tree: &RichTextTree,
        pending: PendingLayout,
        result: Result<TextLayout, LayoutError>,
        events: &mut S,
    ) -> Result<MountOutcome, MountError>
    where
        S: LayoutEventSink + ?Sized,
    {
        self.take_in_flight(&pending)?;

        let Ok(current) = tree.revision(self.root) else {
            log::debug!("{:?} was destroyed; discarding layout", self.root);
            return Ok(MountOutcome::Discarded);
        };
        if current != pending.revision || self.epoch != pending.epoch {
            log::debug!("inputs of {:?} changed; discarding layout", self.root);
            return Ok(MountOutcome::Superseded);
        }

        let (layout, event, outcome) = match result {
            Ok(mut layout) => {
                layout.used_font_scale = self.constraints.clamp_font_scale(layout.used_font_scale);
                let event = TextLayoutEvent::from_layout(&layout);
                (layout, event, MountOutcome::Completed)
            }
            Err(err) => {
                log::warn!("layout of {:?} failed: {err}", self.root);
                (
                    TextLayout::default(),
                    TextLayoutEvent::degraded(),
                    MountOutcome::Degraded(err),
                )
            }
        };

        self.layout = Some(layout);
        self.composed = Some(pending.text);
        self.mounted = Some((pending.revision, pending.epoch));
        if self.emits_layout_events {
            events.emit_layout_result(self.root, &event);
        }
        Ok(outcome)
    }

    /// Abandons a request started by [`begin_mount`](Self::begin_mount).
    ///
    /// The view keeps its previous layout and stays dirty, so the next pass starts over.
    pub fn cancel_mount(&mut self, pending: PendingLayout) -> Result<(), MountError> {
        self.take_in_flight(&pending)?;
        log::debug!("layout #{} of {:?} cancelled", pending.ticket, self.root);
        Ok(())
    }

    fn take_in_flight(&mut self, pending: &PendingLayout) -> Result<(), MountError> {
        match self.in_flight {
            Some(in_flight) if in_flight.ticket == pending.ticket && pending.node == self.root => {
                self.in_flight = None;
                Ok(())
            }
            _ => Err(MountError::new(MountErrorKind::TicketMismatch, self.root)),
        }
    }
}
