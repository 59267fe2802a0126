// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text::{
    LayoutConstraints, LayoutConstraintsView, LayoutError, LayoutErrorKind, LayoutRequest,
    LineBreakMode, MountOutcome, MountState, NodeKind, RichTextTree, TextLayout,
    TextLayoutEngine,
};
use rich_text_dev::{RecordingEventSink, SHRINK_TO_FIT, mixed_sizes};
use rich_text_style::StyleAttributes;

use crate::util::{base, engine};

/// Records the constraints of every request before delegating.
#[derive(Debug, Default)]
struct Spy<E> {
    inner: E,
    requests: Vec<(usize, LineBreakMode, bool, f32)>,
}

impl<E: TextLayoutEngine> TextLayoutEngine for Spy<E> {
    fn layout(&mut self, request: &LayoutRequest<'_>) -> Result<TextLayout, LayoutError> {
        self.requests.push((
            request.max_lines,
            request.line_break_mode,
            request.auto_shrink,
            request.minimum_font_scale,
        ));
        self.inner.layout(request)
    }
}

fn view_with(
    tree: &mut RichTextTree,
    text: &str,
    font_size: f32,
    constraints: LayoutConstraints,
) -> LayoutConstraintsView {
    let root = tree.create_node(NodeKind::text(text));
    tree.set_style(root, StyleAttributes::new().with_font_size(font_size))
        .unwrap();
    let mut view = LayoutConstraintsView::new(root, constraints);
    view.set_base_attributes(base());
    view.set_emits_layout_events(true);
    view
}

#[test]
fn mount_passes_max_lines_through() {
    let mut tree = RichTextTree::new();
    let mut view = view_with(
        &mut tree,
        "Truncated text is baaaaad.",
        36.0,
        LayoutConstraints::new()
            .with_max_lines(1)
            .with_line_break_mode(LineBreakMode::TruncateTail)
            .with_max_width(Some(200.0)),
    );
    let mut spy = Spy {
        inner: engine(),
        requests: Vec::new(),
    };
    let mut events = RecordingEventSink::new();

    let outcome = view.mount(&mut tree, &mut spy, &mut events).unwrap();
    assert_eq!(outcome, MountOutcome::Completed);
    assert_eq!(
        spy.requests,
        [(1, LineBreakMode::TruncateTail, false, 1.0)]
    );
    let event = events.last().unwrap();
    assert_eq!(event.line_count, 1);
    assert!(event.truncated);
    assert_eq!(event.used_font_scale, 1.0);
}

#[test]
fn mount_auto_shrink_scale_within_bounds() {
    let mut tree = RichTextTree::new();
    let constraints = LayoutConstraints::new()
        .with_max_lines(1)
        .with_adjusts_font_size_to_fit(true)
        .with_minimum_font_scale(0.5)
        .with_max_width(Some(300.0));
    let mut view = view_with(&mut tree, SHRINK_TO_FIT, 40.0, constraints);
    let mut events = RecordingEventSink::new();

    view.mount(&mut tree, &mut engine(), &mut events).unwrap();
    let scale = view.used_font_scale();
    assert!((0.5..=1.0).contains(&scale));
    assert_eq!(events.last().unwrap().used_font_scale, scale);

    // A lower minimum lets the text fit without truncation.
    view.set_minimum_font_scale(0.1);
    assert_eq!(view.state(&tree), MountState::Dirty);
    view.mount(&mut tree, &mut engine(), &mut events).unwrap();
    let layout = view.layout().unwrap();
    assert!(layout.used_font_scale < 0.5);
    assert!(!layout.truncated);
    assert_eq!(events.len(), 2);
}

#[test]
fn mount_nested_sizes_shrink_together() {
    let mut tree = RichTextTree::new();
    let sample = mixed_sizes(&mut tree).unwrap();
    let mut view = LayoutConstraintsView::new(
        sample.root,
        LayoutConstraints::new()
            .with_max_lines(1)
            .with_adjusts_font_size_to_fit(true)
            .with_minimum_font_scale(0.1)
            .with_max_width(Some(200.0)),
    );
    let mut events = RecordingEventSink::new();
    view.mount(&mut tree, &mut engine(), &mut events).unwrap();

    let layout = view.layout().unwrap();
    assert_eq!(layout.line_count(), 1);
    assert!(layout.used_font_scale < 1.0);
    assert!(layout.measured_size.width <= 200.0);
    // Views emit only when opted in.
    assert!(events.is_empty());
}

#[test]
fn mount_reports_line_metrics() {
    let mut tree = RichTextTree::new();
    let mut view = view_with(
        &mut tree,
        "aaaa bbbb cccc",
        10.0,
        LayoutConstraints::new().with_max_width(Some(40.0)),
    );
    let mut events = RecordingEventSink::new();
    view.mount(&mut tree, &mut engine(), &mut events).unwrap();

    let event = events.last().unwrap();
    assert_eq!(event.line_count, 3);
    let ys: Vec<f64> = event.lines.iter().map(|line| line.y).collect();
    assert_eq!(ys, [0.0, 10.0, 20.0]);
    assert_eq!(event.measured_size.height, 30.0);
    assert!(event.lines.iter().all(|line| line.ascender > line.descender));
}

#[test]
fn mount_engine_error_degrades() {
    let mut tree = RichTextTree::new();
    let mut view = view_with(
        &mut tree,
        "nowhere to go",
        10.0,
        LayoutConstraints::new().with_max_width(Some(0.0)),
    );
    let mut events = RecordingEventSink::new();

    let outcome = view.mount(&mut tree, &mut engine(), &mut events).unwrap();
    let MountOutcome::Degraded(err) = outcome else {
        panic!("expected a degraded outcome, got {outcome:?}");
    };
    assert_eq!(err.kind(), LayoutErrorKind::InvalidConstraints);
    let event = events.last().unwrap();
    assert!(event.degraded);
    assert_eq!(event.line_count, 0);
    assert_eq!(event.used_font_scale, 1.0);
    // Failures are not retried.
    assert_eq!(view.state(&tree), MountState::Clean);
    let outcome = view.mount(&mut tree, &mut engine(), &mut events).unwrap();
    assert_eq!(outcome, MountOutcome::Skipped);
    assert_eq!(events.len(), 1);
}

#[test]
fn mount_base_attribute_change_dirties() {
    let mut tree = RichTextTree::new();
    let mut view = view_with(&mut tree, "text", 10.0, LayoutConstraints::new());
    let mut events = RecordingEventSink::new();
    view.mount(&mut tree, &mut engine(), &mut events).unwrap();
    assert_eq!(view.state(&tree), MountState::Clean);

    view.set_base_attributes(base());
    assert_eq!(view.state(&tree), MountState::Clean);
    view.set_base_attributes(base().with_font_size(30.0));
    assert_eq!(view.state(&tree), MountState::Dirty);
}
