// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use rich_text::{
    Child, ComposedText, EmbeddedContent, LayoutErrorKind, LayoutRequest, LineBreakMode, NodeKind,
    RichTextTree, TextLayout, TextLayoutEngine,
};
use rich_text_style::StyleAttributes;

use crate::{FixedAdvanceEngine, SHRINK_TO_FIT};

/// Every character is 5px wide and lines are 10px tall at font size 10.
fn engine() -> FixedAdvanceEngine {
    FixedAdvanceEngine {
        advance_ratio: 0.5,
        line_height_ratio: 1.0,
    }
}

fn compose(text: &str, font_size: f32) -> Arc<ComposedText> {
    let mut tree = RichTextTree::new();
    let root = tree.create_node(NodeKind::text(text));
    tree.composed_text(root, &StyleAttributes::new().with_font_size(font_size))
        .unwrap()
}

fn request(text: &ComposedText) -> LayoutRequest<'_> {
    LayoutRequest {
        text,
        max_lines: 0,
        line_break_mode: LineBreakMode::TruncateTail,
        auto_shrink: false,
        minimum_font_scale: 1.0,
        max_width: None,
        max_height: None,
    }
}

fn line_texts<'a>(text: &'a ComposedText, layout: &TextLayout) -> Vec<&'a str> {
    layout
        .lines
        .iter()
        .map(|line| &text.as_str()[line.range.clone()])
        .collect()
}

#[test]
fn unconstrained_text_is_one_line() {
    let text = compose("hello world", 10.0);
    let layout = engine().layout(&request(&text)).unwrap();
    assert_eq!(layout.line_count(), 1);
    assert_eq!(layout.measured_size.width, 55.0);
    assert_eq!(layout.measured_size.height, 10.0);
    assert_eq!(layout.used_font_scale, 1.0);
    assert!(!layout.truncated);
}

#[test]
fn empty_text_has_no_lines() {
    let text = compose("", 10.0);
    let layout = engine().layout(&request(&text)).unwrap();
    assert_eq!(layout.line_count(), 0);
    assert_eq!(layout.measured_size.width, 0.0);
}

#[test]
fn word_wrap_breaks_after_spaces() {
    let text = compose("aaaa bbbb cccc", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(40.0),
            ..request(&text)
        })
        .unwrap();
    assert_eq!(line_texts(&text, &layout), ["aaaa ", "bbbb ", "cccc"]);
    assert_eq!(layout.measured_size.width, 20.0);
    assert_eq!(layout.measured_size.height, 30.0);
    assert_eq!(layout.lines[2].y, 20.0);
}

#[test]
fn char_wrap_breaks_anywhere() {
    let text = compose("aaaa bbbb cccc", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(40.0),
            line_break_mode: LineBreakMode::CharWrap,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(line_texts(&text, &layout), ["aaaa bbb", "b cccc"]);
}

#[test]
fn newline_forces_a_break() {
    let text = compose("ab\ncd", 10.0);
    let layout = engine().layout(&request(&text)).unwrap();
    assert_eq!(layout.line_count(), 2);
}

#[test]
fn max_lines_truncates() {
    let text = compose("aaaa bbbb cccc", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(40.0),
            max_lines: 1,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(layout.line_count(), 1);
    assert!(layout.truncated);
}

#[test]
fn tail_truncation_makes_room_for_an_ellipsis() {
    let text = compose("abcdefghij", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(30.0),
            max_lines: 1,
            ..request(&text)
        })
        .unwrap();
    // 6 characters per line, the last one replaced by the ellipsis.
    assert_eq!(line_texts(&text, &layout), ["abcde"]);
    assert!(layout.truncated);
}

#[test]
fn head_truncation_keeps_the_end() {
    let text = compose("abcdefghij", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(30.0),
            max_lines: 1,
            line_break_mode: LineBreakMode::TruncateHead,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(line_texts(&text, &layout), ["bcdef"]);
}

#[test]
fn auto_shrink_finds_the_largest_fitting_scale() {
    let text = compose(SHRINK_TO_FIT, 40.0);
    // 48 characters of 20px each overflow 300px until the scale drops to 0.3125.
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(300.0),
            max_lines: 1,
            auto_shrink: true,
            minimum_font_scale: 0.1,
            ..request(&text)
        })
        .unwrap();
    assert!(layout.used_font_scale > 0.3 && layout.used_font_scale <= 0.3125);
    assert_eq!(layout.line_count(), 1);
    assert!(!layout.truncated);
    assert!(layout.measured_size.width <= 300.0);
}

#[test]
fn auto_shrink_stops_at_the_minimum_then_truncates() {
    let text = compose(SHRINK_TO_FIT, 40.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(300.0),
            max_lines: 1,
            auto_shrink: true,
            minimum_font_scale: 0.5,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(layout.used_font_scale, 0.5);
    assert_eq!(layout.line_count(), 1);
    assert!(layout.truncated);
}

#[test]
fn auto_shrink_is_skipped_when_text_fits() {
    let text = compose("fits", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(300.0),
            auto_shrink: true,
            minimum_font_scale: 0.5,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(layout.used_font_scale, 1.0);
}

#[test]
fn height_limit_hides_lines() {
    let text = compose("aaaa bbbb cccc", 10.0);
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(40.0),
            max_height: Some(25.0),
            ..request(&text)
        })
        .unwrap();
    assert_eq!(layout.line_count(), 2);
    assert!(layout.truncated);
}

#[test]
fn placeholders_keep_their_size() {
    let mut tree = RichTextTree::new();
    let root = tree.create_node(NodeKind::text("ab"));
    tree.set_children(root, [Child::Embedded(EmbeddedContent::new(1, 30.0, 40.0))])
        .unwrap();
    let text = tree
        .composed_text(root, &StyleAttributes::new().with_font_size(10.0))
        .unwrap();

    let layout = engine().layout(&request(&text)).unwrap();
    assert_eq!(layout.measured_size.width, 40.0);
    assert_eq!(layout.measured_size.height, 40.0);
}

#[test]
fn invalid_width_is_rejected() {
    let text = compose("x", 10.0);
    for width in [0.0, -1.0, f32::NAN] {
        let err = engine()
            .layout(&LayoutRequest {
                max_width: Some(width),
                ..request(&text)
            })
            .unwrap_err();
        assert_eq!(err.kind(), LayoutErrorKind::InvalidConstraints);
    }
}

#[test]
fn shrinking_scales_spacing_and_line_height() {
    let mut tree = RichTextTree::new();
    let root = tree.create_node(NodeKind::text("aaaaaaaaaa"));
    let style = StyleAttributes::new()
        .with_font_size(10.0)
        .with_letter_spacing(1.0)
        .with_line_height(20.0);
    let text = tree.composed_text(root, &style).unwrap();

    // Each character is 6px wide at full size and only fits at half size.
    let layout = engine()
        .layout(&LayoutRequest {
            max_width: Some(30.0),
            max_lines: 1,
            auto_shrink: true,
            minimum_font_scale: 0.5,
            ..request(&text)
        })
        .unwrap();
    assert_eq!(layout.used_font_scale, 0.5);
    assert!(!layout.truncated);
    assert_eq!(layout.measured_size.width, 30.0);
    assert_eq!(layout.measured_size.height, 10.0);
    assert_eq!(layout.lines[0].x_height, 2.5);
}
