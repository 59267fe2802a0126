// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::Size;

use crate::{ComposedText, LineBreakMode};

/// Everything a text layout engine needs to lay out one composed text.
#[derive(Clone, Copy, Debug)]
pub struct LayoutRequest<'a> {
    /// The text to lay out.
    pub text: &'a ComposedText,
    /// Maximum number of lines; `0` means unlimited.
    pub max_lines: usize,
    /// How overflowing text is broken and truncated.
    pub line_break_mode: LineBreakMode,
    /// Whether the font may be scaled down to fit.
    pub auto_shrink: bool,
    /// Smallest font scale allowed when shrinking, in `(0, 1]`.
    pub minimum_font_scale: f32,
    /// Available width; `None` means unconstrained.
    pub max_width: Option<f32>,
    /// Available height; `None` means unconstrained.
    pub max_height: Option<f32>,
}

/// Metrics of one laid-out line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineMetrics {
    /// The byte range of the composed text shown on this line.
    pub range: Range<usize>,
    /// Horizontal offset of the line box.
    pub x: f64,
    /// Vertical offset of the line box.
    pub y: f64,
    /// Advance width of the line.
    pub width: f64,
    /// Height of the line box.
    pub height: f64,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascender: f64,
    /// Distance from the baseline to the bottom of the lowest glyphs.
    pub descender: f64,
    /// Height of capital letters.
    pub cap_height: f64,
    /// Height of lowercase letters.
    pub x_height: f64,
}

/// The result of laying out a composed text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    /// The font scale that was applied, in `[minimum_font_scale, 1]`.
    pub used_font_scale: f32,
    /// The visible lines.
    pub lines: Vec<LineMetrics>,
    /// The bounding size of the visible lines.
    pub measured_size: Size,
    /// Whether any content was elided.
    pub truncated: bool,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            used_font_scale: 1.0,
            lines: Vec::new(),
            measured_size: Size::ZERO,
            truncated: false,
        }
    }
}

impl TextLayout {
    /// Returns the number of visible lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Error reported by a [`TextLayoutEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    kind: LayoutErrorKind,
    detail: Cow<'static, str>,
}

impl LayoutError {
    /// Creates an error of the given kind with a human-readable detail message.
    pub fn new(kind: LayoutErrorKind, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> LayoutErrorKind {
        self.kind
    }

    /// A human-readable description of the failure.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            LayoutErrorKind::InvalidConstraints => "invalid layout constraints",
            LayoutErrorKind::Unmeasurable => "text cannot be measured",
            LayoutErrorKind::Backend => "layout backend failure",
        };
        if self.detail.is_empty() {
            f.write_str(what)
        } else {
            write!(f, "{what}: {}", self.detail)
        }
    }
}

impl core::error::Error for LayoutError {}

/// The non-exhaustive category of a [`LayoutError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutErrorKind {
    /// The request's size or scale constraints are unusable.
    InvalidConstraints,
    /// The text contains content the engine cannot measure.
    Unmeasurable,
    /// The engine itself failed.
    Backend,
}

/// A text measurement and layout engine.
pub trait TextLayoutEngine {
    /// Lays out `request.text` under the request's constraints.
    ///
    /// With auto-shrink enabled, implementations try smaller font scales down to
    /// `request.minimum_font_scale` before truncating.
    fn layout(&mut self, request: &LayoutRequest<'_>) -> Result<TextLayout, LayoutError>;
}

impl<E: TextLayoutEngine + ?Sized> TextLayoutEngine for &mut E {
    fn layout(&mut self, request: &LayoutRequest<'_>) -> Result<TextLayout, LayoutError> {
        (**self).layout(request)
    }
}
