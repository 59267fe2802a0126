// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest minimum font scale a view accepts.
pub const MIN_FONT_SCALE_FLOOR: f32 = 0.01;

/// How text that does not fit is broken and truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Lines are broken at word boundaries; overflow is cut off without an ellipsis.
    Clip,
    /// Lines are broken at word boundaries; the last line is not truncated.
    WordWrap,
    /// Lines are broken at character boundaries.
    CharWrap,
    /// The start of the last visible line is replaced with an ellipsis.
    TruncateHead,
    /// The middle of the last visible line is replaced with an ellipsis.
    TruncateMiddle,
    /// The end of the last visible line is replaced with an ellipsis.
    #[default]
    TruncateTail,
}

impl LineBreakMode {
    /// Returns `true` for the modes that insert an ellipsis.
    pub const fn truncates(self) -> bool {
        matches!(
            self,
            Self::TruncateHead | Self::TruncateMiddle | Self::TruncateTail
        )
    }

    /// Parses an `ellipsizeMode`-style keyword.
    ///
    /// ```
    /// use rich_text::LineBreakMode;
    ///
    /// assert_eq!(LineBreakMode::parse("tail"), Some(LineBreakMode::TruncateTail));
    /// assert_eq!(LineBreakMode::parse("clip"), Some(LineBreakMode::Clip));
    /// assert_eq!(LineBreakMode::parse("sideways"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "clip" => Self::Clip,
            "word-wrap" | "wordWrapping" => Self::WordWrap,
            "char-wrap" | "charWrapping" => Self::CharWrap,
            "head" => Self::TruncateHead,
            "middle" => Self::TruncateMiddle,
            "tail" => Self::TruncateTail,
            _ => return None,
        })
    }
}

/// Rendering constraints of a top-level rich text node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConstraints {
    max_lines: usize,
    line_break_mode: LineBreakMode,
    adjusts_font_size_to_fit: bool,
    minimum_font_scale: f32,
    max_width: Option<f32>,
    max_height: Option<f32>,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self {
            max_lines: 0,
            line_break_mode: LineBreakMode::default(),
            adjusts_font_size_to_fit: false,
            minimum_font_scale: MIN_FONT_SCALE_FLOOR,
            max_width: None,
            max_height: None,
        }
    }
}

impl LayoutConstraints {
    /// Creates unconstrained layout constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of lines; `0` means unlimited.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Sets the line break mode.
    #[must_use]
    pub const fn with_line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    /// Enables or disables auto-shrink.
    #[must_use]
    pub const fn with_adjusts_font_size_to_fit(mut self, enabled: bool) -> Self {
        self.adjusts_font_size_to_fit = enabled;
        self
    }

    /// Sets the smallest font scale auto-shrink may reach.
    ///
    /// The value is clamped into `[MIN_FONT_SCALE_FLOOR, 1]`; NaN is treated as `1`.
    #[must_use]
    pub fn with_minimum_font_scale(mut self, scale: f32) -> Self {
        self.minimum_font_scale = if scale.is_nan() {
            1.0
        } else {
            scale.clamp(MIN_FONT_SCALE_FLOOR, 1.0)
        };
        self
    }

    /// Sets the available width; `None` means unconstrained.
    #[must_use]
    pub const fn with_max_width(mut self, width: Option<f32>) -> Self {
        self.max_width = width;
        self
    }

    /// Sets the available height; `None` means unconstrained.
    #[must_use]
    pub const fn with_max_height(mut self, height: Option<f32>) -> Self {
        self.max_height = height;
        self
    }

    /// Returns the maximum number of lines; `0` means unlimited.
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Returns the line break mode.
    pub const fn line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    /// Returns `true` if auto-shrink is enabled.
    pub const fn adjusts_font_size_to_fit(&self) -> bool {
        self.adjusts_font_size_to_fit
    }

    /// Returns the configured minimum font scale.
    pub const fn minimum_font_scale(&self) -> f32 {
        self.minimum_font_scale
    }

    /// Returns the lower bound of the font scale range layout may use.
    ///
    /// This is the minimum font scale with auto-shrink enabled and `1` otherwise.
    pub const fn effective_minimum_font_scale(&self) -> f32 {
        if self.adjusts_font_size_to_fit {
            self.minimum_font_scale
        } else {
            1.0
        }
    }

    /// Returns the available width.
    pub const fn max_width(&self) -> Option<f32> {
        self.max_width
    }

    /// Returns the available height.
    pub const fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    /// Clamps a font scale reported by a layout engine into the allowed range.
    pub(crate) fn clamp_font_scale(&self, scale: f32) -> f32 {
        if !self.adjusts_font_size_to_fit || scale.is_nan() {
            return 1.0;
        }
        scale.clamp(self.minimum_font_scale, 1.0)
    }
}
