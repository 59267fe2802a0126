// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Decoration lines drawn over a run of text.
///
/// In CSS, this corresponds to the `text-decoration-line` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextDecoration {
    /// Draw a line below the text.
    pub underline: bool,
    /// Draw a line through the middle of the text.
    pub strikethrough: bool,
}

impl TextDecoration {
    /// No decoration. This is distinct from leaving the property unset: it overrides an
    /// inherited decoration.
    pub const NONE: Self = Self {
        underline: false,
        strikethrough: false,
    };

    /// Underline only.
    pub const UNDERLINE: Self = Self {
        underline: true,
        strikethrough: false,
    };

    /// Strikethrough only.
    pub const STRIKETHROUGH: Self = Self {
        underline: false,
        strikethrough: true,
    };

    /// Returns `true` if no line is drawn.
    pub const fn is_none(self) -> bool {
        !self.underline && !self.strikethrough
    }

    /// Parses a `text-decoration-line` value such as `"underline line-through"` or `"none"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut out = Self::NONE;
        for keyword in s.split_ascii_whitespace() {
            match keyword {
                "none" => {}
                "underline" => out.underline = true,
                "line-through" => out.strikethrough = true,
                _ => return None,
            }
        }
        Some(out)
    }
}

/// Line style used for decorations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecorationStyle {
    /// A single solid line.
    #[default]
    Solid,
    /// Two parallel lines.
    Double,
    /// A dotted line.
    Dotted,
    /// A dashed line.
    Dashed,
}

impl DecorationStyle {
    /// Parses a `text-decoration-style` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "solid" => Self::Solid,
            "double" => Self::Double,
            "dotted" => Self::Dotted,
            "dashed" => Self::Dashed,
            _ => return None,
        })
    }
}

/// A drop shadow painted behind glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    /// Horizontal offset in pixels.
    pub offset_x: f32,
    /// Vertical offset in pixels.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub radius: f32,
    /// Shadow color. When `None`, the shadow uses the foreground color.
    pub color: Option<Color>,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            radius: 0.0,
            color: None,
        }
    }
}
