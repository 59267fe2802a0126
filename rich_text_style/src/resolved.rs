// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;
use peniko::color::palette::css;

use crate::{
    DecorationStyle, FontStyle, FontVariant, FontWeight, StyleAttributes, TextAlign,
    TextDecoration, TextShadow, TextTransform,
};

/// Font family used when none is set anywhere along the ancestor chain.
pub const DEFAULT_FONT_FAMILY: &str = "system-ui";

/// Font size in pixels used when none is set anywhere along the ancestor chain.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Concrete text style values, with defaults filled in for every unset property.
///
/// This is what a layout engine consumes. Derived values are pre-applied:
/// - the font size includes the font size multiplier
/// - foreground, background and decoration colors include the opacity
/// - the decoration color falls back to the foreground color
///
/// This type is intentionally opaque: it can gain new properties over time without breaking
/// downstream code.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAttributes {
    pub(crate) font_family: Arc<str>,
    pub(crate) font_size: f32,
    pub(crate) font_weight: FontWeight,
    pub(crate) font_style: FontStyle,
    pub(crate) font_variant: FontVariant,
    pub(crate) foreground_color: Color,
    pub(crate) background_color: Color,
    pub(crate) letter_spacing: f32,
    pub(crate) line_height: Option<f32>,
    pub(crate) text_align: TextAlign,
    pub(crate) text_decoration: TextDecoration,
    pub(crate) decoration_color: Color,
    pub(crate) decoration_style: DecorationStyle,
    pub(crate) text_shadow: Option<TextShadow>,
    pub(crate) text_transform: TextTransform,
}

impl Default for ResolvedAttributes {
    fn default() -> Self {
        StyleAttributes::new().resolve()
    }
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    let [r, g, b, a] = color.components;
    Color::new([r, g, b, a * opacity])
}

impl StyleAttributes {
    /// Resolves this record into concrete values.
    pub fn resolve(&self) -> ResolvedAttributes {
        let opacity = self.opacity().unwrap_or(1.0);
        let foreground = self.foreground_color().unwrap_or(css::BLACK);
        let decoration = self.decoration_color().unwrap_or(foreground);
        ResolvedAttributes {
            font_family: self
                .font_family()
                .map_or_else(|| Arc::from(DEFAULT_FONT_FAMILY), Arc::from),
            font_size: self.font_size().unwrap_or(DEFAULT_FONT_SIZE)
                * self.font_size_multiplier().unwrap_or(1.0),
            font_weight: self.font_weight().unwrap_or_default(),
            font_style: self.font_style().unwrap_or_default(),
            font_variant: self.font_variant().unwrap_or_default(),
            foreground_color: with_opacity(foreground, opacity),
            background_color: with_opacity(
                self.background_color().unwrap_or(css::TRANSPARENT),
                opacity,
            ),
            letter_spacing: self.letter_spacing().unwrap_or(0.0),
            line_height: self.line_height(),
            text_align: self.text_align().unwrap_or_default(),
            text_decoration: self.text_decoration().unwrap_or_default(),
            decoration_color: with_opacity(decoration, opacity),
            decoration_style: self.decoration_style().unwrap_or_default(),
            text_shadow: self.text_shadow(),
            text_transform: self.text_transform().unwrap_or_default(),
        }
    }
}

impl ResolvedAttributes {
    /// Returns a copy with every size-dependent metric multiplied by `factor`.
    ///
    /// Layout engines use this to apply an auto-shrink font scale.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            font_size: self.font_size * factor,
            letter_spacing: self.letter_spacing * factor,
            line_height: self.line_height.map(|lh| lh * factor),
            ..self.clone()
        }
    }

    /// Returns the font family.
    #[inline]
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the effective font size in pixels.
    #[inline]
    pub const fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the font weight.
    #[inline]
    pub const fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the font style.
    #[inline]
    pub const fn font_style(&self) -> FontStyle {
        self.font_style
    }

    /// Returns the font variants.
    #[inline]
    pub const fn font_variant(&self) -> FontVariant {
        self.font_variant
    }

    /// Returns the foreground color, with opacity applied.
    #[inline]
    pub const fn foreground_color(&self) -> Color {
        self.foreground_color
    }

    /// Returns the background color, with opacity applied.
    #[inline]
    pub const fn background_color(&self) -> Color {
        self.background_color
    }

    /// Returns the extra spacing between letters in pixels.
    #[inline]
    pub const fn letter_spacing(&self) -> f32 {
        self.letter_spacing
    }

    /// Returns the absolute line height, or `None` to use the font's metrics.
    #[inline]
    pub const fn line_height(&self) -> Option<f32> {
        self.line_height
    }

    /// Returns the text alignment.
    #[inline]
    pub const fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// Returns the decoration lines.
    #[inline]
    pub const fn text_decoration(&self) -> TextDecoration {
        self.text_decoration
    }

    /// Returns the decoration color, with opacity applied.
    #[inline]
    pub const fn decoration_color(&self) -> Color {
        self.decoration_color
    }

    /// Returns the decoration line style.
    #[inline]
    pub const fn decoration_style(&self) -> DecorationStyle {
        self.decoration_style
    }

    /// Returns the text shadow, if any.
    #[inline]
    pub const fn text_shadow(&self) -> Option<TextShadow> {
        self.text_shadow
    }

    /// Returns the case transform.
    #[inline]
    pub const fn text_transform(&self) -> TextTransform {
        self.text_transform
    }
}
