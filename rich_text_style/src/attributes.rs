// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;

use crate::{
    AttributeMask, DecorationStyle, FontStyle, FontVariant, FontWeight, TextAlign,
    TextDecoration, TextShadow, TextTransform,
};

/// An immutable record of optional text style properties.
///
/// Every property is either *set* (`Some`) or *unset* (`None`). Unset properties inherit from the
/// value this record is merged onto, see [`StyleAttributes::merge`].
///
/// Values are assumed to be pre-validated by the property coercion layer (for example, font sizes
/// are positive). Equality is structural.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleAttributes {
    font_family: Option<Arc<str>>,
    font_size: Option<f32>,
    font_size_multiplier: Option<f32>,
    font_weight: Option<FontWeight>,
    font_style: Option<FontStyle>,
    font_variant: Option<FontVariant>,
    foreground_color: Option<Color>,
    background_color: Option<Color>,
    opacity: Option<f32>,
    letter_spacing: Option<f32>,
    line_height: Option<f32>,
    text_align: Option<TextAlign>,
    text_decoration: Option<TextDecoration>,
    decoration_color: Option<Color>,
    decoration_style: Option<DecorationStyle>,
    text_shadow: Option<TextShadow>,
    text_transform: Option<TextTransform>,
}

#[inline]
fn pick<T: Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
    over.as_ref().or(base.as_ref()).cloned()
}

impl StyleAttributes {
    /// Creates a record with every property unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `over` onto `base`.
    ///
    /// For each property the result holds `over`'s value when set, otherwise `base`'s value when
    /// set, otherwise it stays unset. This is total, pure and `O(properties)`.
    ///
    /// Merging is a right-biased override: `merge(merge(a, b), c)` and `merge(a, merge(b, c))`
    /// happen to agree for plain overrides, but callers should not rely on regrouping and should
    /// always fold an ancestor chain from the root down.
    pub fn merge(base: &Self, over: &Self) -> Self {
        Self {
            font_family: pick(&base.font_family, &over.font_family),
            font_size: pick(&base.font_size, &over.font_size),
            font_size_multiplier: pick(&base.font_size_multiplier, &over.font_size_multiplier),
            font_weight: pick(&base.font_weight, &over.font_weight),
            font_style: pick(&base.font_style, &over.font_style),
            font_variant: pick(&base.font_variant, &over.font_variant),
            foreground_color: pick(&base.foreground_color, &over.foreground_color),
            background_color: pick(&base.background_color, &over.background_color),
            opacity: pick(&base.opacity, &over.opacity),
            letter_spacing: pick(&base.letter_spacing, &over.letter_spacing),
            line_height: pick(&base.line_height, &over.line_height),
            text_align: pick(&base.text_align, &over.text_align),
            text_decoration: pick(&base.text_decoration, &over.text_decoration),
            decoration_color: pick(&base.decoration_color, &over.decoration_color),
            decoration_style: pick(&base.decoration_style, &over.decoration_style),
            text_shadow: pick(&base.text_shadow, &over.text_shadow),
            text_transform: pick(&base.text_transform, &over.text_transform),
        }
    }

    /// Merges `over` onto `self`. See [`StyleAttributes::merge`].
    #[inline]
    #[must_use]
    pub fn merged_with(&self, over: &Self) -> Self {
        Self::merge(self, over)
    }

    /// Returns the set of properties explicitly set on this record.
    ///
    /// Properties outside of the returned mask inherit.
    pub fn explicit_fields(&self) -> AttributeMask {
        let mut mask = AttributeMask::EMPTY;
        let mut mark = |set: bool, bit: AttributeMask| {
            if set {
                mask.insert(bit);
            }
        };
        mark(self.font_family.is_some(), AttributeMask::FONT_FAMILY);
        mark(self.font_size.is_some(), AttributeMask::FONT_SIZE);
        mark(
            self.font_size_multiplier.is_some(),
            AttributeMask::FONT_SIZE_MULTIPLIER,
        );
        mark(self.font_weight.is_some(), AttributeMask::FONT_WEIGHT);
        mark(self.font_style.is_some(), AttributeMask::FONT_STYLE);
        mark(self.font_variant.is_some(), AttributeMask::FONT_VARIANT);
        mark(self.foreground_color.is_some(), AttributeMask::FOREGROUND_COLOR);
        mark(self.background_color.is_some(), AttributeMask::BACKGROUND_COLOR);
        mark(self.opacity.is_some(), AttributeMask::OPACITY);
        mark(self.letter_spacing.is_some(), AttributeMask::LETTER_SPACING);
        mark(self.line_height.is_some(), AttributeMask::LINE_HEIGHT);
        mark(self.text_align.is_some(), AttributeMask::TEXT_ALIGN);
        mark(self.text_decoration.is_some(), AttributeMask::TEXT_DECORATION);
        mark(self.decoration_color.is_some(), AttributeMask::DECORATION_COLOR);
        mark(self.decoration_style.is_some(), AttributeMask::DECORATION_STYLE);
        mark(self.text_shadow.is_some(), AttributeMask::TEXT_SHADOW);
        mark(self.text_transform.is_some(), AttributeMask::TEXT_TRANSFORM);
        mask
    }

    /// Returns the properties set on `self` that `local` does not set.
    ///
    /// When `self` is the result of merging `local` onto some inherited value, these are exactly
    /// the properties that were inherited.
    pub fn inherited_fields(&self, local: &Self) -> AttributeMask {
        self.explicit_fields().difference(local.explicit_fields())
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.explicit_fields().is_empty()
    }

    /// Returns the font family, if set.
    #[inline]
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the font size in pixels, if set.
    #[inline]
    pub const fn font_size(&self) -> Option<f32> {
        self.font_size
    }

    /// Returns the font size multiplier (accessibility scaling), if set.
    #[inline]
    pub const fn font_size_multiplier(&self) -> Option<f32> {
        self.font_size_multiplier
    }

    /// Returns the font weight, if set.
    #[inline]
    pub const fn font_weight(&self) -> Option<FontWeight> {
        self.font_weight
    }

    /// Returns the font style, if set.
    #[inline]
    pub const fn font_style(&self) -> Option<FontStyle> {
        self.font_style
    }

    /// Returns the font variants, if set.
    #[inline]
    pub const fn font_variant(&self) -> Option<FontVariant> {
        self.font_variant
    }

    /// Returns the foreground (glyph) color, if set.
    #[inline]
    pub const fn foreground_color(&self) -> Option<Color> {
        self.foreground_color
    }

    /// Returns the background color, if set.
    #[inline]
    pub const fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Returns the opacity, if set.
    #[inline]
    pub const fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Returns the extra spacing between letters in pixels, if set.
    #[inline]
    pub const fn letter_spacing(&self) -> Option<f32> {
        self.letter_spacing
    }

    /// Returns the absolute line height in pixels, if set.
    #[inline]
    pub const fn line_height(&self) -> Option<f32> {
        self.line_height
    }

    /// Returns the text alignment, if set.
    #[inline]
    pub const fn text_align(&self) -> Option<TextAlign> {
        self.text_align
    }

    /// Returns the decoration lines, if set.
    #[inline]
    pub const fn text_decoration(&self) -> Option<TextDecoration> {
        self.text_decoration
    }

    /// Returns the decoration color, if set.
    #[inline]
    pub const fn decoration_color(&self) -> Option<Color> {
        self.decoration_color
    }

    /// Returns the decoration line style, if set.
    #[inline]
    pub const fn decoration_style(&self) -> Option<DecorationStyle> {
        self.decoration_style
    }

    /// Returns the text shadow, if set.
    #[inline]
    pub const fn text_shadow(&self) -> Option<TextShadow> {
        self.text_shadow
    }

    /// Returns the case transform, if set.
    #[inline]
    pub const fn text_transform(&self) -> Option<TextTransform> {
        self.text_transform
    }

    /// Sets the font family.
    #[inline]
    pub fn with_font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the font size in pixels.
    #[inline]
    pub fn with_font_size(mut self, px: f32) -> Self {
        debug_assert!(px > 0.0, "font size must be positive, got {px}");
        self.font_size = Some(px);
        self
    }

    /// Sets the font size multiplier.
    #[inline]
    pub fn with_font_size_multiplier(mut self, multiplier: f32) -> Self {
        debug_assert!(
            multiplier > 0.0,
            "font size multiplier must be positive, got {multiplier}"
        );
        self.font_size_multiplier = Some(multiplier);
        self
    }

    /// Sets the font weight.
    #[inline]
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Sets the font style.
    #[inline]
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Sets the font variants.
    #[inline]
    pub fn with_font_variant(mut self, variant: FontVariant) -> Self {
        self.font_variant = Some(variant);
        self
    }

    /// Sets the foreground color.
    #[inline]
    pub fn with_foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the background color.
    #[inline]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the opacity, clamped to `[0, 1]`.
    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Sets the extra spacing between letters in pixels.
    #[inline]
    pub fn with_letter_spacing(mut self, px: f32) -> Self {
        self.letter_spacing = Some(px);
        self
    }

    /// Sets the absolute line height in pixels.
    #[inline]
    pub fn with_line_height(mut self, px: f32) -> Self {
        self.line_height = Some(px);
        self
    }

    /// Sets the text alignment.
    #[inline]
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Sets the decoration lines.
    #[inline]
    pub fn with_text_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    /// Sets the decoration color.
    #[inline]
    pub fn with_decoration_color(mut self, color: Color) -> Self {
        self.decoration_color = Some(color);
        self
    }

    /// Sets the decoration line style.
    #[inline]
    pub fn with_decoration_style(mut self, style: DecorationStyle) -> Self {
        self.decoration_style = Some(style);
        self
    }

    /// Sets the text shadow.
    #[inline]
    pub fn with_text_shadow(mut self, shadow: TextShadow) -> Self {
        self.text_shadow = Some(shadow);
        self
    }

    /// Sets the case transform.
    #[inline]
    pub fn with_text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    /// Unsets every property in `mask`, so that they inherit again.
    #[must_use]
    pub fn without(mut self, mask: AttributeMask) -> Self {
        let clears = |bit: AttributeMask| mask.contains(bit);
        if clears(AttributeMask::FONT_FAMILY) {
            self.font_family = None;
        }
        if clears(AttributeMask::FONT_SIZE) {
            self.font_size = None;
        }
        if clears(AttributeMask::FONT_SIZE_MULTIPLIER) {
            self.font_size_multiplier = None;
        }
        if clears(AttributeMask::FONT_WEIGHT) {
            self.font_weight = None;
        }
        if clears(AttributeMask::FONT_STYLE) {
            self.font_style = None;
        }
        if clears(AttributeMask::FONT_VARIANT) {
            self.font_variant = None;
        }
        if clears(AttributeMask::FOREGROUND_COLOR) {
            self.foreground_color = None;
        }
        if clears(AttributeMask::BACKGROUND_COLOR) {
            self.background_color = None;
        }
        if clears(AttributeMask::OPACITY) {
            self.opacity = None;
        }
        if clears(AttributeMask::LETTER_SPACING) {
            self.letter_spacing = None;
        }
        if clears(AttributeMask::LINE_HEIGHT) {
            self.line_height = None;
        }
        if clears(AttributeMask::TEXT_ALIGN) {
            self.text_align = None;
        }
        if clears(AttributeMask::TEXT_DECORATION) {
            self.text_decoration = None;
        }
        if clears(AttributeMask::DECORATION_COLOR) {
            self.decoration_color = None;
        }
        if clears(AttributeMask::DECORATION_STYLE) {
            self.decoration_style = None;
        }
        if clears(AttributeMask::TEXT_SHADOW) {
            self.text_shadow = None;
        }
        if clears(AttributeMask::TEXT_TRANSFORM) {
            self.text_transform = None;
        }
        self
    }
}
