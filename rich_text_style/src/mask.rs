// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A set of [`StyleAttributes`](crate::StyleAttributes) properties.
///
/// Used to report which properties are explicitly set on a value, and which were inherited
/// during a merge.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttributeMask(u32);

macro_rules! attribute_bits {
    ($($(#[$doc:meta])* $name:ident = $bit:literal, $label:literal;)*) => {
        impl AttributeMask {
            $(
                $(#[$doc])*
                pub const $name: Self = Self(1 << $bit);
            )*

            /// Every property.
            pub const ALL: Self = Self($((1 << $bit))|*);

            const LABELS: &'static [(Self, &'static str)] = &[$((Self::$name, $label)),*];
        }
    };
}

attribute_bits! {
    /// `font_family`.
    FONT_FAMILY = 0, "font_family";
    /// `font_size`.
    FONT_SIZE = 1, "font_size";
    /// `font_size_multiplier`.
    FONT_SIZE_MULTIPLIER = 2, "font_size_multiplier";
    /// `font_weight`.
    FONT_WEIGHT = 3, "font_weight";
    /// `font_style`.
    FONT_STYLE = 4, "font_style";
    /// `font_variant`.
    FONT_VARIANT = 5, "font_variant";
    /// `foreground_color`.
    FOREGROUND_COLOR = 6, "foreground_color";
    /// `background_color`.
    BACKGROUND_COLOR = 7, "background_color";
    /// `opacity`.
    OPACITY = 8, "opacity";
    /// `letter_spacing`.
    LETTER_SPACING = 9, "letter_spacing";
    /// `line_height`.
    LINE_HEIGHT = 10, "line_height";
    /// `text_align`.
    TEXT_ALIGN = 11, "text_align";
    /// `text_decoration`.
    TEXT_DECORATION = 12, "text_decoration";
    /// `decoration_color`.
    DECORATION_COLOR = 13, "decoration_color";
    /// `decoration_style`.
    DECORATION_STYLE = 14, "decoration_style";
    /// `text_shadow`.
    TEXT_SHADOW = 15, "text_shadow";
    /// `text_transform`.
    TEXT_TRANSFORM = 16, "text_transform";
}

impl AttributeMask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of properties in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if every property in `other` is in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds the properties of `other` to `self`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the properties of `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the property names in the set, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::LABELS
            .iter()
            .filter(move |(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
    }
}

impl fmt::Debug for AttributeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
