// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values possible with variable
/// fonts.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if this weight renders as bold (600 and above).
    pub fn is_bold(self) -> bool {
        self.0 >= Self::SEMI_BOLD.0
    }

    /// Parses a `font-weight` keyword or number.
    ///
    /// Supported syntax (after trimming ASCII whitespace):
    /// - `normal` → `FontWeight::NORMAL`
    /// - `bold` → `FontWeight::BOLD`
    /// - a number in `1..=1000` → `FontWeight::new(value)`
    ///
    /// ```
    /// use rich_text_style::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("500"), Some(FontWeight::MEDIUM));
    /// assert_eq!(FontWeight::parse("1200"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            _ => {
                let value = s.parse::<f32>().ok()?;
                if !(1.0..=1000.0).contains(&value) {
                    return None;
                }
                Self(value)
            }
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NORMAL {
            f.write_str("normal")
        } else if *self == Self::BOLD {
            f.write_str("bold")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Slant of a font face.
///
/// In CSS, this corresponds to the `font-style` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// An upright or "roman" style.
    #[default]
    Normal,
    /// Generally a slanted style, originally based on semi-cursive forms.
    Italic,
    /// A slanted version of the upright style.
    Oblique,
}

impl FontStyle {
    /// Parses a `font-style` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }
}

/// A set of OpenType font variants.
///
/// Each variant maps onto a single OpenType feature tag, see [`FontVariant::feature_tags`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontVariant(u8);

impl FontVariant {
    /// No variants.
    pub const NONE: Self = Self(0);
    /// Small capitals (`smcp`).
    pub const SMALL_CAPS: Self = Self(1 << 0);
    /// Old-style figures (`onum`).
    pub const OLDSTYLE_NUMS: Self = Self(1 << 1);
    /// Lining figures (`lnum`).
    pub const LINING_NUMS: Self = Self(1 << 2);
    /// Tabular figures (`tnum`).
    pub const TABULAR_NUMS: Self = Self(1 << 3);
    /// Proportional figures (`pnum`).
    pub const PROPORTIONAL_NUMS: Self = Self(1 << 4);

    const TAGS: [(Self, [u8; 4], &'static str); 5] = [
        (Self::SMALL_CAPS, *b"smcp", "small-caps"),
        (Self::OLDSTYLE_NUMS, *b"onum", "oldstyle-nums"),
        (Self::LINING_NUMS, *b"lnum", "lining-nums"),
        (Self::TABULAR_NUMS, *b"tnum", "tabular-nums"),
        (Self::PROPORTIONAL_NUMS, *b"pnum", "proportional-nums"),
    ];

    /// Returns `true` if no variant is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every variant in `other` is enabled in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the OpenType feature tags for the enabled variants, in a stable order.
    pub fn feature_tags(self) -> impl Iterator<Item = [u8; 4]> {
        Self::TAGS
            .into_iter()
            .filter(move |(variant, _, _)| self.contains(*variant))
            .map(|(_, tag, _)| tag)
    }

    /// Parses a whitespace separated list of variant keywords, such as `"small-caps tabular-nums"`.
    ///
    /// Returns `None` if any keyword is unknown.
    pub fn parse(s: &str) -> Option<Self> {
        let mut out = Self::NONE;
        for keyword in s.split_ascii_whitespace() {
            let (variant, _, _) = Self::TAGS.iter().find(|(_, _, name)| *name == keyword)?;
            out = out.union(*variant);
        }
        Some(out)
    }
}
