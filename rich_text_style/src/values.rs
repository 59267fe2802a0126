// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;

/// Horizontal alignment of lines within the layout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Start-aligned, following the writing direction of the paragraph.
    #[default]
    Natural,
    /// Aligned to the left edge.
    Left,
    /// Centered.
    Center,
    /// Aligned to the right edge.
    Right,
    /// Every line except the last is stretched to the full width.
    Justify,
}

impl TextAlign {
    /// Parses a `text-align` keyword. `auto` maps to [`TextAlign::Natural`].
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "auto" => Self::Natural,
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            "justify" => Self::Justify,
            _ => return None,
        })
    }
}

/// Case transform applied to literal text during composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextTransform {
    /// Text is used as written.
    #[default]
    None,
    /// Every character is uppercased.
    Uppercase,
    /// Every character is lowercased.
    Lowercase,
    /// The first letter of every word is uppercased; the rest is left untouched.
    Capitalize,
}

impl TextTransform {
    /// Parses a `text-transform` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "none" => Self::None,
            "uppercase" => Self::Uppercase,
            "lowercase" => Self::Lowercase,
            "capitalize" => Self::Capitalize,
            _ => return None,
        })
    }

    /// Applies this transform to `text`.
    ///
    /// Borrows the input when it is left unchanged.
    ///
    /// ```
    /// use rich_text_style::TextTransform;
    ///
    /// assert_eq!(TextTransform::Capitalize.apply("hello wide world"), "Hello Wide World");
    /// assert_eq!(TextTransform::Uppercase.apply("straße"), "STRASSE");
    /// ```
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::None => Cow::Borrowed(text),
            Self::Uppercase => Cow::Owned(text.to_uppercase()),
            Self::Lowercase => Cow::Owned(text.to_lowercase()),
            Self::Capitalize => capitalize(text),
        }
    }
}

fn capitalize(text: &str) -> Cow<'_, str> {
    let needs_change = word_starts(text).any(|c| c.is_lowercase());
    if !needs_change {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    Cow::Owned(out)
}

fn word_starts(text: &str) -> impl Iterator<Item = char> + '_ {
    let mut prev_is_word = false;
    text.chars().filter(move |c| {
        let is_word = c.is_alphanumeric();
        let starts = is_word && !prev_is_word;
        prev_is_word = is_word;
        starts
    })
}

#[cfg(test)]
mod tests {
    use super::{TextAlign, TextTransform};
    use alloc::borrow::Cow;

    #[test]
    fn transform_none_borrows() {
        assert!(matches!(TextTransform::None.apply("abc"), Cow::Borrowed("abc")));
        assert!(matches!(
            TextTransform::Capitalize.apply("Already Done"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn capitalize_handles_punctuation() {
        assert_eq!(
            TextTransform::Capitalize.apply("(and tiny-bold) ok"),
            "(And Tiny-Bold) Ok"
        );
        assert_eq!(TextTransform::Lowercase.apply("MiXeD"), "mixed");
    }

    #[test]
    fn align_parse() {
        assert_eq!(TextAlign::parse("auto"), Some(TextAlign::Natural));
        assert_eq!(TextAlign::parse("justify"), Some(TextAlign::Justify));
        assert_eq!(TextAlign::parse("middle"), None);
    }
}
