// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mergeable text style attributes for nested rich text.
//!
//! - [`StyleAttributes`] is an immutable record of optional text properties. A property is either
//!   *set* (explicitly specified on a node) or *unset* (inherited from an ancestor).
//! - [`StyleAttributes::merge`] combines an inherited value with a local override, field by field.
//! - [`ResolvedAttributes`] is the concrete form handed to a layout engine, with defaults filled in.
//!
//! ## Merge model
//!
//! Merging is a right-biased override: for each property, the override's value wins when set,
//! otherwise the base value is kept. Merging a chain of ancestors top-down is deterministic, but
//! it is an override rather than a general associative operation, so callers should always merge
//! in root-to-leaf order.
//!
//! ## Example
//!
//! ```
//! use rich_text_style::{FontWeight, StyleAttributes};
//! use peniko::color::palette::css;
//!
//! let inherited = StyleAttributes::new().with_foreground_color(css::BLACK);
//! let local = StyleAttributes::new().with_font_weight(FontWeight::BOLD);
//!
//! let effective = StyleAttributes::merge(&inherited, &local);
//! assert_eq!(effective.foreground_color(), Some(css::BLACK));
//! assert_eq!(effective.font_weight(), Some(FontWeight::BOLD));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards to `peniko/std`.
//! - `libm`: Forwards to `peniko/libm` for `no_std` targets.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

mod attributes;
mod decoration;
mod font;
mod mask;
mod resolved;
mod values;


pub use attributes::StyleAttributes;
pub use decoration::{DecorationStyle, TextDecoration, TextShadow};
pub use font::{FontStyle, FontVariant, FontWeight};
pub use mask::AttributeMask;
pub use resolved::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, ResolvedAttributes};
pub use values::{TextAlign, TextTransform};

pub use peniko::Color;
