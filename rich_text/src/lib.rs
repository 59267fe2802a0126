// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of nested styled text into attributed text, with cached results and a layout
//! mounting state machine.
//!
//! A [`RichTextTree`] holds nodes that each carry a local [`StyleAttributes`], optional literal
//! text and an ordered list of children (nested nodes or [`EmbeddedContent`]). Asking the tree
//! for the [`composed_text`](RichTextTree::composed_text) of a node flattens its subtree into a
//! single [`ComposedText`]: one string plus styled runs carrying the effective attributes of the
//! node that produced them.
//!
//! Compositions are memoized per node. Every mutation invalidates the mutated node and all of
//! its ancestors, so the next read recomposes only the affected path.
//!
//! A top-level node renders through a [`LayoutConstraintsView`], which decides when the composed
//! text must be handed to a [`TextLayoutEngine`] and reports results to a [`LayoutEventSink`].
//! [`RichTextHost`] bundles a tree with its views.
//!
//! ## Example
//!
//! ```
//! use rich_text::{Child, NodeKind, RichTextTree};
//! use rich_text_style::{FontWeight, StyleAttributes};
//! use peniko::color::palette::css;
//!
//! let mut tree = RichTextTree::new();
//! let root = tree.create_node(NodeKind::Span);
//! let bold = tree.create_node(NodeKind::text("Hello, "));
//! let red = tree.create_node(NodeKind::text("world!"));
//! tree.set_style(bold, StyleAttributes::new().with_font_weight(FontWeight::BOLD))?;
//! tree.set_style(red, StyleAttributes::new().with_foreground_color(css::RED))?;
//! tree.set_children(root, [Child::Node(bold), Child::Node(red)])?;
//!
//! let base = StyleAttributes::new().with_foreground_color(css::BLACK);
//! let composed = tree.composed_text(root, &base)?;
//! assert_eq!(composed.as_str(), "Hello, world!");
//! assert_eq!(composed.runs()[0].attributes.foreground_color(), Some(css::BLACK));
//! assert_eq!(composed.runs()[1].attributes.foreground_color(), Some(css::RED));
//! # Ok::<(), rich_text::TreeError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwards to `rich_text_style/std` and `peniko/std`.
//! - `libm`: Forwards to `rich_text_style/libm` and `peniko/libm` for `no_std` targets.
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

mod cache;
mod composed;
mod composer;
mod constraints;
mod engine;
mod error;
mod events;
mod host;
mod node;
mod tree;
mod view;


pub use cache::{CompositionCache, CompositionStats};
pub use composed::{
    CoalescedRuns, ComposedText, EmbeddedPlaceholder, OBJECT_REPLACEMENT_CHARACTER, StyledRun,
};
pub use composer::AttributedTextComposer;
pub use constraints::{LayoutConstraints, LineBreakMode, MIN_FONT_SCALE_FLOOR};
pub use engine::{
    LayoutError, LayoutErrorKind, LayoutRequest, LineMetrics, TextLayout, TextLayoutEngine,
};
pub use error::{MountError, MountErrorKind, TreeError, TreeErrorKind};
pub use events::{LayoutEventSink, TextLayoutEvent};
pub use host::RichTextHost;
pub use node::{Child, EmbeddedContent, NodeId, NodeKind};
pub use tree::RichTextTree;
pub use view::{LayoutConstraintsView, MountOutcome, MountState, PendingLayout};

pub use rich_text_style::StyleAttributes;
