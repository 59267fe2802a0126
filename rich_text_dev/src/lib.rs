// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Rich Text Dev
//!
//! This crate provides utilities for developing `rich_text`: a font-free layout engine with
//! predictable metrics, an event sink that records notifications, and sample trees.

mod engine;
mod samples;
mod sink;

#[cfg(test)]
mod tests;

pub use engine::FixedAdvanceEngine;
pub use samples::{MULTILINE_SHRINK, SHRINK_TO_FIT, Sample, entity_paragraph, mixed_sizes};
pub use sink::RecordingEventSink;
