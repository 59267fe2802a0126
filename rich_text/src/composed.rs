// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use rich_text_style::StyleAttributes;

/// The character appended in place of embedded content.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// A contiguous byte range of composed text tagged with a single set of effective attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    /// The byte range in the composed text. Never empty.
    pub range: Range<usize>,
    /// The effective (merged) attributes of the node that produced this run.
    pub attributes: Arc<StyleAttributes>,
}

/// The position reserved for a piece of embedded content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbeddedPlaceholder {
    /// Host-defined identity of the content.
    pub id: u64,
    /// Byte offset of the [`OBJECT_REPLACEMENT_CHARACTER`] in the composed text.
    pub index: usize,
    /// Measured width in pixels.
    pub width: f32,
    /// Measured height in pixels.
    pub height: f32,
}

/// The flattened result of composing a rich text subtree.
///
/// The runs are in document order and partition the text: concatenating their ranges yields
/// `0..len()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposedText {
    text: String,
    runs: Vec<StyledRun>,
    placeholders: Vec<EmbeddedPlaceholder>,
}

impl ComposedText {
    /// Creates an empty composed text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the composed text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the composed text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the composed text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the raw runs in document order.
    ///
    /// Adjacent runs may carry equal attributes; see [`coalesced_runs`](Self::coalesced_runs).
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Returns an iterator over runs with adjacent equal attributes merged.
    pub fn coalesced_runs(&self) -> CoalescedRuns<'_> {
        CoalescedRuns {
            inner: self.runs.iter(),
            pending: None,
        }
    }

    /// Returns the embedded content placeholders in document order.
    pub fn placeholders(&self) -> &[EmbeddedPlaceholder] {
        &self.placeholders
    }

    /// Returns the attributes of the run containing `index`, if any.
    pub fn attributes_at(&self, index: usize) -> Option<&Arc<StyleAttributes>> {
        let ix = self
            .runs
            .binary_search_by(|run| {
                if run.range.end <= index {
                    core::cmp::Ordering::Less
                } else if run.range.start > index {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .ok()?;
        Some(&self.runs[ix].attributes)
    }

    pub(crate) fn push_text(&mut self, text: &str, attributes: &Arc<StyleAttributes>) {
        if text.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(text);
        self.runs.push(StyledRun {
            range: start..self.text.len(),
            attributes: attributes.clone(),
        });
    }

    pub(crate) fn push_placeholder(
        &mut self,
        id: u64,
        width: f32,
        height: f32,
        attributes: &Arc<StyleAttributes>,
    ) {
        let index = self.text.len();
        self.placeholders.push(EmbeddedPlaceholder {
            id,
            index,
            width,
            height,
        });
        self.text.push(OBJECT_REPLACEMENT_CHARACTER);
        self.runs.push(StyledRun {
            range: index..self.text.len(),
            attributes: attributes.clone(),
        });
    }

    /// Appends a nested composition, shifting its offsets past the current end.
    pub(crate) fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.runs.extend(other.runs.iter().map(|run| StyledRun {
            range: run.range.start + offset..run.range.end + offset,
            attributes: run.attributes.clone(),
        }));
        self.placeholders
            .extend(other.placeholders.iter().map(|p| EmbeddedPlaceholder {
                index: p.index + offset,
                ..*p
            }));
    }
}

/// An iterator over the coalesced runs of a [`ComposedText`].
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a> {
    inner: core::slice::Iter<'a, StyledRun>,
    pending: Option<StyledRun>,
}

impl Iterator for CoalescedRuns<'_> {
    type Item = StyledRun;

    fn next(&mut self) -> Option<Self::Item> {
        let mut run = self.pending.take().or_else(|| self.inner.next().cloned())?;

        for next_run in self.inner.by_ref() {
            if next_run.range.start == run.range.end
                && (Arc::ptr_eq(&next_run.attributes, &run.attributes)
                    || next_run.attributes == run.attributes)
            {
                run.range.end = next_run.range.end;
                continue;
            }
            self.pending = Some(next_run.clone());
            break;
        }

        Some(run)
    }
}
