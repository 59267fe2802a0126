// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use rich_text_style::StyleAttributes;

use crate::ComposedText;

/// The inputs a cached composition was computed from.
#[derive(Clone, Debug, PartialEq)]
struct Fingerprint {
    base: StyleAttributes,
    revision: u64,
}

#[derive(Clone, Debug)]
struct CacheEntry {
    fingerprint: Fingerprint,
    composed: Arc<ComposedText>,
}

/// Per-node memoization of a composed subtree.
///
/// An entry is only handed out when its fingerprint (base attributes, node revision) matches
/// the caller's inputs. Mutations drop the entry eagerly.
#[derive(Clone, Debug, Default)]
pub struct CompositionCache {
    entry: Option<CacheEntry>,
}

impl CompositionCache {
    /// Returns `true` if an entry is present.
    pub fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns the cached composition if it was computed from exactly these inputs.
    pub fn lookup(&self, base: &StyleAttributes, revision: u64) -> Option<&Arc<ComposedText>> {
        let entry = self.entry.as_ref()?;
        (entry.fingerprint.revision == revision && entry.fingerprint.base == *base)
            .then_some(&entry.composed)
    }

    /// Returns the cached composition regardless of its inputs.
    pub fn composed(&self) -> Option<&Arc<ComposedText>> {
        self.entry.as_ref().map(|entry| &entry.composed)
    }

    pub(crate) fn store(
        &mut self,
        base: StyleAttributes,
        revision: u64,
        composed: Arc<ComposedText>,
    ) {
        self.entry = Some(CacheEntry {
            fingerprint: Fingerprint { base, revision },
            composed,
        });
    }

    /// Drops the entry. Returns `true` if one was present.
    pub(crate) fn invalidate(&mut self) -> bool {
        self.entry.take().is_some()
    }
}

/// Counters describing how composition requests were served.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompositionStats {
    /// Number of nodes composed from scratch.
    pub compositions: u64,
    /// Number of requests answered from a valid cache entry.
    pub cache_hits: u64,
}
