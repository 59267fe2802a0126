// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text`.
//!
//! - The `util` module contains shared helpers for building trees.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that helpers can be shared between modules.
//! - For test naming, put the "topic" of the test at the start of the name, for example
//!   `cache_reuses_sibling` rather than `sibling_is_reused_by_cache`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod cache;
mod compose;
mod mount;
mod util;
