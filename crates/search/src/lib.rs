// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-search: the regex/literal line-scanner used to search across a
//! session's messages (spec §4.3 "Search Engine").
//!
//! The engine is pure and stateless: given a compiled pattern and a slice
//! of messages it produces [`MessageMatch`] records. It never touches the
//! filesystem or holds state between calls.

mod engine;
mod pattern;

pub use engine::{search_messages, ContentMatch, MessageMatch};
pub use pattern::{CompiledPattern, PatternError, SearchOptions};
