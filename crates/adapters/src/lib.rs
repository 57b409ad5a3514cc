// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-adapters: the Adapter Interface (spec §4.1), the Adapter Factory
//! Registry (spec §4.2), and concrete adapters for each supported
//! coding-assistant vendor.
//!
//! Claude Code gets a fully-featured adapter over its JSONL session log
//! store. The remaining vendors (Cursor, Warp, OpenCode, Amp) ship as
//! capability-limited adapters: they can detect project membership, but
//! decline `sessions`/`messages` until their on-disk formats are
//! implemented, rather than guessing at an unverified wire format.

mod claude_code;
mod error;
mod honest;
mod registry;
mod traits;

pub use claude_code::ClaudeCodeAdapter;
pub use error::AdapterError;
pub use honest::HonestAdapter;
pub use registry::AdapterRegistry;
pub use traits::{Adapter, AdapterFactory};

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{AdapterCall, FakeAdapter};
