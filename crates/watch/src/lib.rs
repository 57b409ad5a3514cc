// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Tiered (HOT/COLD/FROZEN) session freshness watcher (spec §4.4).
//!
//! Sessions start COLD (or FROZEN, if already stale) on registration.
//! Promoting one to HOT gets it a live fs-notify watch on its
//! directory, shared with any other HOT session in the same directory;
//! demoting the least-recently-accessed HOT session releases that watch
//! once no HOT session still needs it. COLD sessions are checked on a
//! timer instead; FROZEN sessions are skipped entirely until touched.

mod config;
mod error;
mod fswatch;
mod manager;
mod poll;
mod state;
mod watcher;

pub use config::WatcherConfig;
pub use error::WatchError;
pub use manager::{AdapterWatchEvent, WatcherManager};
pub use state::{DirWatchChange, SessionRecord, Tier, WatchEvent};
pub use watcher::TieredWatcher;
