// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generation counter used to invalidate in-flight asynchronous results
//! across a project switch (spec §4.7, §9 "Stale async messages").

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonically increasing generation number. The zero value is the
/// epoch every [`EpochCounter`] starts at, before any project switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Epoch(u64);

impl Epoch {
    pub const INITIAL: Epoch = Epoch(0);

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared, clonable source of truth for the current epoch.
///
/// Every project switch calls [`EpochCounter::bump`] exactly once; nothing
/// else is permitted to advance it (spec §4.7: "Epoch is bumped in exactly
/// one place: project switch").
#[derive(Debug, Clone)]
pub struct EpochCounter(Arc<AtomicU64>);

impl Default for EpochCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EpochCounter {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU64::new(0)))
    }

    pub fn current(&self) -> Epoch {
        Epoch(self.0.load(Ordering::SeqCst))
    }

    /// Strictly increases the epoch and returns the new value.
    pub fn bump(&self) -> Epoch {
        Epoch(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Contract every async-result message type implements so staleness
/// checking is mechanical (spec §9: "the interface that defines
/// carries-an-epoch is mechanical and easy to get right for every message
/// type").
pub trait EpochTagged {
    fn epoch(&self) -> Epoch;
}

/// Generic wrapper that stamps any value with the epoch it was produced
/// under, for async work that doesn't otherwise carry one.
#[derive(Debug, Clone)]
pub struct Stamped<T> {
    pub epoch: Epoch,
    pub value: T,
}

impl<T> Stamped<T> {
    pub fn new(epoch: Epoch, value: T) -> Self {
        Self { epoch, value }
    }
}

impl<T> EpochTagged for Stamped<T> {
    fn epoch(&self) -> Epoch {
        self.epoch
    }
}

#[cfg(test)]
#[path = "epoch_tests.rs"]
mod tests;
