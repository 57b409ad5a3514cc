// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability declarations an adapter exposes (spec §4.1 `Capabilities()`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named feature an adapter may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Sessions,
    Messages,
    Usage,
    Watch,
    Search,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Sessions,
        Capability::Messages,
        Capability::Usage,
        Capability::Watch,
        Capability::Search,
    ];
}

/// The capability-name-to-bool mapping an adapter declares.
///
/// Capabilities absent from the map are treated as unsupported, matching
/// `CapabilitySet::is_supported`'s default-false behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet(HashMap<Capability, bool>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, cap: Capability, supported: bool) -> Self {
        self.0.insert(cap, supported);
        self
    }

    /// Whether a capability is declared and set to `true`.
    pub fn is_supported(&self, cap: Capability) -> bool {
        self.0.get(&cap).copied().unwrap_or(false)
    }

    pub fn as_map(&self) -> &HashMap<Capability, bool> {
        &self.0
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
