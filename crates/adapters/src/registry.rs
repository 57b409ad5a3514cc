// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Adapter Factory Registry (spec §4.2).

use crate::traits::{Adapter, AdapterFactory};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Process-wide, append-only set of adapter constructors.
///
/// Separating "what exists in the build" ([`AdapterRegistry::all_adapters`])
/// from "what is present in this project" ([`AdapterRegistry::detect_adapters`])
/// lets plugins apply their own project-scope rules without invalidating
/// long-lived adapter objects on a project switch.
pub struct AdapterRegistry {
    instances: RwLock<Vec<Arc<dyn Adapter>>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(Vec::new()),
        }
    }

    /// Append a constructor and build its instance immediately. Order
    /// reflects registration order for every later enumeration.
    pub fn register_factory(&self, factory: AdapterFactory) {
        let adapter: Arc<dyn Adapter> = Arc::from(factory());
        self.instances.write().push(adapter);
    }

    /// Invoke `detect` on every registered adapter, keeping the ones that
    /// report membership. Detection failures are treated as "not
    /// present", per the Adapter Interface's `detect` contract.
    pub async fn detect_adapters(
        &self,
        project_root: &Path,
    ) -> HashMap<String, Arc<dyn Adapter>> {
        let instances = self.instances.read().clone();
        let mut present = HashMap::new();
        for adapter in instances {
            match adapter.detect(project_root).await {
                Ok(true) => {
                    present.insert(adapter.id().to_string(), adapter);
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(adapter = adapter.id(), error = %e, "adapter detect failed, skipping");
                }
            }
        }
        present
    }

    /// Every registered adapter, regardless of per-project detection.
    pub fn all_adapters(&self) -> HashMap<String, Arc<dyn Adapter>> {
        self.instances
            .read()
            .iter()
            .map(|a| (a.id().to_string(), Arc::clone(a)))
            .collect()
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.instances.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
