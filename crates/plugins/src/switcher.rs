// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::registry::PluginRegistry;
use hermes_core::{Epoch, EpochCounter};
use std::path::PathBuf;
use tracing::info;

/// Drives a project switch: bumps the shared epoch, rebuilds the plugin
/// context for the new root, and reinitializes every registered plugin
/// against it (spec §4.7 "Project Switcher").
///
/// The epoch bump happens before `reinit` runs, so any async work still
/// in flight under the old epoch is already stale by the time plugins
/// observe the new context.
pub struct ProjectSwitcher {
    epoch: EpochCounter,
}

impl ProjectSwitcher {
    pub fn new(epoch: EpochCounter) -> Self {
        Self { epoch }
    }

    pub fn current_epoch(&self) -> Epoch {
        self.epoch.current()
    }

    /// Switch `registry`'s active project to `project_root`, working out
    /// of `work_dir`. Returns the new epoch and the ids of plugins ready
    /// to be started against it.
    pub fn switch(
        &self,
        registry: &mut PluginRegistry,
        work_dir: PathBuf,
        project_root: PathBuf,
    ) -> (Epoch, Vec<String>) {
        let new_epoch = self.epoch.bump();
        info!(project = %project_root.display(), epoch = %new_epoch, "switching project");
        let ctx = registry.context().rebuild(work_dir, project_root, new_epoch);
        let ready = registry.reinit(ctx);
        (new_epoch, ready)
    }
}

#[cfg(test)]
#[path = "switcher_tests.rs"]
mod tests;
