// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The immutable bundle handed to every plugin (spec §3 "Plugin Context").

use hermes_adapters::Adapter;
use hermes_config::WorkspaceConfig;
use hermes_core::{AdapterId, Epoch};
use hermes_events::EventDispatcher;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Out-of-scope hook for presentation plugins to register terminal
/// keybindings. The core never calls into this itself; it exists so
/// `PluginContext` carries the field spec.md names without the core
/// depending on any particular terminal UI.
pub trait KeymapRegistrar: Send + Sync {
    fn register(&self, binding: &str, action: &str);
}

/// A registrar that discards every binding, for contexts with no
/// presentation layer attached (e.g. headless/daemon use, tests).
pub struct NullKeymapRegistrar;

impl KeymapRegistrar for NullKeymapRegistrar {
    fn register(&self, _binding: &str, _action: &str) {}
}

/// Services handed to every plugin. Immutable once constructed; a
/// project switch builds a new `PluginContext` rather than mutating
/// this one (spec §5 "Plugin Context is immutable once handed out").
#[derive(Clone)]
pub struct PluginContext {
    pub work_dir: PathBuf,
    pub project_root: PathBuf,
    pub config_dir: PathBuf,
    pub config: Option<WorkspaceConfig>,
    pub adapters: HashMap<AdapterId, Arc<dyn Adapter>>,
    pub event_bus: Arc<EventDispatcher>,
    pub logger: tracing::Span,
    pub keymap_registrar: Arc<dyn KeymapRegistrar>,
    pub epoch: Epoch,
}

impl PluginContext {
    /// A context for `project_root`, with no adapters or config
    /// resolved yet; callers populate `adapters`/`config` before
    /// handing it to the registry.
    pub fn new(work_dir: PathBuf, project_root: PathBuf, event_bus: Arc<EventDispatcher>) -> Self {
        let config_dir = project_root.join(".hermes");
        Self {
            logger: tracing::info_span!("hermes", project = %project_root.display()),
            work_dir,
            project_root,
            config_dir,
            config: None,
            adapters: HashMap::new(),
            event_bus,
            keymap_registrar: Arc::new(NullKeymapRegistrar),
            epoch: Epoch::INITIAL,
        }
    }

    /// A copy of this context for `work_dir`/`project_root` at `epoch`,
    /// preserving the dispatcher, adapters, logger, and keymap
    /// registrar (spec §4.6 Reinit).
    pub fn rebuild(&self, work_dir: PathBuf, project_root: PathBuf, epoch: Epoch) -> Self {
        Self {
            config_dir: project_root.join(".hermes"),
            logger: tracing::info_span!("hermes", project = %project_root.display()),
            work_dir,
            project_root,
            config: self.config.clone(),
            adapters: self.adapters.clone(),
            event_bus: self.event_bus.clone(),
            keymap_registrar: self.keymap_registrar.clone(),
            epoch,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
