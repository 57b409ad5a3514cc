// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::PluginContext;
use crate::plugin::Plugin;
use std::collections::HashMap;
use tracing::{error, info, warn};

/// A plugin's lifecycle position, per spec §4.6's state diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginState {
    InitOk,
    Started,
    Stopped,
    /// Terminal for the current epoch; carries the reason. A later
    /// `Reinit` (new epoch) gives the plugin another chance.
    Unavailable(String),
}

struct Entry {
    plugin: Box<dyn Plugin>,
    state: PluginState,
}

/// Owns every registered plugin and drives its lifecycle. One panic or
/// error from a single plugin's `init`/`start`/`stop` is contained and
/// logged rather than propagated, so a misbehaving plugin can never take
/// down the others or the host (spec §4.6, §7 "Error handling").
pub struct PluginRegistry {
    entries: Vec<Entry>,
    ctx: PluginContext,
}

impl PluginRegistry {
    pub fn new(ctx: PluginContext) -> Self {
        Self {
            entries: Vec::new(),
            ctx,
        }
    }

    /// Add `plugin` to the registry and run its first `init`. Ordering
    /// is registration order, preserved across `Reinit`.
    pub fn register(&mut self, mut plugin: Box<dyn Plugin>) {
        let id = plugin.id().to_string();
        let state = Self::run_init(plugin.as_mut(), &self.ctx, &id);
        self.entries.push(Entry { plugin, state });
    }

    /// Call `start` on every plugin not currently `Unavailable`.
    pub fn start(&mut self) {
        let ctx = self.ctx.clone();
        for entry in &mut self.entries {
            if matches!(entry.state, PluginState::Unavailable(_)) {
                continue;
            }
            entry.state = Self::run_start(entry.plugin.as_mut(), &ctx);
        }
    }

    /// Call `stop` on every plugin not currently `Unavailable`.
    pub fn stop(&mut self) {
        for entry in &mut self.entries {
            if matches!(entry.state, PluginState::Unavailable(_)) {
                continue;
            }
            entry.state = Self::run_stop(entry.plugin.as_mut());
        }
    }

    /// Stop every plugin, then re-resolve each against a new context (a
    /// project switch, spec §4.7's `started ──stop──► stopped ──reinit──►
    /// init-ok` transition). Plugins `Unavailable` in the prior epoch get
    /// a fresh attempt, since unavailability is terminal only within an
    /// epoch. Returns the ids of plugins the caller should `start()`
    /// next — empty if any plugin came back unavailable this round.
    pub fn reinit(&mut self, ctx: PluginContext) -> Vec<String> {
        for entry in &mut self.entries {
            if !matches!(entry.state, PluginState::Unavailable(_)) {
                Self::run_stop(entry.plugin.as_mut());
            }
        }

        self.ctx = ctx;
        let mut ready = Vec::new();
        let mut any_unavailable = false;
        for entry in &mut self.entries {
            let id = entry.plugin.id().to_string();
            entry.state = Self::run_init(entry.plugin.as_mut(), &self.ctx, &id);
            match entry.state {
                PluginState::InitOk => ready.push(id),
                PluginState::Unavailable(_) => any_unavailable = true,
                _ => {}
            }
        }

        if any_unavailable {
            Vec::new()
        } else {
            ready
        }
    }

    pub fn context(&self) -> &PluginContext {
        &self.ctx
    }

    pub fn state(&self, id: &str) -> Option<&PluginState> {
        self.entries
            .iter()
            .find(|e| e.plugin.id() == id)
            .map(|e| &e.state)
    }

    /// Ids and reasons for every plugin currently unavailable.
    pub fn unavailable(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .filter_map(|e| match &e.state {
                PluginState::Unavailable(reason) => {
                    Some((e.plugin.id().to_string(), reason.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.plugin.id().to_string()).collect()
    }

    fn run_init(plugin: &mut dyn Plugin, ctx: &PluginContext, id: &str) -> PluginState {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| plugin.init(ctx)));
        match result {
            Ok(Ok(())) => {
                info!(plugin = %id, "plugin initialized");
                PluginState::InitOk
            }
            Ok(Err(e)) => {
                warn!(plugin = %id, error = %e, "plugin init failed, marking unavailable");
                PluginState::Unavailable(e.to_string())
            }
            Err(panic) => {
                let reason = panic_message(&panic);
                error!(plugin = %id, reason = %reason, "plugin init panicked, marking unavailable");
                PluginState::Unavailable(reason)
            }
        }
    }

    fn run_start(plugin: &mut dyn Plugin, ctx: &PluginContext) -> PluginState {
        let id = plugin.id().to_string();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| plugin.start(ctx)));
        match result {
            Ok(Ok(())) => PluginState::Started,
            Ok(Err(e)) => {
                warn!(plugin = %id, error = %e, "plugin start failed");
                PluginState::Stopped
            }
            Err(panic) => {
                error!(plugin = %id, reason = %panic_message(&panic), "plugin start panicked");
                PluginState::Stopped
            }
        }
    }

    fn run_stop(plugin: &mut dyn Plugin) -> PluginState {
        let id = plugin.id().to_string();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| plugin.stop()));
        match result {
            Ok(Ok(())) => PluginState::Stopped,
            Ok(Err(e)) => {
                warn!(plugin = %id, error = %e, "plugin stop failed");
                PluginState::Stopped
            }
            Err(panic) => {
                error!(plugin = %id, reason = %panic_message(&panic), "plugin stop panicked");
                PluginState::Stopped
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "plugin panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
