// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::PluginContext;
use crate::error::PluginError;

/// A unit of behavior composed onto the core at startup and at every
/// project switch (spec §4.6 "Plugin Registry").
///
/// Plugins are not `Clone`: the registry owns each one for its whole
/// lifetime and calls `init`/`start`/`stop` in place rather than
/// reconstructing it, so `Reinit` can tell a plugin to reconfigure
/// itself against the new context instead of dropping and replacing it.
pub trait Plugin: Send + Sync {
    /// Stable identifier, e.g. `"status-bar"`. Used as the key in the
    /// registry's `unavailable` map and in logs.
    fn id(&self) -> &str;

    /// Resolve this plugin against `ctx`. Called once at registration
    /// and again on every `Reinit`. An `Err` here marks the plugin
    /// unavailable for the current epoch (spec §4.6's state diagram);
    /// a panic is treated the same way by the registry.
    fn init(&mut self, ctx: &PluginContext) -> Result<(), PluginError>;

    /// Begin whatever background activity this plugin performs.
    /// Default no-op for plugins that only react to events published
    /// through `ctx.event_bus`.
    fn start(&mut self, _ctx: &PluginContext) -> Result<(), PluginError> {
        Ok(())
    }

    /// Wind down background activity started in `start`. Default no-op.
    fn stop(&mut self) -> Result<(), PluginError> {
        Ok(())
    }
}
