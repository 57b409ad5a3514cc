// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use hermes_plugins::{Plugin, PluginContext, PluginError};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// Topic `HealthPlugin` periodically publishes a diagnostic snapshot to;
/// a presentation layer could subscribe here instead of polling.
pub const HEALTH_TOPIC: &str = "health";

/// Prints a one-line diagnostic every tick: how many adapters are
/// present and the plugin registry's current epoch. A real deployment
/// would render this; here it only proves the substrate stays alive
/// under its own event loop.
#[derive(Default)]
pub struct HealthPlugin {
    handle: Option<JoinHandle<()>>,
}

impl HealthPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for HealthPlugin {
    fn id(&self) -> &str {
        "health"
    }

    fn init(&mut self, _ctx: &PluginContext) -> Result<(), PluginError> {
        Ok(())
    }

    fn start(&mut self, ctx: &PluginContext) -> Result<(), PluginError> {
        let adapter_count = ctx.adapters.len();
        let epoch = ctx.epoch;
        let event_bus = Arc::clone(&ctx.event_bus);
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(30));
            loop {
                ticker.tick().await;
                info!(adapters = adapter_count, %epoch, "health: runtime alive");
                event_bus.publish(
                    HEALTH_TOPIC,
                    hermes_core::Event::new(
                        HEALTH_TOPIC,
                        chrono::Utc::now(),
                        hermes_core::EventData::RefreshNeeded,
                    ),
                );
            }
        }));
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PluginError> {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
