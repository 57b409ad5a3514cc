// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use hermes_plugins::{Plugin, PluginContext, PluginError};
use tokio::task::JoinHandle;
use tracing::info;

/// Subscribes to every known adapter's topic and prints one line per
/// session update it observes. Proves events flow from the Watcher
/// Manager through the Event Dispatcher to a plugin without any
/// rendering layer.
#[derive(Default)]
pub struct StatusPlugin {
    handles: Vec<JoinHandle<()>>,
}

impl StatusPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for StatusPlugin {
    fn id(&self) -> &str {
        "status"
    }

    fn init(&mut self, _ctx: &PluginContext) -> Result<(), PluginError> {
        Ok(())
    }

    fn start(&mut self, ctx: &PluginContext) -> Result<(), PluginError> {
        for adapter_id in ctx.adapters.keys().map(|id| id.to_string()) {
            let mut rx = ctx.event_bus.subscribe(adapter_id.clone());
            self.handles.push(tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    info!(adapter = %adapter_id, topic = %event.topic, kind = ?event.kind(), "status: session update");
                }
            }));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PluginError> {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
