// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the Adapter Factory Registry, the Watcher Manager, the Event
//! Dispatcher, and the Plugin Registry into a running process (spec §2
//! "Data and control flow").

use crate::error::AppError;
use hermes_adapters::{Adapter, AdapterRegistry, ClaudeCodeAdapter, HonestAdapter};
use hermes_core::{AdapterId, Capability};
use hermes_events::EventDispatcher;
use hermes_plugins::{Plugin, PluginContext, PluginRegistry};
use hermes_watch::{WatcherConfig, WatcherManager};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Every adapter constructor the binary knows about, in registration
/// order (spec §4.2 "RegisterFactory... order reflects registration
/// order").
fn register_known_adapters(registry: &AdapterRegistry) {
    registry.register_factory(Box::new(|| Box::new(ClaudeCodeAdapter::new())));
    registry.register_factory(Box::new(|| Box::new(HonestAdapter::cursor())));
    registry.register_factory(Box::new(|| Box::new(HonestAdapter::warp())));
    registry.register_factory(Box::new(|| Box::new(HonestAdapter::opencode())));
    registry.register_factory(Box::new(|| Box::new(HonestAdapter::amp())));
}

/// A running instance of the substrate for one project root. Owns every
/// long-lived component and the plugins composed over them.
pub struct App {
    watcher_manager: WatcherManager,
    watcher_events: tokio::sync::mpsc::UnboundedReceiver<hermes_watch::AdapterWatchEvent>,
    event_bus: Arc<EventDispatcher>,
    plugin_registry: PluginRegistry,
}

impl App {
    /// Detect present adapters under `project_root`, start a Tiered
    /// Watcher per present adapter, register every known session with
    /// it, and bring up the plugin registry with the two built-in
    /// plugins started.
    pub async fn bootstrap(work_dir: PathBuf, project_root: PathBuf) -> Result<Self, AppError> {
        let adapter_registry = AdapterRegistry::new();
        register_known_adapters(&adapter_registry);
        let present = adapter_registry.detect_adapters(&project_root).await;
        info!(count = present.len(), "adapters present in project");

        let (mut watcher_manager, watcher_events) = WatcherManager::new();
        for (id, adapter) in &present {
            if let Err(e) =
                start_adapter_watcher(&mut watcher_manager, id, adapter.as_ref(), &project_root)
                    .await
            {
                warn!(adapter = %id, error = %e, "failed to start watcher for adapter");
            }
        }

        let event_bus = Arc::new(EventDispatcher::new());
        let adapters: std::collections::HashMap<AdapterId, Arc<dyn Adapter>> = present
            .into_iter()
            .map(|(id, adapter)| (AdapterId::new(id), adapter))
            .collect();

        let mut ctx = PluginContext::new(work_dir, project_root, Arc::clone(&event_bus));
        ctx.adapters = adapters;

        let mut plugin_registry = PluginRegistry::new(ctx);
        register_builtin_plugins(&mut plugin_registry);
        plugin_registry.start();

        Ok(Self {
            watcher_manager,
            watcher_events,
            event_bus,
            plugin_registry,
        })
    }

    /// Forward watcher events onto the event bus, keyed by adapter id,
    /// until `shutdown` resolves, then stop every plugin and close every
    /// watcher (spec §4.4 "Close... idempotent").
    pub async fn run(mut self, shutdown: impl std::future::Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                event = self.watcher_events.recv() => {
                    match event {
                        Some(tagged) => self.publish_watch_event(tagged),
                        None => break,
                    }
                }
            }
        }
        info!("shutting down");
        self.plugin_registry.stop();
        self.watcher_manager.close_all();
    }

    fn publish_watch_event(&self, tagged: hermes_watch::AdapterWatchEvent) {
        let event = hermes_core::Event::new(
            tagged.adapter_id.clone(),
            chrono::Utc::now(),
            hermes_core::EventData::SessionUpdate {
                adapter_id: tagged.adapter_id.clone(),
                session_id: tagged.event.session_id,
                change_kind: tagged.event.change_kind,
            },
        );
        self.event_bus.publish(&tagged.adapter_id, event);
    }
}

async fn start_adapter_watcher(
    manager: &mut WatcherManager,
    adapter_id: &str,
    adapter: &dyn Adapter,
    project_root: &std::path::Path,
) -> Result<(), AppError> {
    if !adapter.capabilities().is_supported(Capability::Watch) {
        return Ok(());
    }
    let sessions = match adapter.list_sessions(project_root).await {
        Ok(sessions) => sessions,
        Err(e) => {
            warn!(adapter = adapter_id, error = %e, "list_sessions failed, not watching");
            return Ok(());
        }
    };
    let Some(root_dir) = sessions.first().and_then(|s| s.path.parent()) else {
        return Ok(());
    };

    let config = WatcherConfig::new(root_dir, "jsonl").with_poll_interval(Duration::from_secs(2));
    manager.register_adapter(adapter_id, config.clone())?;
    let paths = sessions.into_iter().map(|s| s.path).collect();
    manager.register_sessions(adapter_id, &config, paths);
    Ok(())
}

fn register_builtin_plugins(registry: &mut PluginRegistry) {
    let plugins: Vec<Box<dyn Plugin>> = vec![
        Box::new(crate::plugins::StatusPlugin::new()),
        Box::new(crate::plugins::HealthPlugin::new()),
    ];
    for plugin in plugins {
        registry.register(plugin);
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
