// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multiplexes one [`TieredWatcher`] per adapter into a single aggregated
//! event stream, and centralizes session registration across adapters
//! (spec §2 "Watcher Manager").

use crate::config::WatcherConfig;
use crate::error::WatchError;
use crate::state::WatchEvent;
use crate::watcher::TieredWatcher;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// A [`WatchEvent`] tagged with the adapter whose watcher produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterWatchEvent {
    pub adapter_id: String,
    pub event: WatchEvent,
}

/// Owns a per-adapter [`TieredWatcher`] and forwards every watcher's
/// events onto one shared channel, so a consumer can observe freshness
/// across every present adapter without polling each watcher in turn.
pub struct WatcherManager {
    watchers: HashMap<String, TieredWatcher>,
    events_tx: mpsc::UnboundedSender<AdapterWatchEvent>,
}

impl WatcherManager {
    /// A manager with no adapters registered yet. Returns the handle and
    /// the aggregated events channel every adapter's watcher forwards
    /// into.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AdapterWatchEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (
            Self {
                watchers: HashMap::new(),
                events_tx,
            },
            events_rx,
        )
    }

    /// Start a [`TieredWatcher`] for `adapter_id` and begin forwarding
    /// its events onto the aggregated stream. Replacing an adapter that
    /// is already registered closes its prior watcher first.
    pub fn register_adapter(
        &mut self,
        adapter_id: impl Into<String>,
        config: WatcherConfig,
    ) -> Result<(), WatchError> {
        let adapter_id = adapter_id.into();
        let (watcher, mut rx) = TieredWatcher::start(config)?;

        if let Some(prior) = self.watchers.insert(adapter_id.clone(), watcher) {
            prior.close();
        }

        let tagged_tx = self.events_tx.clone();
        let forwarded_id = adapter_id.clone();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                if tagged_tx
                    .send(AdapterWatchEvent {
                        adapter_id: forwarded_id.clone(),
                        event,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        Ok(())
    }

    /// Register `paths` as sessions under `adapter_id`'s watcher.
    /// Returns the empty vector if `adapter_id` has no registered
    /// watcher.
    pub fn register_sessions(
        &self,
        adapter_id: &str,
        config: &WatcherConfig,
        paths: Vec<PathBuf>,
    ) -> Vec<String> {
        match self.watchers.get(adapter_id) {
            Some(watcher) => watcher.register_sessions(config, paths),
            None => {
                tracing::warn!(adapter = adapter_id, "register_sessions: unknown adapter");
                Vec::new()
            }
        }
    }

    pub fn promote_to_hot(&self, adapter_id: &str, session_id: &str) {
        if let Some(watcher) = self.watchers.get(adapter_id) {
            watcher.promote_to_hot(session_id);
        }
    }

    pub fn touch(&self, adapter_id: &str, session_id: &str) {
        if let Some(watcher) = self.watchers.get(adapter_id) {
            watcher.touch(session_id);
        }
    }

    /// `(hot, cold, frozen, watched_dirs)` per registered adapter.
    pub fn stats(&self) -> HashMap<String, (usize, usize, usize, usize)> {
        self.watchers
            .iter()
            .map(|(id, watcher)| (id.clone(), watcher.stats()))
            .collect()
    }

    pub fn adapter_ids(&self) -> Vec<String> {
        self.watchers.keys().cloned().collect()
    }

    /// Close every registered adapter's watcher. Idempotent.
    pub fn close_all(&self) {
        for watcher in self.watchers.values() {
            watcher.close();
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
