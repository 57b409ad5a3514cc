// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public entry point: the Tiered Watcher (spec §4.4).

use crate::config::WatcherConfig;
use crate::error::WatchError;
use crate::fswatch;
use crate::poll;
use crate::state::{SessionRecord, WatchEvent, WatcherState};
use notify::RecommendedWatcher;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::{mpsc, watch};

/// Tracks session freshness across HOT (fs-notified), COLD (polled), and
/// FROZEN (untouched) tiers, demoting and promoting sessions as they're
/// accessed so only a bounded number hold a live directory watch.
pub struct TieredWatcher {
    state: Arc<Mutex<WatcherState>>,
    fs_watcher: Arc<Mutex<RecommendedWatcher>>,
    cancel: watch::Sender<bool>,
}

impl TieredWatcher {
    /// Start the watcher's background tasks. Returns the watcher handle
    /// and the channel its events arrive on.
    pub fn start(config: WatcherConfig) -> Result<(Self, mpsc::UnboundedReceiver<WatchEvent>), WatchError> {
        let state = Arc::new(Mutex::new(WatcherState::new(
            config.hot_target,
            config.freeze_threshold,
        )));
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let fs_watcher = Arc::new(Mutex::new(fswatch::build_watcher(raw_tx)?));
        let (cancel, cancel_rx) = watch::channel(false);

        tokio::spawn(fswatch::run(
            raw_rx,
            state.clone(),
            fs_watcher.clone(),
            events_tx.clone(),
            cancel_rx.clone(),
        ));
        tokio::spawn(poll::run(
            state.clone(),
            events_tx,
            config.poll_interval,
            cancel_rx,
        ));

        Ok((
            Self {
                state,
                fs_watcher,
                cancel,
            },
            events_rx,
        ))
    }

    /// Register a single session file, landing it in COLD or FROZEN per
    /// its current `mod_time`.
    pub fn register_session(
        &self,
        config: &WatcherConfig,
        path: PathBuf,
    ) -> Result<String, WatchError> {
        let id = (config.extract_id)(&path);
        let meta = std::fs::metadata(&path).map_err(|source| WatchError::Io {
            path: path.clone(),
            source,
        })?;
        let mod_time = meta.modified().unwrap_or_else(|_| SystemTime::now());
        self.state
            .lock()
            .register(id.clone(), path, meta.len(), mod_time, SystemTime::now());
        Ok(id)
    }

    /// Register every session file under `paths`, skipping (and logging)
    /// any that can't be stat'd rather than failing the whole batch.
    pub fn register_sessions(&self, config: &WatcherConfig, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .into_iter()
            .filter_map(|path| match self.register_session(config, path) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable session path");
                    None
                }
            })
            .collect()
    }

    /// Promote `id` to HOT, acquiring a directory watch and demoting the
    /// least-recently-accessed HOT session if the tier is full.
    pub fn promote_to_hot(&self, id: &str) {
        let changes = self.state.lock().promote_to_hot(id);
        if !changes.is_empty() {
            fswatch::apply_changes(&mut self.fs_watcher.lock(), changes);
        }
    }

    /// Record access to `id`, unfreezing it if needed without changing
    /// its current tier otherwise.
    pub fn touch(&self, id: &str) {
        self.state.lock().touch(id, SystemTime::now());
    }

    pub fn set_hot_target(&self, n: usize) {
        self.state.lock().set_hot_target(n);
    }

    pub fn session(&self, id: &str) -> Option<SessionRecord> {
        self.state.lock().get(id).cloned()
    }

    /// `(hot, cold, frozen, watched_dirs)`.
    pub fn stats(&self) -> (usize, usize, usize, usize) {
        self.state.lock().stats()
    }

    /// Stop the background tasks. Idempotent.
    pub fn close(&self) {
        let _ = self.cancel.send(true);
    }
}

impl Drop for TieredWatcher {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
