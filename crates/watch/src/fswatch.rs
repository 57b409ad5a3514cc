// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge between [`notify`]'s callback-based API and the tiered
//! watcher's async correlation loop.
//!
//! Grounded on the single-file `create_file_watcher` pattern used
//! elsewhere in this workspace for agent session logs, generalized to
//! watch whole directories (since several HOT sessions may share one)
//! and to debounce bursts of events into a single re-check per path.

use crate::error::WatchError;
use crate::state::{DirWatchChange, WatcherState};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::{mpsc, watch};

const DEBOUNCE: Duration = Duration::from_millis(100);

pub(crate) fn build_watcher(
    tx: mpsc::UnboundedSender<notify::Event>,
) -> Result<RecommendedWatcher, WatchError> {
    let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;
    Ok(watcher)
}

pub(crate) fn apply_changes(watcher: &mut RecommendedWatcher, changes: Vec<DirWatchChange>) {
    for change in changes {
        match change {
            DirWatchChange::Add(dir) => {
                if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
                    tracing::warn!(dir = %dir.display(), error = %e, "failed to watch directory");
                }
            }
            DirWatchChange::Remove(dir) => {
                if let Err(e) = watcher.unwatch(&dir) {
                    tracing::debug!(dir = %dir.display(), error = %e, "unwatch failed (already gone?)");
                }
            }
        }
    }
}

/// Debounces raw notify events and re-checks each touched path's
/// `(size, mod_time)` against the registered session it belongs to,
/// forwarding a [`crate::WatchEvent`] through `events_tx` on change.
pub(crate) async fn run(
    mut raw_rx: mpsc::UnboundedReceiver<notify::Event>,
    state: Arc<Mutex<WatcherState>>,
    fs_watcher: Arc<Mutex<RecommendedWatcher>>,
    events_tx: mpsc::UnboundedSender<crate::state::WatchEvent>,
    mut cancel: watch::Receiver<bool>,
) {
    let mut pending: HashSet<PathBuf> = HashSet::new();
    let mut flush = tokio::time::interval(DEBOUNCE);
    flush.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            maybe_event = raw_rx.recv() => {
                match maybe_event {
                    Some(event) => pending.extend(event.paths),
                    None => break,
                }
            }
            _ = flush.tick() => {
                if pending.is_empty() {
                    continue;
                }
                for path in pending.drain() {
                    process_path(&path, &state, &fs_watcher, &events_tx);
                }
            }
            _ = cancel.changed() => break,
        }
    }
}

fn process_path(
    path: &Path,
    state: &Arc<Mutex<WatcherState>>,
    fs_watcher: &Arc<Mutex<RecommendedWatcher>>,
    events_tx: &mpsc::UnboundedSender<crate::state::WatchEvent>,
) {
    let Some(id) = state.lock().find_id_by_path(path) else {
        return;
    };
    match std::fs::metadata(path) {
        Ok(meta) => {
            let size = meta.len();
            let mod_time = meta.modified().unwrap_or_else(|_| SystemTime::now());
            if let Some(event) = state.lock().observe(&id, size, mod_time) {
                let _ = events_tx.send(event);
            }
        }
        Err(_) => {
            let (event, changes) = state.lock().remove(&id);
            if !changes.is_empty() {
                apply_changes(&mut fs_watcher.lock(), changes);
            }
            if let Some(event) = event {
                let _ = events_tx.send(event);
            }
        }
    }
}
