// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic stat-based freshness check for COLD-tier sessions.
//!
//! FROZEN sessions are never scanned; HOT sessions are covered by the
//! fs-watch bridge instead. A COLD session never holds a directory
//! watch, so removal here never produces a [`crate::state::DirWatchChange`].

use crate::state::WatcherState;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::{mpsc, watch};

pub(crate) async fn run(
    state: Arc<Mutex<WatcherState>>,
    events_tx: mpsc::UnboundedSender<crate::state::WatchEvent>,
    poll_interval: Duration,
    mut cancel: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => scan_once(&state, &events_tx),
            _ = cancel.changed() => break,
        }
    }
}

fn scan_once(state: &Arc<Mutex<WatcherState>>, events_tx: &mpsc::UnboundedSender<crate::state::WatchEvent>) {
    let ids = state.lock().cold_session_ids();
    for id in ids {
        let path = state.lock().get(&id).map(|record| record.path.clone());
        let Some(path) = path else { continue };

        match std::fs::metadata(&path) {
            Ok(meta) => {
                let size = meta.len();
                let mod_time = meta.modified().unwrap_or_else(|_| SystemTime::now());
                if let Some(event) = state.lock().observe(&id, size, mod_time) {
                    let _ = events_tx.send(event);
                }
            }
            Err(_) => {
                let (event, _changes) = state.lock().remove(&id);
                if let Some(event) = event {
                    let _ = events_tx.send(event);
                }
            }
        }
    }
}
