// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure tier-transition bookkeeping for the Tiered Watcher (spec §4.4).
//!
//! Isolated from async/fs concerns so the HOT/COLD/FROZEN transition
//! rules can be tested as plain data manipulation.

use hermes_core::ChangeKind;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Which tier a session currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Hot,
    Cold,
    Frozen,
}

/// Bookkeeping held per registered session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub path: PathBuf,
    pub tier: Tier,
    pub last_access: SystemTime,
    pub mod_time: SystemTime,
    pub size: u64,
}

/// `{session_id, change_kind}` emitted on the events channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub session_id: String,
    pub change_kind: ChangeKind,
}

/// A directory gained or lost HOT-tier membership; the caller (which
/// owns the live fs-watcher) must add/remove the corresponding watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirWatchChange {
    Add(PathBuf),
    Remove(PathBuf),
}

/// Tier-transition state, independent of any async runtime or real
/// filesystem clock.
pub struct WatcherState {
    sessions: HashMap<String, SessionRecord>,
    /// Front = most-recently-promoted/touched HOT session; back = next
    /// to demote on overflow.
    hot_order: VecDeque<String>,
    hot_target: usize,
    freeze_threshold: Duration,
    /// Reference count of HOT sessions per directory, so a directory's
    /// fs-watch is torn down only when its last HOT session leaves.
    watched_dirs: HashMap<PathBuf, usize>,
}

impl WatcherState {
    pub fn new(hot_target: usize, freeze_threshold: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            hot_order: VecDeque::new(),
            hot_target,
            freeze_threshold,
            watched_dirs: HashMap::new(),
        }
    }

    fn dir_of(path: &std::path::Path) -> PathBuf {
        path.parent().map(Path::to_path_buf).unwrap_or_default()
    }

    /// Register a session at `path`, observed with the given `(size,
    /// mod_time)`. Lands in COLD, or FROZEN if `mod_time` is already
    /// older than the freeze threshold relative to `now`.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        path: PathBuf,
        size: u64,
        mod_time: SystemTime,
        now: SystemTime,
    ) {
        let id = id.into();
        let age = now.duration_since(mod_time).unwrap_or_default();
        let tier = if age > self.freeze_threshold {
            Tier::Frozen
        } else {
            Tier::Cold
        };
        self.sessions.insert(
            id,
            SessionRecord {
                path,
                tier,
                last_access: now,
                mod_time,
                size,
            },
        );
    }

    /// Move `id` to HOT, demoting the least-recently-accessed HOT session
    /// if the hot target is already full. Returns directory-watch deltas
    /// the caller must apply to its live fs-watcher.
    pub fn promote_to_hot(&mut self, id: &str) -> Vec<DirWatchChange> {
        let mut changes = Vec::new();
        let Some(record) = self.sessions.get(id) else {
            return changes;
        };
        if record.tier == Tier::Hot {
            self.touch_hot_order(id);
            return changes;
        }

        if self.hot_order.len() >= self.hot_target.max(1) {
            if let Some(victim) = self.hot_order.pop_back() {
                let victim_path = self.sessions.get_mut(&victim).map(|record| {
                    record.tier = Tier::Cold;
                    record.path.clone()
                });
                if let Some(victim_path) = victim_path {
                    changes.extend(self.release_dir_watch(&victim_path));
                }
            }
        }

        let Some(path) = self.sessions.get_mut(id).map(|record| {
            record.tier = Tier::Hot;
            record.path.clone()
        }) else {
            return changes;
        };
        self.hot_order.push_front(id.to_string());
        changes.extend(self.acquire_dir_watch(&path));
        changes
    }

    fn acquire_dir_watch(&mut self, path: &std::path::Path) -> Vec<DirWatchChange> {
        let dir = Self::dir_of(path);
        let count = self.watched_dirs.entry(dir.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            vec![DirWatchChange::Add(dir)]
        } else {
            Vec::new()
        }
    }

    fn release_dir_watch(&mut self, path: &std::path::Path) -> Vec<DirWatchChange> {
        let dir = Self::dir_of(path);
        if let Some(count) = self.watched_dirs.get_mut(&dir) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.watched_dirs.remove(&dir);
                return vec![DirWatchChange::Remove(dir)];
            }
        }
        Vec::new()
    }

    fn touch_hot_order(&mut self, id: &str) {
        self.hot_order.retain(|existing| existing != id);
        self.hot_order.push_front(id.to_string());
    }

    /// Record access and unfreeze, without changing tier.
    pub fn touch(&mut self, id: &str, now: SystemTime) {
        if let Some(record) = self.sessions.get_mut(id) {
            record.last_access = now;
            if record.tier == Tier::Frozen {
                record.tier = Tier::Cold;
            }
            if record.tier == Tier::Hot {
                self.touch_hot_order(id);
            }
        }
    }

    pub fn set_hot_target(&mut self, n: usize) {
        self.hot_target = n;
    }

    /// Sessions currently in COLD tier, for the poll loop to scan.
    pub fn cold_session_ids(&self) -> Vec<String> {
        self.sessions
            .iter()
            .filter(|(_, r)| r.tier == Tier::Cold)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&SessionRecord> {
        self.sessions.get(id)
    }

    /// Reverse lookup from an observed path back to its session id, for
    /// correlating raw fs-watch events with registered sessions.
    pub fn find_id_by_path(&self, path: &std::path::Path) -> Option<String> {
        self.sessions
            .iter()
            .find(|(_, record)| record.path == path)
            .map(|(id, _)| id.clone())
    }

    /// Update a session's stored `(size, mod_time)` after observing a
    /// change. Returns the event to emit, if the new pair actually
    /// differs from what was stored.
    pub fn observe(
        &mut self,
        id: &str,
        size: u64,
        mod_time: SystemTime,
    ) -> Option<WatchEvent> {
        let record = self.sessions.get_mut(id)?;
        if record.size == size && record.mod_time == mod_time {
            return None;
        }
        record.size = size;
        record.mod_time = mod_time;
        Some(WatchEvent {
            session_id: id.to_string(),
            change_kind: ChangeKind::Updated,
        })
    }

    /// Remove a session whose path has vanished, emitting a removal
    /// event and releasing any directory watch it held.
    pub fn remove(&mut self, id: &str) -> (Option<WatchEvent>, Vec<DirWatchChange>) {
        let Some(record) = self.sessions.remove(id) else {
            return (None, Vec::new());
        };
        self.hot_order.retain(|existing| existing != id);
        let changes = if record.tier == Tier::Hot {
            self.release_dir_watch(&record.path)
        } else {
            Vec::new()
        };
        (
            Some(WatchEvent {
                session_id: id.to_string(),
                change_kind: ChangeKind::Removed,
            }),
            changes,
        )
    }

    /// `(hot, cold, frozen, watched_dirs)`.
    pub fn stats(&self) -> (usize, usize, usize, usize) {
        let mut hot = 0;
        let mut cold = 0;
        let mut frozen = 0;
        for record in self.sessions.values() {
            match record.tier {
                Tier::Hot => hot += 1,
                Tier::Cold => cold += 1,
                Tier::Frozen => frozen += 1,
            }
        }
        (hot, cold, frozen, self.watched_dirs.len())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
