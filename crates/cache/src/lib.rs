// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-cache: a generic LRU cache for file-derived artifacts, keyed on
//! `(size, mod_time)` identity (spec §4.8 "Content Cache").
//!
//! A hit requires the caller's `(size, mod_time)` to exactly match the
//! stored pair; any divergence invalidates the entry on the caller's next
//! write. All operations are serialized by a single [`parking_lot::Mutex`]
//! (spec §5 "Shared-resource policy").

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    size: u64,
    mod_time: i64,
    offset: u64,
}

/// A size-bounded, identity-checked cache of values derived from files.
///
/// `T` is typically the parsed/decoded artifact (e.g. a session's
/// messages); `size`/`mod_time` are the filesystem identity used to
/// detect staleness without re-reading the file.
pub struct ContentCache<T> {
    inner: Mutex<LruCache<String, Entry<T>>>,
}

impl<T: Clone> ContentCache<T> {
    /// A cache bounded to [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A cache bounded to `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the cached value for `key` only if it is an exact
    /// `(size, mod_time)` match; touches recency on hit.
    pub fn get(&self, key: &str, size: u64, mod_time: i64) -> Option<T> {
        let mut inner = self.inner.lock();
        match inner.get(key) {
            Some(entry) if entry.size == size && entry.mod_time == mod_time => {
                Some(entry.value.clone())
            }
            _ => None,
        }
    }

    /// Return the cached value, its identity, and the offset past the last
    /// consumed byte, for incremental readers (e.g. JSONL tail reads).
    pub fn get_with_offset(&self, key: &str) -> Option<(T, u64, u64, i64)> {
        let mut inner = self.inner.lock();
        inner
            .get(key)
            .map(|entry| (entry.value.clone(), entry.offset, entry.size, entry.mod_time))
    }

    /// Insert or replace `key`, evicting the least-recently-used entry on
    /// capacity overflow.
    pub fn set(&self, key: impl Into<String>, value: T, size: u64, mod_time: i64, offset: u64) {
        let key = key.into();
        let mut inner = self.inner.lock();
        if inner.len() == inner.cap().get() && !inner.contains(&key) {
            if let Some((evicted_key, _)) = inner.pop_lru() {
                trace!(key = %evicted_key, "content cache evicting least-recently-used entry");
            }
        }
        inner.put(
            key,
            Entry {
                value,
                size,
                mod_time,
                offset,
            },
        );
    }

    /// Remove `key` unconditionally. Returns whether an entry was present.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().pop(key).is_some()
    }

    /// Remove every entry for which `predicate` returns true.
    pub fn delete_if(&self, mut predicate: impl FnMut(&str) -> bool) {
        let mut inner = self.inner.lock();
        let doomed: Vec<String> = inner
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(key, _)| key.clone())
            .collect();
        for key in doomed {
            inner.pop(&key);
        }
    }

    /// Remove `key` if its stored `(size, mod_time)` differs from the
    /// given pair. Returns whether the entry was invalidated.
    pub fn invalidate_if_changed(&self, key: &str, size: u64, mod_time: i64) -> bool {
        let mut inner = self.inner.lock();
        let changed = match inner.peek(key) {
            Some(entry) => entry.size != size || entry.mod_time != mod_time,
            None => false,
        };
        if changed {
            inner.pop(key);
        }
        changed
    }

    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for ContentCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
