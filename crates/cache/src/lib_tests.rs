// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn miss_on_empty_cache() {
    let cache: ContentCache<String> = ContentCache::new();
    assert_eq!(cache.get("a", 10, 100), None);
}

#[test]
fn hit_requires_exact_size_and_mod_time() {
    let cache = ContentCache::new();
    cache.set("a", "value".to_string(), 10, 100, 0);

    assert_eq!(cache.get("a", 10, 100), Some("value".to_string()));
    assert_eq!(cache.get("a", 11, 100), None);
    assert_eq!(cache.get("a", 10, 101), None);
}

#[test]
fn get_with_offset_returns_identity_and_offset() {
    let cache = ContentCache::new();
    cache.set("a", "value".to_string(), 10, 100, 42);

    let (value, offset, size, mod_time) = cache.get_with_offset("a").unwrap();
    assert_eq!(value, "value");
    assert_eq!(offset, 42);
    assert_eq!(size, 10);
    assert_eq!(mod_time, 100);
}

#[test]
fn set_overwrites_existing_key() {
    let cache = ContentCache::new();
    cache.set("a", "first".to_string(), 10, 100, 0);
    cache.set("a", "second".to_string(), 20, 200, 5);

    assert_eq!(cache.get("a", 20, 200), Some("second".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn overflow_evicts_least_recently_used() {
    let cache = ContentCache::with_capacity(2);
    cache.set("a", "a".to_string(), 1, 1, 0);
    cache.set("b", "b".to_string(), 1, 1, 0);
    // touch "a" so "b" becomes the least-recently-used entry
    assert_eq!(cache.get("a", 1, 1), Some("a".to_string()));
    cache.set("c", "c".to_string(), 1, 1, 0);

    assert_eq!(cache.get("b", 1, 1), None);
    assert_eq!(cache.get("a", 1, 1), Some("a".to_string()));
    assert_eq!(cache.get("c", 1, 1), Some("c".to_string()));
    assert_eq!(cache.len(), 2);
}

#[test]
fn delete_removes_entry() {
    let cache = ContentCache::new();
    cache.set("a", "value".to_string(), 10, 100, 0);

    assert!(cache.delete("a"));
    assert!(!cache.delete("a"));
    assert_eq!(cache.get("a", 10, 100), None);
}

#[test]
fn delete_if_removes_matching_entries_only() {
    let cache = ContentCache::new();
    cache.set("session-1", "a".to_string(), 1, 1, 0);
    cache.set("session-2", "b".to_string(), 1, 1, 0);
    cache.set("other", "c".to_string(), 1, 1, 0);

    cache.delete_if(|key| key.starts_with("session-"));

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("other", 1, 1), Some("c".to_string()));
}

#[test]
fn invalidate_if_changed_drops_entry_on_mismatch() {
    let cache = ContentCache::new();
    cache.set("a", "value".to_string(), 10, 100, 0);

    assert!(!cache.invalidate_if_changed("a", 10, 100));
    assert!(cache.get("a", 10, 100).is_some());

    assert!(cache.invalidate_if_changed("a", 10, 200));
    assert!(cache.get("a", 10, 100).is_none());
}

#[test]
fn invalidate_if_changed_is_noop_for_absent_key() {
    let cache: ContentCache<String> = ContentCache::new();
    assert!(!cache.invalidate_if_changed("missing", 1, 1));
}
