// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::WatcherConfig;
use std::time::Duration;

fn config(dir: &std::path::Path) -> WatcherConfig {
    WatcherConfig::new(dir, "jsonl").with_poll_interval(Duration::from_millis(20))
}

#[tokio::test]
async fn register_adapter_tracks_it_for_stats_and_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut manager, _rx) = WatcherManager::new();
    manager
        .register_adapter("claude-code", config(dir.path()))
        .expect("register adapter");

    assert_eq!(manager.adapter_ids(), vec!["claude-code".to_string()]);

    let file = dir.path().join("s1.jsonl");
    std::fs::write(&file, "hello").expect("write session file");
    let ids = manager.register_sessions("claude-code", &config(dir.path()), vec![file]);
    assert_eq!(ids, vec!["s1".to_string()]);

    let stats = manager.stats();
    let (hot, cold, frozen, _watched) = stats["claude-code"];
    assert_eq!((hot, cold, frozen), (0, 1, 0));

    manager.close_all();
}

#[tokio::test]
async fn unknown_adapter_register_sessions_returns_empty() {
    let (manager, _rx) = WatcherManager::new();
    let dir = tempfile::tempdir().expect("tempdir");
    let ids = manager.register_sessions("missing", &config(dir.path()), vec![dir.path().join("x.jsonl")]);
    assert!(ids.is_empty());
}

#[tokio::test]
async fn events_are_tagged_with_their_adapter() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (mut manager, mut rx) = WatcherManager::new();
    manager
        .register_adapter("claude-code", config(dir.path()))
        .expect("register adapter");

    let file = dir.path().join("s1.jsonl");
    std::fs::write(&file, "v1").expect("write session file");
    manager.register_sessions("claude-code", &config(dir.path()), vec![file.clone()]);

    std::fs::write(&file, "v2 longer content").expect("rewrite session file");

    let tagged = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open");
    assert_eq!(tagged.adapter_id, "claude-code");
    assert_eq!(tagged.event.session_id, "s1");

    manager.close_all();
}
