// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::context::PluginContext;
use crate::error::PluginError;
use crate::plugin::Plugin;
use crate::registry::PluginRegistry;
use hermes_events::EventDispatcher;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct EpochRecordingPlugin {
    last_seen: Arc<AtomicU64>,
}

impl Plugin for EpochRecordingPlugin {
    fn id(&self) -> &str {
        "epoch-recorder"
    }

    fn init(&mut self, ctx: &PluginContext) -> Result<(), PluginError> {
        self.last_seen.store(ctx.epoch.value(), Ordering::SeqCst);
        Ok(())
    }
}

fn ctx(root: PathBuf) -> PluginContext {
    PluginContext::new(root.clone(), root, Arc::new(EventDispatcher::new()))
}

#[test]
fn switch_bumps_epoch_and_reinitializes_plugins() {
    let dir_a = tempfile::tempdir().expect("tempdir a");
    let dir_b = tempfile::tempdir().expect("tempdir b");
    let last_seen = Arc::new(AtomicU64::new(u64::MAX));

    let mut registry = PluginRegistry::new(ctx(dir_a.path().to_path_buf()));
    registry.register(Box::new(EpochRecordingPlugin {
        last_seen: Arc::clone(&last_seen),
    }));
    assert_eq!(last_seen.load(Ordering::SeqCst), 0);

    let switcher = ProjectSwitcher::new(EpochCounter::new());
    let (new_epoch, ready) = switcher.switch(
        &mut registry,
        dir_b.path().to_path_buf(),
        dir_b.path().to_path_buf(),
    );

    assert_eq!(new_epoch.value(), 1);
    assert_eq!(ready, vec!["epoch-recorder".to_string()]);
    assert_eq!(last_seen.load(Ordering::SeqCst), 1);
    assert_eq!(registry.context().project_root, dir_b.path());
}

#[test]
fn successive_switches_strictly_increase_the_epoch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut registry = PluginRegistry::new(ctx(dir.path().to_path_buf()));
    let switcher = ProjectSwitcher::new(EpochCounter::new());

    let (first, _) = switcher.switch(
        &mut registry,
        dir.path().to_path_buf(),
        dir.path().to_path_buf(),
    );
    let (second, _) = switcher.switch(
        &mut registry,
        dir.path().to_path_buf(),
        dir.path().to_path_buf(),
    );
    assert!(second.value() > first.value());
}
