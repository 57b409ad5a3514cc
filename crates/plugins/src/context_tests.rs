// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hermes_events::EventDispatcher;
use std::sync::Arc;

#[test]
fn new_context_derives_config_dir_from_project_root() {
    let ctx = PluginContext::new(
        PathBuf::from("/work"),
        PathBuf::from("/project"),
        Arc::new(EventDispatcher::new()),
    );
    assert_eq!(ctx.config_dir, PathBuf::from("/project/.hermes"));
    assert_eq!(ctx.epoch, Epoch::INITIAL);
    assert!(ctx.config.is_none());
}

#[test]
fn rebuild_preserves_adapters_and_bus_but_updates_paths_and_epoch() {
    let ctx = PluginContext::new(
        PathBuf::from("/work"),
        PathBuf::from("/project-a"),
        Arc::new(EventDispatcher::new()),
    );
    let counter = hermes_core::EpochCounter::new();
    let next = counter.bump();

    let rebuilt = ctx.rebuild(PathBuf::from("/work-b"), PathBuf::from("/project-b"), next);

    assert_eq!(rebuilt.project_root, PathBuf::from("/project-b"));
    assert_eq!(rebuilt.config_dir, PathBuf::from("/project-b/.hermes"));
    assert_eq!(rebuilt.epoch, next);
    assert!(Arc::ptr_eq(&rebuilt.event_bus, &ctx.event_bus));
}

#[test]
fn null_keymap_registrar_accepts_any_binding_without_panicking() {
    let registrar = NullKeymapRegistrar;
    registrar.register("ctrl-k", "search");
}
