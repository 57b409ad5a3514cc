// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hermes_events::EventDispatcher;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::test]
async fn start_then_stop_does_not_panic_and_is_idempotent_to_call_twice() {
    let bus = Arc::new(EventDispatcher::new());
    let ctx = PluginContext::new(PathBuf::from("/tmp"), PathBuf::from("/tmp"), bus);

    let mut plugin = HealthPlugin::new();
    plugin.init(&ctx).expect("init");
    plugin.start(&ctx).expect("start");
    plugin.stop().expect("stop");
    plugin.stop().expect("stop is idempotent");
}
