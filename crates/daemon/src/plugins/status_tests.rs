// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hermes_core::{AdapterId, Event, EventData};
use hermes_events::EventDispatcher;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::test]
async fn start_subscribes_to_every_known_adapter_topic() {
    let bus = Arc::new(EventDispatcher::new());
    let mut adapters: HashMap<AdapterId, Arc<dyn hermes_adapters::Adapter>> = HashMap::new();
    adapters.insert(
        AdapterId::new("claude-code"),
        Arc::new(hermes_adapters::FakeAdapter::new("claude-code", "Claude Code")),
    );

    let mut ctx = PluginContext::new(PathBuf::from("/tmp"), PathBuf::from("/tmp"), Arc::clone(&bus));
    ctx.adapters = adapters;

    let mut plugin = StatusPlugin::new();
    plugin.init(&ctx).expect("init");
    plugin.start(&ctx).expect("start");

    bus.publish(
        "claude-code",
        Event::new(
            "claude-code",
            chrono::Utc::now(),
            EventData::SessionUpdate {
                adapter_id: "claude-code".to_string(),
                session_id: "s1".to_string(),
                change_kind: hermes_core::ChangeKind::Updated,
            },
        ),
    );

    // Give the spawned subscriber task a chance to observe the event.
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    plugin.stop().expect("stop");
}
