// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use hermes_core::EventData;

fn event(topic: &str) -> Event {
    Event::new(topic, chrono::Utc::now(), EventData::RefreshNeeded)
}

#[tokio::test]
async fn publish_delivers_to_subscriber() {
    let dispatcher = EventDispatcher::new();
    let mut sub = dispatcher.subscribe("sessions");

    dispatcher.publish("sessions", event("sessions"));

    let received = sub.recv().await.unwrap();
    assert_eq!(received.topic, "sessions");
}

#[tokio::test]
async fn publish_only_reaches_matching_topic() {
    let dispatcher = EventDispatcher::new();
    let mut sub = dispatcher.subscribe("a");

    dispatcher.publish("b", event("b"));

    assert!(sub.try_recv().is_err());
}

#[tokio::test]
async fn publish_all_reaches_every_topic() {
    let dispatcher = EventDispatcher::new();
    let mut a = dispatcher.subscribe("a");
    let mut b = dispatcher.subscribe("b");

    dispatcher.publish_all(event("broadcast"));

    assert!(a.recv().await.is_some());
    assert!(b.recv().await.is_some());
}

#[tokio::test]
async fn full_channel_drops_and_counts_instead_of_blocking() {
    let dispatcher = EventDispatcher::with_buffer(1);
    let _sub = dispatcher.subscribe("topic");

    dispatcher.publish("topic", event("topic")); // fills the one slot
    dispatcher.publish("topic", event("topic")); // dropped

    assert_eq!(dispatcher.dropped_count("topic"), 1);
}

#[tokio::test]
async fn close_closes_every_subscriber_channel_exactly_once() {
    let dispatcher = EventDispatcher::new();
    let mut sub = dispatcher.subscribe("topic");

    dispatcher.close();
    dispatcher.close(); // idempotent, must not panic

    assert!(sub.recv().await.is_none());
}

#[tokio::test]
async fn subscribe_after_close_returns_a_pre_closed_channel() {
    let dispatcher = EventDispatcher::new();
    dispatcher.close();

    let mut sub = dispatcher.subscribe("topic");
    assert!(sub.recv().await.is_none());
}

#[tokio::test]
async fn publish_after_close_is_a_noop() {
    let dispatcher = EventDispatcher::new();
    let mut sub = dispatcher.subscribe("topic");
    dispatcher.close();

    dispatcher.publish("topic", event("topic"));
    dispatcher.publish_all(event("topic"));

    assert!(sub.recv().await.is_none());
}
