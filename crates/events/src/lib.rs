// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-events: a process-wide, topic-based, non-blocking fan-out bus
//! (spec §4.5 "Event Dispatcher").
//!
//! Publishers never block on a slow subscriber: delivery is at-most-once
//! per subscriber, and a full channel drops the event with a logged
//! warning rather than waiting. Subscribers read ground truth from
//! adapters and the filesystem regardless; events are hints to re-query,
//! not the data itself.

use hermes_core::Event;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

const DEFAULT_BUFFER: usize = 16;

struct Subscriber {
    sender: mpsc::Sender<Event>,
    dropped: Arc<AtomicU64>,
}

/// A single topic's live subscriber list plus its drop counter.
#[derive(Default)]
struct Topic {
    subscribers: Vec<Subscriber>,
    dropped_total: Arc<AtomicU64>,
}

/// The receiving half returned by [`EventDispatcher::subscribe`].
pub type Subscription = mpsc::Receiver<Event>;

/// Process-wide topic fan-out bus.
pub struct EventDispatcher {
    topics: RwLock<HashMap<String, Topic>>,
    buffer: usize,
    closed: Arc<AtomicBool>,
}

impl EventDispatcher {
    /// A dispatcher whose subscriber channels are buffered to
    /// [`DEFAULT_BUFFER`].
    pub fn new() -> Self {
        Self::with_buffer(DEFAULT_BUFFER)
    }

    /// A dispatcher whose subscriber channels are buffered to `buffer`.
    pub fn with_buffer(buffer: usize) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            buffer: buffer.max(1),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Allocate a fresh receive-only channel for `topic`.
    ///
    /// After [`EventDispatcher::close`], this returns an already-closed
    /// channel (a receiver whose sender has been dropped) rather than
    /// registering a new subscriber.
    pub fn subscribe(&self, topic: impl Into<String>) -> Subscription {
        let (tx, rx) = mpsc::channel(self.buffer);
        if self.closed.load(Ordering::SeqCst) {
            return rx;
        }
        let mut topics = self.topics.write();
        let entry = topics.entry(topic.into()).or_default();
        entry.subscribers.push(Subscriber {
            sender: tx,
            dropped: Arc::clone(&entry.dropped_total),
        });
        rx
    }

    /// Publish `event` to every subscriber of `topic`. Non-blocking: a
    /// full subscriber channel is dropped and logged rather than awaited.
    /// A no-op once the dispatcher is closed.
    pub fn publish(&self, topic: &str, event: Event) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let topics = self.topics.read();
        if let Some(entry) = topics.get(topic) {
            Self::send_to(entry, &event);
        }
    }

    /// Publish `event` to every subscribed topic.
    pub fn publish_all(&self, event: Event) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let topics = self.topics.read();
        for entry in topics.values() {
            Self::send_to(entry, &event);
        }
    }

    fn send_to(topic: &Topic, event: &Event) {
        for subscriber in &topic.subscribers {
            if subscriber.sender.try_send(event.clone()).is_err() {
                subscriber.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(topic = %event.topic, "event dropped: subscriber channel full");
            }
        }
    }

    /// Number of events dropped for `topic` since creation, for
    /// observability only — not used for correctness.
    pub fn dropped_count(&self, topic: &str) -> u64 {
        self.topics
            .read()
            .get(topic)
            .map(|t| t.dropped_total.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Close the dispatcher: drops every subscriber sender (closing their
    /// channels) and releases the subscriber map. Idempotent — a second
    /// call is a no-op.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        self.topics.write().clear();
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
