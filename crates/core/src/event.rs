// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event payload carried on the Event Dispatcher (spec §3 "Event").
//!
//! The source system carries an `any`-typed payload per event; per the
//! redesign note in spec §9 we replace that with a tagged union keyed by
//! the same closed set of event types, so subscribers pattern-match
//! instead of downcasting.

use crate::epoch::{Epoch, EpochTagged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The kind of change a [`Event`] reports. Closed set per spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    FileChanged,
    GitChanged,
    SessionFile,
    SessionUpdate,
    FocusChanged,
    RefreshNeeded,
    Error,
}

/// Change classification used by watcher-originated events
/// (spec §4.4 "events channel emitting `{session_id, change_kind}`").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Updated,
    Removed,
}

/// Tagged payload, one variant per [`EventKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventData {
    FileChanged { path: PathBuf },
    GitChanged { summary: String },
    SessionFile {
        adapter_id: String,
        session_id: String,
    },
    SessionUpdate {
        adapter_id: String,
        session_id: String,
        change_kind: ChangeKind,
    },
    FocusChanged { focused: bool },
    RefreshNeeded,
    Error { message: String },
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            EventData::FileChanged { .. } => EventKind::FileChanged,
            EventData::GitChanged { .. } => EventKind::GitChanged,
            EventData::SessionFile { .. } => EventKind::SessionFile,
            EventData::SessionUpdate { .. } => EventKind::SessionUpdate,
            EventData::FocusChanged { .. } => EventKind::FocusChanged,
            EventData::RefreshNeeded => EventKind::RefreshNeeded,
            EventData::Error { .. } => EventKind::Error,
        }
    }
}

/// An event published on the Event Dispatcher.
///
/// `topic` is an arbitrary string namespace chosen by publishers and
/// subscribers out of band; convention is the adapter id or plugin id
/// (spec §3 "Event").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub topic: String,
    pub timestamp: DateTime<Utc>,
    pub data: EventData,
}

impl Event {
    pub fn new(topic: impl Into<String>, timestamp: DateTime<Utc>, data: EventData) -> Self {
        Self {
            topic: topic.into(),
            timestamp,
            data,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }
}

/// An [`Event`] stamped with the epoch it was produced under, for the
/// async-result path described in spec §4.7.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochEvent {
    pub epoch: Epoch,
    pub event: Event,
}

impl EpochTagged for EpochEvent {
    fn epoch(&self) -> Epoch {
        self.epoch
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
