// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-core: the common data model shared by every adapter, watcher,
//! and plugin in the session-aggregation substrate.

pub mod capability;
pub mod epoch;
pub mod event;
pub mod id;
pub mod ids;
pub mod message;
pub mod session;

pub use capability::{Capability, CapabilitySet};
pub use epoch::{Epoch, EpochCounter, EpochTagged, Stamped};
pub use event::{ChangeKind, EpochEvent, Event, EventData, EventKind};
pub use id::{IdGen, SequentialIdGen, ShortId, UuidIdGen};
pub use ids::{AdapterId, MessageId, PluginId, SessionId};
pub use message::{ContentBlock, Message, Role, ThinkingBlock, ToolUseRecord};
pub use session::{sort_sessions_by_recency, SessionInfo};
