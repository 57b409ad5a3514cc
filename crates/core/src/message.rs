// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The common normalized message model every adapter maps its vendor
//! format onto (spec §3 "Message").

use crate::ids::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who or what produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

/// A typed element of a message's content.
///
/// Serializes with `{"type": "text"|"thinking"|"tool_use"|"tool_result", ...}`,
/// matching the tagged-union shape used for [`crate::event::Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    Thinking { text: String },
    ToolUse {
        name: String,
        /// Tool input, serialized to text (vendors vary between JSON and plain text).
        input: String,
    },
    ToolResult {
        output: String,
        #[serde(default)]
        is_error: bool,
    },
}

impl ContentBlock {
    /// The block-type tag used by search matches and by dedup keys.
    pub fn block_type(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Thinking { .. } => "thinking",
            ContentBlock::ToolUse { .. } => "tool_use",
            ContentBlock::ToolResult { .. } => "tool_result",
        }
    }
}

/// A flat tool-use record, for adapters that prefer a parallel collection
/// over nested content blocks (spec §3 "Optional parallel collections").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUseRecord {
    pub name: String,
    pub input: String,
}

/// A flat thinking-block record, mirroring [`ToolUseRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkingBlock {
    pub text: String,
}

/// The common normalized unit every adapter maps its sessions onto.
///
/// Invariants (spec §3):
/// 1. `id` is unique within its session.
/// 2. `timestamp` should be monotonic non-decreasing within a session, but
///    this is a goal, not a hard invariant — source logs can carry clock skew.
/// 3. Exactly one of `content` / `content_blocks` is expected to be
///    populated; [`crate::message::Message::is_well_formed`] checks this,
///    and search treats both as a union regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_blocks: Option<Vec<ContentBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_uses: Option<Vec<ToolUseRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_blocks: Option<Vec<ThinkingBlock>>,
}

impl Message {
    /// Whether this message respects invariant 3: at most one of
    /// `content` / `content_blocks` populated. Adapters should never
    /// construct a message that fails this; callers that ingest
    /// third-party data may want to check it defensively.
    pub fn is_well_formed(&self) -> bool {
        !(self.content.is_some() && self.content_blocks.is_some())
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
