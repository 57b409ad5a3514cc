// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing Claude Code's JSONL session log into the common message model.
//!
//! Each line is a JSON object `{"type": "user"|"assistant"|"summary"|...,
//! "message": {"role", "content"}, "timestamp", "sessionId", ...}`. Lines
//! whose `type` isn't `user`/`assistant`, or that fail to parse, are
//! skipped rather than treated as fatal — session logs accumulate lines
//! this adapter doesn't need to understand (summaries, meta events).

use crate::error::AdapterError;
use chrono::{DateTime, Utc};
use hermes_core::{ContentBlock, Message, MessageId, Role, ThinkingBlock, ToolUseRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Roughly 4 bytes per token, the coarse heuristic used when no vendor
/// usage report is available.
fn estimate_tokens(bytes: usize) -> u64 {
    (bytes as u64).div_ceil(4)
}

fn parse_role(raw: &str) -> Option<Role> {
    match raw {
        "user" => Some(Role::User),
        "assistant" => Some(Role::Assistant),
        "system" => Some(Role::System),
        "tool" => Some(Role::Tool),
        _ => None,
    }
}

fn parse_content_blocks(content: &serde_json::Value) -> Option<Vec<ContentBlock>> {
    let array = content.as_array()?;
    let blocks = array
        .iter()
        .filter_map(|item| {
            let block_type = item.get("type")?.as_str()?;
            match block_type {
                "text" => Some(ContentBlock::Text {
                    text: item.get("text")?.as_str()?.to_string(),
                }),
                "thinking" => Some(ContentBlock::Thinking {
                    text: item.get("thinking")?.as_str()?.to_string(),
                }),
                "tool_use" => Some(ContentBlock::ToolUse {
                    name: item.get("name")?.as_str()?.to_string(),
                    input: item
                        .get("input")
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                }),
                "tool_result" => {
                    let output = match item.get("content") {
                        Some(serde_json::Value::String(s)) => s.clone(),
                        Some(other) => other.to_string(),
                        None => String::new(),
                    };
                    Some(ContentBlock::ToolResult {
                        output,
                        is_error: item
                            .get("is_error")
                            .and_then(|v| v.as_bool())
                            .unwrap_or(false),
                    })
                }
                _ => None,
            }
        })
        .collect::<Vec<_>>();
    Some(blocks)
}

/// Parse one JSONL line into a [`Message`]. Returns `None` for lines this
/// adapter doesn't model (non user/assistant types, malformed JSON).
pub(crate) fn parse_message_line(line: &str, fallback_id: usize) -> Option<Message> {
    let json: serde_json::Value = serde_json::from_str(line).ok()?;
    let entry_type = json.get("type")?.as_str()?;
    if entry_type != "user" && entry_type != "assistant" {
        return None;
    }

    let message = json.get("message")?;
    let role = message
        .get("role")
        .and_then(|v| v.as_str())
        .and_then(parse_role)
        .unwrap_or(match entry_type {
            "assistant" => Role::Assistant,
            _ => Role::User,
        });

    let timestamp = json
        .get("timestamp")
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let model = message
        .get("model")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let id = json
        .get("uuid")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("line-{fallback_id}"));

    let content_value = message.get("content");
    let (content, content_blocks) = match content_value {
        Some(serde_json::Value::String(s)) => (Some(s.clone()), None),
        Some(array @ serde_json::Value::Array(_)) => (None, parse_content_blocks(array)),
        _ => (None, None),
    };

    let tool_uses = content_blocks.as_ref().map(|blocks| {
        blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { name, input } => Some(ToolUseRecord {
                    name: name.clone(),
                    input: input.clone(),
                }),
                _ => None,
            })
            .collect::<Vec<_>>()
    });
    let thinking_blocks = content_blocks.as_ref().map(|blocks| {
        blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Thinking { text } => Some(ThinkingBlock { text: text.clone() }),
                _ => None,
            })
            .collect::<Vec<_>>()
    });

    Some(Message {
        id: MessageId::from(id),
        role,
        timestamp,
        model,
        content,
        content_blocks,
        tool_uses: tool_uses.filter(|v| !v.is_empty()),
        thinking_blocks: thinking_blocks.filter(|v| !v.is_empty()),
    })
}

/// Parse a full session log into messages, in file order.
pub(crate) fn parse_session_file(path: &Path) -> Result<Vec<Message>, AdapterError> {
    let file = File::open(path).map_err(|e| AdapterError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let mut messages = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AdapterError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if let Some(message) = parse_message_line(&line, idx) {
            messages.push(message);
        }
    }
    Ok(messages)
}

/// Metadata derived from a session log without fully parsing every
/// message — enough to build a [`hermes_core::SessionInfo`].
pub(crate) struct LogSummary {
    pub message_count: usize,
    pub total_tokens_est: u64,
    pub model: Option<String>,
    pub first_user_message_preview: Option<String>,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

pub(crate) fn summarize_session_file(path: &Path) -> Result<LogSummary, AdapterError> {
    let file = File::open(path).map_err(|e| AdapterError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut message_count = 0usize;
    let mut total_tokens_est = 0u64;
    let mut model = None;
    let mut preview = None;
    let mut first_timestamp = None;
    let mut last_timestamp = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AdapterError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        total_tokens_est += estimate_tokens(line.len());
        let Some(message) = parse_message_line(&line, idx) else {
            continue;
        };
        message_count += 1;
        if first_timestamp.is_none() {
            first_timestamp = Some(message.timestamp);
        }
        last_timestamp = Some(message.timestamp);
        if model.is_none() {
            model = message.model.clone();
        }
        if preview.is_none() && message.role == Role::User {
            preview = message.content.clone();
        }
    }

    Ok(LogSummary {
        message_count,
        total_tokens_est,
        model,
        first_user_message_preview: preview,
        first_timestamp,
        last_timestamp,
    })
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
