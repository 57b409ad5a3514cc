// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line scanning, deduplication, and the per-message result cap
//! (spec §4.3 "Line scanning" / "Deduplication" / "Per-message cap").

use crate::pattern::{CompiledPattern, SearchOptions};
use hermes_core::{ContentBlock, Message, MessageId};
use std::collections::HashSet;

/// One matched range within one line of one content surface.
///
/// `col_start`/`col_end` are half-open byte offsets into `line_text`
/// (invariant: `0 <= col_start < col_end <= line_text.len()`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentMatch {
    pub block_type: &'static str,
    pub line_no: usize,
    pub line_text: String,
    pub col_start: usize,
    pub col_end: usize,
}

/// All matches found within one message, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMatch {
    pub message_id: MessageId,
    pub matches: Vec<ContentMatch>,
}

/// Search `messages` with `pattern`, applying `options`' aggregate cap.
///
/// Messages and matches within a message are returned in input order
/// (spec §4.3 "Ordering"). The sum of match counts across the returned
/// [`MessageMatch`]es never exceeds `options.effective_max_results()`.
pub fn search_messages(
    pattern: &CompiledPattern,
    messages: &[Message],
    options: &SearchOptions,
) -> Vec<MessageMatch> {
    let cap = options.effective_max_results();
    let mut results = Vec::new();
    let mut total = 0usize;

    for message in messages {
        if total >= cap {
            break;
        }
        let mut matches = dedup(scan_message(pattern, message));
        let remaining = cap - total;
        if matches.len() > remaining {
            matches.truncate(remaining);
        }
        total += matches.len();
        if !matches.is_empty() {
            results.push(MessageMatch {
                message_id: message.id.clone(),
                matches,
            });
        }
    }

    results
}

fn scan_message(pattern: &CompiledPattern, message: &Message) -> Vec<ContentMatch> {
    let mut out = Vec::new();

    if let Some(text) = &message.content {
        out.extend(scan_text(pattern, "text", text));
    }

    if let Some(blocks) = &message.content_blocks {
        for block in blocks {
            let block_type = block.block_type();
            match block {
                ContentBlock::Text { text } | ContentBlock::Thinking { text } => {
                    out.extend(scan_text(pattern, block_type, text))
                }
                ContentBlock::ToolUse { name, input } => {
                    out.extend(scan_text(pattern, block_type, name));
                    out.extend(scan_text(pattern, block_type, input));
                }
                ContentBlock::ToolResult { output, .. } => {
                    out.extend(scan_text(pattern, block_type, output))
                }
            }
        }
    }

    if let Some(tool_uses) = &message.tool_uses {
        for tool_use in tool_uses {
            out.extend(scan_text(pattern, "tool_use", &tool_use.name));
            out.extend(scan_text(pattern, "tool_use", &tool_use.input));
        }
    }

    if let Some(thinking_blocks) = &message.thinking_blocks {
        for block in thinking_blocks {
            out.extend(scan_text(pattern, "thinking", &block.text));
        }
    }

    out
}

fn scan_text(pattern: &CompiledPattern, block_type: &'static str, text: &str) -> Vec<ContentMatch> {
    let mut out = Vec::new();
    for (idx, line) in text.split('\n').enumerate() {
        for m in pattern.0.find_iter(line) {
            if m.start() == m.end() {
                continue;
            }
            out.push(ContentMatch {
                block_type,
                line_no: idx + 1,
                line_text: line.to_string(),
                col_start: m.start(),
                col_end: m.end(),
            });
        }
    }
    out
}

/// Reject duplicates with identical `(block_type, line_no, col_start,
/// col_end, line_text)`, keeping the first occurrence (spec §4.3
/// "Deduplication").
fn dedup(matches: Vec<ContentMatch>) -> Vec<ContentMatch> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
