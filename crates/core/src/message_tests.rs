// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn well_formed_with_only_flat_content() {
    let msg = Message {
        id: MessageId::new("m1"),
        role: Role::User,
        timestamp: ts(0),
        model: None,
        content: Some("hi".into()),
        content_blocks: None,
        tool_uses: None,
        thinking_blocks: None,
    };
    assert!(msg.is_well_formed());
}

#[test]
fn well_formed_with_only_content_blocks() {
    let msg = Message {
        id: MessageId::new("m2"),
        role: Role::Assistant,
        timestamp: ts(1),
        model: Some("claude".into()),
        content: None,
        content_blocks: Some(vec![ContentBlock::Text { text: "hi".into() }]),
        tool_uses: None,
        thinking_blocks: None,
    };
    assert!(msg.is_well_formed());
}

#[test]
fn not_well_formed_with_both_populated() {
    let msg = Message {
        id: MessageId::new("m3"),
        role: Role::Assistant,
        timestamp: ts(2),
        model: None,
        content: Some("hi".into()),
        content_blocks: Some(vec![ContentBlock::Text { text: "hi".into() }]),
        tool_uses: None,
        thinking_blocks: None,
    };
    assert!(!msg.is_well_formed());
}

#[test]
fn content_block_tags_round_trip() {
    let blocks = vec![
        ContentBlock::Text { text: "a".into() },
        ContentBlock::Thinking { text: "b".into() },
        ContentBlock::ToolUse {
            name: "Read".into(),
            input: "{\"path\":\"x\"}".into(),
        },
        ContentBlock::ToolResult {
            output: "ok".into(),
            is_error: false,
        },
    ];
    for block in blocks {
        let json = serde_json::to_string(&block).unwrap();
        let back: ContentBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}

#[test]
fn block_type_tags_are_stable() {
    assert_eq!(ContentBlock::Text { text: String::new() }.block_type(), "text");
    assert_eq!(
        ContentBlock::Thinking { text: String::new() }.block_type(),
        "thinking"
    );
    assert_eq!(
        ContentBlock::ToolUse {
            name: String::new(),
            input: String::new()
        }
        .block_type(),
        "tool_use"
    );
    assert_eq!(
        ContentBlock::ToolResult {
            output: String::new(),
            is_error: true
        }
        .block_type(),
        "tool_result"
    );
}
