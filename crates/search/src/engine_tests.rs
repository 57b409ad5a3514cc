// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{TimeZone, Utc};
use hermes_core::{Role, ThinkingBlock, ToolUseRecord};

fn message(id: &str, content: Option<&str>) -> Message {
    Message {
        id: MessageId::from(id),
        role: Role::User,
        timestamp: Utc.timestamp_opt(0, 0).unwrap(),
        model: None,
        content: content.map(str::to_string),
        content_blocks: None,
        tool_uses: None,
        thinking_blocks: None,
    }
}

#[test]
fn finds_match_with_correct_byte_offsets() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("needle", &opts).unwrap();
    let messages = vec![message("m1", Some("line one\nfound the needle here"))];

    let results = search_messages(&pattern, &messages, &opts);

    assert_eq!(results.len(), 1);
    let m = &results[0].matches[0];
    assert_eq!(m.line_no, 2);
    assert_eq!(m.col_start, 14);
    assert_eq!(m.col_end, 20);
    assert_eq!(&m.line_text[m.col_start..m.col_end], "needle");
}

#[test]
fn literal_query_with_special_chars_matches_via_regex_escape() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("a.b", &opts).unwrap();
    let messages = vec![
        message("m1", Some("no match: axxb")),
        message("m2", Some("literal one\na.b is here")),
    ];

    let results = search_messages(&pattern, &messages, &opts);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].message_id, MessageId::from("m2"));
    let m = &results[0].matches[0];
    assert_eq!(m.line_no, 2);
    assert_eq!(m.col_start, 5);
    assert_eq!(m.col_end, 8);
}

#[test]
fn scans_every_content_surface_in_order() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("hit", &opts).unwrap();
    let mut msg = message("m1", Some("flat hit"));
    msg.content_blocks = Some(vec![
        ContentBlock::Text {
            text: "block hit".to_string(),
        },
        ContentBlock::ToolUse {
            name: "hit_tool".to_string(),
            input: "arg".to_string(),
        },
        ContentBlock::ToolResult {
            output: "result hit".to_string(),
            is_error: false,
        },
    ]);
    msg.tool_uses = Some(vec![ToolUseRecord {
        name: "extra".to_string(),
        input: "hit in input".to_string(),
    }]);
    msg.thinking_blocks = Some(vec![ThinkingBlock {
        text: "thinking hit".to_string(),
    }]);

    let results = search_messages(&pattern, &[msg], &opts);

    assert_eq!(results.len(), 1);
    let block_types: Vec<&str> = results[0].matches.iter().map(|m| m.block_type).collect();
    assert_eq!(
        block_types,
        vec![
            "text",
            "text",
            "tool_use",
            "tool_result",
            "tool_use",
            "thinking",
        ]
    );
}

#[test]
fn deduplicates_identical_matches_within_a_message() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("dup", &opts).unwrap();
    let mut msg = message("m1", Some("dup here"));
    msg.content_blocks = Some(vec![ContentBlock::Text {
        text: "dup here".to_string(),
    }]);

    let results = search_messages(&pattern, &[msg], &opts);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matches.len(), 1);
}

#[test]
fn caps_total_matches_across_messages() {
    let opts = SearchOptions {
        max_results: 3,
        ..SearchOptions::default()
    };
    let pattern = CompiledPattern::compile("x", &opts).unwrap();
    let messages = vec![
        message("m1", Some("x x")),
        message("m2", Some("x")),
        message("m3", Some("x x x")),
    ];

    let results = search_messages(&pattern, &messages, &opts);

    let total: usize = results.iter().map(|r| r.matches.len()).sum();
    assert_eq!(total, 3);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].matches.len(), 2);
    assert_eq!(results[1].matches.len(), 1);
}

#[test]
fn messages_with_no_matches_are_not_returned() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("absent", &opts).unwrap();
    let messages = vec![message("m1", Some("nothing here"))];

    let results = search_messages(&pattern, &messages, &opts);

    assert!(results.is_empty());
}

#[test]
fn match_offsets_are_always_within_line_bounds() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("o", &opts).unwrap();
    let messages = vec![message("m1", Some("foo bar foo"))];

    let results = search_messages(&pattern, &messages, &opts);

    for r in &results {
        for m in &r.matches {
            assert!(m.col_start < m.col_end);
            assert!(m.col_end <= m.line_text.len());
        }
    }
}

#[test]
fn search_is_idempotent() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("repeat", &opts).unwrap();
    let messages = vec![message("m1", Some("repeat this repeat"))];

    let first = search_messages(&pattern, &messages, &opts);
    let second = search_messages(&pattern, &messages, &opts);

    assert_eq!(first, second);
}
