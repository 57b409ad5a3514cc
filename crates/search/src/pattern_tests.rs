// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn literal_query_matches_special_regex_chars() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("[test]", &opts).unwrap();
    assert!(pattern.0.is_match("contains [test] here"));
    assert!(!pattern.0.is_match("contains test here"));
}

#[test]
fn literal_query_is_case_insensitive_by_default() {
    let opts = SearchOptions::default();
    let pattern = CompiledPattern::compile("Hello", &opts).unwrap();
    assert!(pattern.0.is_match("hello world"));
}

#[test]
fn case_sensitive_disables_folding() {
    let opts = SearchOptions {
        case_sensitive: true,
        ..SearchOptions::default()
    };
    let pattern = CompiledPattern::compile("Hello", &opts).unwrap();
    assert!(!pattern.0.is_match("hello world"));
    assert!(pattern.0.is_match("Hello world"));
}

#[test]
fn regex_mode_compiles_real_regex() {
    let opts = SearchOptions {
        use_regex: true,
        ..SearchOptions::default()
    };
    let pattern = CompiledPattern::compile(r"\d+", &opts).unwrap();
    assert!(pattern.0.is_match("order 42"));
}

#[test]
fn malformed_regex_is_an_error() {
    let opts = SearchOptions {
        use_regex: true,
        ..SearchOptions::default()
    };
    let err = CompiledPattern::compile("(unclosed", &opts).unwrap_err();
    assert!(matches!(err, PatternError::Invalid(_)));
}

#[test]
fn default_max_results_is_fifty() {
    assert_eq!(SearchOptions::default().effective_max_results(), 50);
}

#[test]
fn non_positive_max_results_substitutes_fifty() {
    let opts = SearchOptions {
        max_results: 0,
        ..SearchOptions::default()
    };
    assert_eq!(opts.effective_max_results(), 50);
    let opts = SearchOptions {
        max_results: -5,
        ..SearchOptions::default()
    };
    assert_eq!(opts.effective_max_results(), 50);
}

#[test]
fn positive_max_results_is_used_verbatim() {
    let opts = SearchOptions {
        max_results: 3,
        ..SearchOptions::default()
    };
    assert_eq!(opts.effective_max_results(), 3);
}
