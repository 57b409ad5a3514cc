// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation (spec §4.3 "Pattern compilation").

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Options controlling how a query is compiled and how many results a
/// search returns in aggregate.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub use_regex: bool,
    pub case_sensitive: bool,
    /// `<= 0` is substituted with 50 (spec §4.3 "Default cap").
    pub max_results: i64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            use_regex: false,
            case_sensitive: false,
            max_results: 50,
        }
    }
}

impl SearchOptions {
    /// The effective per-search result cap, substituting the default when
    /// `max_results <= 0`.
    pub fn effective_max_results(&self) -> usize {
        if self.max_results <= 0 {
            50
        } else {
            self.max_results as usize
        }
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid search pattern: {0}")]
    Invalid(String),
}

/// A compiled query, ready to scan message content.
#[derive(Debug, Clone)]
pub struct CompiledPattern(pub(crate) Regex);

impl CompiledPattern {
    /// Compile `query` per `options`.
    ///
    /// When `options.use_regex` is false the query is quoted verbatim
    /// (via [`regex::escape`]) so every character is literal; the result
    /// is compiled case-insensitively unless `options.case_sensitive` is
    /// set.
    pub fn compile(query: &str, options: &SearchOptions) -> Result<Self, PatternError> {
        let source = if options.use_regex {
            query.to_string()
        } else {
            regex::escape(query)
        };
        RegexBuilder::new(&source)
            .case_insensitive(!options.case_sensitive)
            .build()
            .map(CompiledPattern)
            .map_err(|e| PatternError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
