// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide environment resolution (spec §6.5).

const DEFAULT_ARANGO_URL: &str = "http://localhost:8529";
const DEFAULT_ARANGO_USER: &str = "root";

#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub arango_url: String,
    pub arango_user: String,
    pub arango_password: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            arango_url: non_empty_env("ARANGO_URL").unwrap_or_else(|| DEFAULT_ARANGO_URL.to_string()),
            arango_user: non_empty_env("ARANGO_USER").unwrap_or_else(|| DEFAULT_ARANGO_USER.to_string()),
            arango_password: non_empty_env("ARANGO_PASSWORD"),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
