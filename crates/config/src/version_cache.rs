// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Version-check cache (spec §6.4): a single on-disk file throttling
//! how often the running binary checks for updates.

use crate::error::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionCache {
    pub latest_version: String,
    pub current_version: String,
    pub checked_at: DateTime<Utc>,
    pub has_update: bool,
}

impl VersionCache {
    pub fn new(latest_version: String, current_version: String, checked_at: DateTime<Utc>) -> Self {
        let has_update = latest_version != current_version;
        Self {
            latest_version,
            current_version,
            checked_at,
            has_update,
        }
    }

    /// Invalid once the running binary's version no longer matches what
    /// was cached, per spec §6.4 ("invalidated when `current_version` changes").
    pub fn is_valid_for(&self, running_version: &str) -> bool {
        self.current_version == running_version
    }
}

pub fn load(path: &Path) -> Result<Option<VersionCache>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    match serde_json::from_str(&contents) {
        Ok(cache) => Ok(Some(cache)),
        Err(_) => Ok(None),
    }
}

pub fn save(path: &Path, cache: &VersionCache) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(cache).unwrap_or_default();
    std::fs::write(path, json).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "version_cache_tests.rs"]
mod tests;
