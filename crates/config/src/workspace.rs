// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-local config resolution (spec §6.3 "Config").
//!
//! Resolution order is environment variable first, then the workspace
//! file; an absent value is reported rather than defaulted, since
//! picking a database implicitly would be worse than asking.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

const ENV_VAR: &str = "HADES_DATABASE";
const GITIGNORE_ENTRY: &str = ".hermes/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    pub database: String,
}

pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(".hermes").join("config.yaml")
}

/// Read `<project_root>/.hermes/config.yaml`, if present.
pub fn load_workspace_config(project_root: &Path) -> Result<Option<WorkspaceConfig>, ConfigError> {
    let path = config_path(project_root);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    let config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    Ok(Some(config))
}

/// Resolve the database name: `HADES_DATABASE` env var, then the
/// workspace config file, else `NotConfigured`.
pub fn resolve_database(project_root: &Path) -> Result<String, ConfigError> {
    if let Ok(database) = std::env::var(ENV_VAR) {
        if !database.is_empty() {
            return Ok(database);
        }
    }
    if let Some(config) = load_workspace_config(project_root)? {
        return Ok(config.database);
    }
    Err(ConfigError::NotConfigured {
        expected: config_path(project_root),
    })
}

/// Write the workspace config file and idempotently append `.hermes/`
/// to the project's `.gitignore`.
pub fn write_workspace_config(project_root: &Path, database: &str) -> Result<(), ConfigError> {
    let path = config_path(project_root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }
    let config = WorkspaceConfig {
        database: database.to_string(),
    };
    let yaml = serde_yaml::to_string(&config).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    std::fs::write(&path, yaml).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;
    append_gitignore(project_root)
}

fn append_gitignore(project_root: &Path) -> Result<(), ConfigError> {
    let path = project_root.join(".gitignore");
    let existing = std::fs::read_to_string(&path).unwrap_or_default();
    if existing.lines().any(|line| line.trim() == GITIGNORE_ENTRY.trim_end_matches('/')
        || line.trim() == GITIGNORE_ENTRY)
    {
        return Ok(());
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    let needs_newline = !existing.is_empty() && !existing.ends_with('\n');
    let mut line = String::new();
    if needs_newline {
        line.push('\n');
    }
    line.push_str(GITIGNORE_ENTRY);
    line.push('\n');
    file.write_all(line.as_bytes())
        .map_err(|source| ConfigError::Write { path, source })
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
