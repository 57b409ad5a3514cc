// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating Claude Code's on-disk project/session directories.

use std::path::{Path, PathBuf};

/// Root of Claude Code's state directory. Honors `CLAUDE_CONFIG_DIR`,
/// falling back to `~/.claude`.
pub(crate) fn claude_base() -> PathBuf {
    std::env::var("CLAUDE_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".claude"))
}

/// Convert a project path to Claude Code's directory-name encoding
/// (`/` and `.` replaced with `-`). Canonicalizes first, matching what
/// Claude Code does internally, so the directory is found even when
/// `project_root` is a symlink.
pub(crate) fn project_dir_name(path: &Path) -> String {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    canonical.to_string_lossy().replace(['/', '.'], "-")
}

/// The directory Claude Code stores this project's session logs in,
/// whether or not it exists yet.
pub(crate) fn project_dir(project_root: &Path) -> PathBuf {
    claude_base()
        .join("projects")
        .join(project_dir_name(project_root))
}

/// Every `*.jsonl` session log under a project's directory.
pub(crate) fn session_log_paths(project_root: &Path) -> Vec<PathBuf> {
    let dir = project_dir(project_root);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "jsonl"))
        .collect()
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
