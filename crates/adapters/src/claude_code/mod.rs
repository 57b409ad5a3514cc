// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Claude Code adapter: full support over its JSONL session log store.

mod log;
mod paths;

use crate::error::AdapterError;
use crate::traits::Adapter;
use async_trait::async_trait;
use chrono::Utc;
use hermes_core::{Capability, CapabilitySet, Message, SessionId, SessionInfo};
use std::path::Path;

/// Adapter over Claude Code's `~/.claude/projects/<encoded-path>/*.jsonl`
/// session store.
///
/// Sessions are watched by the Watcher Manager's Tiered Watcher against
/// the paths this adapter returns from `list_sessions`, not by this
/// adapter directly — `Capability::Watch` here means "my sessions are
/// plain files suitable for tiered watching," not that this trait's
/// `watch` method is implemented.
pub struct ClaudeCodeAdapter;

impl ClaudeCodeAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClaudeCodeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Adapter for ClaudeCodeAdapter {
    fn id(&self) -> &str {
        "claude-code"
    }

    fn name(&self) -> &str {
        "Claude Code"
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::new()
            .with(Capability::Sessions, true)
            .with(Capability::Messages, true)
            .with(Capability::Usage, true)
            .with(Capability::Watch, true)
            .with(Capability::Search, true)
    }

    async fn detect(&self, project_root: &Path) -> Result<bool, AdapterError> {
        Ok(paths::project_dir(project_root).is_dir())
    }

    async fn list_sessions(&self, project_root: &Path) -> Result<Vec<SessionInfo>, AdapterError> {
        let fingerprint = paths::project_dir_name(project_root);
        let mut sessions = Vec::new();
        for path in paths::session_log_paths(project_root) {
            let Some(session_id) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
            else {
                continue;
            };
            let metadata = std::fs::metadata(&path).map_err(|e| AdapterError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            let summary = log::summarize_session_file(&path)?;
            let fs_mtime = metadata
                .modified()
                .ok()
                .map(chrono::DateTime::<Utc>::from)
                .unwrap_or_else(Utc::now);

            sessions.push(SessionInfo {
                path: path.clone(),
                session_id: SessionId::from(session_id.clone()),
                workspace_fingerprint: fingerprint.clone(),
                display_name: summary
                    .first_user_message_preview
                    .clone()
                    .unwrap_or(session_id),
                mode: None,
                model: summary.model,
                created_at: summary.first_timestamp.unwrap_or(fs_mtime),
                updated_at: summary.last_timestamp.unwrap_or(fs_mtime),
                message_count: summary.message_count,
                total_tokens_est: summary.total_tokens_est,
                first_user_message_preview: summary.first_user_message_preview,
            });
        }
        hermes_core::sort_sessions_by_recency(&mut sessions);
        Ok(sessions)
    }

    async fn load_messages(&self, session_id: &SessionId) -> Result<Vec<Message>, AdapterError> {
        // `session_id` is adapter-assigned (the file stem); `find_by_id`
        // re-derives the path rather than requiring callers to hold onto
        // the SessionInfo's `path`.
        let path = paths::claude_base()
            .join("projects")
            .read_dir()
            .ok()
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .map(|e| e.path().join(format!("{}.jsonl", session_id.as_str())))
            .find(|p| p.is_file())
            .ok_or_else(|| AdapterError::NotFound(session_id.to_string()))?;

        log::parse_session_file(&path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
