// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability-limited adapters for vendors whose on-disk formats aren't
//! implemented here (SQLite databases, hex-encoded blobs). Each one can
//! still answer `detect` from a cheap on-disk marker, so the registry
//! and any presence-only plugin (e.g. "which assistants touched this
//! repo") work without guessing at an unverified wire format.

use crate::error::AdapterError;
use crate::traits::Adapter;
use async_trait::async_trait;
use hermes_core::{CapabilitySet, Message, SessionId, SessionInfo};
use std::path::{Path, PathBuf};

/// An adapter that only detects project membership; `list_sessions` and
/// `load_messages` honestly report `Unsupported` rather than returning
/// an empty result that could be mistaken for "no sessions."
pub struct HonestAdapter {
    id: &'static str,
    name: &'static str,
    /// Relative path (file or directory) whose presence under a project
    /// root indicates this vendor has touched it.
    marker: &'static str,
}

impl HonestAdapter {
    fn new(id: &'static str, name: &'static str, marker: &'static str) -> Self {
        Self { id, name, marker }
    }

    /// Cursor stores chat state in a per-project SQLite database.
    pub fn cursor() -> Self {
        Self::new("cursor", "Cursor", ".cursor")
    }

    /// Warp's AI session history lives in its own app-support SQLite store,
    /// keyed by workspace rather than a per-project marker; until that
    /// lookup is implemented this falls back to a project-local marker
    /// some Warp configurations write.
    pub fn warp() -> Self {
        Self::new("warp", "Warp", ".warp")
    }

    /// OpenCode writes a project-local session directory.
    pub fn opencode() -> Self {
        Self::new("opencode", "OpenCode", ".opencode")
    }

    /// Amp stores session state hex-encoded under a dotdirectory.
    pub fn amp() -> Self {
        Self::new("amp", "Amp", ".amp")
    }

    fn marker_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.marker)
    }
}

#[async_trait]
impl Adapter for HonestAdapter {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn capabilities(&self) -> CapabilitySet {
        // Every capability defaults to unsupported; only the marker-based
        // detect predicate itself is implemented.
        CapabilitySet::new()
    }

    async fn detect(&self, project_root: &Path) -> Result<bool, AdapterError> {
        Ok(self.marker_path(project_root).exists())
    }

    async fn list_sessions(&self, _project_root: &Path) -> Result<Vec<SessionInfo>, AdapterError> {
        Err(AdapterError::Unsupported {
            adapter: self.id.to_string(),
            operation: "list_sessions",
        })
    }

    async fn load_messages(&self, _session_id: &SessionId) -> Result<Vec<Message>, AdapterError> {
        Err(AdapterError::Unsupported {
            adapter: self.id.to_string(),
            operation: "load_messages",
        })
    }
}

#[cfg(test)]
#[path = "honest_tests.rs"]
mod tests;
