// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session descriptor: the per-session metadata surfaced for listing
//! (spec §3 "Session descriptor").

use crate::ids::SessionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lightweight metadata about one session, cheap enough to build for
/// every session an adapter knows about without loading its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Path to the underlying session store. Opaque to everything but the
    /// owning adapter; consumers must not parse it.
    pub path: PathBuf,
    pub session_id: SessionId,
    /// Stable fingerprint of the workspace this session ran in (e.g. a
    /// hash of the project root), used to group sessions by project.
    pub workspace_fingerprint: String,
    pub display_name: String,
    /// Vendor-specific mode label (e.g. "plan", "default", "agent").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
    /// Coarse estimate; adapters should not block on exact tokenization.
    pub total_tokens_est: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_user_message_preview: Option<String>,
}

impl SessionInfo {
    /// Orders sessions by descending `updated_at`, the order
    /// [`crate::adapter_trait`]'s `ListSessions` contract requires.
    pub fn cmp_by_recency(a: &SessionInfo, b: &SessionInfo) -> std::cmp::Ordering {
        b.updated_at.cmp(&a.updated_at)
    }
}

/// Sort sessions in place by descending `updated_at`, as required by the
/// Adapter Interface's `ListSessions` contract (spec §4.1).
pub fn sort_sessions_by_recency(sessions: &mut [SessionInfo]) {
    sessions.sort_by(SessionInfo::cmp_by_recency);
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
