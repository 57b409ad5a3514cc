// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Adapter Interface (spec §4.1).

use crate::error::AdapterError;
use async_trait::async_trait;
use hermes_core::{CapabilitySet, Event, Message, SessionId, SessionInfo};
use hermes_search::{MessageMatch, SearchOptions};
use std::path::Path;
use tokio::sync::mpsc;

/// A named data source over one vendor's on-disk session store.
///
/// Unlike the single-vendor adapters elsewhere in this codebase, the
/// registry holds adapters for five distinct vendors side by side, so
/// this trait is object-safe (`Arc<dyn Adapter>`) rather than a
/// `Clone`-bounded generic parameter: callers never know the concrete
/// adapter type they're holding.
///
/// `list_sessions` and `load_messages` MUST be safe to call concurrently
/// on the same adapter; they MAY serialize internally. Callers SHOULD
/// cache results rather than assume either is cheap.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Stable identifier, e.g. `"claude-code"`.
    fn id(&self) -> &str;

    /// Human-readable name, e.g. `"Claude Code"`.
    fn name(&self) -> &str;

    /// What this adapter supports.
    fn capabilities(&self) -> CapabilitySet;

    /// Project-membership predicate. Side-effect-free and cheap;
    /// failures are reported but the caller should treat them as "not
    /// present" rather than propagating.
    async fn detect(&self, project_root: &Path) -> Result<bool, AdapterError>;

    /// Snapshot of known sessions, sorted by descending `updated_at`.
    async fn list_sessions(&self, project_root: &Path) -> Result<Vec<SessionInfo>, AdapterError>;

    /// Load a session's messages. Idempotent; callers may invoke
    /// repeatedly.
    async fn load_messages(&self, session_id: &SessionId) -> Result<Vec<Message>, AdapterError>;

    /// Register for live update events on this adapter's sessions.
    /// Adapters without `Capability::Watch` return `Unsupported`.
    async fn watch(&self, _project_root: &Path) -> Result<mpsc::Receiver<Event>, AdapterError> {
        Err(AdapterError::Unsupported {
            adapter: self.id().to_string(),
            operation: "watch",
        })
    }

    /// Search a session's messages. The default implementation loads
    /// messages and runs them through the pure search engine; adapters
    /// with `Capability::Search` unset should not override this and
    /// instead omit the capability so callers know not to rely on it.
    async fn search_messages(
        &self,
        session_id: &SessionId,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<MessageMatch>, AdapterError> {
        let messages = self.load_messages(session_id).await?;
        let pattern = hermes_search::CompiledPattern::compile(query, options)
            .map_err(|e| AdapterError::Format(e.to_string()))?;
        Ok(hermes_search::search_messages(&pattern, &messages, options))
    }
}

/// A constructor registered with the [`crate::AdapterRegistry`]. Factories
/// are cheap to call repeatedly; the registry calls each exactly once per
/// `detect_adapters` build, per spec §4.2.
pub type AdapterFactory = Box<dyn Fn() -> Box<dyn Adapter> + Send + Sync>;
