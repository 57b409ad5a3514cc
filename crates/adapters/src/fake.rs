// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake adapter for deterministic testing.

use crate::error::AdapterError;
use crate::traits::Adapter;
use async_trait::async_trait;
use hermes_core::{CapabilitySet, Message, SessionId, SessionInfo};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded call to [`FakeAdapter`].
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterCall {
    Detect { project_root: PathBuf },
    ListSessions { project_root: PathBuf },
    LoadMessages { session_id: SessionId },
}

struct FakeState {
    calls: Vec<AdapterCall>,
    detect_result: Result<bool, String>,
    sessions: Vec<SessionInfo>,
    messages: std::collections::HashMap<SessionId, Vec<Message>>,
}

/// Programmable, call-recording [`Adapter`] for tests in dependent
/// crates. Mirrors the recorded-call pattern used by the project's other
/// fakes: every call is pushed to an in-memory log callers can inspect.
#[derive(Clone)]
pub struct FakeAdapter {
    id: String,
    name: String,
    capabilities: CapabilitySet,
    inner: Arc<Mutex<FakeState>>,
}

impl FakeAdapter {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capabilities: CapabilitySet::new(),
            inner: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                detect_result: Ok(true),
                sessions: Vec::new(),
                messages: std::collections::HashMap::new(),
            })),
        }
    }

    pub fn with_capabilities(mut self, capabilities: CapabilitySet) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn set_detect_result(&self, result: Result<bool, String>) {
        self.inner.lock().detect_result = result;
    }

    pub fn set_sessions(&self, sessions: Vec<SessionInfo>) {
        self.inner.lock().sessions = sessions;
    }

    pub fn set_messages(&self, session_id: SessionId, messages: Vec<Message>) {
        self.inner.lock().messages.insert(session_id, messages);
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl Adapter for FakeAdapter {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> CapabilitySet {
        self.capabilities.clone()
    }

    async fn detect(&self, project_root: &Path) -> Result<bool, AdapterError> {
        let mut inner = self.inner.lock();
        inner.calls.push(AdapterCall::Detect {
            project_root: project_root.to_path_buf(),
        });
        inner
            .detect_result
            .clone()
            .map_err(AdapterError::Format)
    }

    async fn list_sessions(&self, project_root: &Path) -> Result<Vec<SessionInfo>, AdapterError> {
        let mut inner = self.inner.lock();
        inner.calls.push(AdapterCall::ListSessions {
            project_root: project_root.to_path_buf(),
        });
        Ok(inner.sessions.clone())
    }

    async fn load_messages(&self, session_id: &SessionId) -> Result<Vec<Message>, AdapterError> {
        let mut inner = self.inner.lock();
        inner.calls.push(AdapterCall::LoadMessages {
            session_id: session_id.clone(),
        });
        inner
            .messages
            .get(session_id)
            .cloned()
            .ok_or_else(|| AdapterError::NotFound(session_id.to_string()))
    }
}
