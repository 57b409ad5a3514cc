// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Failure modes an [`crate::Adapter`] operation can report (spec §4.1
/// "Failure modes").
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed session data: {0}")]
    Format(String),
    #[error("unknown session: {0}")]
    NotFound(String),
    #[error("{adapter} does not support {operation}")]
    Unsupported {
        adapter: String,
        operation: &'static str,
    },
}
