// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("failed to stat {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("filesystem watch failed: {0}")]
    Notify(#[from] notify::Error),
}
