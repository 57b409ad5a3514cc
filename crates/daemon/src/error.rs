// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to resolve project root: {0}")]
    ProjectRoot(std::io::Error),

    #[error(transparent)]
    Watch(#[from] hermes_watch::WatchError),
}
