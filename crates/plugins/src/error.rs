// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("{0}")]
    Init(String),

    #[error("{0}")]
    Start(String),

    #[error("{0}")]
    Stop(String),
}
