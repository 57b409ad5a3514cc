// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for one [`crate::TieredWatcher`] (spec §4.4
/// "Configuration").
#[derive(Clone)]
pub struct WatcherConfig {
    pub root_dir: PathBuf,
    /// File extension (without the dot) a path must carry to be treated
    /// as a session file, e.g. `"jsonl"`.
    pub file_pattern: String,
    /// Derives a session id from a matched path.
    pub extract_id: Arc<dyn Fn(&Path) -> String + Send + Sync>,
    pub hot_target: usize,
    pub freeze_threshold: Duration,
    pub poll_interval: Duration,
}

impl WatcherConfig {
    pub fn new(root_dir: impl Into<PathBuf>, file_pattern: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            file_pattern: file_pattern.into(),
            extract_id: Arc::new(|path| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            }),
            hot_target: 3,
            freeze_threshold: Duration::from_secs(24 * 60 * 60),
            poll_interval: Duration::from_secs(2),
        }
    }

    pub fn with_hot_target(mut self, n: usize) -> Self {
        self.hot_target = n;
        self
    }

    pub fn with_freeze_threshold(mut self, d: Duration) -> Self {
        self.freeze_threshold = d;
        self
    }

    pub fn with_poll_interval(mut self, d: Duration) -> Self {
        self.poll_interval = d;
        self
    }

    pub fn with_extract_id(mut self, f: impl Fn(&Path) -> String + Send + Sync + 'static) -> Self {
        self.extract_id = Arc::new(f);
        self
    }
}
