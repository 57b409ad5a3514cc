// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-config: workspace config resolution, the version-check cache,
//! process-wide environment variables, and the process-wide tracing
//! setup (spec §6 "External interfaces").

mod env;
mod error;
mod tracing_init;
pub mod version_cache;
mod workspace;

pub use env::EnvConfig;
pub use error::ConfigError;
pub use tracing_init::init_tracing;
pub use version_cache::VersionCache;
pub use workspace::{
    config_path, load_workspace_config, resolve_database, write_workspace_config, WorkspaceConfig,
};
