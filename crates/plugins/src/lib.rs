// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hermes-plugins: Plugin Context, Plugin Registry, Stale-Message
//! Filter, and Project Switcher (spec §3, §4.6, §4.7).

mod context;
mod error;
mod plugin;
mod registry;
mod stale;
mod switcher;

pub use context::{KeymapRegistrar, NullKeymapRegistrar, PluginContext};
pub use error::PluginError;
pub use plugin::Plugin;
pub use registry::{PluginRegistry, PluginState};
pub use stale::is_stale;
pub use switcher::ProjectSwitcher;
