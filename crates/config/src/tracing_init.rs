// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide logging setup, called once by the `hermes` binary.
//! Library crates never install a subscriber themselves.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install an env-filtered `tracing` subscriber writing to stdout.
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
