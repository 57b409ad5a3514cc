// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hermes
//!
//! Wires the Adapter Factory Registry, the per-adapter Tiered Watchers
//! (via the Watcher Manager), the Event Dispatcher, and the Plugin
//! Registry into a running process. Renders nothing; presentation
//! plugins are out of scope here (spec §1 Non-goals).

use hermes::App;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("hermes {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            path => {
                return run(PathBuf::from(path)).await;
            }
        }
    }

    let cwd = std::env::current_dir().map_err(Box::new)?;
    run(cwd).await
}

fn print_help() {
    println!("hermes {}", env!("CARGO_PKG_VERSION"));
    println!("Session-aggregation substrate for AI coding assistants.");
    println!();
    println!("USAGE:");
    println!("    hermes [PROJECT_ROOT]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
}

async fn run(project_root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    hermes_config::init_tracing();

    let project_root = project_root.canonicalize().unwrap_or(project_root);
    info!(project = %project_root.display(), "starting hermes");

    match hermes_config::resolve_database(&project_root) {
        Ok(database) => info!(%database, "resolved task database"),
        Err(e) => info!(reason = %e, "no task database configured, continuing without one"),
    }

    let app = App::bootstrap(project_root.clone(), project_root).await?;
    app.run(shutdown_signal()).await;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install ctrl-c handler; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
}
