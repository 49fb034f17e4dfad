// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            facts,
            vars_dir,
            artifact_path,
            marker_path,
            compile_script,
        } => commands::cmd_apply(&facts, vars_dir, artifact_path, marker_path, compile_script),
        Commands::Resolve { facts, vars_dir } => commands::cmd_resolve(&facts, vars_dir),
        Commands::Status {
            artifact_path,
            marker_path,
        } => commands::cmd_status(artifact_path, marker_path),
    }
}
