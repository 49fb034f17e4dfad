// src/commands/apply.rs

//! The `apply` command: full provisioning run

use crate::cli::FactsArgs;
use anyhow::Result;
use mongodb_selinux::{
    provision, GateOutcome, HostPackageManager, ProvisionConfig, ScriptCompiler,
};
use std::path::PathBuf;
use tracing::info;

/// Run the full provisioning sequence against the live host
pub fn cmd_apply(
    facts_args: &FactsArgs,
    vars_dir: PathBuf,
    artifact_path: PathBuf,
    marker_path: PathBuf,
    compile_script: PathBuf,
) -> Result<()> {
    let facts = super::host_facts(facts_args)?;
    info!(
        "Provisioning {} {} ({})",
        facts.distribution, facts.version, facts.family
    );

    let config = ProvisionConfig {
        facts,
        vars_dir,
        artifact_path,
        marker_path,
    };

    let manager = HostPackageManager::detect(config.facts.family)?;
    let compiler = ScriptCompiler::new(compile_script);

    let report = provision(&config, &manager, &compiler)?;

    println!("Variant: {}", report.variant);
    println!(
        "Packages ensured: {}",
        report.params.required_packages.join(", ")
    );
    println!("Policy source: {}", config.artifact_path.display());
    match report.compile {
        GateOutcome::Compiled => {
            println!("Policy compiled and loaded; marker created at {}", config.marker_path.display());
        }
        GateOutcome::AlreadyInstalled => {
            println!("Policy already installed; compile skipped");
        }
    }
    Ok(())
}
