// src/commands/resolve.rs

//! The `resolve` command: show which variant a set of facts selects

use crate::cli::FactsArgs;
use anyhow::Result;
use mongodb_selinux::{resolve_variant, ParameterSet};
use std::path::PathBuf;

/// Resolve and print the variant and its parameter set without touching
/// the host
pub fn cmd_resolve(facts_args: &FactsArgs, vars_dir: PathBuf) -> Result<()> {
    let facts = super::host_facts(facts_args)?;
    let variant = resolve_variant(&facts)?;

    println!("Variant: {}", variant);
    println!(
        "Parameter source: {}",
        vars_dir.join(variant.params_file_name()).display()
    );

    let params = ParameterSet::load(&vars_dir, &variant)?;
    println!("Required packages:");
    for package in &params.required_packages {
        println!("  {}", package);
    }
    Ok(())
}
