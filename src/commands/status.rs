// src/commands/status.rs

//! The `status` command: artifact and marker state

use anyhow::Result;
use mongodb_selinux::CompileGate;
use std::path::PathBuf;

/// Print whether the policy source and installation marker exist
pub fn cmd_status(artifact_path: PathBuf, marker_path: PathBuf) -> Result<()> {
    let gate = CompileGate::new(&marker_path);

    println!(
        "Policy source {}: {}",
        artifact_path.display(),
        if artifact_path.exists() { "present" } else { "absent" }
    );
    println!(
        "Marker {}: {}",
        marker_path.display(),
        if gate.is_installed() { "present" } else { "absent" }
    );
    println!(
        "State: {}",
        if gate.is_installed() { "Installed" } else { "NotInstalled" }
    );
    Ok(())
}
