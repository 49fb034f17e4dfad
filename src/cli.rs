// src/cli.rs
//! CLI definitions for the mongodb-selinux provisioner
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mongodb-selinux")]
#[command(version)]
#[command(
    about = "Provisions a host SELinux policy so mongod can read cgroup memory accounting",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Host facts, supplied either individually or via a facts file
#[derive(Args, Debug)]
pub struct FactsArgs {
    /// TOML file supplying family/distribution/version/major_version
    #[arg(long, conflicts_with_all = ["family", "distribution", "os_version", "major_version"])]
    pub facts: Option<PathBuf>,

    /// OS family: redhat or debian
    #[arg(long)]
    pub family: Option<String>,

    /// Distribution name, e.g. CentOS, Ubuntu
    #[arg(long)]
    pub distribution: Option<String>,

    /// Full distribution version, e.g. 8.5, 16.04
    #[arg(long = "os-version")]
    pub os_version: Option<String>,

    /// Major version component, e.g. 8
    #[arg(long)]
    pub major_version: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full provisioning sequence on this host
    Apply {
        #[command(flatten)]
        facts: FactsArgs,

        /// Directory holding per-variant parameter files
        #[arg(long, default_value = "/etc/mongodb-selinux/vars")]
        vars_dir: PathBuf,

        /// Destination for the policy module source
        #[arg(long, default_value = mongodb_selinux::policy::DEFAULT_ARTIFACT_PATH)]
        artifact_path: PathBuf,

        /// Installation marker path
        #[arg(long, default_value = mongodb_selinux::compiler::DEFAULT_MARKER_PATH)]
        marker_path: PathBuf,

        /// External compile-and-load script
        #[arg(long, default_value = mongodb_selinux::compiler::DEFAULT_COMPILE_SCRIPT)]
        compile_script: PathBuf,
    },

    /// Resolve the variant for a set of host facts and show its parameters
    Resolve {
        #[command(flatten)]
        facts: FactsArgs,

        /// Directory holding per-variant parameter files
        #[arg(long, default_value = "/etc/mongodb-selinux/vars")]
        vars_dir: PathBuf,
    },

    /// Show artifact and marker state on this host
    Status {
        /// Destination for the policy module source
        #[arg(long, default_value = mongodb_selinux::policy::DEFAULT_ARTIFACT_PATH)]
        artifact_path: PathBuf,

        /// Installation marker path
        #[arg(long, default_value = mongodb_selinux::compiler::DEFAULT_MARKER_PATH)]
        marker_path: PathBuf,
    },
}
