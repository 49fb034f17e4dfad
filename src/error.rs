// src/error.rs

//! Error types for the provisioning run
//!
//! All variants are fatal: the run stops at the first error and nothing
//! already done (installed packages, the written artifact) is rolled back.
//! Messages from external tools are surfaced verbatim, not reinterpreted.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while provisioning a host
#[derive(Error, Debug)]
pub enum Error {
    /// No variant branch matches the supplied host facts
    #[error("Unsupported host: no SELinux provisioning variant matches family={family}, distribution={distribution}, version={version}")]
    UnsupportedHost {
        family: String,
        distribution: String,
        version: String,
    },

    /// The resolved variant's parameter file is missing or unreadable
    #[error("Missing configuration for variant '{variant}': {path}: {reason}")]
    ConfigurationMissing {
        variant: String,
        path: PathBuf,
        reason: String,
    },

    /// A parameter or facts file exists but does not parse
    #[error("Failed to parse '{path}': {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Package manager invocation failed
    #[error("Package install failed for '{package}': {reason}")]
    PackageInstall { package: String, reason: String },

    /// Writing the policy artifact failed
    #[error("Failed to write policy artifact '{path}': {reason}")]
    ArtifactWrite { path: PathBuf, reason: String },

    /// External compile-and-load script failed
    #[error("Policy compiler invocation failed: {0}")]
    CompilerInvocation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
