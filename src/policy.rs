// src/policy.rs

//! The SELinux policy module source for mongod cgroup memory access
//!
//! The policy text is fixed: it grants the `mongod_t` domain read access to
//! the cgroup memory-accounting files that stock policy denies. It is
//! rewritten on every run with plain overwrite semantics; idempotency lives
//! downstream in the compile gate, not here.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default destination for the policy source on the host
pub const DEFAULT_ARTIFACT_PATH: &str = "/root/mongodb_cgroup_memory.te";

/// The policy module source text
pub const POLICY_TEXT: &str = "\
module mongodb_cgroup_memory 1.0;

require {
    type cgroup_t;
    type mongod_t;
    class dir search;
    class file { getattr open read };
}

#============= mongod_t ==============
allow mongod_t cgroup_t:dir search;
allow mongod_t cgroup_t:file { getattr open read };
";

/// The policy source artifact and where it lands
#[derive(Debug, Clone)]
pub struct PolicyArtifact {
    path: PathBuf,
}

impl PolicyArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the policy text to the destination, overwriting unconditionally
    pub fn materialize(&self) -> Result<()> {
        debug!("Writing policy module source to {}", self.path.display());
        fs::write(&self.path, POLICY_TEXT).map_err(|e| Error::ArtifactWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        info!("Policy module source written: {}", self.path.display());
        Ok(())
    }
}

impl Default for PolicyArtifact {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PATH)
    }
}
