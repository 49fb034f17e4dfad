// src/facts.rs

//! Host facts describing the machine being provisioned
//!
//! Facts are trusted inputs supplied by the calling environment (CLI flags
//! or a TOML facts file). This crate never probes the host to detect them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use strum_macros::EnumString;

/// OS family of the target host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum OsFamily {
    /// RHEL, CentOS, Rocky, Alma, Fedora
    #[strum(serialize = "redhat", serialize = "rhel")]
    RedHat,
    /// Debian, Ubuntu
    Debian,
    /// Anything else; no variant will match
    Other,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedHat => write!(f, "RedHat"),
            Self::Debian => write!(f, "Debian"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Facts about the host, immutable for the duration of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostFacts {
    /// OS family
    pub family: OsFamily,

    /// Distribution name, e.g. "CentOS", "Ubuntu"
    pub distribution: String,

    /// Full distribution version, e.g. "16.04", "8.5"
    pub version: String,

    /// Major version component, e.g. "8"
    pub major_version: String,
}

impl HostFacts {
    pub fn new(
        family: OsFamily,
        distribution: impl Into<String>,
        version: impl Into<String>,
        major_version: impl Into<String>,
    ) -> Self {
        Self {
            family,
            distribution: distribution.into(),
            version: version.into(),
            major_version: major_version.into(),
        }
    }

    /// Load facts from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
