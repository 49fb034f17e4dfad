// src/params.rs

//! Variant parameter sets
//!
//! Each supported variant has one TOML parameter file in the vars
//! directory, named by [`VariantKey::params_file_name`]. The file must
//! define `required_packages`; a resolved variant whose file is missing is
//! a fatal configuration error, never a silent skip.

use crate::error::{Error, Result};
use crate::variant::VariantKey;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parameters loaded for one variant, read-only after loading
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterSet {
    /// Packages the host needs before the policy can be compiled, in
    /// install order
    pub required_packages: Vec<String>,

    /// Any further variant-specific values
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl ParameterSet {
    /// Load the parameter set for a resolved variant from the vars directory
    pub fn load(vars_dir: &Path, key: &VariantKey) -> Result<Self> {
        let path = vars_dir.join(key.params_file_name());
        debug!("Loading parameter source: {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| Error::ConfigurationMissing {
            variant: key.to_string(),
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let params: ParameterSet =
            toml::from_str(&content).map_err(|e| Error::ParseError {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(
            "Variant {} requires {} package(s)",
            key,
            params.required_packages.len()
        );
        Ok(params)
    }
}
