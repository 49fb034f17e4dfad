// src/provision.rs

//! The provisioning run: resolve, install, materialize, compile
//!
//! Configuration is an immutable struct threaded through each step rather
//! than ambient state. Steps run sequentially and block; the first fatal
//! error stops the run with no rollback of completed steps.

use crate::compiler::{CompileGate, GateOutcome, PolicyCompiler};
use crate::error::{Error, Result};
use crate::facts::HostFacts;
use crate::params::ParameterSet;
use crate::pkg::{ensure_installed, PackageManager};
use crate::policy::PolicyArtifact;
use crate::variant::VariantKey;
use std::path::PathBuf;
use tracing::info;

/// Immutable configuration for one provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// Trusted facts about the host
    pub facts: HostFacts,

    /// Directory holding one parameter file per supported variant
    pub vars_dir: PathBuf,

    /// Destination for the policy module source
    pub artifact_path: PathBuf,

    /// Installation marker path
    pub marker_path: PathBuf,
}

/// What a completed run did
#[derive(Debug)]
pub struct ProvisionReport {
    /// The resolved variant
    pub variant: VariantKey,

    /// The loaded parameter set
    pub params: ParameterSet,

    /// Whether the compiler ran or the marker short-circuited it
    pub compile: GateOutcome,
}

/// Resolve the variant for `facts`, failing fast on unsupported hosts
pub fn resolve_variant(facts: &HostFacts) -> Result<VariantKey> {
    VariantKey::resolve(facts).ok_or_else(|| Error::UnsupportedHost {
        family: facts.family.to_string(),
        distribution: facts.distribution.clone(),
        version: facts.version.clone(),
    })
}

/// Run the full provisioning sequence
///
/// 1. Resolve the variant and load its parameter set.
/// 2. Ensure `required_packages` are installed.
/// 3. Write the policy module source (unconditional overwrite).
/// 4. Compile and load the policy, unless the marker says a previous run
///    already did.
pub fn provision(
    config: &ProvisionConfig,
    manager: &dyn PackageManager,
    compiler: &dyn PolicyCompiler,
) -> Result<ProvisionReport> {
    let variant = resolve_variant(&config.facts)?;
    info!("Resolved host variant: {}", variant);

    let params = ParameterSet::load(&config.vars_dir, &variant)?;

    ensure_installed(manager, &params.required_packages)?;

    let artifact = PolicyArtifact::new(&config.artifact_path);
    artifact.materialize()?;

    let gate = CompileGate::new(&config.marker_path);
    let compile = gate.run(compiler, artifact.path())?;

    Ok(ProvisionReport {
        variant,
        params,
        compile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::OsFamily;

    #[test]
    fn test_resolve_variant_fails_fast_on_unknown_host() {
        let facts = HostFacts::new(OsFamily::Other, "Gentoo", "2.14", "2");
        let err = resolve_variant(&facts).unwrap_err();
        assert!(matches!(err, Error::UnsupportedHost { .. }));
        assert!(err.to_string().contains("Gentoo"));
    }

    #[test]
    fn test_resolve_variant_redhat() {
        let facts = HostFacts::new(OsFamily::RedHat, "CentOS", "8.5", "8");
        assert_eq!(
            resolve_variant(&facts).unwrap(),
            VariantKey::RedHat {
                major_version: "8".to_string()
            }
        );
    }
}
