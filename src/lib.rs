// src/lib.rs

//! mongodb-selinux host provisioner
//!
//! Provisions a host so `mongod` can read the cgroup memory-accounting
//! interface that stock SELinux policy denies:
//!
//! - Resolves the OS variant to a single parameter set
//! - Ensures the SELinux policy build packages are installed
//! - Writes the `mongodb_cgroup_memory` policy module source
//! - Compiles and loads the policy, at most once per host
//!
//! The package manager and the policy compiler are opaque external
//! collaborators behind trait seams, so the run logic tests without
//! touching a real host.

pub mod compiler;
mod error;
pub mod facts;
pub mod params;
pub mod pkg;
pub mod policy;
pub mod provision;
pub mod variant;

pub use compiler::{CompileGate, GateOutcome, PolicyCompiler, ScriptCompiler};
pub use error::{Error, Result};
pub use facts::{HostFacts, OsFamily};
pub use params::ParameterSet;
pub use pkg::{HostPackageManager, PackageManager};
pub use policy::{PolicyArtifact, DEFAULT_ARTIFACT_PATH, POLICY_TEXT};
pub use provision::{provision, resolve_variant, ProvisionConfig, ProvisionReport};
pub use variant::VariantKey;
