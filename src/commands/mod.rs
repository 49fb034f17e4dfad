// src/commands/mod.rs
//! Command handlers for the mongodb-selinux CLI

mod apply;
mod resolve;
mod status;

pub use apply::cmd_apply;
pub use resolve::cmd_resolve;
pub use status::cmd_status;

use crate::cli::FactsArgs;
use anyhow::{bail, Context, Result};
use mongodb_selinux::{HostFacts, OsFamily};
use std::str::FromStr;

/// Build host facts from CLI arguments
///
/// Either a facts file supplies everything, or all four individual flags
/// must be present. Facts are trusted as given; nothing is probed.
pub(crate) fn host_facts(args: &FactsArgs) -> Result<HostFacts> {
    if let Some(path) = &args.facts {
        return HostFacts::load(path)
            .with_context(|| format!("Failed to load facts from {}", path.display()));
    }

    let (family, distribution, version, major_version) = match (
        &args.family,
        &args.distribution,
        &args.os_version,
        &args.major_version,
    ) {
        (Some(f), Some(d), Some(v), Some(m)) => (f, d, v, m),
        _ => bail!(
            "Host facts incomplete: pass --facts <file> or all of \
             --family, --distribution, --os-version, --major-version"
        ),
    };

    let family = OsFamily::from_str(family)
        .map_err(|_| anyhow::anyhow!("Unknown OS family '{}' (expected redhat or debian)", family))?;

    Ok(HostFacts::new(family, distribution, version, major_version))
}
