// src/variant.rs

//! Variant resolution: host facts to a single parameter-file identity
//!
//! Resolution is a pure function over [`HostFacts`]. The branches are
//! mutually exclusive and evaluated in priority order, first match wins.
//! A host that matches no branch is unsupported; callers fail fast rather
//! than proceeding with an empty parameter set.

use crate::facts::{HostFacts, OsFamily};
use std::fmt;

/// Ubuntu 16.04 ships an SELinux userspace old enough to need its own
/// package list, so it is carved out of the generic Debian branch.
const UBUNTU_XENIAL: &str = "16.04";

/// The resolved variant selector, exactly one shape per host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKey {
    /// RedHat-family host, keyed by major version
    RedHat { major_version: String },
    /// Debian-family host (excluding Ubuntu 16.04)
    Debian,
    /// Ubuntu 16.04 specifically
    Ubuntu1604,
}

impl VariantKey {
    /// Resolve host facts to a variant key
    ///
    /// Priority order:
    /// 1. RedHat family -> `RedHat { major_version }`
    /// 2. Debian family, unless Ubuntu 16.04 -> `Debian`
    /// 3. distribution "Ubuntu" with version "16.04" -> `Ubuntu1604`
    ///
    /// Returns `None` when no branch matches; at most one branch can match
    /// a given set of facts.
    pub fn resolve(facts: &HostFacts) -> Option<VariantKey> {
        let is_xenial = facts.distribution == "Ubuntu" && facts.version == UBUNTU_XENIAL;

        match facts.family {
            OsFamily::RedHat => Some(VariantKey::RedHat {
                major_version: facts.major_version.clone(),
            }),
            OsFamily::Debian if !is_xenial => Some(VariantKey::Debian),
            _ if is_xenial => Some(VariantKey::Ubuntu1604),
            _ => None,
        }
    }

    /// File name of this variant's parameter source
    pub fn params_file_name(&self) -> String {
        match self {
            Self::RedHat { major_version } => format!("RedHat-{}.toml", major_version),
            Self::Debian => "Debian.toml".to_string(),
            Self::Ubuntu1604 => "Ubuntu-16.04.toml".to_string(),
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedHat { major_version } => write!(f, "RedHat-{}", major_version),
            Self::Debian => write!(f, "Debian"),
            Self::Ubuntu1604 => write!(f, "Ubuntu-16.04"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(family: OsFamily, distro: &str, version: &str, major: &str) -> HostFacts {
        HostFacts::new(family, distro, version, major)
    }

    #[test]
    fn test_redhat_resolves_by_major_version() {
        for (version, major) in [("7.9", "7"), ("8.5", "8"), ("9.2", "9")] {
            let f = facts(OsFamily::RedHat, "CentOS", version, major);
            assert_eq!(
                VariantKey::resolve(&f),
                Some(VariantKey::RedHat {
                    major_version: major.to_string()
                })
            );
        }
    }

    #[test]
    fn test_debian_family_resolves_to_family_source() {
        let f = facts(OsFamily::Debian, "Debian", "11", "11");
        assert_eq!(VariantKey::resolve(&f), Some(VariantKey::Debian));

        let f = facts(OsFamily::Debian, "Ubuntu", "20.04", "20");
        assert_eq!(VariantKey::resolve(&f), Some(VariantKey::Debian));
    }

    #[test]
    fn test_ubuntu_xenial_is_carved_out() {
        let f = facts(OsFamily::Debian, "Ubuntu", "16.04", "16");
        assert_eq!(VariantKey::resolve(&f), Some(VariantKey::Ubuntu1604));
    }

    #[test]
    fn test_ubuntu_branches_are_mutually_exclusive() {
        // An Ubuntu host resolves to exactly one of Debian / Ubuntu1604,
        // never both, across a spread of versions.
        for version in ["14.04", "16.04", "18.04", "20.04", "22.04"] {
            let major = version.split('.').next().unwrap();
            let f = facts(OsFamily::Debian, "Ubuntu", version, major);
            let key = VariantKey::resolve(&f).unwrap();
            if version == "16.04" {
                assert_eq!(key, VariantKey::Ubuntu1604);
            } else {
                assert_eq!(key, VariantKey::Debian);
            }
        }
    }

    #[test]
    fn test_redhat_wins_over_xenial_version_string() {
        // Family takes priority: a RedHat host reporting version 16.04
        // (nonsensical but possible in hand-written facts) still resolves
        // to the RedHat branch.
        let f = facts(OsFamily::RedHat, "Ubuntu", "16.04", "16");
        assert_eq!(
            VariantKey::resolve(&f),
            Some(VariantKey::RedHat {
                major_version: "16".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_family_resolves_to_none() {
        let f = facts(OsFamily::Other, "Gentoo", "2.14", "2");
        assert_eq!(VariantKey::resolve(&f), None);
    }

    #[test]
    fn test_params_file_names() {
        let key = VariantKey::RedHat {
            major_version: "8".to_string(),
        };
        assert_eq!(key.params_file_name(), "RedHat-8.toml");
        assert_eq!(VariantKey::Debian.params_file_name(), "Debian.toml");
        assert_eq!(VariantKey::Ubuntu1604.params_file_name(), "Ubuntu-16.04.toml");
    }
}
