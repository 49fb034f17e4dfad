// src/pkg.rs

//! Package installation through the host package manager
//!
//! The package manager is an opaque collaborator: this module only asks it
//! "is this installed?" and "install this", via the `rpm`/`dpkg` query tools
//! and the family's install frontend. Failures surface the tool's stderr
//! verbatim.

use crate::error::{Error, Result};
use crate::facts::OsFamily;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};
use which::which;

/// Seam between the installer logic and the real package manager
pub trait PackageManager {
    /// Whether the named package is already present on the host
    fn is_installed(&self, package: &str) -> Result<bool>;

    /// Install the named package; must be a no-op if already present
    fn install(&self, package: &str) -> Result<()>;
}

/// Ensure every package in `packages` is installed, in order
///
/// Already-present packages produce no side effects. The first failing
/// install aborts the run; earlier installs are not rolled back.
pub fn ensure_installed(manager: &dyn PackageManager, packages: &[String]) -> Result<()> {
    for package in packages {
        if manager.is_installed(package)? {
            debug!("Package {} already installed, skipping", package);
            continue;
        }
        info!("Installing package: {}", package);
        manager.install(package)?;
    }
    Ok(())
}

/// Which install frontend the host uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frontend {
    Dnf,
    Yum,
    AptGet,
}

impl Frontend {
    fn binary(&self) -> &'static str {
        match self {
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::AptGet => "apt-get",
        }
    }
}

/// The real host package manager, selected from the OS family
pub struct HostPackageManager {
    frontend: Frontend,
    frontend_path: PathBuf,
    query_path: PathBuf,
}

impl HostPackageManager {
    /// Detect the package manager for the host's OS family
    ///
    /// RedHat-family hosts prefer `dnf`, falling back to `yum`;
    /// Debian-family hosts use `apt-get`. Queries go through the low-level
    /// database tools (`rpm`, `dpkg`) directly.
    pub fn detect(family: OsFamily) -> Result<Self> {
        let (frontend, query_tool) = match family {
            OsFamily::RedHat => {
                let frontend = if which("dnf").is_ok() {
                    Frontend::Dnf
                } else {
                    Frontend::Yum
                };
                (frontend, "rpm")
            }
            OsFamily::Debian => (Frontend::AptGet, "dpkg"),
            OsFamily::Other => {
                return Err(Error::PackageInstall {
                    package: family.to_string(),
                    reason: "No supported package manager for this OS family".to_string(),
                })
            }
        };

        let frontend_path = which(frontend.binary()).map_err(|e| Error::PackageInstall {
            package: frontend.binary().to_string(),
            reason: format!("{} not found on PATH: {}", frontend.binary(), e),
        })?;
        let query_path = which(query_tool).map_err(|e| Error::PackageInstall {
            package: query_tool.to_string(),
            reason: format!("{} not found on PATH: {}", query_tool, e),
        })?;

        debug!(
            "Using package manager {} (queries via {})",
            frontend_path.display(),
            query_path.display()
        );
        Ok(Self {
            frontend,
            frontend_path,
            query_path,
        })
    }
}

impl PackageManager for HostPackageManager {
    fn is_installed(&self, package: &str) -> Result<bool> {
        let mut cmd = Command::new(&self.query_path);
        match self.frontend {
            Frontend::Dnf | Frontend::Yum => cmd.args(["-q", package]),
            Frontend::AptGet => cmd.args(["-s", package]),
        };

        let output = cmd.output().map_err(|e| Error::PackageInstall {
            package: package.to_string(),
            reason: format!("Failed to run {}: {}", self.query_path.display(), e),
        })?;

        // rpm -q / dpkg -s exit nonzero when the package is absent
        Ok(output.status.success())
    }

    fn install(&self, package: &str) -> Result<()> {
        let mut cmd = Command::new(&self.frontend_path);
        cmd.args(["install", "-y", package]);
        if self.frontend == Frontend::AptGet {
            cmd.env("DEBIAN_FRONTEND", "noninteractive");
        }

        let output = cmd.output().map_err(|e| Error::PackageInstall {
            package: package.to_string(),
            reason: format!("Failed to run {}: {}", self.frontend_path.display(), e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::PackageInstall {
                package: package.to_string(),
                reason: format!(
                    "{} exited with {}: {}",
                    self.frontend.binary(),
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            });
        }

        info!("Installed {}", package);
        Ok(())
    }
}
