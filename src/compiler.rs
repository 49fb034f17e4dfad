// src/compiler.rs

//! Policy compilation and loading, gated to run at most once per host
//!
//! The actual compile-and-load work (checkmodule, semodule_package,
//! semodule) lives in an external script treated as a black box: artifact
//! path in, exit code out. The gate around it persists success in a marker
//! file so a host is never compiled twice, while a failed or interrupted
//! run leaves the host eligible for retry.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Default marker recording a successful compile-and-load
pub const DEFAULT_MARKER_PATH: &str = "/root/mongodb_selinux.success";

/// Default location of the external compile-and-load script
pub const DEFAULT_COMPILE_SCRIPT: &str = "/usr/local/libexec/mongodb-selinux-compile";

/// Seam between the gate and the real SELinux toolchain
pub trait PolicyCompiler {
    /// Compile the policy source at `artifact` and load it into the
    /// running policy store
    fn compile_and_load(&self, artifact: &Path) -> Result<()>;
}

/// Outcome of a gated compile attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The compiler ran and the policy is now installed
    Compiled,
    /// The marker already existed; nothing was invoked
    AlreadyInstalled,
}

/// Marker-gated invocation wrapper
///
/// State machine: `NotInstalled -> Installed`, one transition, terminal on
/// success. The marker is created only after the compiler reports success,
/// and with exclusive creation so the create itself is atomic; a crash
/// mid-compile leaves no marker and the next run retries.
#[derive(Debug, Clone)]
pub struct CompileGate {
    marker: PathBuf,
}

impl CompileGate {
    pub fn new(marker: impl Into<PathBuf>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Whether a previous run already installed the policy
    pub fn is_installed(&self) -> bool {
        self.marker.exists()
    }

    /// Run the compiler unless the marker says it already succeeded
    pub fn run(&self, compiler: &dyn PolicyCompiler, artifact: &Path) -> Result<GateOutcome> {
        if self.is_installed() {
            info!(
                "Policy already installed (marker {} present), skipping compile",
                self.marker.display()
            );
            return Ok(GateOutcome::AlreadyInstalled);
        }

        compiler.compile_and_load(artifact)?;

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.marker)
        {
            Ok(_) => {
                debug!("Created installation marker {}", self.marker.display());
            }
            // A concurrent run finished first; the policy is installed
            // either way
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!(
                    "Installation marker {} appeared concurrently",
                    self.marker.display()
                );
            }
            Err(e) => return Err(Error::Io(e)),
        }

        Ok(GateOutcome::Compiled)
    }
}

impl Default for CompileGate {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_PATH)
    }
}

/// Production compiler: an external compile-and-load script
pub struct ScriptCompiler {
    script: PathBuf,
}

impl ScriptCompiler {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl PolicyCompiler for ScriptCompiler {
    fn compile_and_load(&self, artifact: &Path) -> Result<()> {
        // Validate the script exists - NO FALLBACK
        if !self.script.exists() {
            return Err(Error::CompilerInvocation(format!(
                "Compile script not found: {}",
                self.script.display()
            )));
        }

        info!(
            "Compiling and loading policy: {} {}",
            self.script.display(),
            artifact.display()
        );

        let output = Command::new(&self.script)
            .arg(artifact)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Error::CompilerInvocation(format!(
                    "Failed to spawn {}: {}",
                    self.script.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stdout.lines() {
            info!("[compile] {}", line);
        }
        for line in stderr.lines() {
            warn!("[compile] {}", line);
        }

        if output.status.success() {
            info!("Policy compile-and-load completed successfully");
            Ok(())
        } else {
            Err(Error::CompilerInvocation(format!(
                "{} exited with {}: {}",
                self.script.display(),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )))
        }
    }
}
