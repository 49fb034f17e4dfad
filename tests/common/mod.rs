// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use mongodb_selinux::{Error, PackageManager, PolicyCompiler, Result};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a vars directory populated with the standard variant files.
///
/// Returns (TempDir, vars_dir) - keep the TempDir alive to prevent cleanup.
pub fn setup_vars_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let vars_dir = temp_dir.path().join("vars");
    fs::create_dir(&vars_dir).unwrap();

    let sources = [
        (
            "RedHat-7.toml",
            "required_packages = [\"checkpolicy\", \"policycoreutils-python\"]\n",
        ),
        (
            "RedHat-8.toml",
            "required_packages = [\"policycoreutils-python-utils\"]\n",
        ),
        (
            "Debian.toml",
            "required_packages = [\"selinux-basics\", \"selinux-policy-dev\"]\n",
        ),
        (
            "Ubuntu-16.04.toml",
            "required_packages = [\"selinux\", \"selinux-policy-dev\"]\n",
        ),
    ];
    for (name, content) in sources {
        fs::write(vars_dir.join(name), content).unwrap();
    }

    (temp_dir, vars_dir)
}

/// Package manager double that records install calls.
pub struct MockPackageManager {
    installed: RefCell<HashSet<String>>,
    install_calls: RefCell<Vec<String>>,
}

impl MockPackageManager {
    pub fn new(installed: &[&str]) -> Self {
        Self {
            installed: RefCell::new(installed.iter().map(|s| s.to_string()).collect()),
            install_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn install_calls(&self) -> Vec<String> {
        self.install_calls.borrow().clone()
    }
}

impl PackageManager for MockPackageManager {
    fn is_installed(&self, package: &str) -> Result<bool> {
        Ok(self.installed.borrow().contains(package))
    }

    fn install(&self, package: &str) -> Result<()> {
        self.install_calls.borrow_mut().push(package.to_string());
        self.installed.borrow_mut().insert(package.to_string());
        Ok(())
    }
}

/// Policy compiler double that counts invocations.
pub struct MockCompiler {
    calls: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl MockCompiler {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl PolicyCompiler for MockCompiler {
    fn compile_and_load(&self, artifact: &Path) -> Result<()> {
        self.calls.borrow_mut().push(artifact.to_path_buf());
        if self.fail {
            Err(Error::CompilerInvocation(
                "checkmodule exited with 1".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
