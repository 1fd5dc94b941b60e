// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Package installation through an external package manager.
//!
//! The install blocks until the child exits. There is no timeout and no retry;
//! a non-zero exit is returned as an error and ends the invocation.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::defaults;
use crate::error::{Error, Result};

/// Packages to add as dev dependencies of the project in `cwd`.
#[derive(Debug)]
pub struct InstallRequest<'a> {
    pub cwd: &'a Path,
    /// `<name>@<version>` specs, installed in order.
    pub packages: &'a [String],
    /// Exposed to the child as `GITHUB_TOKEN` for private registry access.
    pub token: &'a str,
}

/// Seam between the lint initializer and the outside world.
pub trait Installer {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()>;
}

/// Installs with `<program> i -D <packages...>`.
#[derive(Debug, Clone)]
pub struct PackageManager {
    program: OsString,
}

impl PackageManager {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    fn command(&self, request: &InstallRequest<'_>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["i", "-D"])
            .args(request.packages)
            .current_dir(request.cwd)
            .env(defaults::TOKEN_ENV, request.token)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());
        cmd
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl Installer for PackageManager {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()> {
        let mut cmd = self.command(request);
        tracing::debug!(
            program = %self.program_name(),
            packages = ?request.packages,
            cwd = %request.cwd.display(),
            "running package install"
        );

        let status = cmd
            .status()
            .map_err(|source| Error::Spawn { program: self.program_name(), source })?;

        if !status.success() {
            return Err(Error::InstallFailed { program: self.program_name(), status });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
