// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Lint initializer.
//!
//! Installs the lint tool at the version this package was built against,
//! alongside this package (which ships the shared lint preset), then writes
//! a `biome.json` extending that preset.

use std::io::Write;

use serde::Serialize;

use crate::console::Console;
use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::init::InitContext;
use crate::installer::{InstallRequest, Installer};

/// Lint tool package, looked up in the descriptor's devDependencies.
pub const LINT_PACKAGE: &str = "@biomejs/biome";

/// Generated configuration filename.
pub const LINT_FILE: &str = "biome.json";

/// Contents of the generated `biome.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintConfig {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub extends: Vec<String>,
}

impl LintConfig {
    pub fn new(lint_version: &str, package_name: &str) -> Self {
        Self {
            schema: format!("https://biomejs.dev/schemas/{lint_version}/schema.json"),
            extends: vec![format!("{package_name}/biome")],
        }
    }

    /// Two-space indented JSON, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }
}

/// Version of the lint tool pinned by the descriptor.
///
/// An undeclared version passes through as an empty string.
pub fn lint_version(descriptor: &Descriptor) -> &str {
    descriptor.dev_dependency(LINT_PACKAGE).unwrap_or_else(|| {
        tracing::warn!(package = LINT_PACKAGE, "lint tool version not declared in descriptor");
        ""
    })
}

pub fn init<W: Write>(
    ctx: &InitContext<'_>,
    installer: &dyn Installer,
    console: &mut Console<W>,
) -> Result<()> {
    let version = lint_version(ctx.descriptor);
    let config = LintConfig::new(version, &ctx.descriptor.name);
    let content = config.to_json()?;

    let packages = vec![format!("{LINT_PACKAGE}@{version}"), ctx.descriptor.package_spec()];
    let target = ctx.cwd.join(LINT_FILE);

    console.installing(&packages)?;
    if !ctx.dry {
        installer.install(&InstallRequest { cwd: ctx.cwd, packages: &packages, token: ctx.token })?;
    }

    console.writing(&target)?;
    if ctx.dry {
        return Ok(());
    }
    std::fs::write(&target, content).map_err(|source| Error::Write { path: target, source })
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
