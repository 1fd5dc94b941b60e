// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Package descriptor loading.
//!
//! The descriptor is the `package.json` bundled next to the binary. Its name,
//! version and description brand the CLI, and its devDependencies pin the
//! lint tool version written into generated configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The subset of `package.json` bedev reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl Descriptor {
    /// Load and parse the descriptor at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::DescriptorRead { path: path.to_path_buf(), source })?;
        let descriptor: Self = serde_json::from_str(&content)
            .map_err(|source| Error::DescriptorParse { path: path.to_path_buf(), source })?;
        tracing::debug!(
            path = %path.display(),
            name = %descriptor.name,
            version = %descriptor.version,
            "loaded package descriptor"
        );
        Ok(descriptor)
    }

    /// Version constraint of a devDependency, if declared.
    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.dev_dependencies.get(name).map(String::as_str)
    }

    /// `<name>@<version>` for this package.
    pub fn package_spec(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
