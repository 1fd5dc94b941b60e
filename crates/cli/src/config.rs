// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Environment-driven settings.
//!
//! bedev has no config file. Everything that can be tuned is read from the
//! environment once, at startup, and carried around in [`Settings`].

use std::ffi::OsString;

/// Centralized names and default values.
pub mod defaults {
    /// Environment variable holding the GitHub token handed to the installer.
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Overrides the install root (where `package.json` and `.editorconfig` live).
    pub const ROOT_ENV: &str = "BEDEV_ROOT";

    /// Overrides the package manager program.
    pub const NPM_ENV: &str = "BEDEV_NPM";

    /// Log filter directive for tracing output on stderr.
    pub const LOG_ENV: &str = "BEDEV_LOG";

    /// Package manager used when `BEDEV_NPM` is unset.
    pub const PACKAGE_MANAGER: &str = "npm";

    /// Log filter used when `BEDEV_LOG` is unset.
    pub const LOG_FILTER: &str = "warn";
}

/// Settings resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit install root, if `BEDEV_ROOT` is set.
    pub root: Option<OsString>,
    /// Package manager program to spawn for installs.
    pub package_manager: OsString,
}

impl Default for Settings {
    fn default() -> Self {
        Self { root: None, package_manager: OsString::from(defaults::PACKAGE_MANAGER) }
    }
}

impl Settings {
    /// Read settings from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            root: get(defaults::ROOT_ENV),
            package_manager: get(defaults::NPM_ENV)
                .unwrap_or_else(|| OsString::from(defaults::PACKAGE_MANAGER)),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
