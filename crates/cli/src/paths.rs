// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Install root discovery.
//!
//! The binary is installed as `<root>/bin/bedev`; the descriptor and the
//! bundled templates sit directly in `<root>`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Package descriptor filename, relative to the install root.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Editor configuration filename, both as bundled template and as output.
pub const EDITORCONFIG_FILE: &str = ".editorconfig";

/// Resolve the install root: an explicit override wins, otherwise the
/// parent of the directory holding the running executable.
pub fn resolve_root(explicit: Option<&OsString>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(PathBuf::from(root));
    }
    let exe = std::env::current_exe().map_err(Error::CurrentExe)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    Ok(root_from_exe(&exe))
}

/// Two levels up from the executable: `<root>/bin/bedev` -> `<root>`.
///
/// Falls back to the filesystem root when the path is too shallow.
pub fn root_from_exe(exe: &Path) -> PathBuf {
    let bin_dir = exe.parent().unwrap_or(exe);
    bin_dir.parent().unwrap_or(bin_dir).to_path_buf()
}

pub fn descriptor_path(root: &Path) -> PathBuf {
    root.join(DESCRIPTOR_FILE)
}

pub fn template_path(root: &Path) -> PathBuf {
    root.join(EDITORCONFIG_FILE)
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
