//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{NamedTempFile, TempDir};

use crate::descriptor::Descriptor;
use crate::error::{Error, Result};
use crate::installer::{InstallRequest, Installer};

pub const EDITORCONFIG_TEMPLATE: &str =
    "root = true\n\n[*]\nindent_style = space\nindent_size = 2\n";

/// Descriptor with the lint tool pinned to 1.9.4.
pub fn descriptor() -> Descriptor {
    Descriptor {
        name: "@bepower/dev".to_string(),
        version: "1.2.3".to_string(),
        description: "A small description".to_string(),
        dependencies: BTreeMap::new(),
        dev_dependencies: BTreeMap::from([("@biomejs/biome".to_string(), "1.9.4".to_string())]),
    }
}

/// Creates a temp install root holding the bundled editorconfig template.
pub fn temp_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".editorconfig"), EDITORCONFIG_TEMPLATE).unwrap();
    dir
}

/// Names of the entries in `dir`, sorted.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// One recorded install call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInstall {
    pub cwd: PathBuf,
    pub packages: Vec<String>,
    pub token: String,
}

/// Installer that records calls instead of spawning anything.
#[derive(Default)]
pub struct RecordingInstaller {
    pub calls: RefCell<Vec<RecordedInstall>>,
    pub fail: bool,
}

impl RecordingInstaller {
    pub fn failing() -> Self {
        Self { calls: RefCell::default(), fail: true }
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, request: &InstallRequest<'_>) -> Result<()> {
        self.calls.borrow_mut().push(RecordedInstall {
            cwd: request.cwd.to_path_buf(),
            packages: request.packages.to_vec(),
            token: request.token.to_string(),
        });
        if self.fail {
            return Err(Error::Spawn {
                program: "npm".to_string(),
                source: std::io::Error::other("simulated failure"),
            });
        }
        Ok(())
    }
}
