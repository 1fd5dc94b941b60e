// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! User-facing console notifications.
//!
//! These lines are the tool's output, not diagnostics: they go to stdout and
//! read the same whether or not `--dry` is set.

use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Line-oriented writer for progress notifications.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print one notification line.
    pub fn line(&mut self, msg: &str) -> Result<()> {
        writeln!(self.out, "{msg}").map_err(Error::Console)
    }

    /// Print a module header, separated from the previous output by a blank line.
    pub fn section(&mut self, module: &str) -> Result<()> {
        writeln!(self.out, "\nInitializing \"{module}\"...").map_err(Error::Console)
    }

    /// Print an empty separator line.
    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Announce a file about to be written.
    pub fn writing(&mut self, path: &Path) -> Result<()> {
        self.line(&format!("Writing \"{}\"", path.display()))
    }

    /// Announce packages about to be installed.
    pub fn installing(&mut self, packages: &[String]) -> Result<()> {
        self.line(&format!("Installing packages: {}", packages.join(", ")))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
