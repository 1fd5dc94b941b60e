// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Module initializers.
//!
//! Each module writes one configuration file into the working directory.
//! Modules always run in declaration order, whatever order they were
//! requested in, and each runs at most once.

pub mod editorconfig;
pub mod lint;

use std::io::Write;
use std::path::Path;

use crate::console::Console;
use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::installer::Installer;

/// A selectable scaffolding action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Module {
    /// Editor settings (.editorconfig)
    Editorconfig,
    /// Lint tool configuration (biome.json) and packages
    Lint,
}

impl Module {
    /// Every module, in dispatch order.
    pub const ALL: [Module; 2] = [Module::Editorconfig, Module::Lint];

    pub fn name(self) -> &'static str {
        match self {
            Module::Editorconfig => "editorconfig",
            Module::Lint => "lint",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared inputs for one `init` invocation.
#[derive(Debug)]
pub struct InitContext<'a> {
    /// Install root holding the bundled templates.
    pub root: &'a Path,
    /// Directory receiving the generated files.
    pub cwd: &'a Path,
    pub descriptor: &'a Descriptor,
    pub token: &'a str,
    /// Announce every effect but perform none.
    pub dry: bool,
}

/// Deduplicate and order the requested modules for dispatch.
pub fn dispatch_order(requested: &[Module]) -> Vec<Module> {
    Module::ALL.into_iter().filter(|m| requested.contains(m)).collect()
}

/// Run the requested modules.
pub fn run<W: Write>(
    requested: &[Module],
    ctx: &InitContext<'_>,
    installer: &dyn Installer,
    console: &mut Console<W>,
) -> Result<()> {
    let modules = dispatch_order(requested);
    let names: Vec<&str> = modules.iter().map(|m| m.name()).collect();
    console.line(&format!("Initializing modules: {}", names.join(", ")))?;

    for module in modules {
        console.section(module.name())?;
        match module {
            Module::Editorconfig => {
                editorconfig::init(ctx, console)?;
                console.blank()?;
            }
            Module::Lint => lint::init(ctx, installer, console)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
