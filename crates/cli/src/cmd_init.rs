// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

//! Init command implementation.

use std::path::Path;

use anyhow::Context;

use bedev::cli::InitArgs;
use bedev::config::Settings;
use bedev::console::Console;
use bedev::descriptor::Descriptor;
use bedev::init::{self, InitContext};
use bedev::installer::PackageManager;

/// Run the init command.
pub fn run(
    args: &InitArgs,
    root: &Path,
    descriptor: &Descriptor,
    settings: &Settings,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;

    let ctx = InitContext {
        root,
        cwd: &cwd,
        descriptor,
        token: &args.github_token,
        dry: args.dry,
    };
    let installer = PackageManager::new(settings.package_manager.clone());

    let stdout = std::io::stdout();
    let mut console = Console::new(stdout.lock());
    init::run(&args.modules, &ctx, &installer, &mut console)?;
    Ok(())
}
