// SPDX-License-Identifier: MIT
// Copyright (c) 2026 bepower

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use bedev::cli::{self, Command, Parsed};
use bedev::config::{Settings, defaults};
use bedev::descriptor::Descriptor;
use bedev::paths;

mod cmd_init;

fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let settings = Settings::from_env();
    let root = paths::resolve_root(settings.root.as_ref())?;
    tracing::debug!(root = %root.display(), "resolved install root");

    // The descriptor brands --help and --version, so it loads before parsing.
    let descriptor = Descriptor::load(&paths::descriptor_path(&root))
        .context("bedev installation is incomplete")?;

    let command = match cli::parse_from(&descriptor, std::env::args_os()) {
        Ok(Parsed::Run(command)) => command,
        Ok(Parsed::MissingCommand(help)) => {
            eprint!("{help}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) if is_help(e.kind()) => {
            e.print().context("failed to print help")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => e.exit(),
    };

    match command {
        Command::Init(args) => cmd_init::run(&args, &root, &descriptor, &settings)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Help output ends the invocation without running anything, so it exits non-zero.
fn is_help(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand)
}

/// Diagnostics go to stderr; stdout is reserved for progress lines.
fn init_logging() {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
