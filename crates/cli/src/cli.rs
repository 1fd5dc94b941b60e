//! CLI argument parsing with clap derive.
//!
//! The command is declared statically, then rebranded at runtime with the
//! name, description and version of the bundled package descriptor.

use clap::builder::StyledStr;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::config::defaults;
use crate::descriptor::Descriptor;
use crate::init::Module;

/// Scaffolds standard editor and lint configuration into a project
#[derive(Debug, Parser)]
#[command(name = "bedev")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initializes the configuration of most common modules
    Init(InitArgs),
}

#[derive(Debug, clap::Args)]
pub struct InitArgs {
    /// Modules to initialize
    #[arg(short, long, value_enum, value_name = "MODULE", num_args = 1.., required = true)]
    pub modules: Vec<Module>,

    /// Token for the private package registry
    #[arg(
        short = 't',
        long,
        value_name = "TOKEN",
        env = defaults::TOKEN_ENV,
        hide_env_values = true
    )]
    pub github_token: String,

    /// Show what would be written and installed without doing it
    #[arg(short, long)]
    pub dry: bool,
}

/// Outcome of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    Run(Command),
    /// No subcommand given; carries the top-level help to show instead.
    MissingCommand(StyledStr),
}

/// The clap command, branded with the descriptor's identity.
pub fn command(descriptor: &Descriptor) -> clap::Command {
    Cli::command()
        .name(descriptor.name.clone())
        .bin_name(descriptor.name.clone())
        .about(descriptor.description.clone())
        .version(descriptor.version.clone())
}

/// Parse `args` (program name first) against the branded command.
pub fn parse_from<I, T>(descriptor: &Descriptor, args: I) -> Result<Parsed, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut cmd = command(descriptor);
    let matches = cmd.try_get_matches_from_mut(args)?;
    let cli = Cli::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))?;

    Ok(match cli.command {
        Some(command) => Parsed::Run(command),
        None => Parsed::MissingCommand(cmd.render_help()),
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
