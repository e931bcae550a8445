//! Command-line interface for create-effect-agent.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GenerateConfig;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "create-effect-agent: scaffold Effect-TS libraries with IDE and agent rules",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a new project in PATH
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Directory to create the project in; must be absent or empty
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Project name in kebab-case (defaults to the last segment of PATH)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Accept defaults and skip all prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Template to render: basic or supermemory
    #[arg(short, long)]
    pub template: Option<String>,

    /// JSON or YAML file with preset answers
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn to_config(&self) -> GenerateConfig {
        GenerateConfig {
            path: self.path.clone(),
            name: self.name.clone(),
            non_interactive: self.yes,
            skip_git: self.no_git,
            template: self.template.clone(),
        }
    }
}

/// Whether a parse error should be answered with the full help text.
fn shows_help(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingSubcommand
    )
}

/// The command with the compact help layout printed on missing arguments.
fn help_command() -> clap::Command {
    Args::command().help_template(
        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
    )
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors, or when the
///   help text cannot be written to stdout
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if shows_help(e.kind()) && help_command().print_help().is_ok() {
                std::process::exit(1);
            }
            e.exit();
        }
    }
}
