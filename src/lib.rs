//! create-effect-agent scaffolds Effect-TS libraries.
//! It resolves a configuration from flags, preset answers and prompts, renders
//! the project files in memory, writes them to an empty directory and seeds a
//! git repository in the background.

/// Preset answers file (JSON or YAML)
pub mod answers;

/// Command-line interface module
pub mod cli;

/// Generation configuration and its resolver
pub mod config;

/// Shared literals
pub mod constants;

/// Error types and handling
pub mod error;

/// The `generate` command
pub mod generate;

/// Background repository initialisation
pub mod git;

pub mod logger;

/// `{{name}}` placeholder substitution
pub mod placeholder;

/// User interaction and prompting
pub mod prompt;

/// MiniJinja rendering of prose templates
pub mod renderer;

/// Project file rendering
pub mod template;

/// Writing rendered files to disk
pub mod writer;
