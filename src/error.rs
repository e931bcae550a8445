//! Error handling for create-effect-agent.
//! Defines the error taxonomy and the result alias used throughout the generator.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Generation step a [`Error::GenerateError`] is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateStep {
    Template,
}

impl fmt::Display for GenerateStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            GenerateStep::Template => "template",
        };
        f.write_str(step)
    }
}

/// Custom error types for generator operations.
///
/// Validation, file and template errors are terminal for a single invocation.
/// `GitError` is only ever produced by the best-effort repository initialisation
/// and is logged rather than returned from the orchestrator.
#[derive(Error, Debug)]
pub enum Error {
    /// Bare I/O failures that are not tied to a generated file
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// I/O failure while creating a directory or writing a generated file
    #[error("File error: '{}': {source}.", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Internal rendering defect; never expected for valid input
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Placeholders required by a template that the variable map does not provide
    #[error("Template error: missing template variables: {}.", .0.join(", "))]
    MissingVariables(Vec<String>),

    /// Invalid user input: project name, target directory, prompt answers
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Unreadable or malformed answers file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Failure tagged with the generation step it belongs to
    #[error("Generate error ({step}): {message}.")]
    GenerateError { step: GenerateStep, message: String },

    /// Repository initialisation failure
    #[error("Git error: {0}.")]
    GitError(#[from] git2::Error),

    /// MiniJinja failure while rendering a prose template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

/// Convenience type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
