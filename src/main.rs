//! create-effect-agent entry point.
//! Parses arguments, runs the `generate` command and reports its outcome.

use std::sync::Arc;

use create_effect_agent::{
    answers::load_answers,
    cli::{get_args, Args, Command},
    config::RunContext,
    error::{default_error_handler, Result},
    generate::Generator,
    git::Git2VersionControl,
    logger::init_logger,
    prompt::DialoguerPrompter,
    writer::LocalFileSystem,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// # Flow
/// 1. Captures the working directory and loads preset answers
/// 2. Resolves, renders and writes the project
/// 3. Reports success, then waits for the background git initialization
fn run(args: Args) -> Result<()> {
    let Command::Generate(generate) = args.command;

    let context = RunContext::from_env()?;
    let preset = load_answers(generate.answers.as_ref())?;
    let prompter = DialoguerPrompter::new();
    let fs = LocalFileSystem;

    let generator = Generator::new(&context, &prompter, &fs, Arc::new(Git2VersionControl));
    let outcome = generator.generate(&generate.to_config(), &preset)?;

    let project = &outcome.project;
    println!(
        "Project '{}' created successfully in {} ({} files).",
        project.name,
        project.absolute_path.display(),
        project.files.len()
    );
    let pm = project.resolved_config.package_manager;
    println!(
        "Next steps:\n  cd {}\n  {}\n  {} test",
        project.absolute_path.display(),
        pm.install_command(),
        pm.run_prefix()
    );

    if let Some(task) = outcome.git {
        task.wait();
    }
    Ok(())
}
