//! The `generate` command.
//! Sequences resolution, the target precondition check, rendering and writing,
//! then hands repository initialisation to a background task.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use log::debug;

use crate::answers::PresetAnswers;
use crate::config::{ConfigResolver, GenerateConfig, ResolvedConfig, RunContext};
use crate::error::Result;
use crate::git::{spawn_git_init, GitInitTask, VersionControl};
use crate::prompt::Prompter;
use crate::renderer::MiniJinjaRenderer;
use crate::template;
use crate::writer::{DirectoryWriter, FileSystem};

/// Record of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    pub name: String,
    pub absolute_path: PathBuf,
    pub resolved_config: ResolvedConfig,
    pub files: Vec<PathBuf>,
    pub timestamp: SystemTime,
}

/// What `generate` hands back: the written project and, unless skipped, the
/// still-running repository initialisation.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub project: GeneratedProject,
    pub git: Option<GitInitTask>,
}

pub struct Generator<'a> {
    context: &'a RunContext,
    prompter: &'a dyn Prompter,
    fs: &'a dyn FileSystem,
    vcs: Arc<dyn VersionControl>,
}

impl<'a> Generator<'a> {
    pub fn new(
        context: &'a RunContext,
        prompter: &'a dyn Prompter,
        fs: &'a dyn FileSystem,
        vcs: Arc<dyn VersionControl>,
    ) -> Self {
        Self { context, prompter, fs, vcs }
    }

    /// Runs one generation end to end.
    ///
    /// # Errors
    /// Any failure before the files are written is returned unchanged; a git
    /// failure is never returned from here, see [`GitInitTask::wait`].
    pub fn generate(&self, raw: &GenerateConfig, preset: &PresetAnswers) -> Result<GenerateOutcome> {
        debug!("Resolving configuration for {}", raw.path.display());
        let resolved = ConfigResolver::new(self.context, self.prompter).resolve(raw, preset)?;

        debug!("Checking target directory {}", resolved.path.display());
        let writer = DirectoryWriter::new(self.fs);
        writer.check_target(&resolved.path)?;

        debug!("Rendering template '{}'", resolved.template_kind.id());
        let files = template::render(&resolved, &MiniJinjaRenderer::new())?;

        debug!("Writing {} files", files.len());
        let written = writer.write(&resolved.path, &files)?;

        let git = if resolved.skip_git {
            debug!("Git initialization skipped");
            None
        } else {
            debug!("Starting git initialization");
            Some(spawn_git_init(Arc::clone(&self.vcs), resolved.path.clone()))
        };

        let project = GeneratedProject {
            name: resolved.project_name.clone(),
            absolute_path: resolved.path.clone(),
            resolved_config: resolved,
            files: written,
            timestamp: SystemTime::now(),
        };
        Ok(GenerateOutcome { project, git })
    }
}
