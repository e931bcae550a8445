//! Repository initialisation for a freshly generated project.
//! Runs on a background thread; its outcome never changes the result of a
//! generation that already wrote its files.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use git2::{IndexAddOption, Repository, Signature};
use log::{debug, info, warn};

use crate::constants::{FALLBACK_GIT_AUTHOR, INITIAL_COMMIT_MESSAGE};
use crate::error::{Error, Result};

/// Version-control operations needed to seed a new project.
pub trait VersionControl: Send + Sync {
    /// Creates an empty repository rooted at `dir`.
    fn init_repo(&self, dir: &Path) -> Result<()>;

    /// Stages every file beneath `dir`.
    fn stage_all(&self, dir: &Path) -> Result<()>;

    /// Records the staged tree as the first commit.
    fn commit(&self, dir: &Path, message: &str) -> Result<()>;
}

/// [`VersionControl`] backed by libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git2VersionControl;

impl VersionControl for Git2VersionControl {
    fn init_repo(&self, dir: &Path) -> Result<()> {
        Repository::init(dir)?;
        Ok(())
    }

    fn stage_all(&self, dir: &Path) -> Result<()> {
        let repo = Repository::open(dir)?;
        let mut index = repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, dir: &Path, message: &str) -> Result<()> {
        let repo = Repository::open(dir)?;
        let mut index = repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // No user.name/user.email configured: commit under the tool's identity.
        let signature = match repo.signature() {
            Ok(signature) => signature,
            Err(_) => Signature::now(FALLBACK_GIT_AUTHOR.0, FALLBACK_GIT_AUTHOR.1)?,
        };

        let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])?;
        debug!("Created commit {oid}");
        Ok(())
    }
}

/// Runs init, stage and commit in order, stopping at the first failure.
pub fn init_repository(vcs: &dyn VersionControl, dir: &Path) -> Result<()> {
    vcs.init_repo(dir)?;
    vcs.stage_all(dir)?;
    vcs.commit(dir, INITIAL_COMMIT_MESSAGE)
}

/// Handle to a repository initialisation running in the background.
#[derive(Debug)]
pub struct GitInitTask {
    dir: PathBuf,
    handle: JoinHandle<Result<()>>,
}

impl GitInitTask {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Blocks until the background work ends and logs its outcome.
    ///
    /// Returns whether a repository with an initial commit now exists; a failure
    /// is only reported as a warning.
    pub fn wait(self) -> bool {
        let outcome = self
            .handle
            .join()
            .unwrap_or_else(|_| Err(Error::GitError(git2::Error::from_str("git worker panicked"))));
        match outcome {
            Ok(()) => {
                info!("Initialized git repository in {}", self.dir.display());
                true
            }
            Err(err) => {
                warn!("Skipping git initialization in {}: {err}", self.dir.display());
                false
            }
        }
    }
}

/// Starts [`init_repository`] on a background thread.
pub fn spawn_git_init(vcs: Arc<dyn VersionControl>, dir: PathBuf) -> GitInitTask {
    let worker_dir = dir.clone();
    let handle = thread::spawn(move || init_repository(vcs.as_ref(), &worker_dir));
    GitInitTask { dir, handle }
}
