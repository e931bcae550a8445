//! Writing a rendered file set to disk.
//! The target directory must be absent or empty; files are written in lexical
//! path order. A failure part-way through leaves the files already written in
//! place and reports the path that failed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::template::RenderedFileSet;

/// Filesystem operations the writer needs.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn write_text_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?.map(|entry| entry.map(|e| e.path())).collect()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_text_file(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

pub struct DirectoryWriter<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> DirectoryWriter<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Ensures `target` is either absent or an empty directory.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `target` is a file or a non-empty directory
    /// * `Error::FileError` if its entries cannot be listed
    pub fn check_target(&self, target: &Path) -> Result<()> {
        if !self.fs.exists(target) {
            return Ok(());
        }
        if !self.fs.is_dir(target) {
            return Err(Error::ValidationError(format!(
                "'{}' exists and is not a directory",
                target.display()
            )));
        }
        let entries = self
            .fs
            .list_dir(target)
            .map_err(|source| Error::FileError { path: target.to_path_buf(), source })?;
        if !entries.is_empty() {
            return Err(Error::ValidationError(format!(
                "directory '{}' is not empty ({} entries); choose an empty directory or a new path",
                target.display(),
                entries.len()
            )));
        }
        Ok(())
    }

    /// Checks `target`, creates it, then writes every file of `files` beneath it.
    pub fn write(&self, target: &Path, files: &RenderedFileSet) -> Result<Vec<PathBuf>> {
        self.check_target(target)?;
        self.create_dir(target)?;

        let mut written = Vec::with_capacity(files.len());
        for (relative, content) in files.iter() {
            let path = relative.split('/').fold(target.to_path_buf(), |acc, seg| acc.join(seg));
            if let Some(parent) = path.parent() {
                self.create_dir(parent)?;
            }
            debug!("Writing file: {}", path.display());
            self.fs
                .write_text_file(&path, content)
                .map_err(|source| Error::FileError { path: path.clone(), source })?;
            written.push(path);
        }
        Ok(written)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.fs
            .create_dir_all(path)
            .map_err(|source| Error::FileError { path: path.to_path_buf(), source })
    }
}
