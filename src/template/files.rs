use std::collections::btree_map::{self, BTreeMap};

use crate::error::{Error, Result};

/// Relative POSIX path → file content, iterated in lexical path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFileSet {
    files: BTreeMap<String, String>,
}

/// A key is valid when it is relative, `/`-separated, and free of empty,
/// `.` and `..` segments.
pub fn is_relative_posix_path(path: &str) -> bool {
    !path.is_empty()
        && !path.contains('\\')
        && path.split('/').all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

impl RenderedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file; rejects invalid paths and paths that were already rendered.
    pub fn insert<P: Into<String>, C: Into<String>>(&mut self, path: P, content: C) -> Result<()> {
        let path = path.into();
        if !is_relative_posix_path(&path) {
            return Err(Error::TemplateError(format!("invalid rendered path '{path}'")));
        }
        match self.files.entry(path) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(content.into());
                Ok(())
            }
            btree_map::Entry::Occupied(entry) => Err(Error::TemplateError(format!(
                "'{}' was rendered twice",
                entry.key()
            ))),
        }
    }

    pub fn merge(&mut self, other: RenderedFileSet) -> Result<()> {
        for (path, content) in other.files {
            self.insert(path, content)?;
        }
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Fails if any content still carries a literal `{{`.
    pub fn ensure_fully_substituted(&self) -> Result<()> {
        let leftovers: Vec<&str> = self
            .iter()
            .filter(|(_, content)| content.contains("{{"))
            .map(|(path, _)| path)
            .collect();
        if leftovers.is_empty() {
            Ok(())
        } else {
            Err(Error::TemplateError(format!(
                "unsubstituted placeholders left in {}",
                leftovers.join(", ")
            )))
        }
    }
}
