//! Datastore file discovery.
//!
//! The query engine never touches the filesystem listing API directly; it
//! asks a [`DirectoryLister`] for the entries of a root directory. The
//! default [`FsLister`] lists the regular files directly inside the root.
//! A [`FileFilter`] can narrow the listed files with glob patterns.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::DsqueryError;
use crate::Result;

/// Source of datastore file paths for a root directory.
pub trait DirectoryLister {
    /// Whether `root` holds data at all. A root that does not exist is an
    /// empty datastore, not an error.
    fn exists(&self, root: &Path) -> bool {
        root.is_dir()
    }

    /// Paths of the entries under `root`, in the order they are read.
    fn list_entries(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Lists the files directly inside a directory on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FsLister {
    pub fn new() -> Self {
        Self
    }
}

/// Hidden files (editor swap files, `.DS_Store`, ...) are never datastores.
fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl DirectoryLister for FsLister {
    /// An error on the root itself fails the listing. Errors on individual
    /// entries are logged and the entry is skipped.
    fn list_entries(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() == 0 => return Err(DsqueryError::Io(e.into())),
                Err(e) => {
                    log::warn!("skipping unreadable entry under {}: {e}", root.display());
                    continue;
                }
            };

            let name = entry.file_name().to_str().unwrap_or("");
            if is_hidden(name) || !entry.file_type().is_file() {
                continue;
            }
            files.push(entry.into_path());
        }

        log::debug!("listed {} files in {}", files.len(), root.display());
        Ok(files)
    }
}

/// Which listed files are read, by file name.
///
/// A file is read when no `skip` pattern matches its name and either
/// `keep` is empty or one of its patterns matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileFilter {
    keep: Vec<Pattern>,
    skip: Vec<Pattern>,
}

impl FileFilter {
    /// Compile `keep` and `skip` glob lists into a filter.
    pub fn from_globs<K, S>(keep: K, skip: S) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Ok(Self {
            keep: compile_all(keep)?,
            skip: compile_all(skip)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.keep.is_empty() && self.skip.is_empty()
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if self.skip.iter().any(|p| p.matches(&name)) {
            return false;
        }
        self.keep.is_empty() || self.keep.iter().any(|p| p.matches(&name))
    }
}

fn compile_all<I>(patterns: I) -> Result<Vec<Pattern>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Pattern::new(pattern).map_err(|e| DsqueryError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
