//! Entries and directory listings

use std::path::{Path, PathBuf};

use crate::fs::{Classification, EntryMetadata};

/// One filesystem object found directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Final element of the parent's filtered, sorted listing.
    pub is_last: bool,
    /// Reached through a symlink; such directories are not descended.
    pub is_symlink: bool,
    pub metadata: Option<EntryMetadata>,
}

impl Entry {
    /// Build an entry for `path`. Inaccessible paths become non-directories.
    pub fn new(path: PathBuf, classification: Classification) -> Self {
        let name = entry_name(&path);
        Self {
            name,
            path,
            is_dir: classification.is_dir(),
            is_last: false,
            is_symlink: classification.is_symlink,
            metadata: classification.metadata,
        }
    }

    /// Path relative to the start directory, as fed to the ignore matcher.
    pub fn relative_to<'a>(&'a self, root: &Path) -> &'a Path {
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}

/// Children of one directory, or why they could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryListing {
    Entries(Vec<Entry>),
    Error(String),
}

/// Base name of a path, defaulting to "." when it has none.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
