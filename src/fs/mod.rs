//! Filesystem access used by the tree walker
//!
//! Everything the walker needs from the filesystem goes through the
//! [`FileSystem`] trait, so traversal can run against the real disk
//! ([`OsFileSystem`]) or an in-memory tree ([`MemoryFileSystem`]).
//!
//! Failures never escape as errors from [`FileSystem::classify`]: an entry
//! that cannot be inspected is reported as [`EntryKind::Inaccessible`].

mod memory;
mod os;

use std::io;
use std::path::{Path, PathBuf};

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

/// What a path turned out to be when classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Permission denied, deleted mid-walk, dangling symlink, ...
    Inaccessible,
}

/// Size and permission details gathered while classifying.
///
/// Collected for every entry but not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryMetadata {
    pub len: u64,
    pub readonly: bool,
    /// Unix permission bits, when the platform has them.
    pub mode: Option<u32>,
}

/// Result of classifying a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub kind: EntryKind,
    pub is_symlink: bool,
    pub metadata: Option<EntryMetadata>,
}

impl Classification {
    pub fn directory(metadata: EntryMetadata) -> Self {
        Self {
            kind: EntryKind::Directory,
            is_symlink: false,
            metadata: Some(metadata),
        }
    }

    pub fn file(metadata: EntryMetadata) -> Self {
        Self {
            kind: EntryKind::File,
            is_symlink: false,
            metadata: Some(metadata),
        }
    }

    pub fn inaccessible() -> Self {
        Self {
            kind: EntryKind::Inaccessible,
            is_symlink: false,
            metadata: None,
        }
    }

    pub fn with_symlink(mut self, is_symlink: bool) -> Self {
        self.is_symlink = is_symlink;
        self
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Source of directory listings and file contents.
pub trait FileSystem {
    /// Classify `path`. Must not fail: problems resolve to `Inaccessible`.
    fn classify(&self, path: &Path) -> Classification;

    /// Full paths of the direct children of `path`, in no particular order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
