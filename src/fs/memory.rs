//! In-memory filesystem for exercising the walker without touching disk

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::{Classification, EntryMetadata, FileSystem};

#[derive(Debug, Clone)]
enum Node {
    Dir { readable: bool },
    /// `None` contents means reads fail with permission denied.
    File { contents: Option<String> },
    /// Listed by its parent but cannot be classified (e.g. a dangling link).
    Dangling,
}

/// A virtual directory tree rooted at a fixed absolute path.
///
/// Paths passed to the builder methods are relative to the root and use
/// `/` separators. Missing parent directories are created on demand.
///
/// ```
/// use arbor::fs::{FileSystem, MemoryFileSystem};
///
/// let fs = MemoryFileSystem::new("/project")
///     .with_file("src/main.rs", "fn main() {}")
///     .with_dir("empty");
/// assert!(fs.classify(fs.root()).is_dir());
/// assert_eq!(fs.read_dir(fs.root()).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    root: PathBuf,
    nodes: BTreeMap<PathBuf, Node>,
}

impl MemoryFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut nodes = BTreeMap::new();
        nodes.insert(root.clone(), Node::Dir { readable: true });
        Self { root, nodes }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: true });
        self
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.insert(
            path,
            Node::File {
                contents: Some(contents.to_string()),
            },
        );
        self
    }

    /// A directory that classifies fine but fails to list.
    pub fn with_unreadable_dir(mut self, path: &str) -> Self {
        self.insert(path, Node::Dir { readable: false });
        self
    }

    /// A file that classifies fine but fails to read.
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.insert(path, Node::File { contents: None });
        self
    }

    pub fn with_dangling(mut self, path: &str) -> Self {
        self.insert(path, Node::Dangling);
        self
    }

    fn insert(&mut self, path: &str, node: Node) {
        let full = self.root.join(path.trim_matches('/'));
        let mut parent = full.parent();
        while let Some(dir) = parent {
            if !dir.starts_with(&self.root) || self.nodes.contains_key(dir) {
                break;
            }
            self.nodes
                .insert(dir.to_path_buf(), Node::Dir { readable: true });
            parent = dir.parent();
        }
        self.nodes.insert(full, node);
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

fn permission_denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")
}

impl FileSystem for MemoryFileSystem {
    fn classify(&self, path: &Path) -> Classification {
        match self.nodes.get(path) {
            Some(Node::Dir { .. }) => Classification::directory(EntryMetadata::default()),
            Some(Node::File { contents }) => Classification::file(EntryMetadata {
                len: contents.as_ref().map_or(0, |c| c.len() as u64),
                ..EntryMetadata::default()
            }),
            Some(Node::Dangling) | None => Classification::inaccessible(),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        match self.nodes.get(path) {
            Some(Node::Dir { readable: true }) => Ok(self
                .nodes
                .keys()
                .filter(|p| p.parent() == Some(path))
                .cloned()
                .collect()),
            Some(Node::Dir { readable: false }) => Err(permission_denied()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )),
            None => Err(not_found(path)),
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.get(path) {
            Some(Node::File {
                contents: Some(contents),
            }) => Ok(contents.clone()),
            Some(Node::File { contents: None }) => Err(permission_denied()),
            Some(Node::Dir { .. }) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            )),
            Some(Node::Dangling) | None => Err(not_found(path)),
        }
    }
}
