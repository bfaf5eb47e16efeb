//! Run configuration
//!
//! [`Options`] is what the command line asked for. [`ResolvedConfig`] is
//! derived from it once, before any output: the start path made absolute
//! and validated, and the ignore rules compiled.

use std::path::{Component, Path, PathBuf};

use crate::error::ConfigError;
use crate::fs::{EntryKind, FileSystem};
use crate::ignore_rules::IgnoreRules;

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub path: PathBuf,
    /// Levels to render below the start path; `None` is unbounded.
    pub max_depth: Option<usize>,
    /// One extra gitignore-style pattern.
    pub exclude: Option<String>,
    pub use_gitignore: bool,
    /// Load every `.*ignore` file in the start directory. Wins over
    /// `use_gitignore`.
    pub use_all_ignore_files: bool,
}

impl Options {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Display switches. Only `color` has any effect today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub show_hidden: bool,
    pub color: bool,
    pub show_size: bool,
    pub show_permissions: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_hidden: false,
            color: true,
            show_size: false,
            show_permissions: false,
        }
    }
}

/// Everything the walker needs, fixed for the whole run.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub max_depth: Option<usize>,
    pub ignore: IgnoreRules,
    pub display: DisplayFlags,
}

impl ResolvedConfig {
    /// Resolve `options` against the current directory.
    pub fn resolve<F: FileSystem>(options: &Options, fs: &F) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_in(options, fs, &cwd)
    }

    /// Resolve `options`, treating a relative start path as relative to `cwd`.
    pub fn resolve_in<F: FileSystem>(
        options: &Options,
        fs: &F,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let root = absolutize(&options.path, cwd);

        match fs.classify(&root).kind {
            EntryKind::Directory => {}
            EntryKind::File => return Err(ConfigError::NotADirectory { path: root }),
            EntryKind::Inaccessible => return Err(ConfigError::NotFound { path: root }),
        }

        let ignore = IgnoreRules::compose(fs, &root, options)?;
        log::debug!(
            "resolved start path '{}', max depth {:?}",
            root.display(),
            options.max_depth
        );

        Ok(Self {
            root,
            max_depth: options.max_depth,
            ignore,
            display: DisplayFlags::default(),
        })
    }

    /// Name printed above the tree: the start directory's base name.
    pub fn root_label(&self) -> String {
        self.root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }
}

/// Join `path` onto `cwd` when relative and drop `.`/`..` lexically.
///
/// Symlinks are left alone; `canonicalize` would rename the header.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
