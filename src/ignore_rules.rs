//! Ignore-rule composition
//!
//! All pattern sources for a run (ignore files in the start directory and
//! the `--exclude` glob) are compiled once into a single gitignore matcher.
//! Paths are always matched relative to the start directory, so rules
//! anchored with a leading `/` behave as they do for git.
//!
//! OS-generated junk files are handled separately by [`is_os_junk`].

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::Options;
use crate::error::ConfigError;
use crate::fs::FileSystem;

/// Files the OS drops into directories that never belong in a tree.
pub const OS_JUNK: [&str; 3] = [".DS_Store", "Thumbs.db", "desktop.ini"];

/// Ignore file read by `--gitignore`.
pub const GITIGNORE: &str = ".gitignore";

/// Check a base name against the fixed OS-junk blocklist.
pub fn is_os_junk(name: &str) -> bool {
    OS_JUNK.contains(&name)
}

/// Names picked up by `--allignore`: `.gitignore`, `.npmignore`, `.ignore`, ...
pub fn is_ignore_file_name(name: &str) -> bool {
    name.starts_with('.') && name.ends_with("ignore")
}

/// The composed ignore predicate for one run. Immutable once built.
#[derive(Debug)]
pub struct IgnoreRules {
    matcher: Gitignore,
    sources: Vec<PathBuf>,
}

impl IgnoreRules {
    /// Rules that ignore nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            sources: Vec::new(),
        }
    }

    /// Build the predicate for `root` from the ignore options.
    ///
    /// Unreadable ignore files are logged and skipped. A pattern that the
    /// matcher rejects fails the whole composition.
    pub fn compose<F: FileSystem>(
        fs: &F,
        root: &Path,
        options: &Options,
    ) -> Result<Self, ConfigError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut sources = Vec::new();
        let fail = |source| ConfigError::IgnoreRules {
            path: root.to_path_buf(),
            source,
        };

        if options.use_all_ignore_files {
            for path in ignore_files_in(fs, root) {
                if add_ignore_file(fs, &mut builder, &path).map_err(fail)? {
                    sources.push(path);
                }
            }
        } else if options.use_gitignore {
            let path = root.join(GITIGNORE);
            // Missing and empty .gitignore are the same thing: no rules
            if fs.classify(&path).is_file()
                && add_ignore_file(fs, &mut builder, &path).map_err(fail)?
            {
                sources.push(path);
            }
        }

        if let Some(pattern) = &options.exclude {
            builder.add_line(None, pattern).map_err(fail)?;
        }

        let matcher = builder.build().map_err(fail)?;
        log::debug!(
            "ignore rules: {} patterns from {} file(s){}",
            matcher.num_ignores() + matcher.num_whitelists(),
            sources.len(),
            if options.exclude.is_some() {
                " plus --exclude"
            } else {
                ""
            }
        );

        Ok(Self { matcher, sources })
    }

    /// Whether `relative` (a path relative to the start directory) is ignored.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        self.matcher.matched(relative, is_dir).is_ignore()
    }

    /// Ignore files whose contents were loaded.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }
}

/// Top-level `.*ignore` entries of `root`, sorted by name.
fn ignore_files_in<F: FileSystem>(fs: &F, root: &Path) -> Vec<PathBuf> {
    let children = match fs.read_dir(root) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("cannot scan '{}' for ignore files: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = children
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_ignore_file_name)
        })
        .collect();
    files.sort();
    files
}

/// Add every line of an ignore file. Returns `Ok(false)` when the file
/// could not be read; that is only a warning.
fn add_ignore_file<F: FileSystem>(
    fs: &F,
    builder: &mut GitignoreBuilder,
    path: &Path,
) -> Result<bool, ignore::Error> {
    let contents = match fs.read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("cannot read ignore file '{}': {}", path.display(), e);
            return Ok(false);
        }
    };

    for line in contents.lines() {
        builder.add_line(Some(path.to_path_buf()), line)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;

    fn options() -> Options {
        Options::new("/r")
    }

    fn compose(fs: &MemoryFileSystem, options: &Options) -> IgnoreRules {
        IgnoreRules::compose(fs, fs.root(), options).unwrap()
    }

    #[test]
    fn test_os_junk() {
        assert!(is_os_junk(".DS_Store"));
        assert!(is_os_junk("Thumbs.db"));
        assert!(is_os_junk("desktop.ini"));
        assert!(!is_os_junk("thumbs.db"));
        assert!(!is_os_junk("DS_Store"));
    }

    #[test]
    fn test_ignore_file_names() {
        assert!(is_ignore_file_name(".gitignore"));
        assert!(is_ignore_file_name(".npmignore"));
        assert!(is_ignore_file_name(".ignore"));
        assert!(!is_ignore_file_name("gitignore"));
        assert!(!is_ignore_file_name(".gitignore.bak"));
    }

    #[test]
    fn test_no_sources_ignores_nothing() {
        let fs = MemoryFileSystem::new("/r").with_file(".gitignore", "*.log\n");
        let rules = compose(&fs, &options());
        assert!(rules.is_empty());
        assert!(!rules.is_ignored(Path::new("debug.log"), false));
    }

    #[test]
    fn test_gitignore_only_when_requested() {
        let fs = MemoryFileSystem::new("/r").with_file(".gitignore", "*.log\ntarget/\n");
        let mut opts = options();
        opts.use_gitignore = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("debug.log"), false));
        assert!(rules.is_ignored(Path::new("deep/nested/debug.log"), false));
        assert!(rules.is_ignored(Path::new("target"), true));
        // Directory-only rule does not hit a file of the same name
        assert!(!rules.is_ignored(Path::new("target"), false));
        assert!(!rules.is_ignored(Path::new("main.rs"), false));
        assert_eq!(rules.sources(), &[PathBuf::from("/r/.gitignore")]);
    }

    #[test]
    fn test_missing_and_empty_gitignore_are_silent() {
        let mut opts = options();
        opts.use_gitignore = true;

        let missing = MemoryFileSystem::new("/r").with_file("a.txt", "");
        let rules = compose(&missing, &opts);
        assert!(rules.is_empty());
        assert!(rules.sources().is_empty());

        let empty = MemoryFileSystem::new("/r").with_file(".gitignore", "");
        let rules = compose(&empty, &opts);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_unreadable_gitignore_is_not_fatal() {
        let fs = MemoryFileSystem::new("/r").with_unreadable_file(".gitignore");
        let mut opts = options();
        opts.use_gitignore = true;
        opts.exclude = Some("*.tmp".to_string());

        let rules = compose(&fs, &opts);
        assert!(rules.sources().is_empty());
        assert!(rules.is_ignored(Path::new("x.tmp"), false));
    }

    #[test]
    fn test_all_ignore_files_are_unioned() {
        let fs = MemoryFileSystem::new("/r")
            .with_file(".gitignore", "*.log\n")
            .with_file(".npmignore", "dist/\n")
            .with_file(".dockerignore", "secrets.env\n")
            .with_file("notignore", "*.rs\n")
            .with_file("sub/.gitignore", "*.md\n");
        let mut opts = options();
        opts.use_all_ignore_files = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("a.log"), false));
        assert!(rules.is_ignored(Path::new("dist"), true));
        assert!(rules.is_ignored(Path::new("secrets.env"), false));
        assert!(!rules.is_ignored(Path::new("main.rs"), false));
        // Only top-level ignore files count
        assert!(!rules.is_ignored(Path::new("sub/README.md"), false));
        assert_eq!(rules.sources().len(), 3);
    }

    #[test]
    fn test_all_ignore_files_supersedes_gitignore_flag() {
        let fs = MemoryFileSystem::new("/r")
            .with_file(".gitignore", "*.log\n")
            .with_file(".npmignore", "*.tgz\n");
        let mut opts = options();
        opts.use_gitignore = true;
        opts.use_all_ignore_files = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("a.log"), false));
        assert!(rules.is_ignored(Path::new("pkg.tgz"), false));
    }

    #[test]
    fn test_unreadable_file_does_not_stop_others() {
        let fs = MemoryFileSystem::new("/r")
            .with_unreadable_file(".dockerignore")
            .with_file(".gitignore", "*.log\n");
        let mut opts = options();
        opts.use_all_ignore_files = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("a.log"), false));
        assert_eq!(rules.sources(), &[PathBuf::from("/r/.gitignore")]);
    }

    #[test]
    fn test_exclude_pattern_glob_features() {
        let fs = MemoryFileSystem::new("/r");
        let mut opts = options();

        opts.exclude = Some("*.{png,jpg}".to_string());
        let rules = compose(&fs, &opts);
        assert!(rules.is_ignored(Path::new("img/a.png"), false));
        assert!(rules.is_ignored(Path::new("b.jpg"), false));
        assert!(!rules.is_ignored(Path::new("c.gif"), false));

        opts.exclude = Some("docs/**/draft-[0-9].md".to_string());
        let rules = compose(&fs, &opts);
        assert!(rules.is_ignored(Path::new("docs/a/b/draft-1.md"), false));
        assert!(!rules.is_ignored(Path::new("docs/a/draft-x.md"), false));
    }

    #[test]
    fn test_anchored_rules_match_from_start_directory() {
        let fs = MemoryFileSystem::new("/r").with_file(".gitignore", "/build\n");
        let mut opts = options();
        opts.use_gitignore = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("build"), true));
        assert!(!rules.is_ignored(Path::new("src/build"), true));
    }

    #[test]
    fn test_negation_whitelists() {
        let fs = MemoryFileSystem::new("/r").with_file(".gitignore", "*.log\n!keep.log\n");
        let mut opts = options();
        opts.use_gitignore = true;
        let rules = compose(&fs, &opts);

        assert!(rules.is_ignored(Path::new("a.log"), false));
        assert!(!rules.is_ignored(Path::new("keep.log"), false));
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let fs = MemoryFileSystem::new("/r");
        let mut opts = options();
        opts.exclude = Some("{a,b".to_string());

        let err = IgnoreRules::compose(&fs, fs.root(), &opts).unwrap_err();
        assert_eq!(err.code(), "IGNORE_RULES");
        assert!(err.to_string().contains("/r"));
    }

    #[test]
    fn test_invalid_pattern_in_ignore_file_is_fatal() {
        let fs = MemoryFileSystem::new("/r").with_file(".gitignore", "ok.txt\n[z-a]\n");
        let mut opts = options();
        opts.use_gitignore = true;
        assert!(IgnoreRules::compose(&fs, fs.root(), &opts).is_err());
    }
}
