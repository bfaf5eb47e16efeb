//! TreeWalker - depth-first, pre-order rendering of a directory tree
//!
//! Nothing is kept beyond the listing of each directory on the current
//! path; lines go to the [`TreeOutput`] as soon as they are known.

use std::io;
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::fs::FileSystem;
use crate::output::{TreeOutput, child_prefix};
use crate::stats::RunningStats;

use super::entry::{DirectoryListing, Entry};
use super::pipeline;

/// Walks the tree described by a [`ResolvedConfig`] over a [`FileSystem`].
pub struct TreeWalker<'a, F> {
    config: &'a ResolvedConfig,
    fs: &'a F,
}

impl<'a, F: FileSystem> TreeWalker<'a, F> {
    pub fn new(config: &'a ResolvedConfig, fs: &'a F) -> Self {
        Self { config, fs }
    }

    /// Render the whole tree and return the totals.
    ///
    /// Unreadable directories become inline error lines; only failures to
    /// write to `output` are returned as errors.
    pub fn walk<O: TreeOutput>(&self, output: &mut O) -> io::Result<RunningStats> {
        let mut stats = RunningStats::new();
        output.header(&self.config.root_label())?;
        self.walk_dir(&self.config.root, "", 1, &mut stats, output)?;
        output.finish(&stats)?;
        Ok(stats)
    }

    /// Children of `path`, filtered and sorted, or the read error.
    pub fn list(&self, path: &Path) -> DirectoryListing {
        let children = match self.fs.read_dir(path) {
            Ok(c) => c,
            Err(e) => return DirectoryListing::Error(e.to_string()),
        };

        let entries = children
            .into_iter()
            .map(|child| {
                let classification = self.fs.classify(&child);
                Entry::new(child, classification)
            })
            .collect();

        DirectoryListing::Entries(pipeline::process(
            entries,
            &self.config.ignore,
            &self.config.root,
        ))
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_none_or(|max| depth <= max)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        stats: &mut RunningStats,
        output: &mut O,
    ) -> io::Result<()> {
        if !self.within_depth(depth) {
            return Ok(());
        }

        let entries = match self.list(path) {
            DirectoryListing::Entries(entries) => entries,
            DirectoryListing::Error(message) => {
                log::warn!("cannot read directory '{}': {}", path.display(), message);
                return output.error(&message, prefix);
            }
        };

        for entry in &entries {
            output.entry(entry, prefix)?;
            stats.record(entry.is_dir);

            if !entry.is_dir || !self.within_depth(depth + 1) {
                continue;
            }
            if entry.is_symlink {
                log::debug!("not following symlinked directory '{}'", entry.path.display());
                continue;
            }
            let prefix = child_prefix(prefix, entry.is_last);
            self.walk_dir(&entry.path, &prefix, depth + 1, stats, output)?;
        }

        Ok(())
    }
}
