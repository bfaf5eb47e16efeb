//! Running directory and file counts
//!
//! Counts only grow, and only when a line is actually rendered: entries
//! dropped by a filter or never reached because of the depth limit are
//! not counted.

use std::fmt;

/// Totals accumulated during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    /// Directory lines rendered (the start directory is not one of them)
    pub directories: usize,
    /// File lines rendered
    pub files: usize,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    pub fn record_file(&mut self) {
        self.files += 1;
    }

    /// Record one rendered entry of either kind.
    pub fn record(&mut self, is_dir: bool) {
        if is_dir {
            self.record_directory();
        } else {
            self.record_file();
        }
    }
}

impl fmt::Display for RunningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} directories, {} files", self.directories, self.files)
    }
}
