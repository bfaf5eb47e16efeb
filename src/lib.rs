//! Arbor - print a directory as a connected tree, honoring ignore files

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod ignore_rules;
pub mod logging;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DisplayFlags, Options, ResolvedConfig};
pub use error::ConfigError;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use ignore_rules::IgnoreRules;
pub use output::{TreeFormatter, TreeOutput};
pub use stats::RunningStats;
pub use tree::{DirectoryListing, Entry, TreeWalker};
