//! Rendering of tree lines
//!
//! The walker reports what it visits through [`TreeOutput`]; the
//! [`TreeFormatter`] implementation writes it to any termcolor sink.

mod formatter;

use std::io;
use std::io::IsTerminal;

use crate::config::DisplayFlags;
use crate::stats::RunningStats;
use crate::tree::Entry;

pub use formatter::TreeFormatter;

/// Connector for entries that have siblings after them.
pub const BRANCH: &str = "├── ";
/// Connector for the final entry of a sibling group.
pub const CORNER: &str = "└── ";
/// Prefix continuation under a non-final entry.
pub const VERTICAL: &str = "│   ";
/// Prefix continuation under a final entry.
pub const BLANK: &str = "    ";

/// Receives traversal events in render order.
pub trait TreeOutput {
    /// The start directory's label, before anything else.
    fn header(&mut self, label: &str) -> io::Result<()>;

    /// One entry line. `prefix` already carries the ancestors' continuation.
    fn entry(&mut self, entry: &Entry, prefix: &str) -> io::Result<()>;

    /// A directory's children could not be listed.
    fn error(&mut self, message: &str, prefix: &str) -> io::Result<()>;

    /// Traversal is complete.
    fn finish(&mut self, stats: &RunningStats) -> io::Result<()>;
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { BRANCH }
}

/// Prefix for the children of an entry rendered with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, VERTICAL)
    }
}

/// Whether stdout should get colors.
///
/// Color is on by configuration, but is only emitted to a terminal, and
/// `NO_COLOR`, `FORCE_COLOR` and `TERM=dumb` are honored.
pub fn should_use_color(display: &DisplayFlags) -> bool {
    if !display.color {
        return false;
    }
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    io::stdout().is_terminal()
}
