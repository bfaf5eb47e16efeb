//! Directory tree walking
//!
//! - `entry`: what one listed child looks like
//! - `pipeline`: junk/ignore filtering, ordering and last-entry marking
//! - `walker`: the recursive, streaming traversal

mod entry;
mod pipeline;
mod walker;

pub use entry::{DirectoryListing, Entry, entry_name};
pub use pipeline::{compare_entries, compare_names, process};
pub use walker::TreeWalker;
