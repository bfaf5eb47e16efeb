//! Filter and order the children of one directory
//!
//! Steps run in a fixed order: drop OS junk, drop ignored paths, sort
//! (directories first, then by name), then mark the last entry. Marking
//! has to come last since filtering and sorting both change which entry
//! ends the list.

use std::cmp::Ordering;
use std::path::Path;

use crate::ignore_rules::{IgnoreRules, is_os_junk};

use super::entry::Entry;

/// Produce the rendered sibling list for one directory.
pub fn process(entries: Vec<Entry>, rules: &IgnoreRules, root: &Path) -> Vec<Entry> {
    let mut kept: Vec<Entry> = entries
        .into_iter()
        .filter(|entry| !is_os_junk(&entry.name))
        .filter(|entry| {
            let ignored = rules.is_ignored(entry.relative_to(root), entry.is_dir);
            if ignored {
                log::trace!("ignored '{}'", entry.path.display());
            }
            !ignored
        })
        .collect();

    kept.sort_by(compare_entries);
    mark_last(kept)
}

/// Directories before files, then [`compare_names`].
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Locale-style name order.
///
/// Letters compare case-insensitively first, so `b` sits between `A` and
/// `C`. Names differing only in case put lowercase first, and anything
/// still tied falls back to code-point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case_rank = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();

    folded(a)
        .cmp(&folded(b))
        .then_with(|| case_rank(a).cmp(&case_rank(b)))
        .then_with(|| a.cmp(b))
}

fn mark_last(entries: Vec<Entry>) -> Vec<Entry> {
    let last = entries.len().saturating_sub(1);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Entry {
            is_last: i == last,
            ..entry
        })
        .collect()
}
