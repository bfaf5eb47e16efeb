//! Process exit codes.

/// Traversal finished (or `--help`/`--version` printed).
pub const OK: i32 = 0;
/// Start path is missing or not a directory.
pub const INVALID_PATH: i32 = 1;
/// Writing the tree to stdout failed.
pub const OUTPUT: i32 = 1;
/// Ignore patterns could not be compiled.
pub const IGNORE_RULES: i32 = 3;
