//! Diagnostics on stderr
//!
//! Warnings (unreadable ignore files and directories) are shown by
//! default. `RUST_LOG=debug` or `RUST_LOG=trace` adds traversal details.
//! Tree output itself never goes through the logger.

use std::io::Write;

use env_logger::{Builder, Env};
use log::Level;

/// Install the stderr logger. Safe to call more than once.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "arbor: {}: {}",
                level_label(record.level()),
                record.args()
            )
        })
        .try_init();
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}
