//! Fatal configuration errors
//!
//! Only these abort a run. Everything that goes wrong during traversal is
//! rendered inline or logged as a warning instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to build ignore rules for '{}': {source}", path.display())]
    IgnoreRules {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

impl ConfigError {
    /// Short label printed alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NotFound { .. } | ConfigError::NotADirectory { .. } => "INVALID_PATH",
            ConfigError::IgnoreRules { .. } => "IGNORE_RULES",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::NotFound { .. } | ConfigError::NotADirectory { .. } => {
                crate::exit_codes::INVALID_PATH
            }
            ConfigError::IgnoreRules { .. } => crate::exit_codes::IGNORE_RULES,
        }
    }
}
