/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Configuration errors raised while loading [`crate::config::SimConfig`]
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the MEMSIM_* environment variables.")
    )]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Address space capacity must be positive")]
    #[diagnostic(
        code(config::zero_capacity),
        help("Set MEMSIM_CAPACITY to a positive number of units (default 80).")
    )]
    ZeroCapacity,
}

/// Errors raised by the command shell
///
/// Everything except [`ShellError::Io`] is reported to the user and the
/// command loop carries on.
#[derive(Error, Debug, Diagnostic)]
pub enum ShellError {
    #[error("Invalid command: {0}")]
    #[diagnostic(
        code(shell::invalid_command),
        help("Commands: A <owner> <size> <F|B|W>, F <owner>, S, C, R <file>, E")
    )]
    InvalidCommand(String),

    #[error("Could not open file {}: {source}", path.display())]
    #[diagnostic(code(shell::file_open))]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read file {}: {source}", path.display())]
    #[diagnostic(code(shell::file_read))]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read nesting too deep at {} (depth {depth})", path.display())]
    #[diagnostic(
        code(shell::read_depth),
        help("A command file is reading itself, directly or through another file.")
    )]
    ReadDepthExceeded { path: PathBuf, depth: usize },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(shell::io))]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Whether the command loop may report this error and continue
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Io(_))
    }

    /// Level at which a failed command is logged
    ///
    /// Rejected user input logs at DEBUG. Engine faults and I/O failures log at ERROR.
    pub fn log_level(&self) -> Level {
        match self {
            ShellError::Io(_) => Level::ERROR,
            ShellError::Memory(err) if err.is_fault() => Level::ERROR,
            _ => Level::DEBUG,
        }
    }
}
