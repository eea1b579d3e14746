//! Error types for the aptsrc library.

use thiserror::Error;

/// Errors raised by the search and batch-download orchestrators.
#[derive(Error, Debug)]
pub enum Error {
    /// Search keywords were empty after trimming.
    #[error("search keywords are empty")]
    EmptyQuery,

    /// Search keywords could not be tokenized (unbalanced quoting).
    #[error("invalid search keywords: {0}")]
    Query(String),

    /// A batch download was requested with an empty selection.
    #[error("no packages selected")]
    NothingSelected,

    /// The external executable is absent or unreachable.
    #[error("'{program}' command not found")]
    ToolNotFound {
        /// Name of the missing executable.
        program: String,
    },

    /// The external process ran but exited with a non-zero status.
    #[error("{0}")]
    Process(String),

    /// Configuration file could not be parsed.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("config serialization failed: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// I/O error while spawning a process or touching the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for aptsrc operations.
pub type Result<T> = std::result::Result<T, Error>;
