use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for embedres operations
#[derive(Error, Debug)]
pub enum EmbedresError {
    /// A listed resource could not be opened or read
    #[error("Can't open file '{}': {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file's parent directory could not be created
    #[error(
        "Can't create directory '{}' for output file '{}': {source}",
        .dir.display(),
        .output.display()
    )]
    DirectoryCreate {
        dir: PathBuf,
        output: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated header could not be created, written or flushed
    #[error("Can't write output file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An `@file` argument file could not be read
    #[error("Can't read argument file '{}': {source}", .path.display())]
    ArgFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An `@file` argument file includes itself, directly or transitively
    #[error("Argument file '{}' includes itself", .path.display())]
    ArgFileCycle { path: PathBuf },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EmbedresError>;
