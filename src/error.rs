//! Error types for diary conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while transcoding entries or assembling the document.
#[derive(Error, Debug)]
pub enum Error {
    /// An entry file is missing, or reading it from disk failed.
    #[error("entry file '{}' not found", .0.display())]
    EntryNotFound(PathBuf),

    /// The detected encoding could not decode the file's bytes.
    #[error("could not decode '{}' as {}", path.display(), encoding)]
    Decoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The preamble file is missing.
    #[error("preamble file '{}' not found", .0.display())]
    PreambleNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
