//! Error types for locclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a directory tree
#[derive(Error, Debug)]
pub enum LoccError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Path exists but cannot be inspected or listed
    #[error("failed to read directory '{path}': {source}")]
    DirRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
