//! Error types for the roster maintenance core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Roster error type
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Directory not found: {}", .0.display())]
    DirNotFound(PathBuf),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RosterError>;
