//! Global error handling for sfpack
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for sfpack operations
#[derive(Error, Debug)]
pub enum SfPackError {
    /// Root or listing directory missing or not a directory
    #[error("Path not found: {0}")]
    NotFound(String),

    /// File system error while enumerating directory entries
    #[error("Scan error: {0}")]
    Scan(String),

    /// File system errors while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for sfpack operations
pub type Result<T> = std::result::Result<T, SfPackError>;

// Allow converting SfPackError to io::Error for backward compatibility with tests
impl From<SfPackError> for io::Error {
    fn from(err: SfPackError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
