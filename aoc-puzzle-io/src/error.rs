//! Error types for reading puzzle files and checking examples

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for reading an input file
#[derive(Debug, Error)]
pub enum InputError {
    /// No file exists at the resolved path
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },
    /// Any other I/O failure, passed through as the OS reported it
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Error type for running a solution against its example fixture
#[derive(Debug, Error)]
pub enum ExampleError {
    /// The example file could not be read
    #[error(transparent)]
    Input(#[from] InputError),
    /// The solution returned something other than the expected answer
    #[error("Expected: {expected}, Got: {actual}")]
    AssertionFailure { expected: String, actual: String },
}

impl ExampleError {
    pub(crate) fn mismatch<T: std::fmt::Display>(expected: &T, actual: &T) -> Self {
        ExampleError::AssertionFailure {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
