//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur at the boundaries of the parser.
///
/// Parsing text never fails; these only surface when raw bytes are handed
/// in or when a custom configuration cannot be compiled.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not valid UTF-8 text
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),

    /// A configured pattern failed to compile
    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for reply parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
