//! Error types for escmap

use thiserror::Error;

/// Main error type for escmap operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid map dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in map of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Malformed count map at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Escape count {count} outside palette of {len} colors")]
    PaletteIndexOutOfRange { count: usize, len: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for escmap operations
pub type Result<T> = std::result::Result<T, Error>;
