//! Error types for graph loading and validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    /// A source record the loader could not parse.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Self-loops, asymmetric adjacency or non-integer ids detected on input.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
