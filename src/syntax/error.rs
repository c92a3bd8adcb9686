use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::pos::Position;

/// A syntax error at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub offset: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Everything that prevents a syntax tree from being produced.
#[derive(Debug, Error)]
pub enum ParseFileError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{position}: {message}")]
    Syntax { position: Position, message: String },
}
