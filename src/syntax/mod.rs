//! Go syntax tree provider: a declaration-level view over tree-sitter's Go
//! grammar, a type printer and a tree walker.

pub mod ast;
mod error;
mod mode;
pub mod parser;
pub mod pos;
pub mod printer;
pub mod walk;

pub use ast::{Decl, DeclToken, File, FuncDecl, GenDecl, Spanned, Spec};
pub use error::{ParseFileError, SyntaxError};
pub use mode::ParseMode;
pub use parser::Parser;
pub use pos::{LineTable, Pos, Position, Span};

use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Parses one Go source file.
///
/// `src` overrides the file's content; when it is `None` the file is read
/// from `path`. Any syntax error fails the whole file.
pub fn parse_file(path: &Path, src: Option<&[u8]>, mode: ParseMode) -> Result<File, ParseFileError> {
    let bytes: Cow<'_, [u8]> = match src {
        Some(bytes) => Cow::Borrowed(bytes),
        None => Cow::Owned(fs::read(path).map_err(|source| ParseFileError::Read {
            path: path.to_path_buf(),
            source,
        })?),
    };
    parse_source(&path.to_string_lossy(), &bytes, mode)
}

/// Parses in-memory source, using `filename` only for positions.
pub fn parse_source(filename: &str, bytes: &[u8], mode: ParseMode) -> Result<File, ParseFileError> {
    let syntax_error = |err: SyntaxError| ParseFileError::Syntax {
        position: LineTable::new(filename, bytes).position(err.offset),
        message: err.message,
    };

    let source = std::str::from_utf8(bytes).map_err(|err| {
        syntax_error(SyntaxError::new(err.valid_up_to(), "illegal UTF-8 encoding"))
    })?;
    Parser::new(filename, source, mode)
        .parse_file()
        .map_err(syntax_error)
}
