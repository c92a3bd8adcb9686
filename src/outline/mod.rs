//! Flat outline of a parsed Go file.

mod declaration;
mod extract;
mod receiver;

pub use declaration::{DeclKind, Declaration};
pub use extract::extract;
pub use receiver::{receiver_type, RenderError};

use crate::diag::Warning;

/// Declarations in source order, plus everything the extractor had to skip.
#[derive(Debug, Default)]
pub struct Outline {
    pub declarations: Vec<Declaration>,
    pub warnings: Vec<Warning>,
}
