//! Diagnostics written to stderr.
//!
//! Warnings never stop a run and never touch stdout. A fatal error is
//! printed once by the binary before it exits.

use std::path::PathBuf;

use console::style;
use thiserror::Error;

use crate::outline::RenderError;
use crate::overlay::ArchiveError;
use crate::syntax::{DeclToken, Position};

#[derive(Debug, Error)]
pub enum Warning {
    #[error("failed to parse -modified archive: {0}")]
    ArchiveUndecodable(#[source] ArchiveError),

    #[error("couldn't find {} in archive", .0.display())]
    MissingFromArchive(PathBuf),

    #[error("unknown declaration at {at}")]
    UnknownDeclaration { at: Position },

    #[error("unknown token type {tok}")]
    UnknownSpec { tok: DeclToken, at: Position },

    #[error("failed to parse receiver type: {0}")]
    ReceiverType(#[source] RenderError),
}

pub fn report(warning: &Warning) {
    eprintln!("{} {}", style("warning:").yellow().bold(), warning);
}

pub fn trace(message: &str) {
    eprintln!("{} {}", style("trace:").dim(), message);
}

/// Prints `err` and its causes on one line.
pub fn fatal(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("error:").red().bold(), err);
}
