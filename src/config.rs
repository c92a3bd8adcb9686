use std::path::PathBuf;

use crate::cli::Args;
use crate::syntax::ParseMode;

/// Settings for one outline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// File to outline, exactly as given on the command line.
    pub path: PathBuf,
    pub mode: ParseMode,
    /// Read an overlay archive from stdin.
    pub modified: bool,
}

impl OutlineConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: ParseMode::default(),
            modified: false,
        }
    }
}

impl From<Args> for OutlineConfig {
    fn from(args: Args) -> Self {
        Self {
            path: args.file,
            mode: ParseMode::from_bits(args.mode),
            modified: args.modified,
        }
    }
}
