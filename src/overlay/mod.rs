//! Unsaved editor buffers passed on stdin.

mod archive;
mod resolve;

pub use archive::{clean_path, ArchiveError, OverlayArchive};
pub use resolve::{resolve_source, Source};
