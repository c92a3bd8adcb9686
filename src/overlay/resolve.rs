use std::io::{BufReader, Read};

use super::archive::OverlayArchive;
use crate::config::OutlineConfig;
use crate::diag::Warning;

/// Where the parser should take the file's bytes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Disk,
    Overlay(Vec<u8>),
}

impl Source {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Source::Disk => None,
            Source::Overlay(bytes) => Some(bytes),
        }
    }
}

/// Picks the content to outline.
///
/// `stdin` is read only in overlay mode. A malformed archive or a missing
/// entry is reported and the file is read from disk instead.
pub fn resolve_source<R: Read>(config: &OutlineConfig, stdin: R) -> (Source, Vec<Warning>) {
    if !config.modified {
        return (Source::Disk, Vec::new());
    }

    let mut archive = match OverlayArchive::parse(BufReader::new(stdin)) {
        Ok(archive) => archive,
        Err(err) => return (Source::Disk, vec![Warning::ArchiveUndecodable(err)]),
    };
    match archive.take(&config.path) {
        Some(bytes) => (Source::Overlay(bytes), Vec::new()),
        None => (
            Source::Disk,
            vec![Warning::MissingFromArchive(config.path.clone())],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ParseMode;
    use std::path::PathBuf;

    fn config(path: &str, modified: bool) -> OutlineConfig {
        OutlineConfig {
            path: PathBuf::from(path),
            mode: ParseMode::default(),
            modified,
        }
    }

    #[test]
    fn test_disk_without_modified_flag() {
        // stdin holds an archive but must be ignored.
        let (source, warnings) = resolve_source(&config("a.go", false), &b"a.go\n1\nx"[..]);
        assert_eq!(source, Source::Disk);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overlay_hit() {
        let (source, warnings) =
            resolve_source(&config("pkg/a.go", true), &b"pkg/a.go\n10\npackage a\n"[..]);
        assert_eq!(source.bytes(), Some(&b"package a\n"[..]));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overlay_miss_falls_back_to_disk() {
        let (source, warnings) = resolve_source(&config("b.go", true), &b"a.go\n1\nx"[..]);
        assert_eq!(source, Source::Disk);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].to_string(), "couldn't find b.go in archive");
    }

    #[test]
    fn test_undecodable_archive_falls_back_to_disk() {
        let (source, warnings) = resolve_source(&config("a.go", true), &b"a.go\nbig\n"[..]);
        assert_eq!(source, Source::Disk);
        assert!(matches!(warnings[0], Warning::ArchiveUndecodable(_)));
    }
}
