use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("reading archive file name: {0}")]
    ReadName(#[source] io::Error),

    #[error("reading size of archive file {}: {source}", name.display())]
    ReadSize {
        name: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing size of archive file {}: {reason}", name.display())]
    Size { name: PathBuf, reason: String },

    #[error("reading archive file {}: {source}", name.display())]
    ReadContent {
        name: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File contents keyed by cleaned path.
///
/// The wire format is a sequence of entries, each a file name line, a
/// decimal byte count line, then exactly that many bytes of content.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlayArchive {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl OverlayArchive {
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, ArchiveError> {
        let mut files = HashMap::new();
        loop {
            // A name without its newline ends the archive like a clean EOF.
            let Some(line) = read_line(&mut reader).map_err(ArchiveError::ReadName)? else {
                break;
            };
            let name = clean_path(String::from_utf8_lossy(&line).trim());

            let size_line = read_line(&mut reader)
                .and_then(|line| line.ok_or_else(unexpected_eof))
                .map_err(|source| ArchiveError::ReadSize {
                    name: name.clone(),
                    source,
                })?;
            let size: u32 = String::from_utf8_lossy(&size_line)
                .trim()
                .parse()
                .map_err(|err: std::num::ParseIntError| ArchiveError::Size {
                    name: name.clone(),
                    reason: err.to_string(),
                })?;

            let mut content = vec![0; size as usize];
            reader
                .read_exact(&mut content)
                .map_err(|source| ArchiveError::ReadContent {
                    name: name.clone(),
                    source,
                })?;
            files.insert(name, content);
        }
        Ok(Self { files })
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn take(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Reads through the next `\n`. Returns `None` when the input ends first.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        Ok(Some(line))
    } else {
        Ok(None)
    }
}

fn unexpected_eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "EOF")
}

/// Lexically normalizes a slash-separated path: repeated separators and `.`
/// elements are removed and `..` cancels the element before it. An empty
/// result becomes `.`.
pub fn clean_path(path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::from(".");
    }
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` at the root stays at the root.
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => PathBuf::from(format!("/{}", joined)),
        (false, true) => PathBuf::from("."),
        (false, false) => PathBuf::from(joined),
    }
}
