//! Outline of the top-level declarations in a Go source file.
//!
//! The pipeline is: resolve the file's bytes (disk or an overlay archive on
//! stdin), parse them into a declaration-level syntax tree, walk the tree
//! into a flat list of [`outline::Declaration`]s, and print that list as one
//! compact JSON array.

pub mod cli;
pub mod config;
pub mod diag;
pub mod emit;
pub mod outline;
pub mod overlay;
pub mod syntax;

use std::io::{Read, Write};

use anyhow::{Context, Result};

pub use config::OutlineConfig;
pub use outline::{DeclKind, Declaration, Outline};

/// Resolves, parses and extracts the outline for `config`.
///
/// Warnings from every stage end up in the returned outline, input
/// resolution first.
pub fn outline<R: Read>(config: &OutlineConfig, stdin: R) -> Result<Outline> {
    let (source, mut warnings) = overlay::resolve_source(config, stdin);
    let file = syntax::parse_file(&config.path, source.bytes(), config.mode)
        .with_context(|| format!("could not parse file {}", config.path.display()))?;

    let mut outline = outline::extract(&file);
    warnings.append(&mut outline.warnings);
    outline.warnings = warnings;
    Ok(outline)
}

/// Runs one invocation: reports warnings on stderr and writes the JSON
/// array plus a newline to `stdout`.
pub fn run<R: Read, W: Write>(config: &OutlineConfig, stdin: R, mut stdout: W) -> Result<()> {
    let outline = outline(config, stdin)?;
    for warning in &outline.warnings {
        diag::report(warning);
    }

    let json = emit::to_json(&outline.declarations).context("failed to encode outline")?;
    writeln!(stdout, "{}", json).context("failed to write outline")?;
    stdout.flush().context("failed to write outline")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SOURCE: &str = "package demo\n\nimport \"fmt\"\n\nfunc (g *Greeter) Hello() {\n\tfmt.Println(\"hi\")\n}\n";

    fn go_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".go").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn archive(path: &std::path::Path, content: &str) -> Vec<u8> {
        format!("{}\n{}\n{}", path.display(), content.len(), content).into_bytes()
    }

    fn run_to_string(config: &OutlineConfig, stdin: &[u8]) -> String {
        let mut out = Vec::new();
        run(config, stdin, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_writes_one_line_of_json() {
        let file = go_file(SOURCE);
        let out = run_to_string(&OutlineConfig::new(file.path()), b"");
        assert!(out.ends_with("}]\n"));
        assert_eq!(out.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["type"], "package");
        assert_eq!(entries[1]["label"], "\"fmt\"");
        assert_eq!(entries[2]["receiverType"], "*Greeter");
        assert!(entries[1].get("receiverType").is_none());
    }

    #[test]
    fn test_overlay_matches_disk() {
        let on_disk = go_file(SOURCE);
        let from_disk = run_to_string(&OutlineConfig::new(on_disk.path()), b"");

        let stale = go_file("package stale\n");
        let mut config = OutlineConfig::new(stale.path());
        config.modified = true;
        let from_overlay = run_to_string(&config, &archive(stale.path(), SOURCE));

        assert_eq!(from_disk, from_overlay);
    }

    #[test]
    fn test_overlay_miss_reads_disk_and_warns() {
        let file = go_file(SOURCE);
        let mut config = OutlineConfig::new(file.path());
        config.modified = true;

        let outline = outline(&config, &b"other.go\n1\nx"[..]).unwrap();
        assert_eq!(outline.declarations.len(), 3);
        assert_eq!(outline.warnings.len(), 1);
        assert!(outline.warnings[0].to_string().starts_with("couldn't find "));
    }

    #[test]
    fn test_parse_failure_is_fatal() {
        let file = go_file("package p\nfunc {\n");
        let err = outline(&OutlineConfig::new(file.path()), &b""[..]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("could not parse file "), "{}", message);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let config = OutlineConfig::new("/nonexistent/dir/missing.go");
        let mut out = Vec::new();
        assert!(run(&config, &b""[..], &mut out).is_err());
        assert!(out.is_empty());
    }
}
