//! Pre-order traversal of a [`File`].
//!
//! The tree exposes three node shapes. The visitor returns whether to
//! descend into the node's children; function declarations have none, so
//! bodies are never visited.

use super::ast::{Decl, File, GenDecl, Spec};

#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    File(&'a File),
    Decl(&'a Decl),
    /// A spec together with the declaration group that owns it.
    Spec { spec: &'a Spec, group: &'a GenDecl },
}

/// Visits `file` and its descendants in source order.
pub fn inspect<'a, F>(file: &'a File, visit: &mut F)
where
    F: FnMut(Node<'a>) -> bool,
{
    if !visit(Node::File(file)) {
        return;
    }
    for decl in &file.decls {
        if !visit(Node::Decl(decl)) {
            continue;
        }
        if let Decl::Gen(group) = decl {
            for spec in &group.specs {
                visit(Node::Spec { spec, group });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{parse_source, ParseMode};

    fn shapes(source: &str, descend_into_groups: bool) -> Vec<&'static str> {
        let file = parse_source("w.go", source.as_bytes(), ParseMode::default()).unwrap();
        let mut seen = Vec::new();
        inspect(&file, &mut |node| {
            match node {
                Node::File(_) => seen.push("file"),
                Node::Decl(Decl::Func(_)) => seen.push("func"),
                Node::Decl(Decl::Gen(_)) => {
                    seen.push("gen");
                    return descend_into_groups;
                }
                Node::Decl(Decl::Bad(_)) => seen.push("bad"),
                Node::Spec { .. } => seen.push("spec"),
            }
            true
        });
        seen
    }

    #[test]
    fn test_visits_in_source_order() {
        let source = "package p\nimport (\n\t\"a\"\n\t\"b\"\n)\nfunc F() {}\nvar x = 1\n";
        assert_eq!(
            shapes(source, true),
            vec!["file", "gen", "spec", "spec", "func", "gen", "spec"]
        );
    }

    #[test]
    fn test_returning_false_skips_children() {
        let source = "package p\nimport (\n\t\"a\"\n\t\"b\"\n)\nfunc F() {}\n";
        assert_eq!(shapes(source, false), vec!["file", "gen", "func"]);
    }

    #[test]
    fn test_stopping_at_the_root() {
        let file = parse_source("w.go", b"package p\nfunc F() {}\n", ParseMode::default()).unwrap();
        let mut count = 0;
        inspect(&file, &mut |_| {
            count += 1;
            false
        });
        assert_eq!(count, 1);
    }
}
