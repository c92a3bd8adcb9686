//! Builds the declaration-level [`File`] view from a tree-sitter Go tree.
//!
//! Any error or missing node in the part of the file the mode asks for
//! fails the whole parse. Function bodies, struct and interface members and
//! initializers are parsed by tree-sitter but kept only as spans.

mod decls;
mod types;

use tree_sitter::{Node, Tree};

use super::ast::{Comment, Decl, File, Spanned};
use super::error::SyntaxError;
use super::mode::ParseMode;
use super::pos::{LineTable, Span};
use crate::diag;

const BOM: &str = "\u{FEFF}";

pub struct Parser<'src> {
    source: &'src str,
    mode: ParseMode,
    lines: LineTable,
}

impl<'src> Parser<'src> {
    pub fn new(filename: &str, source: &'src str, mode: ParseMode) -> Self {
        Self {
            source,
            mode,
            lines: LineTable::new(filename, source),
        }
    }

    pub fn parse_file(self) -> Result<File, SyntaxError> {
        let tree = self.parse_tree()?;
        let root = tree.root_node();
        let mut cursor = root.walk();
        let nodes: Vec<Node<'_>> = root
            .children(&mut cursor)
            .filter(|node| node.kind() != "comment")
            .collect();
        let mut nodes = nodes.into_iter();

        let Some(clause) = nodes.next() else {
            return Err(SyntaxError::new(
                self.source.len(),
                "expected 'package', found EOF",
            ));
        };
        self.check(clause)?;
        if clause.kind() != "package_clause" {
            return Err(self.error_expected(clause, "'package'"));
        }
        let (package, name) = self.package_clause(clause)?;
        let mut end = clause.end_byte();

        let mut decls = Vec::new();
        if !self.mode.contains(ParseMode::PACKAGE_CLAUSE_ONLY) {
            let mut past_imports = false;
            for node in nodes {
                let is_import = node.kind() == "import_declaration";
                if !is_import && self.mode.contains(ParseMode::IMPORTS_ONLY) {
                    break;
                }
                self.check(node)?;
                if is_import && past_imports {
                    return Err(SyntaxError::new(
                        node.start_byte(),
                        "imports must appear before other declarations",
                    ));
                }
                past_imports |= !is_import;

                let decl = self.decl(node)?;
                self.trace(&decl);
                decls.push(decl);
                end = node.end_byte();
            }
        }

        let comments = if self.mode.contains(ParseMode::PARSE_COMMENTS) {
            self.comments(root, end)
        } else {
            Vec::new()
        };

        Ok(File {
            filename: self.lines.filename().to_string(),
            package,
            name,
            decls,
            comments,
            lines: self.lines,
        })
    }

    fn parse_tree(&self) -> Result<Tree, SyntaxError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|err| SyntaxError::new(0, format!("loading Go grammar: {}", err)))?;

        // A leading byte order mark is skipped; blanking it keeps offsets stable.
        let tree = match self.source.strip_prefix(BOM) {
            Some(rest) => parser.parse(format!("{:width$}{}", "", rest, width = BOM.len()), None),
            None => parser.parse(self.source, None),
        };
        tree.ok_or_else(|| SyntaxError::new(0, "parser produced no tree"))
    }

    /// Fails on the first error or missing node under `node`.
    fn check(&self, node: Node<'_>) -> Result<(), SyntaxError> {
        let Some(bad) = first_error(node) else {
            return Ok(());
        };
        let message = if bad.is_missing() {
            format!("syntax error: missing '{}'", bad.kind())
        } else if bad.start_byte() == bad.end_byte() {
            "syntax error".to_string()
        } else {
            format!("syntax error: unexpected {}", self.describe(bad))
        };
        Err(SyntaxError::new(bad.start_byte(), message))
    }

    pub(super) fn text(&self, node: Node<'_>) -> &'src str {
        &self.source[node.byte_range()]
    }

    /// The first token of `node`, quoted, the way error messages name it.
    pub(super) fn describe(&self, node: Node<'_>) -> String {
        let mut leaf = node;
        while let Some(child) = leaf.child(0) {
            leaf = child;
        }
        match self.text(leaf) {
            "" => "EOF".to_string(),
            "\n" => "newline".to_string(),
            text => format!("'{}'", text),
        }
    }

    pub(super) fn error_expected(&self, node: Node<'_>, what: &str) -> SyntaxError {
        SyntaxError::new(
            node.start_byte(),
            format!("expected {}, found {}", what, self.describe(node)),
        )
    }

    fn comments(&self, root: Node<'_>, end: usize) -> Vec<Comment> {
        let mut comments = Vec::new();
        collect_comments(root, &mut comments, self.source);
        comments.retain(|comment| comment.span.start < end);
        comments
    }

    fn trace(&self, decl: &Decl) {
        if !self.mode.contains(ParseMode::TRACE) {
            return;
        }
        let span = decl.span();
        let shape = match decl {
            Decl::Func(func) => format!("FuncDecl {}", func.name.name),
            Decl::Gen(gen) => format!("GenDecl {} ({} specs)", gen.tok.as_str(), gen.specs.len()),
            Decl::Bad(_) => "BadDecl".to_string(),
        };
        diag::trace(&format!(
            "{} [{}, {}) at {}",
            shape,
            span.start_pos(),
            span.end_pos(),
            self.lines.position(span.start)
        ));
    }
}

pub(super) fn span_of(node: Node<'_>) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn collect_comments(node: Node<'_>, out: &mut Vec<Comment>, source: &str) {
    if node.kind() == "comment" {
        out.push(Comment {
            text: source[node.byte_range()].to_string(),
            span: span_of(node),
        });
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, out, source);
    }
}
