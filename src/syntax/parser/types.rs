use tree_sitter::Node;

use super::{span_of, Parser};
use crate::syntax::ast::{ChanDir, TypeExpr};
use crate::syntax::error::SyntaxError;

impl Parser<'_> {
    pub(super) fn type_expr(&self, node: Node<'_>) -> Result<TypeExpr, SyntaxError> {
        let span = span_of(node);
        let ty = match node.kind() {
            "type_identifier" => TypeExpr::Name {
                package: None,
                name: self.ident(node),
            },
            "qualified_type" => TypeExpr::Name {
                package: Some(self.ident(self.required(node, "package")?)),
                name: self.ident(self.required(node, "name")?),
            },
            "generic_type" => {
                let base = self.type_expr(self.required(node, "type")?)?;
                let arguments = self.required(node, "type_arguments")?;
                let mut cursor = arguments.walk();
                let args = arguments
                    .named_children(&mut cursor)
                    .filter(|arg| arg.kind() != "comment")
                    .map(|arg| self.type_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                TypeExpr::Generic {
                    base: Box::new(base),
                    args,
                    span,
                }
            }
            "pointer_type" => TypeExpr::Pointer {
                elem: Box::new(self.only_type(node)?),
                span,
            },
            "slice_type" => TypeExpr::Slice {
                elem: Box::new(self.type_expr(self.required(node, "element")?)?),
                span,
            },
            "array_type" => TypeExpr::Array {
                len: normalized(self.text(self.required(node, "length")?)),
                elem: Box::new(self.type_expr(self.required(node, "element")?)?),
                span,
            },
            "implicit_length_array_type" => TypeExpr::Array {
                len: "...".to_string(),
                elem: Box::new(self.type_expr(self.required(node, "element")?)?),
                span,
            },
            "map_type" => TypeExpr::Map {
                key: Box::new(self.type_expr(self.required(node, "key")?)?),
                value: Box::new(self.type_expr(self.required(node, "value")?)?),
                span,
            },
            "channel_type" => TypeExpr::Chan {
                dir: self.chan_dir(node),
                elem: Box::new(self.type_expr(self.required(node, "value")?)?),
                span,
            },
            "function_type" => TypeExpr::Func {
                text: normalized(self.text(node)),
                span,
            },
            "struct_type" => TypeExpr::Struct {
                text: normalized(self.text(node)),
                span,
            },
            "interface_type" => TypeExpr::Interface {
                text: normalized(self.text(node)),
                span,
            },
            "parenthesized_type" => TypeExpr::Paren {
                inner: Box::new(self.only_type(node)?),
                span,
            },
            // A constraint element wrapping a single type, as in `Map[K, V]`.
            "type_elem" => self.only_type(node)?,
            _ => return Err(self.error_expected(node, "type")),
        };
        Ok(ty)
    }

    /// The single type nested in `*T`, `(T)` and similar wrappers.
    fn only_type(&self, node: Node<'_>) -> Result<TypeExpr, SyntaxError> {
        let mut cursor = node.walk();
        let inner: Vec<Node<'_>> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        match inner.as_slice() {
            [only] => self.type_expr(*only),
            _ => Err(self.error_expected(node, "type")),
        }
    }

    /// `chan T`, `chan<- T` or `<-chan T`, told apart by where the arrow sits.
    fn chan_dir(&self, node: Node<'_>) -> ChanDir {
        match (node.child(0).map(|c| c.kind()), node.child(1).map(|c| c.kind())) {
            (Some("<-"), _) => ChanDir::Recv,
            (_, Some("<-")) => ChanDir::Send,
            _ => ChanDir::Both,
        }
    }
}

/// Source text with every whitespace run collapsed to one space.
fn normalized(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
