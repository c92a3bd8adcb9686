use tree_sitter::Node;

use super::{span_of, Parser};
use crate::syntax::ast::{
    Decl, DeclToken, Field, FieldList, FuncDecl, GenDecl, Ident, ImportSpec, Spec, StringLit,
    TypeSpec, ValueSpec,
};
use crate::syntax::error::SyntaxError;
use crate::syntax::pos::Span;

impl<'src> Parser<'src> {
    pub(super) fn package_clause(&self, clause: Node<'_>) -> Result<(Span, Ident), SyntaxError> {
        let keyword = clause
            .child(0)
            .ok_or_else(|| self.error_expected(clause, "'package'"))?;
        let name = clause
            .named_child(0)
            .ok_or_else(|| self.error_expected(clause, "package name"))?;
        let name = self.ident(name);
        if name.name == "_" {
            return Err(SyntaxError::new(name.span.start, "invalid package name _"));
        }
        Ok((span_of(keyword), name))
    }

    pub(super) fn decl(&self, node: Node<'_>) -> Result<Decl, SyntaxError> {
        let tok = match node.kind() {
            "function_declaration" | "method_declaration" => {
                return self.func_decl(node).map(Decl::Func)
            }
            "import_declaration" => DeclToken::Import,
            "const_declaration" => DeclToken::Const,
            "type_declaration" => DeclToken::Type,
            "var_declaration" => DeclToken::Var,
            _ => return Err(self.error_expected(node, "declaration")),
        };
        self.gen_decl(node, tok).map(Decl::Gen)
    }

    pub(super) fn ident(&self, node: Node<'_>) -> Ident {
        Ident::new(self.text(node), span_of(node))
    }

    pub(super) fn required<'t>(&self, node: Node<'t>, field: &str) -> Result<Node<'t>, SyntaxError> {
        node.child_by_field_name(field)
            .ok_or_else(|| self.error_expected(node, field))
    }

    fn func_decl(&self, node: Node<'_>) -> Result<FuncDecl, SyntaxError> {
        let func = node
            .child(0)
            .ok_or_else(|| self.error_expected(node, "'func'"))?;
        let recv = node
            .child_by_field_name("receiver")
            .map(|list| self.field_list(list))
            .transpose()?;

        Ok(FuncDecl {
            func: span_of(func),
            recv,
            name: self.ident(self.required(node, "name")?),
            type_params: node.child_by_field_name("type_parameters").map(span_of),
            params: span_of(self.required(node, "parameters")?),
            results: node.child_by_field_name("result").map(span_of),
            body: node.child_by_field_name("body").map(span_of),
        })
    }

    fn field_list(&self, list: Node<'_>) -> Result<FieldList, SyntaxError> {
        let mut fields = Vec::new();
        let mut cursor = list.walk();
        let params: Vec<Node<'_>> = list.named_children(&mut cursor).collect();
        for param in params {
            match param.kind() {
                "parameter_declaration" | "variadic_parameter_declaration" => {
                    let mut cursor = param.walk();
                    let names = param
                        .children_by_field_name("name", &mut cursor)
                        .map(|name| self.ident(name))
                        .collect();
                    let ty = self.type_expr(self.required(param, "type")?)?;
                    fields.push(Field { names, ty });
                }
                "comment" => {}
                _ => return Err(self.error_expected(param, "parameter")),
            }
        }
        Ok(FieldList {
            span: span_of(list),
            fields,
        })
    }

    fn gen_decl(&self, node: Node<'_>, tok: DeclToken) -> Result<GenDecl, SyntaxError> {
        let keyword = node
            .child(0)
            .ok_or_else(|| self.error_expected(node, tok.as_str()))?;

        let mut items = Vec::new();
        let mut open = None;
        let mut close = None;
        collect_specs(node, &mut items, &mut open, &mut close);

        let specs = items
            .into_iter()
            .map(|item| self.spec(item, tok))
            .collect::<Result<Vec<_>, _>>()?;
        let parens = match (open, close) {
            (Some(open), Some(close)) => Some(open.to(close)),
            _ => None,
        };

        Ok(GenDecl {
            tok,
            tok_span: span_of(keyword),
            parens,
            specs,
        })
    }

    fn spec(&self, node: Node<'_>, tok: DeclToken) -> Result<Spec, SyntaxError> {
        Ok(match (tok, node.kind()) {
            (DeclToken::Import, "import_spec") => Spec::Import(self.import_spec(node)?),
            (DeclToken::Type, "type_spec" | "type_alias") => Spec::Type(self.type_spec(node)?),
            (DeclToken::Const, "const_spec") | (DeclToken::Var, "var_spec") => {
                Spec::Value(self.value_spec(node)?)
            }
            _ => Spec::Bad(span_of(node)),
        })
    }

    fn import_spec(&self, node: Node<'_>) -> Result<ImportSpec, SyntaxError> {
        let path = self.required(node, "path")?;
        let value = self.text(path).to_string();
        if value.len() <= 2 {
            return Err(SyntaxError::new(
                path.start_byte(),
                format!("invalid import path: {}", value),
            ));
        }

        Ok(ImportSpec {
            name: node.child_by_field_name("name").map(|name| self.ident(name)),
            path: StringLit {
                value,
                span: span_of(path),
            },
        })
    }

    fn type_spec(&self, node: Node<'_>) -> Result<TypeSpec, SyntaxError> {
        Ok(TypeSpec {
            name: self.ident(self.required(node, "name")?),
            type_params: node.child_by_field_name("type_parameters").map(span_of),
            alias: node.kind() == "type_alias",
            ty: self.type_expr(self.required(node, "type")?)?,
        })
    }

    fn value_spec(&self, node: Node<'_>) -> Result<ValueSpec, SyntaxError> {
        let mut cursor = node.walk();
        let names: Vec<Ident> = node
            .children_by_field_name("name", &mut cursor)
            .map(|name| self.ident(name))
            .collect();
        if names.is_empty() {
            return Err(self.error_expected(node, "identifier"));
        }

        Ok(ValueSpec {
            names,
            ty: node
                .child_by_field_name("type")
                .map(|ty| self.type_expr(ty))
                .transpose()?,
            values: node.child_by_field_name("value").map(span_of),
        })
    }
}

/// Gathers the specs of a declaration, looking through the `*_spec_list`
/// wrapper some declarations use, and records the group's parentheses.
fn collect_specs<'t>(
    node: Node<'t>,
    items: &mut Vec<Node<'t>>,
    open: &mut Option<Span>,
    close: &mut Option<Span>,
) {
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    for child in children {
        match child.kind() {
            "(" => *open = Some(span_of(child)),
            ")" => *close = Some(span_of(child)),
            "comment" => {}
            kind if kind.ends_with("_spec_list") => collect_specs(child, items, open, close),
            _ if child.is_named() => items.push(child),
            _ => {}
        }
    }
}
