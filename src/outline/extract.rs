use super::declaration::{DeclKind, Declaration};
use super::receiver::receiver_type;
use super::Outline;
use crate::diag::Warning;
use crate::syntax::ast::{Decl, DeclToken, File, GenDecl, Spanned, Spec};
use crate::syntax::walk::{self, Node};

/// Collects the outline of `file` in one pre-order pass.
pub fn extract(file: &File) -> Outline {
    let mut extractor = Extractor {
        file,
        outline: Outline::default(),
    };
    walk::inspect(file, &mut |node| extractor.visit(node));
    extractor.outline
}

struct Extractor<'a> {
    file: &'a File,
    outline: Outline,
}

impl Extractor<'_> {
    /// Returns whether the walker should descend into `node`.
    fn visit(&mut self, node: Node<'_>) -> bool {
        match node {
            Node::File(file) => {
                self.push(Declaration::new(
                    DeclKind::Package,
                    &file.name.name,
                    file.span(),
                ));
                true
            }
            Node::Decl(Decl::Func(func)) => {
                let receiver = receiver_type(func).unwrap_or_else(|err| {
                    self.outline.warnings.push(Warning::ReceiverType(err));
                    String::new()
                });
                self.push(
                    Declaration::new(DeclKind::Function, &func.name.name, func.span())
                        .with_receiver_type(receiver),
                );
                false
            }
            Node::Decl(Decl::Gen(_)) => true,
            Node::Decl(Decl::Bad(span)) => {
                self.outline.warnings.push(Warning::UnknownDeclaration {
                    at: self.file.lines.position(span.start),
                });
                false
            }
            Node::Spec { spec, group } => {
                self.visit_spec(spec, group);
                false
            }
        }
    }

    fn visit_spec(&mut self, spec: &Spec, group: &GenDecl) {
        match spec {
            Spec::Import(import) => {
                self.push(Declaration::new(
                    DeclKind::Import,
                    &import.path.value,
                    import.span(),
                ));
            }
            Spec::Type(ty) => {
                self.push(Declaration::new(DeclKind::Type, &ty.name.name, ty.span()));
            }
            Spec::Value(value) => {
                let kind = if group.tok == DeclToken::Const {
                    DeclKind::Constant
                } else {
                    DeclKind::Variable
                };
                for name in &value.names {
                    self.push(Declaration::new(kind, &name.name, name.span));
                }
            }
            Spec::Bad(span) => {
                self.outline.warnings.push(Warning::UnknownSpec {
                    tok: group.tok,
                    at: self.file.lines.position(span.start),
                });
            }
        }
    }

    fn push(&mut self, declaration: Declaration) {
        self.outline.declarations.push(declaration);
    }
}
