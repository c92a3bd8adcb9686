//! Declaration-level syntax tree for a Go source file.
//!
//! Only what an outline needs is modelled structurally. Function bodies,
//! struct and interface bodies, type parameter lists and initializer
//! expressions are kept as spans.

use std::fmt;

use super::pos::{LineTable, Span};

/// Anything that occupies a range of the source.
pub trait Spanned {
    fn span(&self) -> Span;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

/// A string literal exactly as written, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLit {
    pub value: String,
    pub span: Span,
}

impl Spanned for StringLit {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct File {
    pub filename: String,
    /// The `package` keyword.
    pub package: Span,
    pub name: Ident,
    pub decls: Vec<Decl>,
    /// Populated only when comments are retained.
    pub comments: Vec<Comment>,
    pub lines: LineTable,
}

impl Spanned for File {
    /// From the `package` keyword to the end of the last declaration.
    fn span(&self) -> Span {
        let end = self
            .decls
            .last()
            .map(|decl| decl.span().end)
            .unwrap_or(self.name.span.end);
        Span::new(self.package.start, end)
    }
}

#[derive(Debug, Clone)]
pub enum Decl {
    Func(FuncDecl),
    Gen(GenDecl),
    /// A source range that did not form a declaration.
    Bad(Span),
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        match self {
            Decl::Func(func) => func.span(),
            Decl::Gen(gen) => gen.span(),
            Decl::Bad(span) => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
    /// The `func` keyword.
    pub func: Span,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub type_params: Option<Span>,
    pub params: Span,
    pub results: Option<Span>,
    /// Braces included; `None` for declarations without a body.
    pub body: Option<Span>,
}

impl FuncDecl {
    pub fn is_method(&self) -> bool {
        self.recv.is_some()
    }
}

impl Spanned for FuncDecl {
    fn span(&self) -> Span {
        let end = self
            .body
            .or(self.results)
            .unwrap_or(self.params)
            .end;
        Span::new(self.func.start, end)
    }
}

#[derive(Debug, Clone)]
pub struct FieldList {
    pub span: Span,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclToken {
    Import,
    Const,
    Type,
    Var,
}

impl DeclToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclToken::Import => "import",
            DeclToken::Const => "const",
            DeclToken::Type => "type",
            DeclToken::Var => "var",
        }
    }
}

impl fmt::Display for DeclToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `import`, `const`, `type` or `var` declaration, grouped or not.
#[derive(Debug, Clone)]
pub struct GenDecl {
    pub tok: DeclToken,
    /// The keyword.
    pub tok_span: Span,
    /// Parentheses of a grouped declaration.
    pub parens: Option<Span>,
    pub specs: Vec<Spec>,
}

impl Spanned for GenDecl {
    fn span(&self) -> Span {
        let end = match (self.parens, self.specs.last()) {
            (Some(parens), _) => parens.end,
            (None, Some(spec)) => spec.span().end,
            (None, None) => self.tok_span.end,
        };
        Span::new(self.tok_span.start, end)
    }
}

#[derive(Debug, Clone)]
pub enum Spec {
    Import(ImportSpec),
    Type(TypeSpec),
    Value(ValueSpec),
    /// A source range inside a group that did not form a spec.
    Bad(Span),
}

impl Spanned for Spec {
    fn span(&self) -> Span {
        match self {
            Spec::Import(spec) => spec.span(),
            Spec::Type(spec) => spec.span(),
            Spec::Value(spec) => spec.span(),
            Spec::Bad(span) => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImportSpec {
    /// Local name, `.` or `_`.
    pub name: Option<Ident>,
    pub path: StringLit,
}

impl Spanned for ImportSpec {
    fn span(&self) -> Span {
        let start = self.name.as_ref().map_or(self.path.span, |name| name.span);
        start.to(self.path.span)
    }
}

#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub name: Ident,
    pub type_params: Option<Span>,
    /// `type A = B`
    pub alias: bool,
    pub ty: TypeExpr,
}

impl Spanned for TypeSpec {
    fn span(&self) -> Span {
        self.name.span.to(self.ty.span())
    }
}

#[derive(Debug, Clone)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<TypeExpr>,
    /// The initializer list, if any.
    pub values: Option<Span>,
}

impl Spanned for ValueSpec {
    fn span(&self) -> Span {
        let first = self.names.first().map(|n| n.span).unwrap_or_default();
        let end = self
            .values
            .or_else(|| self.ty.as_ref().map(Spanned::span))
            .or_else(|| self.names.last().map(|n| n.span))
            .unwrap_or(first)
            .end;
        Span::new(first.start, end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T` or `pkg.T`
    Name {
        package: Option<Ident>,
        name: Ident,
    },
    /// `T[A, B]`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
        span: Span,
    },
    Pointer {
        elem: Box<TypeExpr>,
        span: Span,
    },
    Slice {
        elem: Box<TypeExpr>,
        span: Span,
    },
    /// `[N]T`; `len` is the length expression as written, `...` included.
    Array {
        len: String,
        elem: Box<TypeExpr>,
        span: Span,
    },
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
        span: Span,
    },
    Chan {
        dir: ChanDir,
        elem: Box<TypeExpr>,
        span: Span,
    },
    /// `func(...) ...`, kept as source text.
    Func { text: String, span: Span },
    /// `struct{...}`, kept as source text.
    Struct { text: String, span: Span },
    /// `interface{...}`, kept as source text.
    Interface { text: String, span: Span },
    Paren {
        inner: Box<TypeExpr>,
        span: Span,
    },
}

impl Spanned for TypeExpr {
    fn span(&self) -> Span {
        match self {
            TypeExpr::Name { package, name } => package
                .as_ref()
                .map_or(name.span, |pkg| pkg.span.to(name.span)),
            TypeExpr::Generic { span, .. }
            | TypeExpr::Pointer { span, .. }
            | TypeExpr::Slice { span, .. }
            | TypeExpr::Array { span, .. }
            | TypeExpr::Map { span, .. }
            | TypeExpr::Chan { span, .. }
            | TypeExpr::Func { span, .. }
            | TypeExpr::Struct { span, .. }
            | TypeExpr::Interface { span, .. }
            | TypeExpr::Paren { span, .. } => *span,
        }
    }
}
