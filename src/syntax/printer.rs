//! Renders type expressions back to canonical Go source text.

use std::fmt::{self, Write};

use super::ast::{ChanDir, TypeExpr};

/// Writes `ty` to `out` in `gofmt` spelling.
pub fn write_type<W: Write>(out: &mut W, ty: &TypeExpr) -> fmt::Result {
    match ty {
        TypeExpr::Name { package, name } => {
            if let Some(package) = package {
                write!(out, "{}.", package.name)?;
            }
            out.write_str(&name.name)
        }
        TypeExpr::Generic { base, args, .. } => {
            write_type(out, base)?;
            out.write_char('[')?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_type(out, arg)?;
            }
            out.write_char(']')
        }
        TypeExpr::Pointer { elem, .. } => {
            out.write_char('*')?;
            write_type(out, elem)
        }
        TypeExpr::Slice { elem, .. } => {
            out.write_str("[]")?;
            write_type(out, elem)
        }
        TypeExpr::Array { len, elem, .. } => {
            write!(out, "[{}]", len)?;
            write_type(out, elem)
        }
        TypeExpr::Map { key, value, .. } => {
            out.write_str("map[")?;
            write_type(out, key)?;
            out.write_char(']')?;
            write_type(out, value)
        }
        TypeExpr::Chan { dir, elem, .. } => {
            out.write_str(match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            })?;
            write_type(out, elem)
        }
        TypeExpr::Func { text, .. }
        | TypeExpr::Struct { text, .. }
        | TypeExpr::Interface { text, .. } => out.write_str(text),
        TypeExpr::Paren { inner, .. } => {
            out.write_char('(')?;
            write_type(out, inner)?;
            out.write_char(')')
        }
    }
}

/// Renders `ty` to a fresh string.
pub fn render_type(ty: &TypeExpr) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_type(&mut out, ty)?;
    Ok(out)
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ast::{Decl, Spec};
    use crate::syntax::{parse_source, ParseMode};

    fn printed(ty: &str) -> String {
        let source = format!("package p\nvar v {}\n", ty);
        let file = parse_source("t.go", source.as_bytes(), ParseMode::default()).unwrap();
        let Some(Decl::Gen(gen)) = file.decls.first() else {
            panic!("expected var decl");
        };
        let Spec::Value(spec) = &gen.specs[0] else {
            panic!("expected value spec");
        };
        render_type(spec.ty.as_ref().unwrap()).unwrap()
    }

    #[test]
    fn test_names_and_pointers() {
        assert_eq!(printed("Foo"), "Foo");
        assert_eq!(printed("*Foo"), "*Foo");
        assert_eq!(printed("* http.Server"), "*http.Server");
    }

    #[test]
    fn test_generic_instantiation() {
        assert_eq!(printed("Tree[K,V]"), "Tree[K, V]");
        assert_eq!(printed("*sync.Map[string, []int]"), "*sync.Map[string, []int]");
    }

    #[test]
    fn test_composites() {
        assert_eq!(printed("map[string] *T"), "map[string]*T");
        assert_eq!(printed("[ 4 ]byte"), "[4]byte");
        assert_eq!(printed("<-chan  error"), "<-chan error");
        assert_eq!(printed("chan<- int"), "chan<- int");
        assert_eq!(printed("(*T)"), "(*T)");
        assert_eq!(printed("struct {\n\tx int\n}"), "struct { x int }");
    }

    #[test]
    fn test_display_matches_render() {
        let ty = TypeExpr::Slice {
            elem: Box::new(TypeExpr::Name {
                package: None,
                name: crate::syntax::ast::Ident::new("T", Default::default()),
            }),
            span: Default::default(),
        };
        assert_eq!(ty.to_string(), "[]T");
    }
}
