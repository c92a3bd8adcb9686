use std::fmt;

use thiserror::Error;

use crate::syntax::printer;
use crate::syntax::FuncDecl;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("receiver list is empty")]
    EmptyReceiver,
    #[error("printing receiver type: {0}")]
    Format(#[from] fmt::Error),
}

/// Source text of a method's receiver type, without the receiver name.
///
/// Plain functions yield an empty string.
pub fn receiver_type(func: &FuncDecl) -> Result<String, RenderError> {
    let Some(recv) = &func.recv else {
        return Ok(String::new());
    };
    let field = recv.fields.first().ok_or(RenderError::EmptyReceiver)?;
    Ok(printer::render_type(&field.ty)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{parse_source, Decl, ParseMode};

    fn first_func(source: &str) -> FuncDecl {
        let file = parse_source("r.go", source.as_bytes(), ParseMode::default()).unwrap();
        file.decls
            .into_iter()
            .find_map(|decl| match decl {
                Decl::Func(func) => Some(func),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_plain_function_has_no_receiver() {
        let func = first_func("package p\nfunc F() {}\n");
        assert_eq!(receiver_type(&func).unwrap(), "");
    }

    #[test]
    fn test_receiver_name_is_dropped() {
        let cases = [
            ("func (f *Foo) M() {}", "*Foo"),
            ("func (Foo) M() {}", "Foo"),
            ("func (l List[T]) Len() int { return 0 }", "List[T]"),
            ("func (m *cache.Map[K, V]) Get() {}", "*cache.Map[K, V]"),
        ];
        for (decl, expected) in cases {
            let func = first_func(&format!("package p\n{}\n", decl));
            assert_eq!(receiver_type(&func).unwrap(), expected, "{}", decl);
        }
    }

    #[test]
    fn test_empty_receiver_list() {
        let func = first_func("package p\nfunc () M() {}\n");
        assert!(matches!(receiver_type(&func), Err(RenderError::EmptyReceiver)));
    }
}
