use serde::Serialize;

use crate::syntax::{Pos, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Package,
    Import,
    Function,
    Type,
    Variable,
    Constant,
}

/// One outline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: DeclKind,
    /// Empty unless the entry is a method.
    #[serde(rename = "receiverType", skip_serializing_if = "String::is_empty")]
    pub receiver_type: String,
    pub start: Pos,
    pub end: Pos,
}

impl Declaration {
    pub fn new(kind: DeclKind, label: impl Into<String>, span: Span) -> Self {
        Self {
            label: label.into(),
            kind,
            receiver_type: String::new(),
            start: span.start_pos(),
            end: span.end_pos(),
        }
    }

    pub fn with_receiver_type(mut self, receiver_type: impl Into<String>) -> Self {
        self.receiver_type = receiver_type.into();
        self
    }
}
