#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// How a declared parameter may be bound at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum ParamKind {
    /// Bound by position only.
    Positional,
    /// Bound by position or by name.
    Keyword,
    /// Accepts arbitrary extra named arguments not otherwise declared.
    VarKeyword,
}

/// A declared parameter: a name plus its binding kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Param {
    name: String,
    kind: ParamKind,
}

impl Param {
    /// Creates a parameter with an explicit kind.
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A parameter bound by position only.
    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Positional)
    }

    /// A parameter bound by position or by name.
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Keyword)
    }

    /// A catch-all parameter receiving arbitrary extra named arguments.
    pub fn catch_all(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::VarKeyword)
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The binding kind.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        self.kind
    }
}
