//! The fatal error taxonomy from spec.md §7.
//!
//! Grounded on `faxc-util`'s per-crate `thiserror` enums
//! (examples/Luvion1-Fax/faxc/crates/faxc-util/src/error.rs): one flat enum,
//! one variant per condition, `#[error(...)]` messages used only for the
//! `diagnostics`-gated stderr detail spec.md §7 allows but doesn't require.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CompileError {
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    #[error("expected a number or an identifier")]
    ExpectedNumberOrIdentifier,

    #[error("undefined variable `{0}`")]
    NotFound(String),

    #[error("symbol table is full")]
    OutOfMemory,

    #[error("assignment target is not an identifier")]
    NotLvalue,

    #[error("divide by constant zero")]
    DivideByZero,

    #[error("syntax error")]
    SyntaxError,
}

pub type CompileResult<T> = Result<T, CompileError>;
