//! Error type for the code generation phase.
//!
//! Grounded on `faxc-gen::error::CodeGenError`
//! (examples/Luvion1-Fax/faxc/crates/faxc-gen/src/error.rs): a crate-local
//! `thiserror` enum, here just wide enough to carry either a fatal
//! compile-time condition (spec.md §7, via `exc-sem::CompileError`) or an
//! I/O failure writing the instruction stream.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Compile(#[from] exc_sem::CompileError),

    #[error("failed to write instruction stream: {0}")]
    Io(#[from] std::io::Error),
}

pub type GenResult<T> = std::result::Result<T, GenError>;
