//! exc-gen — the evaluator / code generator phase of `exc` (spec.md §4.4).

pub mod emit;
pub mod error;

pub use emit::Emitter;
pub use error::{GenError, GenResult};
