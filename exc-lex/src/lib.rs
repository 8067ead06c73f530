//! exc-lex — the lexer phase of `exc`.
//!
//! Converts a source buffer into a lazy sequence of tokens with attached
//! lexemes (spec.md §4.1). The cursor keeps exactly one character of
//! lookahead, enough to disambiguate `+`/`++`/`+=` and `-`/`--`/`-=`.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind, MAX_LEXEME_LEN};
