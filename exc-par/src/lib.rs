//! exc-par — the recursive-descent parser phase of `exc` (spec.md §4.3).
//!
//! Module layout follows `faxc-par`: `ast.rs` for node shapes, `expr.rs` for
//! the expression grammar, `stmt.rs` for the statement production, with the
//! `Parser<'a>` struct itself — wrapping a lexer, exposing `advance`/
//! `matches`/`kind`/`lexeme` the way `faxc-par::Parser` wraps a token stream
//! — defined here.

pub mod ast;
pub mod expr;
pub mod stmt;

use exc_lex::{Lexer, TokenKind};

pub use ast::Node;
pub use stmt::Statement;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self { lexer }
    }

    fn advance(&mut self) {
        self.lexer.advance();
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.matches(kind)
    }

    fn kind(&mut self) -> TokenKind {
        self.lexer.kind()
    }

    fn lexeme(&self) -> &str {
        self.lexer.lexeme()
    }
}
