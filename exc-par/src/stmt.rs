//! `statement := ENDFILE | END | assign_expr END` — spec.md §4.3.

use exc_lex::TokenKind;
use exc_sem::{CompileError, CompileResult};

use crate::ast::Node;
use crate::Parser;

/// One parsed statement.
pub enum Statement {
    /// End of input: the driver emits the epilogue and halts.
    Eof,
    /// A blank line: no-op.
    Empty,
    /// An expression statement whose tree is ready for evaluation.
    Expr(Node),
}

impl<'a> Parser<'a> {
    pub fn parse_statement(&mut self) -> CompileResult<Statement> {
        if self.matches(TokenKind::Eof) {
            return Ok(Statement::Eof);
        }
        if self.matches(TokenKind::End) {
            self.advance();
            return Ok(Statement::Empty);
        }

        let node = self.parse_assign_expr()?;

        if self.matches(TokenKind::End) {
            self.advance();
            Ok(Statement::Expr(node))
        } else {
            // Trailing tokens after a valid expression (e.g. a stray `=`
            // left unconsumed because the LHS wasn't an identifier, per
            // spec.md's `3 = 4` example) are a syntax error, not recovered.
            Err(CompileError::SyntaxError)
        }
    }
}
