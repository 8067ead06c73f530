//! Expression parsing: one procedure per grammar non-terminal, precedence
//! encoded purely by call depth (spec.md §4.3) — not Pratt/binding-power
//! parsing, which is how `faxc-par`'s own `expr.rs` parses its much larger
//! grammar, but doesn't fit a spec that names call depth as the mechanism.

use exc_lex::TokenKind;
use exc_sem::{CompileError, CompileResult};

use crate::ast::Node;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `assign_expr := or_expr (ASSIGN assign_expr | ADDSUB_ASSIGN assign_expr)?`
    ///
    /// Right-associative: the LHS-is-ID check happens on the root of the
    /// just-parsed `or_expr` (parentheses are transparent to it, per
    /// spec.md §9), never on any sub-node.
    pub fn parse_assign_expr(&mut self) -> CompileResult<Node> {
        let left = self.parse_or_expr()?;
        let op_kind = self.kind();
        if left.is_assignable() && matches!(op_kind, TokenKind::Assign | TokenKind::AddSubAssign) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_assign_expr()?;
            Ok(Node::binary(op_kind, lexeme, left, right))
        } else {
            Ok(left)
        }
    }

    /// `or_expr := xor_expr ('|' xor_expr)*`
    pub fn parse_or_expr(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_xor_expr()?;
        while self.matches(TokenKind::Or) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_xor_expr()?;
            node = Node::binary(TokenKind::Or, lexeme, node, right);
        }
        Ok(node)
    }

    /// `xor_expr := and_expr ('^' and_expr)*`
    pub fn parse_xor_expr(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_and_expr()?;
        while self.matches(TokenKind::Xor) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_and_expr()?;
            node = Node::binary(TokenKind::Xor, lexeme, node, right);
        }
        Ok(node)
    }

    /// `and_expr := addsub_expr ('&' addsub_expr)*`
    pub fn parse_and_expr(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_addsub_expr()?;
        while self.matches(TokenKind::And) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_addsub_expr()?;
            node = Node::binary(TokenKind::And, lexeme, node, right);
        }
        Ok(node)
    }

    /// `addsub_expr := muldiv_expr (('+'|'-') muldiv_expr)*`
    pub fn parse_addsub_expr(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_muldiv_expr()?;
        while self.matches(TokenKind::AddSub) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_muldiv_expr()?;
            node = Node::binary(TokenKind::AddSub, lexeme, node, right);
        }
        Ok(node)
    }

    /// `muldiv_expr := unary_expr (('*'|'/') unary_expr)*`
    pub fn parse_muldiv_expr(&mut self) -> CompileResult<Node> {
        let mut node = self.parse_unary_expr()?;
        while self.matches(TokenKind::MulDiv) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let right = self.parse_unary_expr()?;
            node = Node::binary(TokenKind::MulDiv, lexeme, node, right);
        }
        Ok(node)
    }

    /// `unary_expr := ('+'|'-') unary_expr | factor`
    ///
    /// Desugars to an `AddSub` node with a synthetic `Int "0"` on the left
    /// (spec.md §4.3), so codegen never special-cases unary operators.
    pub fn parse_unary_expr(&mut self) -> CompileResult<Node> {
        if self.matches(TokenKind::AddSub) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            let operand = self.parse_unary_expr()?;
            Ok(Node::binary(TokenKind::AddSub, lexeme, Node::leaf(TokenKind::Int, "0"), operand))
        } else {
            self.parse_factor()
        }
    }

    /// `factor := INT | ID | INCDEC ID | '(' assign_expr ')'`
    ///
    /// `++`/`--` are prefix-only and apply only to a bare identifier; any
    /// other factor after an `INCDEC` token is a syntax error (spec.md
    /// §4.3).
    pub fn parse_factor(&mut self) -> CompileResult<Node> {
        if self.matches(TokenKind::Int) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            Ok(Node::leaf(TokenKind::Int, lexeme))
        } else if self.matches(TokenKind::Id) {
            let lexeme = self.lexeme().to_string();
            self.advance();
            Ok(Node::leaf(TokenKind::Id, lexeme))
        } else if self.matches(TokenKind::IncDec) {
            let op_lexeme = self.lexeme().to_string();
            self.advance();
            if self.matches(TokenKind::Id) {
                let id_lexeme = self.lexeme().to_string();
                self.advance();
                Ok(Node::unary_right(TokenKind::IncDec, op_lexeme, Node::leaf(TokenKind::Id, id_lexeme)))
            } else {
                Err(CompileError::SyntaxError)
            }
        } else if self.matches(TokenKind::LParen) {
            self.advance();
            let inner = self.parse_assign_expr()?;
            if self.matches(TokenKind::RParen) {
                self.advance();
                Ok(inner)
            } else {
                Err(CompileError::MismatchedParenthesis)
            }
        } else {
            Err(CompileError::ExpectedNumberOrIdentifier)
        }
    }
}
