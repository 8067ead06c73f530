//! The evaluator / code generator (spec.md §4.4).
//!
//! A single post-order traversal that both tracks a compile-time integer
//! (for the divide-by-zero rule) and emits the target instruction stream,
//! managing a per-statement virtual register counter. Grounded on
//! `faxc-gen::AsmGenerator`'s shape (`output` sink + one generation entry
//! point, examples/Luvion1-Fax/faxc/crates/faxc-gen/src/asm.rs), generalized
//! from that crate's LIR-only stub into the full per-kind emitter spec.md
//! §4.4/§6 require, and writing through a generic `io::Write` instead of
//! only building a `String` so the driver can stream straight to stdout.

use std::io::Write;

use exc_lex::TokenKind;
use exc_par::Node;
use exc_sem::SymbolTable;

use crate::error::GenResult;

/// Parses an integer literal, saturating rather than panicking on overflow.
/// The lexer guarantees an all-digit lexeme; this only guards against a
/// literal too long to fit `i32`, which spec.md leaves unspecified.
fn parse_int_literal(lexeme: &str) -> i32 {
    lexeme
        .parse::<i64>()
        .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
        .unwrap_or(i32::MAX)
}

/// Picks the mnemonic for a binary operator node from its lexeme.
fn binary_mnemonic(lexeme: &str) -> &'static str {
    match lexeme {
        "+" => "ADD",
        "-" => "SUB",
        "*" => "MUL",
        "/" => "DIV",
        "&" => "AND",
        "|" => "OR",
        "^" => "XOR",
        _ => unreachable!("parser only builds binary nodes for these operators"),
    }
}

pub struct Emitter<W: Write> {
    out: W,
    /// The next free virtual register, reset to 0 before each statement.
    register: u32,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, register: 0 }
    }

    /// Evaluates and emits code for one statement's tree, resetting the
    /// register counter first (spec.md §3). Returns the tree's
    /// constant-folded value, used only by the caller for diagnostics.
    pub fn evaluate_statement(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        self.register = 0;
        self.eval(node, table)
    }

    /// The terminal epilogue: dump the three reserved variables and halt
    /// (spec.md §4.5).
    pub fn emit_epilogue(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "MOV r0 [0]")?;
        writeln!(self.out, "MOV r1 [4]")?;
        writeln!(self.out, "MOV r2 [8]")?;
        writeln!(self.out, "EXIT 0")?;
        Ok(())
    }

    pub fn emit_exit_failure(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "EXIT 1")?;
        Ok(())
    }

    fn eval(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        match node.kind {
            TokenKind::Int => {
                let r = self.register;
                let value = parse_int_literal(&node.lexeme);
                writeln!(self.out, "MOV r{r} {value}")?;
                self.register = r + 1;
                Ok(value)
            }

            TokenKind::Id => {
                let r = self.register;
                let value = table.get_value(&node.lexeme)?;
                let addr = SymbolTable::address_of(table.index_of(&node.lexeme)?);
                writeln!(self.out, "MOV r{r} [{addr}]")?;
                self.register = r + 1;
                Ok(value)
            }

            TokenKind::Assign => self.eval_assign(node, table),
            TokenKind::AddSubAssign => self.eval_addsub_assign(node, table),
            TokenKind::IncDec => self.eval_incdec(node, table),

            TokenKind::AddSub | TokenKind::MulDiv | TokenKind::And | TokenKind::Or | TokenKind::Xor => {
                self.eval_binary(node, table)
            }

            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::End
            | TokenKind::Eof
            | TokenKind::Unknown => {
                unreachable!("the parser never produces a tree node of this kind")
            }
        }
    }

    fn eval_assign(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        let target = node.left.as_ref().expect("Assign always has an Id left child");
        let expr = node.right.as_ref().expect("Assign always has a right child");

        let k = self.register;
        let value = self.eval(expr, table)?;
        table.set_value(&target.lexeme, value)?;
        let addr = SymbolTable::address_of(table.index_of(&target.lexeme)?);
        writeln!(self.out, "MOV [{addr}] r{k}")?;
        // self.register is already k + 1, left exactly where `expr` put it.
        Ok(value)
    }

    fn eval_addsub_assign(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        let target = node.left.as_ref().expect("AddSubAssign always has an Id left child");
        let expr = node.right.as_ref().expect("AddSubAssign always has a right child");

        let k = self.register;
        let rv = self.eval(expr, table)?;
        let r = self.register; // k + 1
        let addr = SymbolTable::address_of(table.index_of(&target.lexeme)?);
        let current = table.get_value(&target.lexeme)?;

        let value = if node.lexeme == "+=" { current.wrapping_add(rv) } else { current.wrapping_sub(rv) };
        let mnemonic = if node.lexeme == "+=" { "ADD" } else { "SUB" };

        writeln!(self.out, "MOV r{r} [{addr}]")?;
        writeln!(self.out, "{mnemonic} r{r} r{k}")?;
        writeln!(self.out, "MOV [{addr}] r{r}")?;
        writeln!(self.out, "MOV r{k} r{r}")?;
        table.set_value(&target.lexeme, value)?;
        // self.register stays at r = k + 1; the result lives in r{k}.
        Ok(value)
    }

    fn eval_incdec(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        let target = node.right.as_ref().expect("IncDec always has an Id right child");
        let k = self.register;
        let scratch = k + 1;
        let addr = SymbolTable::address_of(table.index_of(&target.lexeme)?);
        let current = table.get_value(&target.lexeme)?;
        let value = if node.lexeme == "++" { current.wrapping_add(1) } else { current.wrapping_sub(1) };
        let mnemonic = if node.lexeme == "++" { "ADD" } else { "SUB" };

        writeln!(self.out, "MOV r{k} [{addr}]")?;
        writeln!(self.out, "MOV r{scratch} 1")?;
        writeln!(self.out, "{mnemonic} r{k} r{scratch}")?;
        writeln!(self.out, "MOV [{addr}] r{k}")?;
        table.set_value(&target.lexeme, value)?;
        self.register = scratch; // the scratch register is freed; net delta is +1.
        Ok(value)
    }

    fn eval_binary(&mut self, node: &Node, table: &mut SymbolTable) -> GenResult<i32> {
        let left = node.left.as_ref().expect("binary node always has a left child");
        let right = node.right.as_ref().expect("binary node always has a right child");

        let k = self.register;
        let lv = self.eval(left, table)?;
        let rv = self.eval(right, table)?;
        self.register = k + 1;

        if node.lexeme == "/" && rv == 0 && !right.contains_id() {
            return Err(exc_sem::CompileError::DivideByZero.into());
        }

        writeln!(self.out, "{} r{k} r{}", binary_mnemonic(&node.lexeme), k + 1)?;

        let value = match node.lexeme.as_str() {
            // Constant-folded with wrapping semantics to match the plain
            // `int` arithmetic of the original evaluator: valid input must
            // never panic here even when it overflows i32.
            "+" => lv.wrapping_add(rv),
            "-" => lv.wrapping_sub(rv),
            "*" => lv.wrapping_mul(rv),
            "/" if rv != 0 => lv.wrapping_div(rv),
            "/" => 0, // runtime-only divisor tracked as 0 at compile time; deferred to the target machine.
            "&" => lv & rv,
            "|" => lv | rv,
            "^" => lv ^ rv,
            _ => unreachable!(),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exc_lex::Lexer;
    use exc_par::Parser;
    use exc_par::Statement;

    fn emit(src: &str, table: &mut SymbolTable) -> Vec<String> {
        let mut parser = Parser::new(Lexer::new(src));
        let stmt = parser.parse_statement().expect("parse");
        let node = match stmt {
            Statement::Expr(node) => node,
            _ => panic!("expected expression statement"),
        };
        let mut buf = Vec::new();
        let mut emitter = Emitter::new(&mut buf);
        emitter.evaluate_statement(&node, table).expect("eval");
        String::from_utf8(buf).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn literal_load() {
        let mut table = SymbolTable::new();
        assert_eq!(emit("3\n", &mut table), vec!["MOV r0 3"]);
    }

    #[test]
    fn simple_assignment() {
        let mut table = SymbolTable::new();
        assert_eq!(emit("x = 5\n", &mut table), vec!["MOV r0 5", "MOV [0] r0"]);
    }

    #[test]
    fn precedence_in_codegen() {
        let mut table = SymbolTable::new();
        table.set_value("y", 2).unwrap();
        assert_eq!(
            emit("x = 3 * y + 1\n", &mut table),
            vec![
                "MOV r0 3",
                "MOV r1 [4]",
                "MUL r0 r1",
                "MOV r1 1",
                "ADD r0 r1",
                "MOV [0] r0",
            ]
        );
    }

    #[test]
    fn prefix_increment() {
        let mut table = SymbolTable::new();
        assert_eq!(
            emit("++x\n", &mut table),
            vec!["MOV r0 [0]", "MOV r1 1", "ADD r0 r1", "MOV [0] r0"]
        );
        assert_eq!(table.get_value("x").unwrap(), 1);
    }

    #[test]
    fn compound_assign() {
        let mut table = SymbolTable::new();
        assert_eq!(
            emit("z += 8\n", &mut table),
            vec!["MOV r0 8", "MOV r1 [8]", "ADD r1 r0", "MOV [8] r1", "MOV r0 r1"]
        );
        assert_eq!(table.get_value("z").unwrap(), 8);
    }

    #[test]
    fn divide_by_constant_zero_is_fatal() {
        let mut table = SymbolTable::new();
        let mut parser = Parser::new(Lexer::new("1/0\n"));
        let node = match parser.parse_statement().unwrap() {
            Statement::Expr(node) => node,
            _ => unreachable!(),
        };
        let mut buf = Vec::new();
        let mut emitter = Emitter::new(&mut buf);
        assert!(emitter.evaluate_statement(&node, &mut table).is_err());
    }

    #[test]
    fn divide_by_identifier_tracked_as_zero_is_not_fatal() {
        let mut table = SymbolTable::new();
        table.set_value("x", 0).unwrap();
        let mut parser = Parser::new(Lexer::new("1/x\n"));
        let node = match parser.parse_statement().unwrap() {
            Statement::Expr(node) => node,
            _ => unreachable!(),
        };
        let mut buf = Vec::new();
        let mut emitter = Emitter::new(&mut buf);
        assert!(emitter.evaluate_statement(&node, &mut table).is_ok());
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("DIV r0 r1"));
    }

    #[test]
    fn constant_folding_wraps_on_overflow_instead_of_panicking() {
        let mut table = SymbolTable::new();
        let mut parser = Parser::new(Lexer::new("2000000000 * 2\n"));
        let node = match parser.parse_statement().unwrap() {
            Statement::Expr(node) => node,
            _ => unreachable!(),
        };
        let mut buf = Vec::new();
        let mut emitter = Emitter::new(&mut buf);
        let value = emitter.evaluate_statement(&node, &mut table).expect("no panic on overflow");
        assert_eq!(value, 2_000_000_000i32.wrapping_mul(2));
    }
}
