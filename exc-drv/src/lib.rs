//! exc-drv — the driver phase of `exc` (spec.md §4.5).
//!
//! Grounded on `faxc-drv::Session` (examples/Luvion1-Fax/faxc/crates/faxc-drv/src/lib.rs):
//! a small session struct owning the mutable state for one run and a
//! `compile`-style entry point that loops the pipeline to completion. This
//! driver is far smaller than `faxc-drv`'s: no `Config`, no multiple input
//! files, no `--emit` target selection, no linking — spec.md §6 is explicit
//! that the binary takes no arguments, and the target here is always the
//! same flat instruction stream.

use std::io::Write;

use exc_gen::Emitter;
use exc_lex::Lexer;
use exc_par::{Parser, Statement};
use exc_sem::SymbolTable;

/// One compilation session: the symbol table (persists for the process
/// lifetime) and the parser (which owns the lexer over the whole input).
pub struct Session<'a> {
    table: SymbolTable,
    parser: Parser<'a>,
}

impl<'a> Session<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { table: SymbolTable::new(), parser: Parser::new(Lexer::new(source)) }
    }

    /// Runs the statement loop to completion, writing the instruction
    /// stream to `out`. Returns an `Err` only for a genuine I/O failure
    /// writing that stream; every *language* error (spec.md §7) is handled
    /// internally by emitting `EXIT 1` and returning `Ok(())`, since the OS
    /// exit code is not part of the contract either way (spec.md §9).
    pub fn run<W: Write>(&mut self, out: W) -> std::io::Result<()> {
        let mut emitter = Emitter::new(out);

        loop {
            let statement = match self.parser.parse_statement() {
                Ok(statement) => statement,
                Err(_err) => {
                    #[cfg(feature = "diagnostics")]
                    tracing::error!(%_err, "compile error");
                    return emitter.emit_exit_failure();
                }
            };

            match statement {
                Statement::Eof => return emitter.emit_epilogue(),
                Statement::Empty => continue,
                Statement::Expr(node) => match emitter.evaluate_statement(&node, &mut self.table) {
                    Ok(value) => {
                        #[cfg(feature = "diagnostics")]
                        {
                            tracing::debug!(value, "statement evaluated");
                            eprintln!("; value = {value}");
                        }
                        #[cfg(not(feature = "diagnostics"))]
                        let _ = value;
                    }
                    Err(exc_gen::GenError::Io(io_err)) => return Err(io_err),
                    Err(_err) => {
                        #[cfg(feature = "diagnostics")]
                        tracing::error!(%_err, "compile error");
                        return emitter.emit_exit_failure();
                    }
                },
            }
        }
    }
}
