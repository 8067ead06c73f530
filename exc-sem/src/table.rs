//! The symbol table: spec.md §4.2.
//!
//! An append-only, order-significant table — insertion order fixes memory
//! layout, since `slot * 4` is the address emitted code uses to reach a
//! variable. Grounded on the flat-binding shape of `faxc-sem`'s `Rib`
//! (examples/Luvion1-Fax/faxc/crates/faxc-sem/src/scope.rs), collapsed to a
//! single global scope and backed by `indexmap::IndexMap` so "slot" is just
//! "insertion index" rather than a field we maintain by hand.

use indexmap::IndexMap;

use crate::error::{CompileError, CompileResult};

/// Fixed table capacity (spec.md §3).
pub const CAPACITY: usize = 64;

/// The reserved identifiers, pre-seeded at slots 0, 1, 2 with value 0.
pub const RESERVED: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub value: i32,
    pub slot: usize,
}

pub struct SymbolTable {
    entries: IndexMap<String, Symbol>,
}

impl SymbolTable {
    /// A table pre-seeded with the reserved identifiers at slots 0, 1, 2.
    pub fn new() -> Self {
        let mut entries = IndexMap::with_capacity(CAPACITY);
        for name in RESERVED {
            entries.insert(name.to_string(), Symbol { value: 0, slot: entries.len() });
        }
        Self { entries }
    }

    /// Linear-search read. A miss is fatal: there is no implicit zero read.
    pub fn get_value(&self, name: &str) -> CompileResult<i32> {
        self.entries
            .get(name)
            .map(|s| s.value)
            .ok_or_else(|| CompileError::NotFound(name.to_string()))
    }

    /// Linear-search write. Updates in place on a hit, appends on a miss.
    pub fn set_value(&mut self, name: &str, value: i32) -> CompileResult<i32> {
        if let Some(sym) = self.entries.get_mut(name) {
            sym.value = value;
            return Ok(value);
        }
        if self.entries.len() >= CAPACITY {
            return Err(CompileError::OutOfMemory);
        }
        let slot = self.entries.len();
        self.entries.insert(name.to_string(), Symbol { value, slot });
        #[cfg(feature = "diagnostics")]
        tracing::debug!(name, slot, value, "symbol table: new binding");
        Ok(value)
    }

    /// The stable memory slot for a name the evaluator has already touched.
    /// A miss here is a self-consistency failure, not a user-facing error —
    /// spec.md §4.2 calls it out as such — but we still surface it through
    /// the ordinary error path rather than panicking, since it can only be
    /// reached for names `get_value`/`set_value` already rejected.
    pub fn index_of(&self, name: &str) -> CompileResult<usize> {
        self.entries.get(name).map(|s| s.slot).ok_or(CompileError::OutOfMemory)
    }

    /// The byte address of a slot: `slot * 4` (spec.md §3).
    pub fn address_of(slot: usize) -> usize {
        slot * 4
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_seeded_at_fixed_slots() {
        let t = SymbolTable::new();
        assert_eq!(t.index_of("x").unwrap(), 0);
        assert_eq!(t.index_of("y").unwrap(), 1);
        assert_eq!(t.index_of("z").unwrap(), 2);
        assert_eq!(t.get_value("x").unwrap(), 0);
    }

    #[test]
    fn read_of_undefined_identifier_is_fatal() {
        let t = SymbolTable::new();
        assert_eq!(t.get_value("w"), Err(CompileError::NotFound("w".to_string())));
    }

    #[test]
    fn set_creates_new_entries_in_insertion_order() {
        let mut t = SymbolTable::new();
        t.set_value("a", 10).unwrap();
        t.set_value("b", 20).unwrap();
        assert_eq!(t.index_of("a").unwrap(), 3);
        assert_eq!(t.index_of("b").unwrap(), 4);
        assert_eq!(SymbolTable::address_of(t.index_of("b").unwrap()), 16);
    }

    #[test]
    fn set_updates_existing_entry_in_place() {
        let mut t = SymbolTable::new();
        t.set_value("x", 5).unwrap();
        assert_eq!(t.get_value("x").unwrap(), 5);
        assert_eq!(t.index_of("x").unwrap(), 0);
    }

    #[test]
    fn table_full_is_out_of_memory() {
        let mut t = SymbolTable::new();
        for i in 0..(CAPACITY - RESERVED.len()) {
            t.set_value(&format!("v{i}"), 0).unwrap();
        }
        assert_eq!(t.set_value("overflow", 0), Err(CompileError::OutOfMemory));
    }
}
