//! Core types shared by the wdsym crates.
//!
//! The types here describe the data that flows between the WinDbg text
//! parsers and the symbol map comparison:
//!
//! - [`SymbolEntry`] is a single `(symbol, value)` pair extracted from a
//!   debugger transcript.
//! - [`SymbolMap`] is a snapshot of symbol values keyed by symbol name.
//! - [`DiffRecord`] is one difference found between two snapshots.

mod diff;
mod symbols;

pub use self::{
    diff::{DiffRecord, LabeledRecord},
    symbols::{SymbolEntry, SymbolMap},
};
