//! Comparison of symbol value snapshots.
//!
//! A snapshot is the text written by the transcript extraction: one
//! `<symbol> <value>` pair per line. Two snapshots, typically taken on
//! different builds or machines, are loaded into [`SymbolMap`]s and
//! compared with [`compare`].
//!
//! [`SymbolMap`]: wdsym_core::SymbolMap

mod compare;
mod map;

pub use self::{
    compare::{DiffReport, compare},
    map::SymbolMapText,
};
