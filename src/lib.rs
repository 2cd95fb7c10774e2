//! # WinDbg symbol snapshots
//!
//! The `wdsym` crate turns the text output of the Windows kernel debugger
//! into symbol value snapshots and compares them. This is handy when a
//! driver or a VMI tool depends on kernel globals whose values (or mere
//! presence) drift between builds.
//!
//! ## Workflow
//!
//! 1. List the symbols of interest in the debugger (for example with
//!    `dt nt!*`) and save the output. [`DumpJob`] converts the listing
//!    into `dd <symbol> l1` commands.
//!
//! 2. Replay the commands in a `lkd>` session and save the transcript.
//!    [`SymbolsJob`] extracts `<symbol> <value>` pairs from it, skipping
//!    symbols the debugger could not resolve.
//!
//! 3. Repeat on another machine or build and compare both snapshots with
//!    [`CompareJob`].
//!
//! The pure text transformations live in [`windbg`] and [`diff`] and can
//! be used on in-memory strings:
//!
//! ```rust
//! use wdsym::{
//!     SymbolMap,
//!     diff::{SymbolMapText as _, compare},
//!     windbg::extract_symbols,
//! };
//!
//! let transcript = "lkd> dd nt!KeNumberProcessors l1\n\
//!                   fffff803`1ea1c3c8  00000008\n";
//!
//! let old = extract_symbols(transcript).into_iter().collect::<SymbolMap>();
//! let new = SymbolMap::parse("KeNumberProcessors 00000010\n");
//!
//! let report = compare(&old, &new);
//! assert_eq!(
//!     report.render("old", "new"),
//!     "Symbol: KeNumberProcessors | old Value: 00000008 | new Value: 00000010\n"
//! );
//! ```

pub use wdsym_core::*;

pub mod config;
mod error;
pub mod jobs;

pub use self::{
    error::Error,
    jobs::{CompareJob, DumpJob, SymbolsJob},
};

pub mod windbg {
    //! Parsers for WinDbg symbol listings and transcripts.

    pub use wdsym_windbg::*;
}

pub mod diff {
    //! Symbol map parsing and comparison.

    pub use wdsym_diff::*;
}
