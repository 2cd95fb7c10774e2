//! Parsers for WinDbg text output.
//!
//! - [`dump`] turns a `dt`-style listing of symbols into `dd` commands
//!   that can be pasted back into a kernel debugging session.
//! - [`transcript`] reads the log of such a session and pulls out the
//!   value printed for every resolved symbol.

pub mod dump;
pub mod transcript;

pub use self::{dump::dump_commands, transcript::extract_symbols};
