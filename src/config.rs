//! Default output locations.
//!
//! Every job writes to a fixed file name in the current working directory
//! unless it is given another path with `with_output`.

/// Output of [`DumpJob`](crate::DumpJob).
pub const DEFAULT_DUMP_OUTPUT: &str = "symbols_from_dump.txt";

/// Output of [`SymbolsJob`](crate::SymbolsJob).
pub const DEFAULT_SYMBOLS_OUTPUT: &str = "parsed_symbols_with_values.txt";

/// Output of [`CompareJob`](crate::CompareJob).
pub const DEFAULT_COMPARISON_OUTPUT: &str = "comparison_result.txt";
