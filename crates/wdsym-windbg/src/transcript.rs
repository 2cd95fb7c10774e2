//! Extraction of symbol values from a kernel debugging transcript.
//!
//! The transcript is the saved output of a `lkd>` session in which the
//! commands produced by [`dump`](crate::dump) were replayed. Every command
//! is followed by the line the debugger printed in response:
//!
//! ```text
//! lkd> dd nt!KeNumberProcessors l1
//! fffff803`1ea1c3c8  00000008
//! lkd> dd nt!MissingSymbol l1
//! Couldn't resolve error at 'nt!MissingSymbol l1'
//! ```
//!
//! Only the first pair produces a [`SymbolEntry`]:
//! `KeNumberProcessors 00000008`.

use std::sync::LazyLock;

use regex::Regex;
use wdsym_core::SymbolEntry;

/// Prefix of a `dd` command issued at the local kernel debugger prompt.
pub const COMMAND_PREFIX: &str = "lkd> dd ";

/// Prefix of the lines printed by `x` symbol searches.
pub const MATCHED_PREFIX: &str = "Matched:";

/// Separator between the module and the symbol name.
pub const QUALIFIER: char = '!';

/// Text printed by the debugger when a symbol cannot be resolved.
pub const UNRESOLVED_MARKER: &str = "Couldn't resolve error";

/// Suffix of a single element read (`l1`).
pub const LENGTH_SUFFIX: &str = "l1";

enum State<'a> {
    /// Looking for the next command.
    Scanning,

    /// The previous line was a command; the current line is its response.
    Response { command: &'a str },
}

/// Extracts the value of every resolved symbol from a transcript.
///
/// Commands whose response contains [`UNRESOLVED_MARKER`] are dropped
/// together with the response. A command on the last line of the
/// transcript has no response and is ignored.
pub fn extract_symbols(transcript: &str) -> Vec<SymbolEntry> {
    let mut entries = Vec::new();
    let mut unresolved = 0usize;
    let mut state = State::Scanning;

    for line in transcript.lines() {
        let line = trim_start(line);

        state = match state {
            State::Scanning => {
                if line.starts_with(MATCHED_PREFIX) {
                    State::Scanning
                } else if is_symbol_command(line) {
                    State::Response { command: line }
                } else {
                    State::Scanning
                }
            }
            State::Response { command } => {
                if line.contains(UNRESOLVED_MARKER) {
                    tracing::debug!(command, "dropping unresolved symbol");
                    unresolved += 1;
                } else if let Some(entry) = symbol_entry(command, line) {
                    tracing::trace!(name = %entry.name, value = %entry.value, "extracted");
                    entries.push(entry);
                }

                State::Scanning
            }
        };
    }

    if let State::Response { command } = state {
        tracing::debug!(command, "command without response");
    }

    tracing::debug!(entries = entries.len(), unresolved, "transcript scanned");
    entries
}

/// Returns `true` if the line is a `dd` command on a qualified symbol.
pub fn is_symbol_command(line: &str) -> bool {
    line.starts_with(COMMAND_PREFIX) && line.contains(QUALIFIER)
}

/// Builds the entry for a command and its (left-trimmed) response.
pub fn symbol_entry(command: &str, response: &str) -> Option<SymbolEntry> {
    let name = symbol_name(command)?;
    Some(SymbolEntry::new(name, response_value(response)))
}

/// Returns the symbol name referenced by a command line.
///
/// The name is the text after the first [`QUALIFIER`], without a
/// trailing [`LENGTH_SUFFIX`] and without parenthesized annotations.
/// A closing parenthesis left over from a wrapping expression such as
/// `poi(nt!Symbol)` is removed as well.
///
/// The suffix is removed textually, so a name that itself ends in `l1`
/// loses those two characters when the command has no length suffix.
pub fn symbol_name(command: &str) -> Option<String> {
    static ANNOTATION_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s*\(.*\)").unwrap());

    let (_, candidate) = command.split_once(QUALIFIER)?;
    let candidate = trim_start(candidate);
    let candidate = candidate.strip_suffix(LENGTH_SUFFIX).unwrap_or(candidate);
    let candidate = ANNOTATION_REGEX.replace_all(candidate, "");

    let mut name = trim_end(&candidate);
    while name.ends_with(')') && name.matches('(').count() < name.matches(')').count() {
        name = trim_end(&name[..name.len() - 1]);
    }

    Some(name.to_owned())
}

/// Returns the value printed in a response line: the text after its
/// last space.
pub fn response_value(response: &str) -> &str {
    match response.rsplit_once(' ') {
        Some((_, value)) => value,
        None => response,
    }
}

fn trim_start(text: &str) -> &str {
    text.trim_start_matches([' ', '\t'])
}

fn trim_end(text: &str) -> &str {
    text.trim_end_matches([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(transcript: &str) -> Vec<String> {
        extract_symbols(transcript)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn command_and_response() {
        let transcript = concat!(
            "lkd> dd nt!KeNumberProcessors l1\n",
            "fffff803`1ea1c3c8  00000008\n",
        );

        assert_eq!(extract(transcript), ["KeNumberProcessors 00000008"]);
    }

    #[test]
    fn poi_wrapper() {
        let transcript = concat!(
            "lkd> dd poi(module!symbol) l1\n",
            "00 00 00 00  12 34 56 78\n",
        );

        assert_eq!(extract(transcript), ["symbol 78"]);
    }

    #[test]
    fn unresolved_pair_is_dropped() {
        let transcript = concat!(
            "lkd> dd nt!MissingSymbol l1\n",
            "Couldn't resolve error at 'nt!MissingSymbol l1'\n",
            "lkd> dd nt!MmPteBase l1\n",
            "fffff803`1ea0c4a8  00000000\n",
        );

        assert_eq!(extract(transcript), ["MmPteBase 00000000"]);
    }

    #[test]
    fn response_is_consumed_even_if_it_looks_like_a_command() {
        let transcript = concat!(
            "lkd> dd nt!First l1\n",
            "lkd> dd nt!Second l1\n",
            "fffff803`00000000  00000002\n",
        );

        // The second command is the response of the first one.
        assert_eq!(extract(transcript), ["First l1"]);
    }

    #[test]
    fn matched_and_other_lines_are_ignored() {
        let transcript = concat!(
            "Matched: fffff803`1e6f0a60 nt!KiServiceTable (no parameter info)\n",
            "lkd> x nt!KiServiceTable\n",
            "lkd> dd KiServiceTable l1\n",
            "fffff803`1e6f0a60  fcf1b604\n",
            "  \tlkd> dd nt!KiServiceTable l1\n",
            "  fffff803`1e6f0a60  fcf1b604\n",
        );

        assert_eq!(extract(transcript), ["KiServiceTable fcf1b604"]);
    }

    #[test]
    fn trailing_command_without_response() {
        assert!(extract("lkd> dd nt!KiServiceTable l1\n").is_empty());
    }

    #[test]
    fn annotation_is_removed() {
        assert_eq!(
            symbol_name("lkd> dd nt!KiServiceTable (no type info) l1").as_deref(),
            Some("KiServiceTable")
        );
        assert_eq!(
            symbol_name("lkd> dd nt! \tSpaced  l1").as_deref(),
            Some("Spaced")
        );
    }

    #[test]
    fn length_suffix_is_removed_textually() {
        assert_eq!(
            symbol_name("lkd> dd drv!Controll1").as_deref(),
            Some("Control")
        );
        assert_eq!(
            symbol_name("lkd> dd drv!l1Table l2").as_deref(),
            Some("l1Table l2")
        );
    }

    #[test]
    fn value_is_last_space_separated_token() {
        assert_eq!(response_value("00 00 00 00  12 34 56 78"), "78");
        assert_eq!(response_value("deadbeef"), "deadbeef");
        assert_eq!(response_value("fffff803`1ea1c3c8\t00000008"), "fffff803`1ea1c3c8\t00000008");
    }
}
