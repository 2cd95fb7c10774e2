//! Conversion of a symbol listing into replayable `dd` commands.
//!
//! Every line of the listing starts with a fixed-width column (address
//! and padding) that is dropped. The rest of the line is the payload
//! that becomes the operand of a `dd` command reading one element:
//!
//! ```text
//! fffff803`1e6f0a60 nt!KiServiceTable = <no type information>
//! ```
//!
//! becomes
//!
//! ```text
//! dd nt!KiServiceTable l1
//! ```

/// Width, in characters, of the leading column that is discarded.
pub const PREFIX_WIDTH: usize = 17;

/// Marker printed by the debugger for symbols without type information.
pub const NO_TYPE_INFORMATION: &str = "= <no type information>";

/// Converts a symbol listing into `dd` commands, one per usable line.
///
/// Lines shorter than [`PREFIX_WIDTH`] characters produce nothing. A line
/// of exactly [`PREFIX_WIDTH`] characters has an empty payload and yields
/// the degenerate command `dd l1`.
pub fn dump_commands(dump: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in dump.lines().enumerate() {
        match payload(line) {
            Some(payload) => commands.push(command(payload)),
            None => {
                tracing::debug!(line = index + 1, "skipping short dump line");
                skipped += 1;
            }
        }
    }

    tracing::debug!(commands = commands.len(), skipped, "dump converted");
    commands
}

/// Formats the `dd` command reading a single element at `payload`.
pub fn command(payload: &str) -> String {
    format!("dd{payload} l1")
}

/// Returns the payload of a listing line.
///
/// Returns `None` if the line is shorter than the prefix column. The
/// [`NO_TYPE_INFORMATION`] marker and the whitespace before it are
/// removed from the end of the payload.
pub fn payload(line: &str) -> Option<&str> {
    // Byte offset of the character right after the prefix column. The
    // line length is appended so that a line of exactly PREFIX_WIDTH
    // characters still has an (empty) payload.
    let start = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()))
        .nth(PREFIX_WIDTH)?;

    let payload = &line[start..];
    match payload.strip_suffix(NO_TYPE_INFORMATION) {
        Some(payload) => Some(payload.trim_end()),
        None => Some(payload),
    }
}
