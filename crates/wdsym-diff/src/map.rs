use wdsym_core::SymbolMap;

/// Parsing of the textual `<symbol> <value>` snapshot format.
pub trait SymbolMapText {
    /// Parses a snapshot.
    ///
    /// Lines with fewer than two whitespace-separated tokens are ignored.
    /// Tokens after the second one are ignored. When a symbol occurs more
    /// than once, the last occurrence wins.
    fn parse(text: &str) -> Self;
}

impl SymbolMapText for SymbolMap {
    fn parse(text: &str) -> Self {
        let mut result = SymbolMap::new();

        for (index, line) in text.lines().enumerate() {
            let mut parts = line.split_whitespace();

            let (name, value) = match (parts.next(), parts.next()) {
                (Some(name), Some(value)) => (name, value),
                _ => {
                    if !line.trim().is_empty() {
                        tracing::debug!(line = index + 1, "ignoring malformed symbol line");
                    }
                    continue;
                }
            };

            if let Some(previous) = result.insert(name, value) {
                tracing::debug!(
                    line = index + 1,
                    name,
                    previous = %previous,
                    value,
                    "duplicate symbol, keeping last value"
                );
            }
        }

        result
    }
}
