use std::fmt;

use indexmap::IndexMap;

/// A symbol name paired with the value observed for it.
///
/// The value is kept as the raw hex text printed by the debugger. It is
/// never parsed into an integer, so leading zeros and the exact width of
/// the debugger output survive a round trip through a symbol map file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// Symbol name without the module qualifier.
    pub name: String,

    /// Hex value as printed by the debugger.
    pub value: String,
}

impl SymbolEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.value)
    }
}

/// Symbol values keyed by symbol name.
///
/// Inserting a name that is already present replaces its value but keeps
/// the position of the first insertion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolMap(pub IndexMap<String, String>);

impl SymbolMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value of a symbol.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns `true` if the map contains the symbol.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the symbols and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Extend<SymbolEntry> for SymbolMap {
    fn extend<T: IntoIterator<Item = SymbolEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(entry.name, entry.value);
        }
    }
}

impl FromIterator<SymbolEntry> for SymbolMap {
    fn from_iter<T: IntoIterator<Item = SymbolEntry>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
