use std::fmt;

/// A single difference between two symbol maps.
///
/// Side `a` is the first map handed to the comparison, side `b` the
/// second one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiffRecord {
    /// The symbol is present on both sides with different values.
    ValueMismatch {
        /// Symbol name.
        symbol: String,

        /// Value in map `a`.
        value_a: String,

        /// Value in map `b`.
        value_b: String,
    },

    /// The symbol is present in map `a` only.
    MissingInB {
        /// Symbol name.
        symbol: String,
    },

    /// The symbol is present in map `b` only.
    MissingInA {
        /// Symbol name.
        symbol: String,
    },
}

impl DiffRecord {
    /// Returns the symbol name the record refers to.
    pub fn symbol(&self) -> &str {
        match self {
            Self::ValueMismatch { symbol, .. }
            | Self::MissingInB { symbol }
            | Self::MissingInA { symbol } => symbol,
        }
    }

    /// Returns the record as seen from the other side of the comparison.
    pub fn mirrored(&self) -> Self {
        match self {
            Self::ValueMismatch {
                symbol,
                value_a,
                value_b,
            } => Self::ValueMismatch {
                symbol: symbol.clone(),
                value_a: value_b.clone(),
                value_b: value_a.clone(),
            },
            Self::MissingInB { symbol } => Self::MissingInA {
                symbol: symbol.clone(),
            },
            Self::MissingInA { symbol } => Self::MissingInB {
                symbol: symbol.clone(),
            },
        }
    }

    /// Attaches source labels to the record for display.
    pub fn labeled<'a>(&'a self, label_a: &'a str, label_b: &'a str) -> LabeledRecord<'a> {
        LabeledRecord {
            record: self,
            label_a,
            label_b,
        }
    }
}

/// A [`DiffRecord`] with the labels of both sources, displayed as one
/// report line.
#[derive(Debug, Clone, Copy)]
pub struct LabeledRecord<'a> {
    record: &'a DiffRecord,
    label_a: &'a str,
    label_b: &'a str,
}

impl fmt::Display for LabeledRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            DiffRecord::ValueMismatch {
                symbol,
                value_a,
                value_b,
            } => write!(
                f,
                "Symbol: {symbol} | {} Value: {value_a} | {} Value: {value_b}",
                self.label_a, self.label_b
            ),
            DiffRecord::MissingInB { symbol } => {
                write!(f, "Symbol: {symbol} is missing in {}", self.label_b)
            }
            DiffRecord::MissingInA { symbol } => {
                write!(f, "Symbol: {symbol} is missing in {}", self.label_a)
            }
        }
    }
}
