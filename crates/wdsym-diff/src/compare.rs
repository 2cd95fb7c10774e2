use wdsym_core::{DiffRecord, SymbolMap};

/// Differences between two symbol maps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffReport {
    records: Vec<DiffRecord>,
}

impl DiffReport {
    /// Returns the records.
    pub fn records(&self) -> &[DiffRecord] {
        &self.records
    }

    /// Returns `true` if the maps are identical.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of symbols with different values.
    pub fn mismatches(&self) -> usize {
        self.count(|record| matches!(record, DiffRecord::ValueMismatch { .. }))
    }

    /// Returns the number of symbols present only in map `a`.
    pub fn missing_in_b(&self) -> usize {
        self.count(|record| matches!(record, DiffRecord::MissingInB { .. }))
    }

    /// Returns the number of symbols present only in map `b`.
    pub fn missing_in_a(&self) -> usize {
        self.count(|record| matches!(record, DiffRecord::MissingInA { .. }))
    }

    /// Renders the report, one line per record, labelling the maps with
    /// `label_a` and `label_b`.
    pub fn render(&self, label_a: &str, label_b: &str) -> String {
        let mut result = String::new();

        for record in &self.records {
            result += &record.labeled(label_a, label_b).to_string();
            result.push('\n');
        }

        result
    }

    fn count(&self, predicate: impl Fn(&DiffRecord) -> bool) -> usize {
        self.records.iter().filter(|record| predicate(record)).count()
    }
}

impl IntoIterator for DiffReport {
    type Item = DiffRecord;
    type IntoIter = std::vec::IntoIter<DiffRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Compares two symbol maps.
///
/// Symbols of `a` are visited first: each one is either reported as
/// missing in `b` or, if `b` holds a different value, as a mismatch.
/// Symbols of `b` absent from `a` follow. Symbols with equal values on
/// both sides are not reported.
pub fn compare(a: &SymbolMap, b: &SymbolMap) -> DiffReport {
    let mut records = Vec::new();

    for (symbol, value_a) in a.iter() {
        match b.get(symbol) {
            Some(value_b) if value_b != value_a => records.push(DiffRecord::ValueMismatch {
                symbol: symbol.to_owned(),
                value_a: value_a.to_owned(),
                value_b: value_b.to_owned(),
            }),
            Some(_) => {}
            None => records.push(DiffRecord::MissingInB {
                symbol: symbol.to_owned(),
            }),
        }
    }

    for (symbol, _) in b.iter() {
        if !a.contains(symbol) {
            records.push(DiffRecord::MissingInA {
                symbol: symbol.to_owned(),
            });
        }
    }

    for record in &records {
        tracing::trace!(symbol = record.symbol(), ?record, "difference");
    }

    let report = DiffReport { records };
    tracing::debug!(
        mismatches = report.mismatches(),
        missing_in_a = report.missing_in_a(),
        missing_in_b = report.missing_in_b(),
        "maps compared"
    );

    report
}
