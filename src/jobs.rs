//! File based jobs.
//!
//! Each job reads its input files completely, transforms the text in
//! memory and writes the result to its output file in one go. Inputs are
//! read before the output is created, so a job that fails on a missing
//! input leaves an existing output file untouched.

use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use wdsym_core::SymbolMap;
use wdsym_diff::{DiffReport, SymbolMapText as _};

use crate::{
    Error,
    config::{DEFAULT_COMPARISON_OUTPUT, DEFAULT_DUMP_OUTPUT, DEFAULT_SYMBOLS_OUTPUT},
};

/// Converts a symbol listing into `dd` commands.
#[derive(Debug, Clone)]
pub struct DumpJob {
    input: PathBuf,
    output: PathBuf,
}

impl DumpJob {
    /// Creates a job writing to [`DEFAULT_DUMP_OUTPUT`].
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: DEFAULT_DUMP_OUTPUT.into(),
        }
    }

    /// Sets the output path.
    pub fn with_output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the job and returns the number of commands written.
    pub fn run(&self) -> Result<usize, Error> {
        let dump = read_input(&self.input)?;
        let commands = wdsym_windbg::dump_commands(&dump);

        write_output(&self.output, commands.iter())?;

        tracing::info!(
            input = %self.input.display(),
            output = %self.output.display(),
            count = commands.len(),
            "wrote commands"
        );

        Ok(commands.len())
    }
}

/// Extracts symbol values from a debugger transcript.
#[derive(Debug, Clone)]
pub struct SymbolsJob {
    input: PathBuf,
    output: PathBuf,
}

impl SymbolsJob {
    /// Creates a job writing to [`DEFAULT_SYMBOLS_OUTPUT`].
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: DEFAULT_SYMBOLS_OUTPUT.into(),
        }
    }

    /// Sets the output path.
    pub fn with_output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the job and returns the number of symbols written.
    pub fn run(&self) -> Result<usize, Error> {
        let transcript = read_input(&self.input)?;
        let entries = wdsym_windbg::extract_symbols(&transcript);

        write_output(&self.output, entries.iter())?;

        tracing::info!(
            input = %self.input.display(),
            output = %self.output.display(),
            count = entries.len(),
            "wrote symbols"
        );

        Ok(entries.len())
    }
}

/// Compares two symbol snapshots.
///
/// The report refers to the snapshots by their paths, exactly as they
/// were passed to [`CompareJob::new`].
#[derive(Debug, Clone)]
pub struct CompareJob {
    input_a: PathBuf,
    input_b: PathBuf,
    output: PathBuf,
}

impl CompareJob {
    /// Creates a job writing to [`DEFAULT_COMPARISON_OUTPUT`].
    pub fn new(input_a: impl Into<PathBuf>, input_b: impl Into<PathBuf>) -> Self {
        Self {
            input_a: input_a.into(),
            input_b: input_b.into(),
            output: DEFAULT_COMPARISON_OUTPUT.into(),
        }
    }

    /// Sets the output path.
    pub fn with_output(self, output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..self
        }
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the job and returns the report that was written.
    pub fn run(&self) -> Result<DiffReport, Error> {
        let a = SymbolMap::parse(&read_input(&self.input_a)?);
        let b = SymbolMap::parse(&read_input(&self.input_b)?);
        let report = wdsym_diff::compare(&a, &b);

        let label_a = self.input_a.display().to_string();
        let label_b = self.input_b.display().to_string();
        let records = report
            .records()
            .iter()
            .map(|record| record.labeled(&label_a, &label_b));

        write_output(&self.output, records)?;

        tracing::info!(
            a = %label_a,
            b = %label_b,
            output = %self.output.display(),
            mismatches = report.mismatches(),
            missing_in_a = report.missing_in_a(),
            missing_in_b = report.missing_in_b(),
            "wrote comparison"
        );

        Ok(report)
    }
}

/// Reads an input file, replacing invalid UTF-8 sequences.
fn read_input(path: &Path) -> Result<String, Error> {
    let data = std::fs::read(path).map_err(|err| Error::input_open(path, err))?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Creates (or truncates) the output file and writes one line per item.
fn write_output<T>(path: &Path, lines: impl IntoIterator<Item = T>) -> Result<(), Error>
where
    T: std::fmt::Display,
{
    let file = File::create(path).map_err(|err| Error::output_open(path, err))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_outputs() {
        assert_eq!(DumpJob::new("in").output(), Path::new(DEFAULT_DUMP_OUTPUT));
        assert_eq!(
            SymbolsJob::new("in").output(),
            Path::new(DEFAULT_SYMBOLS_OUTPUT)
        );
        assert_eq!(
            CompareJob::new("a", "b").output(),
            Path::new(DEFAULT_COMPARISON_OUTPUT)
        );
    }

    #[test]
    fn output_override() {
        let job = CompareJob::new("a", "b").with_output("custom.txt");
        assert_eq!(job.output(), Path::new("custom.txt"));
    }
}
