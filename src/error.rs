use std::path::PathBuf;

/// Error type for the wdsym jobs.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input file could not be opened or read.
    #[error("Error opening input file: {}", path.display())]
    InputOpen {
        /// Path of the input file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created.
    #[error("Error opening output file: {}", path.display())]
    OutputOpen {
        /// Path of the output file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred while writing the output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::InputOpen`] error.
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    /// Creates an [`Error::OutputOpen`] error.
    pub fn output_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputOpen {
            path: path.into(),
            source,
        }
    }
}
