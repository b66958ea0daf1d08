//! Error types for the telemetry log pipeline.
//!
//! Every stage fails fast: the first error aborts the run and is surfaced
//! to `main`, which turns it into a non-zero exit status.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// The main error type for telemetry log operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The binary log could not be opened or read.
    #[error("failed to read telemetry log {path}: {source}")]
    InputRead {
        /// Path of the binary log.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV output could not be created or written.
    #[error("failed to write CSV output {path}: {source}")]
    OutputWrite {
        /// Path of the CSV file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Drawing the chart failed.
    #[error("plot error: {0}")]
    Plot(String),

    /// The bundled font could not be registered.
    #[error("font error: {0}")]
    Font(String),

    /// The interactive viewer failed or is unavailable.
    #[error("viewer error: {0}")]
    Viewer(String),
}

/// A specialized Result type for telemetry log operations.
pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Plot(err.to_string())
    }
}

impl Error {
    /// Create a new viewer error.
    #[must_use]
    pub fn viewer(message: impl Into<String>) -> Self {
        Self::Viewer(message.into())
    }

    /// Check if this error came from reading the input log.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputRead { .. })
    }
}
