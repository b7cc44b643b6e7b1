use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests the student workbook or emits roster documents.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Wrapper for IO failures such as creating folders or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Word document writer implementation.
    #[error("document write error: {0}")]
    DocumentWrite(#[from] docx_rs::DocxError),

    /// Raised when a workbook does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a groupable row lacks a value in a required column.
    #[error("row {row} is missing a value in the '{column}' column")]
    MissingCell { row: usize, column: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
