// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load PDF: {0}")]
    Load(String),

    #[error("Failed to extract text from page {page}: {reason}")]
    PageText { page: u32, reason: String },

    #[error("Input text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No bureau selected")]
    EmptySelection,
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Could not read document: {0}")]
    Pdf(#[from] PdfError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
