use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input document is missing, unreadable, or not well-formed XML
    #[error("Parse error: {0}")]
    ParseError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid configuration input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to assemble or serialize the output table
    #[error("Export error: {0}")]
    ExportError(String),
}

// Conversion implementations for common errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(err: quick_xml::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
