use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum BooksError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Store read failed: {0}")]
    StoreRead(String),
    #[error("Store write failed: {0}")]
    StoreWrite(String),
    #[error("Worksheet `{sheet}` schema mismatch: {detail}")]
    Schema { sheet: String, detail: String },
    #[error("Document rendering failed: {0}")]
    Render(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BooksError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BooksError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<serde_json::Error> for BooksError {
    fn from(err: serde_json::Error) -> Self {
        BooksError::Config(err.to_string())
    }
}

impl From<tera::Error> for BooksError {
    fn from(err: tera::Error) -> Self {
        BooksError::Render(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}
