//! Unified application error type.
//! Cycle-level failures (store, config, CLI input) are all `AppError`.
//! Per-row deadline problems are NOT here: they live in
//! `core::annotate::RowError` and never abort a cycle.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store (fatal for the cycle)
    // ---------------------------
    #[error("Cannot read table '{path}': {cause}")]
    StoreRead { path: String, cause: String },

    #[error("Cannot write table '{path}': {cause}")]
    StoreWrite { path: String, cause: String },

    #[error("Table '{path}' has no '{column}' column")]
    MissingColumn { path: String, column: &'static str },

    #[error("Unsupported table format: {0} (expected .xlsx or .csv)")]
    UnsupportedStore(String),

    // ---------------------------
    // Input / config
    // ---------------------------
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid instant (expected RFC 3339): {0}")]
    InvalidInstant(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the failure is about the table file itself (as opposed to
    /// configuration or command-line input).
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            AppError::StoreRead { .. }
                | AppError::StoreWrite { .. }
                | AppError::MissingColumn { .. }
                | AppError::UnsupportedStore(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
