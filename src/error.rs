//! Error types for the Lexigraph library.
//!
//! All errors are represented by the [`LexigraphError`] enum. Two conditions
//! carry dedicated variants because callers branch on them: a divisor series
//! missing a year present in the dividend ([`LexigraphError::MissingYear`]),
//! and a query submitted with no words ([`LexigraphError::EmptyQuery`]).
//!
//! # Examples
//!
//! ```
//! use lexigraph::error::{LexigraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexigraphError::parse("Invalid record"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexigraph operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the message-carrying variants.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors (reading data files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Taxonomy-related errors
    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Malformed input records; fatal at load time
    #[error("Parse error: {0}")]
    Parse(String),

    /// A divisor series lacks a year present in the dividend
    #[error("divisor series has no entry for year {0}")]
    MissingYear(i32),

    /// A query was submitted with no words
    #[error("query contains no words")]
    EmptyQuery,

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Corpus(msg.into())
    }

    /// Create a new taxonomy error.
    pub fn taxonomy<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Taxonomy(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Query(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
