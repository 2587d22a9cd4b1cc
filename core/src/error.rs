#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only some errors end a run: a missing or undecodable input document stops
//! generation early but is not a failure of the process (see [`AppError::is_fatal`]).

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The description document does not exist at the configured path.
    #[from(ignore)]
    #[display("MissingInput: OpenAPI document not found: {}", _0.display())]
    MissingInput(PathBuf),

    /// Neither the structured-text parser nor the JSON heuristic could decode the document.
    #[from(ignore)]
    #[display(
        "UnsupportedFormat: cannot decode {} without YAML support (and it is not valid JSON)",
        _0.display()
    )]
    UnsupportedFormat(PathBuf),

    /// The document (or a config file) was read but could not be parsed.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Whether this error must abort the run with a non-zero exit status.
    ///
    /// `MissingInput` and `UnsupportedFormat` only skip generation.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AppError::MissingInput(_) | AppError::UnsupportedFormat(_)
        )
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
