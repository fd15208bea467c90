//! Error types for the library API.

use llm::error::LLMError;
use thiserror::Error;

/// Errors related to the prompt and category stores (file access, parsing).
///
/// An absent backing file is never reported through this type: both stores
/// resolve it to a documented default. `Io` and `Json` therefore always mean
/// "storage is there but unusable", distinct from "no data yet".
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred during store initialization.
    #[error("Failed to initialize store: {0}")]
    Init(String),

    /// The requested prompt could not be found by its ID.
    #[error("Prompt '{0}' not found")]
    NotFound(String),

    /// Input was rejected before any I/O took place.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted content exists but could not be parsed, or data failed to
    /// serialize. Corrupted files surface here rather than as an empty list.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the AI optimization collaborator.
#[derive(Error, Debug)]
pub enum OptimizeError {
    /// The optimizer was invoked without a usable provider configuration,
    /// typically a missing API key environment variable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The content to optimize was empty.
    #[error("Prompt content is required")]
    EmptyContent,

    /// An error originating from the underlying LLM backend, surfaced
    /// verbatim. No retry is attempted.
    #[error("LLM backend error: {0}")]
    Llm(#[from] LLMError),
}
