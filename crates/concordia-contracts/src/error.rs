//! Error types for the CONCORDIA cross-check pipeline.
//!
//! All fallible operations in the CONCORDIA crates return
//! `ConcordiaResult<T>`. The first three variants are the contained error
//! classes: the single-model adapter absorbs them into ERROR-status results
//! and they never propagate past that boundary as faults.

use thiserror::Error;

/// The unified error type for the CONCORDIA crates.
#[derive(Debug, Error)]
pub enum ConcordiaError {
    /// The model's reply is not parseable structured data.
    #[error("malformed model payload: {detail}")]
    MalformedPayload { detail: String },

    /// The model's reply parses but a required field is missing or mistyped.
    #[error("schema violation: field '{field}' is missing or mistyped")]
    SchemaViolation { field: String },

    /// Network, auth, or quota failure reaching the model capability.
    ///
    /// A bounded wait expiring on an adapter is reported under this variant
    /// too — from the caller's perspective the capability was unreachable.
    #[error("transport failure reaching model capability: {reason}")]
    Transport { reason: String },

    /// Fewer than two usable results when cross-check agreement is requested.
    ///
    /// Surfaced by the orchestrator as an explicit report state, never as an
    /// uncaught fault; this variant exists for display and for callers that
    /// ask for a consensus where none can be computed.
    #[error("insufficient usable results for agreement: {usable} non-error verdict(s), need at least 2")]
    InsufficientAdapters { usable: usize },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the CONCORDIA crates.
pub type ConcordiaResult<T> = Result<T, ConcordiaError>;
