//! Core trait definitions for the CONCORDIA cross-check pipeline.
//!
//! These three traits define the complete trust boundary:
//!
//! - `ModelCapability`    — untrusted answerer (backed by a vision LLM)
//! - `ResponseNormalizer` — trusted checker (turns raw replies into verdicts)
//! - `TextRedactor`       — trusted filter (strips PII from outgoing text)
//!
//! The adapter and checker wire them together in the correct order. Raw
//! capability output is never surfaced: it must pass the normalizer, and
//! every free-text field must pass the redactor before a report leaves
//! the checker.

use async_trait::async_trait;

use concordia_contracts::{AnalysisRequest, ConcordiaResult, ModelVerdict};

/// A vision model capability that analyzes one image.
///
/// Implementations of this trait are considered **untrusted** — they wrap a
/// remote multimodal LLM whose replies may be malformed, truncated, or
/// absent. Whatever string comes back is treated as hostile input until the
/// normalizer has validated it.
#[async_trait]
pub trait ModelCapability: Send + Sync {
    /// Send the request's image and prompt to the model and return the raw
    /// textual reply.
    ///
    /// Errors here are the transport class: network, auth, quota, or the
    /// provider rejecting the request. Implementations must NOT attempt to
    /// parse or repair the reply — that is the normalizer's job.
    async fn analyze(&self, request: &AnalysisRequest) -> ConcordiaResult<String>;
}

/// The reply normalizer: the first gate a raw model reply must pass.
///
/// Implementations are **trusted** and must be deterministic: the same raw
/// string always yields the same verdict or the same error. No I/O.
pub trait ResponseNormalizer: Send + Sync {
    /// Validate `raw` and rewrite it into the canonical verdict shape.
    ///
    /// Returns `MalformedPayload` when the reply is not parseable data and
    /// `SchemaViolation { field }` when it parses but a required field is
    /// missing or mistyped. A returned `ModelVerdict` is guaranteed
    /// well-formed: recognized status, score within [0, 100].
    fn normalize(&self, raw: &str) -> ConcordiaResult<ModelVerdict>;
}

/// The PII filter: the last gate before text leaves the checker.
///
/// Implementations are **trusted**, deterministic, and idempotent —
/// redacting already-redacted text must change nothing. The checker applies
/// this to every free-text field of every result, so implementations only
/// decide WHAT to mask, never WHERE.
pub trait TextRedactor: Send + Sync {
    /// Return `text` with every sensitive span replaced by a placeholder.
    fn redact(&self, text: &str) -> String;
}
