//! Deterministic model capability stubs for the reference scenarios.
//!
//! No external API calls are made anywhere in this crate. Each stub plays
//! one model behavior the cross-checker has to survive: a clean answer, a
//! dead provider, a reply cut off by a token limit.

use std::time::Duration;

use async_trait::async_trait;

use concordia_contracts::{AnalysisRequest, ConcordiaError, ConcordiaResult};
use concordia_core::traits::ModelCapability;

/// A capability that returns a canned reply, optionally after a delay.
pub struct StubModel {
    reply: String,
    latency: Option<Duration>,
}

impl StubModel {
    /// A stub that answers instantly with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            latency: None,
        }
    }

    /// Add artificial latency before the reply.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl ModelCapability for StubModel {
    async fn analyze(&self, _request: &AnalysisRequest) -> ConcordiaResult<String> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.reply.clone())
    }
}

/// A capability whose provider is unreachable.
pub struct FailingModel {
    reason: String,
}

impl FailingModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ModelCapability for FailingModel {
    async fn analyze(&self, _request: &AnalysisRequest) -> ConcordiaResult<String> {
        Err(ConcordiaError::Transport {
            reason: self.reason.clone(),
        })
    }
}

/// A capability that cuts its reply off mid-JSON, the way an exhausted
/// token budget does.
pub struct TruncatedModel {
    reply: String,
}

impl TruncatedModel {
    /// Keep only the first `keep_chars` characters of `reply`.
    ///
    /// Cuts on character boundaries so Korean text truncates cleanly.
    pub fn cutting(reply: &str, keep_chars: usize) -> Self {
        Self {
            reply: reply.chars().take(keep_chars).collect(),
        }
    }
}

#[async_trait]
impl ModelCapability for TruncatedModel {
    async fn analyze(&self, _request: &AnalysisRequest) -> ConcordiaResult<String> {
        Ok(self.reply.clone())
    }
}

/// A tiny synthetic stand-in for a contract scan.
///
/// Real deployments upload a PNG or JPEG; the scenarios only need stable
/// bytes so the digest in the report stays reproducible.
pub fn sample_contract_image() -> Vec<u8> {
    b"employment-contract-scan:hourly-9860:probation-80pct:penalty-5000000".to_vec()
}
