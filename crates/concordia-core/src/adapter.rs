//! The model adapter: one capability, one normalizer, total containment.
//!
//! `ModelAdapter::analyze()` is the single-model analysis operation. It is
//! deliberately infallible — every failure class (unreachable capability,
//! malformed reply, schema violation) is absorbed into an ERROR-status
//! `VerdictResult` so that one misbehaving model can never take down a
//! cross-check, and a caller holding two adapters always gets two results.

use tracing::{debug, info, warn};

use concordia_contracts::{
    AnalysisRequest, ConcordiaError, FailureKind, ModelId, VerdictResult,
};

use crate::traits::{ModelCapability, ResponseNormalizer};

use std::sync::Arc;

/// One model capability paired with the normalizer that validates its output.
///
/// The `tag` is purely descriptive: it labels results and log lines and is
/// what consensus policy refers to. It confers no special treatment.
pub struct ModelAdapter {
    tag: ModelId,
    capability: Arc<dyn ModelCapability>,
    normalizer: Box<dyn ResponseNormalizer>,
}

impl ModelAdapter {
    /// Pair a capability with a normalizer under a descriptive tag.
    pub fn new(
        tag: ModelId,
        capability: Arc<dyn ModelCapability>,
        normalizer: Box<dyn ResponseNormalizer>,
    ) -> Self {
        Self {
            tag,
            capability,
            normalizer,
        }
    }

    /// The descriptive tag this adapter stamps on its results.
    pub fn tag(&self) -> &ModelId {
        &self.tag
    }

    /// Run one analysis: invoke the capability, normalize the reply.
    ///
    /// # Containment
    ///
    /// This method never returns an error and never panics on model
    /// misbehavior. The mapping is:
    ///
    /// - capability unreachable          → ERROR result, `Transport`
    /// - reply not parseable             → ERROR result, `MalformedPayload`
    /// - reply parseable but non-conformant → ERROR result, `SchemaViolation`
    /// - reply conformant                → verdict result
    ///
    /// The diagnostic of an ERROR result is the error's display string, so
    /// a UI panel can show it where a verdict summary would have gone.
    pub async fn analyze(&self, request: &AnalysisRequest) -> VerdictResult {
        debug!(
            model = %self.tag,
            image_digest = %request.digest(),
            "invoking model capability"
        );

        let raw = match self.capability.analyze(request).await {
            Ok(raw) => raw,
            Err(err) => {
                let kind = failure_kind(&err);
                warn!(
                    model = %self.tag,
                    kind = ?kind,
                    error = %err,
                    "capability invocation failed, contained as ERROR result"
                );
                return VerdictResult::failure(self.tag.clone(), kind, err.to_string());
            }
        };

        match self.normalizer.normalize(&raw) {
            Ok(verdict) => {
                info!(
                    model = %self.tag,
                    status = %verdict.status,
                    score = verdict.score,
                    issues = verdict.issues.len(),
                    "model verdict normalized"
                );
                VerdictResult::verdict(self.tag.clone(), verdict)
            }
            Err(err) => {
                let kind = failure_kind(&err);
                warn!(
                    model = %self.tag,
                    kind = ?kind,
                    error = %err,
                    "reply failed normalization, contained as ERROR result"
                );
                VerdictResult::failure(self.tag.clone(), kind, err.to_string())
            }
        }
    }
}

/// Classify an error into the containment taxonomy.
///
/// Anything outside the three named classes is treated as transport: from
/// the adapter's perspective the capability failed to deliver a usable
/// answer, whatever the internal reason.
fn failure_kind(err: &ConcordiaError) -> FailureKind {
    match err {
        ConcordiaError::MalformedPayload { .. } => FailureKind::MalformedPayload,
        ConcordiaError::SchemaViolation { .. } => FailureKind::SchemaViolation,
        _ => FailureKind::Transport,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
