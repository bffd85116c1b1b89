//! The CONCORDIA cross-checker: the dual-model agreement orchestrator.
//!
//! The checker enforces the cross-check protocol:
//!
//!   Fan-out → Normalize (per adapter) → Agree? → Consolidate → Redact
//!
//! The reliability invariant is absolute: `cross_check()` always returns a
//! complete report. A failed, malformed, or late model shows up as an
//! ERROR-status result inside the report — it never becomes an `Err`, a
//! panic, or a missing slot. The privacy invariant is enforced here too:
//! every free-text field passes the redactor before the report is returned,
//! so no caller can observe unredacted model output.

use chrono::Utc;
use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use concordia_contracts::{
    Agreement, AnalysisOutcome, AnalysisRequest, CheckId, ConcordiaError, ConcordiaResult,
    ConsensusConfig, ConsolidatedOpinion, CrossCheckReport, FailureKind, ModelId, ModelVerdict,
    PreferredSource, Status, VerdictResult,
};

use crate::adapter::ModelAdapter;
use crate::traits::TextRedactor;

/// The central orchestrator for dual-model cross-checks.
///
/// Construct one checker per adapter roster; it is cheap to keep around and
/// every method takes `&self`, so one instance can serve many requests.
/// The checker owns the trusted components — adapters (each wrapping its
/// normalizer) and the redactor — and enforces the protocol ordering on
/// every call.
pub struct CrossChecker {
    adapters: Vec<ModelAdapter>,
    redactor: Box<dyn TextRedactor>,
    config: ConsensusConfig,
}

impl CrossChecker {
    /// Create a checker over the given adapter roster.
    ///
    /// Adapter order is significant: it fixes the order of `results` in
    /// every report and gives `PreferredSource::First`/`Last` their meaning.
    pub fn new(
        adapters: Vec<ModelAdapter>,
        redactor: Box<dyn TextRedactor>,
        config: ConsensusConfig,
    ) -> Self {
        Self {
            adapters,
            redactor,
            config,
        }
    }

    /// Number of registered adapters.
    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// Tags of the registered adapters, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &ModelId> {
        self.adapters.iter().map(ModelAdapter::tag)
    }

    /// Run the full cross-check protocol for one request.
    ///
    /// # Protocol
    ///
    /// 1. Fan the request out to every adapter concurrently. All adapters
    ///    receive byte-identical input; a configured `adapter_timeout`
    ///    substitutes a transport ERROR result for any adapter that misses
    ///    the bound.
    /// 2. Compute status agreement over the usable (non-ERROR) results.
    ///    Fewer than two usable results → `InsufficientData`.
    /// 3. On agreement, pick the consolidated opinion according to
    ///    `preferred_source`. On disagreement, keep every verdict verbatim —
    ///    nothing is averaged or merged.
    /// 4. Flag `needs_human_review` on disagreement only. Insufficient data
    ///    is reported as its own state, not routed to review.
    /// 5. Redact every free-text field of every result, and of the
    ///    consolidated opinion, before the report leaves this method.
    ///
    /// `results` preserves adapter registration order regardless of which
    /// model answered first.
    pub async fn cross_check(&self, request: &AnalysisRequest) -> CrossCheckReport {
        let check_id = CheckId::new();
        info!(
            check_id = %check_id,
            image_digest = %request.digest(),
            adapters = self.adapters.len(),
            "cross-check starting"
        );

        // ── Step 1: Concurrent fan-out ───────────────────────────────────────
        //
        // join_all preserves input order, so results[i] always belongs to
        // adapters[i] no matter who finishes first.
        let futures = self
            .adapters
            .iter()
            .map(|adapter| self.run_adapter(adapter, request));
        let mut results = join_all(futures).await;

        // ── Step 2: Status agreement ─────────────────────────────────────────
        let agreement = Self::agreement_of(&results);

        // ── Step 3: Consolidation (agreement only) ───────────────────────────
        let mut consolidated = match &agreement {
            Agreement::Agreed { .. } => self.pick_consolidated(&results),
            _ => None,
        };

        // ── Step 4: Human review flag ────────────────────────────────────────
        let needs_human_review = matches!(agreement, Agreement::Disagreed { .. });

        match &agreement {
            Agreement::Agreed { status } => {
                info!(check_id = %check_id, status = %status, "models agree");
            }
            Agreement::Disagreed { statuses } => {
                warn!(
                    check_id = %check_id,
                    statuses = ?statuses,
                    "models disagree, flagging for human review"
                );
            }
            Agreement::InsufficientData { usable } => {
                warn!(
                    check_id = %check_id,
                    usable,
                    "insufficient usable results, agreement not computed"
                );
            }
        }

        // ── Step 5: Redaction ────────────────────────────────────────────────
        //
        // Applied last so it covers everything the report carries, including
        // failure diagnostics (which may quote raw model output). Only the
        // count is logged, never the matched text.
        let mut redacted_fields = 0;
        for result in &mut results {
            redacted_fields += self.redact_result(result);
        }
        if let Some(opinion) = consolidated.as_mut() {
            redacted_fields += self.redact_verdict(&mut opinion.verdict);
        }
        if redacted_fields > 0 {
            info!(
                check_id = %check_id,
                fields = redacted_fields,
                "sensitive spans redacted from report text"
            );
        }

        CrossCheckReport {
            check_id,
            image_digest: request.digest().clone(),
            results,
            agreement,
            consolidated,
            needs_human_review,
            checked_at: Utc::now(),
        }
    }

    /// Run a single registered adapter by tag, with redaction.
    ///
    /// This is the one-model entry point for callers that want an individual
    /// opinion without the agreement protocol. The returned result went
    /// through the same containment and redaction as a cross-check result.
    ///
    /// # Errors
    ///
    /// `ConfigError` when no adapter is registered under `tag`. A registered
    /// adapter never produces an `Err` — its failures are contained in the
    /// returned result.
    pub async fn single_check(
        &self,
        tag: &ModelId,
        request: &AnalysisRequest,
    ) -> ConcordiaResult<VerdictResult> {
        let adapter = self
            .adapters
            .iter()
            .find(|a| a.tag() == tag)
            .ok_or_else(|| ConcordiaError::ConfigError {
                reason: format!("no adapter registered under tag '{}'", tag),
            })?;

        let mut result = self.run_adapter(adapter, request).await;
        let redacted_fields = self.redact_result(&mut result);
        if redacted_fields > 0 {
            debug!(model = %tag, fields = redacted_fields, "sensitive spans redacted");
        }
        Ok(result)
    }

    /// Invoke one adapter, applying the configured time bound.
    ///
    /// An expired bound is containment, not failure: the slot is filled with
    /// a transport ERROR result and the cross-check carries on.
    async fn run_adapter(
        &self,
        adapter: &ModelAdapter,
        request: &AnalysisRequest,
    ) -> VerdictResult {
        match self.config.adapter_timeout {
            Some(limit) => match timeout(limit, adapter.analyze(request)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        model = %adapter.tag(),
                        limit_ms = limit.as_millis() as u64,
                        "adapter exceeded time bound, contained as ERROR result"
                    );
                    VerdictResult::failure(
                        adapter.tag().clone(),
                        FailureKind::Transport,
                        format!("no reply within {}ms", limit.as_millis()),
                    )
                }
            },
            None => adapter.analyze(request).await,
        }
    }

    /// Compute status agreement over the usable results.
    ///
    /// Agreement is a property of statuses alone. Scores, summaries, and
    /// issue lists never participate.
    fn agreement_of(results: &[VerdictResult]) -> Agreement {
        let mut statuses: Vec<Status> = results.iter().filter_map(VerdictResult::status).collect();
        let usable = statuses.len();
        if usable < 2 {
            return Agreement::InsufficientData { usable };
        }
        statuses.sort();
        statuses.dedup();
        if statuses.len() == 1 {
            Agreement::Agreed {
                status: statuses[0],
            }
        } else {
            Agreement::Disagreed { statuses }
        }
    }

    /// Pick whose verdict the consolidated opinion carries.
    ///
    /// Only called in the `Agreed` state, so at least two usable results
    /// exist. A named preferred model without a usable result degrades to
    /// `Last` with a warning rather than dropping the consolidation.
    fn pick_consolidated(&self, results: &[VerdictResult]) -> Option<ConsolidatedOpinion> {
        let usable = |r: &&VerdictResult| !r.is_error();
        let picked = match &self.config.preferred_source {
            PreferredSource::First => results.iter().find(usable),
            PreferredSource::Last => results.iter().rev().find(usable),
            PreferredSource::Model(tag) => {
                let named = results.iter().find(|r| !r.is_error() && &r.source == tag);
                if named.is_none() {
                    warn!(
                        preferred = %tag,
                        "preferred source has no usable verdict, falling back to last"
                    );
                }
                named.or_else(|| results.iter().rev().find(usable))
            }
        };

        picked.and_then(|result| match &result.outcome {
            AnalysisOutcome::Verdict(verdict) => Some(ConsolidatedOpinion {
                source: result.source.clone(),
                verdict: verdict.clone(),
            }),
            AnalysisOutcome::Failed(_) => None,
        })
    }

    // ── Redaction walk ───────────────────────────────────────────────────────

    /// Redact one field in place; returns 1 if anything changed.
    fn redact_field(&self, field: &mut String) -> usize {
        let cleaned = self.redactor.redact(field);
        if cleaned != *field {
            *field = cleaned;
            1
        } else {
            0
        }
    }

    /// Redact every free-text field of a verdict; returns fields changed.
    fn redact_verdict(&self, verdict: &mut ModelVerdict) -> usize {
        let mut touched = self.redact_field(&mut verdict.summary);
        for issue in &mut verdict.issues {
            touched += self.redact_field(&mut issue.category);
            touched += self.redact_field(&mut issue.finding);
            if let Some(excerpt) = issue.excerpt.as_mut() {
                touched += self.redact_field(excerpt);
            }
            if let Some(citation) = issue.citation.as_mut() {
                touched += self.redact_field(citation);
            }
        }
        touched
    }

    /// Redact a result's text, whichever arm it holds. Failure diagnostics
    /// can quote raw model output, so they are covered too.
    fn redact_result(&self, result: &mut VerdictResult) -> usize {
        match &mut result.outcome {
            AnalysisOutcome::Verdict(verdict) => self.redact_verdict(verdict),
            AnalysisOutcome::Failed(failure) => self.redact_field(&mut failure.diagnostic),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
