//! Labor-law reference demo scenarios.
//!
//! Each scenario wires real CONCORDIA components (normalizer, redactor,
//! consensus policy, cross-checker) to deterministic model stubs and walks
//! through one outcome of the cross-check protocol.

pub mod concurring_verdicts;
pub mod degraded_capability;
pub mod split_verdicts;

use std::sync::Arc;

use concordia_contracts::{
    Agreement, AnalysisOutcome, ConcordiaResult, CrossCheckReport, ModelId, VerdictResult,
};
use concordia_core::traits::ModelCapability;
use concordia_core::{CrossChecker, ModelAdapter};
use concordia_normalize::SchemaNormalizer;
use concordia_policy::ConsensusPolicy;
use concordia_redact::PatternRedactor;

/// The reference consensus policy shipped with this crate.
pub(crate) const CONSENSUS_POLICY: &str = include_str!("../../policies/consensus.toml");

/// Wrap a capability in an adapter with the production normalizer.
pub(crate) fn adapter(tag: &str, capability: impl ModelCapability + 'static) -> ModelAdapter {
    ModelAdapter::new(
        ModelId::new(tag),
        Arc::new(capability),
        Box::new(SchemaNormalizer::new()),
    )
}

/// Build a cross-checker over `adapters` with the production redactor and
/// the shipped consensus policy.
pub(crate) fn checker_for(adapters: Vec<ModelAdapter>) -> ConcordiaResult<CrossChecker> {
    let policy = ConsensusPolicy::from_toml_str(CONSENSUS_POLICY)?;
    Ok(CrossChecker::new(
        adapters,
        Box::new(PatternRedactor::new()),
        policy.into_config(),
    ))
}

/// Print one per-model result panel.
pub(crate) fn print_result_panel(result: &VerdictResult) {
    println!("  {}:", result.source);
    match &result.outcome {
        AnalysisOutcome::Verdict(verdict) => {
            println!(
                "    Status:   {} ({})",
                verdict.status.label(),
                verdict.status.korean_label()
            );
            println!("    Score:    {}", verdict.score);
            println!("    Summary:  {}", verdict.summary);
            for issue in &verdict.issues {
                println!(
                    "    Issue:    [{:?}] {}: {}",
                    issue.severity, issue.category, issue.finding
                );
            }
        }
        AnalysisOutcome::Failed(failure) => {
            println!("    Status:   ERROR");
            println!("    Kind:     {:?}", failure.kind);
            println!("    Detail:   {}", failure.diagnostic);
        }
    }
}

/// Print the agreement, consolidation, and review lines of a report.
pub(crate) fn print_report_summary(report: &CrossCheckReport) {
    match &report.agreement {
        Agreement::Agreed { status } => {
            println!("  Agreement:       agreed on {}", status.label());
        }
        Agreement::Disagreed { statuses } => {
            let labels: Vec<&str> = statuses.iter().map(|s| s.label()).collect();
            println!("  Agreement:       disagreed ({})", labels.join(" vs "));
        }
        Agreement::InsufficientData { usable } => {
            println!(
                "  Agreement:       insufficient data ({} usable verdict(s))",
                usable
            );
        }
    }

    match &report.consolidated {
        Some(opinion) => {
            println!("  Consolidated by: {}", opinion.source);
            println!("  Opinion:         {}", opinion.verdict.summary);
        }
        None => println!("  Consolidated:    none"),
    }

    println!(
        "  Human review:    {}",
        if report.needs_human_review {
            "REQUIRED"
        } else {
            "not required"
        }
    );
}
