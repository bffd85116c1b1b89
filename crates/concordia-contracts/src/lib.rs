//! # concordia-contracts
//!
//! Shared vocabulary of types for the CONCORDIA cross-check pipeline.
//!
//! Every crate in the workspace speaks in these types: requests going into
//! a model capability ([`AnalysisRequest`]), normalized verdicts coming out
//! ([`VerdictResult`]), the consolidated cross-check outcome
//! ([`CrossCheckReport`]), and the consensus policy knobs
//! ([`ConsensusConfig`]).
//!
//! ## Design principles
//!
//! - **Results are a sum type.** A model invocation produces either a
//!   verdict or a contained failure ([`AnalysisOutcome`]); there is no
//!   half-populated state to misread.
//! - **Serializable end to end.** Reports are plain data — everything
//!   derives `Serialize`/`Deserialize` so a report can be logged, stored,
//!   or shipped to a UI without bespoke glue.
//! - **No image bytes in logs.** [`AnalysisRequest`] exposes a digest and
//!   hand-writes `Debug`; the pixels never leak into tracing output.

pub mod consensus;
pub mod error;
pub mod report;
pub mod request;
pub mod verdict;

pub use consensus::{ConsensusConfig, PreferredSource};
pub use error::{ConcordiaError, ConcordiaResult};
pub use report::{Agreement, CheckId, ConsolidatedOpinion, CrossCheckReport};
pub use request::{AnalysisRequest, ImageDigest, StructuredHint};
pub use verdict::{
    AnalysisFailure, AnalysisOutcome, FailureKind, Issue, IssueSeverity, ModelId, ModelVerdict,
    Status, VerdictResult,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_verdict(status: Status) -> ModelVerdict {
        ModelVerdict {
            status,
            score: 72,
            summary: "수습기간 감액 조항이 모호합니다.".to_string(),
            issues: vec![Issue {
                category: "수습기간".to_string(),
                severity: IssueSeverity::Medium,
                finding: "감액 기간이 명시되지 않음".to_string(),
                excerpt: None,
                citation: Some("최저임금법 제5조".to_string()),
            }],
        }
    }

    #[test]
    fn status_orders_by_severity() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Violation);
    }

    #[test]
    fn status_from_label_accepts_korean_and_english() {
        assert_eq!(Status::from_label("위험"), Some(Status::Violation));
        assert_eq!(Status::from_label("양호"), Some(Status::Ok));
        assert_eq!(Status::from_label("주의"), Some(Status::Warning));
        assert_eq!(Status::from_label("Violation"), Some(Status::Violation));
        assert_eq!(Status::from_label("  ok  "), Some(Status::Ok));
        assert_eq!(Status::from_label("WARNING"), Some(Status::Warning));
    }

    #[test]
    fn status_from_label_rejects_unknown_labels() {
        assert_eq!(Status::from_label("great"), None);
        assert_eq!(Status::from_label(""), None);
        // Near-misses must not be guessed at.
        assert_eq!(Status::from_label("위험함"), None);
    }

    #[test]
    fn status_serializes_as_lowercase_english() {
        assert_eq!(
            serde_json::to_string(&Status::Violation).unwrap(),
            "\"violation\""
        );
        let parsed: Status = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Status::Warning);
    }

    #[test]
    fn issue_severity_from_label_is_case_insensitive() {
        assert_eq!(IssueSeverity::from_label("HIGH"), Some(IssueSeverity::High));
        assert_eq!(IssueSeverity::from_label("low"), Some(IssueSeverity::Low));
        assert_eq!(IssueSeverity::from_label("severe"), None);
    }

    #[test]
    fn failure_kind_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FailureKind::MalformedPayload).unwrap(),
            "\"malformed-payload\""
        );
        assert_eq!(
            serde_json::to_string(&FailureKind::SchemaViolation).unwrap(),
            "\"schema-violation\""
        );
    }

    #[test]
    fn verdict_result_constructors_fill_the_right_arm() {
        let ok = VerdictResult::verdict(ModelId::new("m-a"), sample_verdict(Status::Warning));
        assert!(!ok.is_error());
        assert_eq!(ok.status(), Some(Status::Warning));
        assert_eq!(ok.status_label(), "WARNING");

        let err = VerdictResult::failure(
            ModelId::new("m-b"),
            FailureKind::Transport,
            "connection refused",
        );
        assert!(err.is_error());
        assert_eq!(err.status(), None);
        assert_eq!(err.status_label(), "ERROR");
        assert_eq!(err.summary(), "connection refused");
    }

    #[test]
    fn verdict_result_summary_prefers_the_verdict_text() {
        let result = VerdictResult::verdict(ModelId::new("m-a"), sample_verdict(Status::Ok));
        assert_eq!(result.summary(), "수습기간 감액 조항이 모호합니다.");
    }

    #[test]
    fn verdict_result_roundtrips_through_json() {
        let original = VerdictResult::verdict(ModelId::new("m-a"), sample_verdict(Status::Violation));
        let json = serde_json::to_string(&original).unwrap();
        let back: VerdictResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, original.source);
        assert_eq!(back.status(), Some(Status::Violation));
    }

    #[test]
    fn issue_optional_fields_are_omitted_when_absent() {
        let issue = Issue {
            category: "위약금".to_string(),
            severity: IssueSeverity::High,
            finding: "손해배상액 예정 조항".to_string(),
            excerpt: None,
            citation: None,
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(!json.contains("excerpt"));
        assert!(!json.contains("citation"));
    }

    /// Category and severity are the only required issue fields on the wire.
    #[test]
    fn issue_decodes_without_finding() {
        let issue: Issue =
            serde_json::from_str(r#"{"category": "수습기간", "severity": "low"}"#).unwrap();
        assert_eq!(issue.category, "수습기간");
        assert_eq!(issue.severity, IssueSeverity::Low);
        assert_eq!(issue.finding, "");
    }

    #[test]
    fn agreement_labels_and_predicates() {
        let agreed = Agreement::Agreed {
            status: Status::Violation,
        };
        assert!(agreed.is_agreed());
        assert_eq!(agreed.label(), "agreed");

        let split = Agreement::Disagreed {
            statuses: vec![Status::Ok, Status::Violation],
        };
        assert!(!split.is_agreed());
        assert_eq!(split.label(), "disagreed");

        let thin = Agreement::InsufficientData { usable: 1 };
        assert!(!thin.is_agreed());
        assert_eq!(thin.label(), "insufficient-data");
    }

    #[test]
    fn agreement_roundtrips_through_json() {
        let original = Agreement::Disagreed {
            statuses: vec![Status::Ok, Status::Violation],
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: Agreement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    /// A full report survives serialization — the UI shell consumes it as
    /// plain JSON.
    #[test]
    fn report_roundtrips_through_json() {
        let verdict = sample_verdict(Status::Violation);
        let original = CrossCheckReport {
            check_id: CheckId::new(),
            image_digest: ImageDigest::of(b"scan"),
            results: vec![
                VerdictResult::verdict(ModelId::new("m-a"), verdict.clone()),
                VerdictResult::verdict(ModelId::new("m-b"), sample_verdict(Status::Violation)),
            ],
            agreement: Agreement::Agreed {
                status: Status::Violation,
            },
            consolidated: Some(ConsolidatedOpinion {
                source: ModelId::new("m-b"),
                verdict,
            }),
            needs_human_review: false,
            checked_at: Utc::now(),
        };

        let json = serde_json::to_string(&original).unwrap();
        let back: CrossCheckReport = serde_json::from_str(&json).unwrap();

        assert_eq!(back.check_id, original.check_id);
        assert_eq!(back.image_digest, original.image_digest);
        assert_eq!(back.agreement, original.agreement);
        assert_eq!(back.results.len(), 2);
        assert_eq!(
            back.consolidated.map(|c| c.source),
            Some(ModelId::new("m-b"))
        );
        assert!(!back.needs_human_review);
    }

    #[test]
    fn image_digest_is_deterministic_hex_sha256() {
        let a = ImageDigest::of(b"contract scan bytes");
        let b = ImageDigest::of(b"contract scan bytes");
        let c = ImageDigest::of(b"different bytes");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.0.len(), 64);
        assert!(a.0.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn analysis_request_debug_never_contains_image_bytes() {
        let request = AnalysisRequest::new(
            b"\x89PNG fake pixel payload".to_vec(),
            "analyze this contract",
            StructuredHint::json(serde_json::json!({"type": "object"})),
        );
        let rendered = format!("{request:?}");
        assert!(rendered.contains("image_len"));
        assert!(rendered.contains("digest"));
        assert!(!rendered.contains("PNG fake pixel"));
    }

    #[test]
    fn check_ids_are_unique() {
        assert_ne!(CheckId::new(), CheckId::new());
    }

    #[test]
    fn preferred_source_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PreferredSource::First).unwrap(),
            "\"first\""
        );
        let named = PreferredSource::Model(ModelId::new("gpt-4o"));
        let json = serde_json::to_string(&named).unwrap();
        let back: PreferredSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, named);
    }

    #[test]
    fn consensus_config_defaults_prefer_the_last_adapter() {
        let config = ConsensusConfig::default();
        assert_eq!(config.preferred_source, PreferredSource::Last);
        assert_eq!(config.adapter_timeout, None);
    }

    #[test]
    fn report_counts_usable_results() {
        let report = CrossCheckReport {
            check_id: CheckId::new(),
            image_digest: ImageDigest::of(b"img"),
            results: vec![
                VerdictResult::verdict(ModelId::new("m-a"), sample_verdict(Status::Ok)),
                VerdictResult::failure(ModelId::new("m-b"), FailureKind::Transport, "quota"),
            ],
            agreement: Agreement::InsufficientData { usable: 1 },
            consolidated: None,
            needs_human_review: false,
            checked_at: Utc::now(),
        };
        assert_eq!(report.usable_results(), 1);
        assert!(report.result_for(&ModelId::new("m-b")).unwrap().is_error());
        assert!(report.result_for(&ModelId::new("m-c")).is_none());
    }

    #[test]
    fn error_display_carries_context() {
        let err = ConcordiaError::SchemaViolation {
            field: "score".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema violation: field 'score' is missing or mistyped"
        );

        let err = ConcordiaError::InsufficientAdapters { usable: 1 };
        assert!(err.to_string().contains("need at least 2"));
    }
}
