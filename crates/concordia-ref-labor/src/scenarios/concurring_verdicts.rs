//! Scenario 1: Concurring Verdicts
//!
//! Both models flag the same contract scan: an hourly wage below the 2025
//! minimum and a pre-set penalty clause. One replies in the canonical
//! schema, the other in the legacy verdict/reason shape with a Korean
//! status label, and both leak personal data into their free text.
//!
//! Walk-through:
//!   1. The same request fans out to both stub capabilities
//!   2. Both replies normalize to canonical verdicts despite the
//!      different shapes
//!   3. Both statuses are VIOLATION, so the models agree
//!   4. The consolidated opinion takes the last adapter's wording, per
//!      the shipped consensus policy
//!   5. The leaked resident id and phone number arrive masked

use concordia_contracts::ConcordiaResult;

use super::{adapter, checker_for, print_report_summary, print_result_panel};
use crate::prompt::assessment_request;
use crate::stubs::{sample_contract_image, StubModel};

// Canonical shape, with a resident id leaked into the summary and into an
// issue excerpt quoting the contract.
const GEMINI_REPLY: &str = r#"{
  "status": "violation",
  "score": 30,
  "summary": "근로자(900101-1234567)의 시급 9,860원은 2025년 최저시급 10,030원에 미달하며, 중도 퇴사 시 위약금 조항이 포함되어 있습니다.",
  "issues": [
    {
      "category": "최저임금",
      "severity": "high",
      "finding": "시급 9,860원으로 최저시급 10,030원 미달",
      "excerpt": "을(900101-1234567)의 시급은 9,860원으로 한다",
      "citation": "최저임금법 제6조"
    },
    {
      "category": "위약금 예정",
      "severity": "high",
      "finding": "중도 퇴사 시 위약금 500만원을 예정하는 조항",
      "citation": "근로기준법 제20조"
    }
  ]
}"#;

// Legacy verdict/reason shape with a Korean label and a leaked phone
// number, exercising the tolerant normalization path end to end.
const GPT_REPLY: &str = r#"{
  "verdict": "위험",
  "score": 35,
  "reason": "최저임금 미달과 위약금 예정 조항이 확인됩니다. 담당자 연락처 010-2345-6789로 기재되어 있으나 계약 하자와는 무관합니다."
}"#;

/// Run Scenario 1: both models concur on VIOLATION.
pub async fn run_scenario() -> ConcordiaResult<()> {
    println!("=== Scenario 1: Concurring Verdicts ===");
    println!();

    let checker = checker_for(vec![
        adapter("gemini-1.5-flash", StubModel::replying(GEMINI_REPLY)),
        adapter("gpt-4o", StubModel::replying(GPT_REPLY)),
    ])?;

    let request = assessment_request(sample_contract_image());
    println!("  Contract digest:  {}", request.digest());
    println!("  Models:           gemini-1.5-flash, gpt-4o");
    println!();

    let report = checker.cross_check(&request).await;

    for result in &report.results {
        print_result_panel(result);
        println!();
    }
    print_report_summary(&report);

    println!();
    println!("  Both replies leaked personal data; the report above is already masked.");
    println!();
    println!("Scenario 1 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use concordia_contracts::{Agreement, AnalysisOutcome, CrossCheckReport, Status};

    async fn run_report() -> CrossCheckReport {
        let checker = checker_for(vec![
            adapter("gemini-1.5-flash", StubModel::replying(GEMINI_REPLY)),
            adapter("gpt-4o", StubModel::replying(GPT_REPLY)),
        ])
        .unwrap();
        checker
            .cross_check(&assessment_request(sample_contract_image()))
            .await
    }

    /// Both replies normalize and the models agree on VIOLATION.
    #[tokio::test]
    async fn test_models_agree_on_violation() {
        let report = run_report().await;
        match &report.agreement {
            Agreement::Agreed { status } => assert_eq!(*status, Status::Violation),
            other => panic!("expected agreement, got {other:?}"),
        }
        assert!(!report.needs_human_review);
    }

    /// The consolidated opinion takes the last adapter's wording.
    #[tokio::test]
    async fn test_consolidation_prefers_last_source() {
        let report = run_report().await;
        let opinion = report.consolidated.expect("agreed report must consolidate");
        assert_eq!(opinion.source.0, "gpt-4o");
    }

    /// The leaked resident id never survives into the report.
    #[tokio::test]
    async fn test_resident_id_is_masked() {
        let report = run_report().await;
        let summary = report.results[0].summary();
        assert!(!summary.contains("900101-1234567"));
        assert!(summary.contains("******-*******"));
    }

    /// Issue excerpts quote the contract directly, so they are masked too.
    #[tokio::test]
    async fn test_issue_excerpt_is_masked() {
        let report = run_report().await;
        match &report.results[0].outcome {
            AnalysisOutcome::Verdict(verdict) => {
                let excerpt = verdict.issues[0].excerpt.as_deref().unwrap_or_default();
                assert!(!excerpt.contains("900101-1234567"));
                assert!(excerpt.contains("******-*******"));
            }
            other => panic!("expected a verdict, got {other:?}"),
        }
    }

    /// The leaked phone number is masked in the result and in the
    /// consolidated opinion built from it.
    #[tokio::test]
    async fn test_phone_number_is_masked() {
        let report = run_report().await;
        let summary = report.results[1].summary();
        assert!(!summary.contains("010-2345-6789"));
        assert!(summary.contains("010-****-****"));
        let opinion = report.consolidated.expect("agreed report must consolidate");
        assert!(!opinion.verdict.summary.contains("010-2345-6789"));
    }

    /// The legacy verdict/reason shape decodes to a usable verdict.
    #[tokio::test]
    async fn test_legacy_shape_normalizes() {
        let report = run_report().await;
        match report.results[1].status() {
            Some(status) => assert_eq!(status, Status::Violation),
            None => panic!("legacy reply should normalize, got an error result"),
        }
    }
}
