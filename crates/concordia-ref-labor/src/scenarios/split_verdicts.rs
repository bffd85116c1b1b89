//! Scenario 2: Split Verdicts
//!
//! The same scan, but the models read the probation clause differently:
//! one finds the contract compliant, the other calls the 80% probation
//! wage a violation of the 90% floor. The protocol never averages the
//! two away; it surfaces both verdicts verbatim and demands a human.
//!
//! Walk-through:
//!   1. Both models answer in the canonical schema
//!   2. One says OK, the other VIOLATION
//!   3. No consolidated opinion is formed
//!   4. `needs_human_review` comes back true

use concordia_contracts::ConcordiaResult;

use super::{adapter, checker_for, print_report_summary, print_result_panel};
use crate::prompt::assessment_request;
use crate::stubs::{sample_contract_image, StubModel};

const GEMINI_REPLY: &str = r#"{
  "status": "ok",
  "score": 82,
  "summary": "최저임금, 수습 감액, 위약금 관련 주요 조항이 적법한 범위에 있습니다.",
  "issues": [
    {
      "category": "수습기간",
      "severity": "low",
      "finding": "수습 급여 감액률의 표기가 모호하나 법정 한도 내로 판단됨"
    }
  ]
}"#;

const GPT_REPLY: &str = r#"{
  "status": "violation",
  "score": 45,
  "summary": "수습기간 급여를 80%로 정하고 있어 법정 하한인 90%에 미달합니다.",
  "issues": [
    {
      "category": "수습기간",
      "severity": "high",
      "finding": "수습 3개월간 최저임금의 80% 지급은 90% 하한 위반",
      "citation": "최저임금법 제5조제2항"
    }
  ]
}"#;

/// Run Scenario 2: the models disagree and the report says so.
pub async fn run_scenario() -> ConcordiaResult<()> {
    println!("=== Scenario 2: Split Verdicts ===");
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
    println!("  Disagreement is preserved verbatim: no averaging, no tiebreak.");
    println!();
    println!("Scenario 2 complete.");
    println!();
    Ok(())
}
