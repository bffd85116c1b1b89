//! Scenario 3: Degraded Capability
//!
//! One model cannot deliver a usable answer. Three sub-cases:
//!   A. the provider is unreachable (quota exhausted mid-billing-cycle)
//!   B. the reply is cut off mid-JSON by a token limit
//!   C. single-model mode: asking the surviving model alone, by tag
//!
//! In A and B the failure is contained as an ERROR result: the report
//! stays renderable, the healthy verdict is preserved, and with only one
//! usable verdict the agreement is insufficient-data. One opinion is not
//! a disagreement, so no human review is demanded. C shows the one-model
//! escape hatch that skips the cross-check protocol entirely.

use concordia_contracts::{ConcordiaResult, ModelId};

use super::{adapter, checker_for, print_report_summary, print_result_panel};
use crate::prompt::assessment_request;
use crate::stubs::{sample_contract_image, FailingModel, StubModel, TruncatedModel};

const GPT_REPLY: &str = r#"{
  "status": "warning",
  "score": 64,
  "summary": "근로시간 조항은 적법하나 수습 감액률 표기가 불명확하여 확인이 필요합니다.",
  "issues": [
    {
      "category": "수습기간",
      "severity": "medium",
      "finding": "감액률이 본문과 별표에서 서로 다르게 표기됨"
    }
  ]
}"#;

/// Run Scenario 3: failures are contained, never propagated.
pub async fn run_scenario() -> ConcordiaResult<()> {
    println!("=== Scenario 3: Degraded Capability ===");
    println!();

    let request = assessment_request(sample_contract_image());
    println!("  Contract digest:  {}", request.digest());
    println!();

    // ── A. Unreachable provider ─────────────────────────────────────

    println!("  --- A: provider unreachable ---");
    println!();

    let checker = checker_for(vec![
        adapter(
            "gemini-1.5-flash",
            FailingModel::new("quota exceeded for project, retry after 2026-09-01"),
        ),
        adapter("gpt-4o", StubModel::replying(GPT_REPLY)),
    ])?;

    let report = checker.cross_check(&request).await;
    for result in &report.results {
        print_result_panel(result);
        println!();
    }
    print_report_summary(&report);
    println!();

    // ── B. Reply truncated mid-JSON ─────────────────────────────────

    println!("  --- B: reply truncated by a token limit ---");
    println!();

    let checker = checker_for(vec![
        adapter("gemini-1.5-flash", TruncatedModel::cutting(GPT_REPLY, 48)),
        adapter("gpt-4o", StubModel::replying(GPT_REPLY)),
    ])?;

    let report = checker.cross_check(&request).await;
    for result in &report.results {
        print_result_panel(result);
        println!();
    }
    print_report_summary(&report);
    println!();

    // ── C. Single-model mode ────────────────────────────────────────

    println!("  --- C: single-model check on the surviving model ---");
    println!();

    let result = checker
        .single_check(&ModelId::new("gpt-4o"), &request)
        .await?;
    print_result_panel(&result);

    println!();
    println!("  A lone verdict never claims agreement; it is one opinion, labeled as such.");
    println!();
    println!("Scenario 3 complete.");
    println!();
    Ok(())
}
