//! The fixed labor-law assessment prompt and request builder.

use concordia_contracts::{AnalysisRequest, StructuredHint};
use concordia_normalize::canonical_response_schema;

/// The assessment instruction sent to every model capability.
///
/// Written in Korean to match the contracts being analyzed. The three
/// checks mirror the guidance the service was built around:
///
/// 1. minimum wage — the 2025 hourly rate of 10,030 KRW
/// 2. probation pay reduction — at least 90% of minimum wage, only within
///    the first 3 months, only on contracts of a year or more
/// 3. penalty clauses — pre-set damages for quitting are void under
///    Labor Standards Act article 20
pub const ASSESSMENT_PROMPT: &str = "\
당신은 대한민국 노동법 전문가입니다. 첨부된 근로계약서 이미지를 분석해 주세요.

다음 세 가지를 반드시 확인하세요:
1. 최저임금 준수: 2025년 최저시급은 10,030원입니다. 시급·일급·월급 환산액이 이에 미달하는지 확인하세요.
2. 수습기간 급여 감액: 1년 이상 계약에서만, 3개월 이내에서만, 최저임금의 90% 이상만 허용됩니다.
3. 위약금 예정 금지: 근로기준법 제20조에 따라 퇴사 시 위약금이나 손해배상액을 미리 정하는 조항은 무효입니다.

개인정보(주민등록번호, 전화번호)는 응답에 포함하지 마세요.

반드시 아래 JSON 형식으로만 답변하세요:
{
  \"status\": \"ok\" | \"warning\" | \"violation\",
  \"score\": 0부터 100 사이의 정수 (낮을수록 위험),
  \"summary\": \"한 문장 평가\",
  \"issues\": [
    { \"category\": \"항목\", \"severity\": \"low\" | \"medium\" | \"high\", \"finding\": \"발견 내용\" }
  ]
}";

/// Build the canonical analysis request for one contract scan.
///
/// Every adapter in a cross-check receives this exact request: the fixed
/// prompt plus a structured-output hint carrying the canonical schema, so
/// capabilities that support constrained decoding aim for the right shape
/// from the first token.
pub fn assessment_request(image: Vec<u8>) -> AnalysisRequest {
    AnalysisRequest::new(
        image,
        ASSESSMENT_PROMPT,
        StructuredHint::json(canonical_response_schema().clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_the_prompt_and_schema_hint() {
        let request = assessment_request(b"scan".to_vec());

        assert_eq!(request.prompt(), ASSESSMENT_PROMPT);
        assert_eq!(request.hint().mime_type, "application/json");
        assert_eq!(request.hint().json_schema, *canonical_response_schema());
        assert_eq!(request.digest().0.len(), 64);
    }
}
