//! The canonical verdict schema.
//!
//! This document serves double duty: the normalizer validates replies
//! against it, and callers embed it in the request's `StructuredHint` so
//! models that support structured output aim for the right shape from the
//! start.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

static CANONICAL_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "status": {
                "type": "string",
                "enum": ["ok", "warning", "violation"]
            },
            "score": {
                "type": "integer",
                "minimum": 0,
                "maximum": 100
            },
            "summary": { "type": "string" },
            "issues": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string" },
                        "severity": {
                            "type": "string",
                            "enum": ["low", "medium", "high"]
                        },
                        "finding": { "type": "string" },
                        "excerpt": { "type": "string" },
                        "citation": { "type": "string" }
                    },
                    "required": ["category", "severity"]
                }
            }
        },
        "required": ["status", "score"]
    })
});

pub(crate) static CANONICAL_VALIDATOR: Lazy<jsonschema::Validator> = Lazy::new(|| {
    jsonschema::validator_for(&CANONICAL_SCHEMA)
        .expect("canonical verdict schema is a valid JSON Schema document")
});

/// The JSON Schema a conformant model reply satisfies.
pub fn canonical_response_schema() -> &'static Value {
    &CANONICAL_SCHEMA
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn canonical_reply_validates() {
        let reply = json!({
            "status": "violation",
            "score": 35,
            "summary": "위약금 예정 조항이 있습니다",
            "issues": [{
                "category": "위약금",
                "severity": "high",
                "finding": "근로 미이행 시 위약금 500만원 조항",
                "excerpt": "제7조 ...",
                "citation": "근로기준법 제20조"
            }]
        });
        assert!(CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn minimal_reply_validates_without_optional_fields() {
        let reply = json!({ "status": "ok", "score": 95 });
        assert!(CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn missing_score_is_rejected() {
        let reply = json!({ "status": "ok" });
        assert!(!CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let reply = json!({ "status": "ok", "score": 150 });
        assert!(!CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn unknown_status_label_is_rejected() {
        let reply = json!({ "status": "great", "score": 90 });
        assert!(!CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn issue_without_severity_is_rejected() {
        let reply = json!({
            "status": "warning",
            "score": 60,
            "issues": [{ "category": "수습기간", "finding": "감액 기간 불명" }]
        });
        assert!(!CANONICAL_VALIDATOR.is_valid(&reply));
    }

    #[test]
    fn issue_without_finding_validates() {
        let reply = json!({
            "status": "warning",
            "score": 60,
            "issues": [{ "category": "수습기간", "severity": "low" }]
        });
        assert!(CANONICAL_VALIDATOR.is_valid(&reply));
    }
}
