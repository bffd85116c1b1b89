//! Schema-based reply normalizer for the CONCORDIA runtime.
//!
//! `SchemaNormalizer` implements the `ResponseNormalizer` trait from
//! `concordia-core`. Normalization runs in two phases:
//!
//! 1. **Canonical** — the reply is validated against the canonical verdict
//!    schema using the `jsonschema` crate and decoded directly.
//! 2. **Tolerant** — near-miss replies are recovered field by field:
//!    known aliases are accepted (`verdict` for `status`, `reason` for
//!    `summary`, `details` for `issues`), scores arrive as strings or
//!    integral floats, and status labels may be Korean.
//!
//! Required fields stay strict in both phases: a reply without a
//! recognizable status or an in-range score is rejected with the precise
//! field named, never guessed at.

use serde_json::{Map, Value};
use tracing::debug;

use concordia_contracts::{
    ConcordiaError, ConcordiaResult, Issue, IssueSeverity, ModelVerdict, Status,
};
use concordia_core::traits::ResponseNormalizer;

use crate::schema::CANONICAL_VALIDATOR;

// Accepted field aliases, canonical name first.
const STATUS_ALIASES: &[&str] = &["status", "verdict"];
const SUMMARY_ALIASES: &[&str] = &["summary", "reason", "summary_comment"];
const ISSUES_ALIASES: &[&str] = &["issues", "details"];
const CATEGORY_ALIASES: &[&str] = &["category", "title"];
const FINDING_ALIASES: &[&str] = &["finding", "content"];

/// The CONCORDIA reply normalizer.
///
/// Stateless and deterministic; one instance can serve any number of
/// adapters.
pub struct SchemaNormalizer;

impl SchemaNormalizer {
    pub fn new() -> Self {
        Self
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Decode a reply that already passed canonical validation.
    fn from_canonical(payload: &Value) -> ConcordiaResult<ModelVerdict> {
        serde_json::from_value(payload.clone()).map_err(|e| ConcordiaError::MalformedPayload {
            detail: format!("canonical reply failed decoding: {e}"),
        })
    }

    /// Recover a near-miss reply field by field.
    fn from_aliases(payload: &Value) -> ConcordiaResult<ModelVerdict> {
        // A non-object root is missing every required field; report the
        // first one.
        let object = payload
            .as_object()
            .ok_or_else(|| schema_violation("status"))?;

        let status = first_present(object, STATUS_ALIASES)
            .and_then(Value::as_str)
            .and_then(Status::from_label)
            .ok_or_else(|| schema_violation("status"))?;

        let score = object
            .get("score")
            .and_then(coerce_score)
            .ok_or_else(|| schema_violation("score"))?;

        // Optional fields are best-effort: absent or mistyped degrades to
        // the default rather than rejecting an otherwise-usable verdict.
        let summary = first_present(object, SUMMARY_ALIASES)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let issues = match first_present(object, ISSUES_ALIASES) {
            None => vec![],
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| issue_from(entry, index))
                .collect::<ConcordiaResult<Vec<_>>>()?,
            Some(_) => return Err(schema_violation("issues")),
        };

        Ok(ModelVerdict {
            status,
            score,
            summary,
            issues,
        })
    }
}

impl Default for SchemaNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseNormalizer for SchemaNormalizer {
    /// Validate `raw` and rewrite it into the canonical verdict shape.
    ///
    /// # Errors
    ///
    /// - `MalformedPayload` — the reply (after fence stripping) is not JSON.
    /// - `SchemaViolation { field }` — a required field is missing,
    ///   unrecognizable, or out of range; `field` names the exact offender
    ///   (e.g. `"score"`, `"issues[1].severity"`).
    fn normalize(&self, raw: &str) -> ConcordiaResult<ModelVerdict> {
        let cleaned = strip_code_fence(raw);
        let payload: Value =
            serde_json::from_str(cleaned).map_err(|e| ConcordiaError::MalformedPayload {
                detail: format!("reply is not valid JSON: {e}"),
            })?;

        // ── Phase 1: canonical fast path ─────────────────────────────────────
        //
        // Schema validation counts an integral float (85.0) as an integer,
        // so a valid reply can still fail the strict decode; those recover
        // through the tolerant path instead of being rejected.
        if CANONICAL_VALIDATOR.is_valid(&payload) {
            debug!("reply already canonical");
            return Self::from_canonical(&payload).or_else(|_| Self::from_aliases(&payload));
        }

        // ── Phase 2: tolerant field recovery ─────────────────────────────────
        debug!("reply is not canonical, attempting field recovery");
        Self::from_aliases(&payload)
    }
}

/// Strip a surrounding markdown code fence, with or without a language tag.
///
/// Models wrap JSON in ```json fences often enough that rejecting fenced
/// replies would discard perfectly usable verdicts.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = match trimmed.strip_prefix("```") {
        Some(rest) => rest,
        None => return trimmed,
    };
    let body = match inner.split_once('\n') {
        Some((_lang, rest)) => rest,
        None => inner,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

fn schema_violation(field: impl Into<String>) -> ConcordiaError {
    ConcordiaError::SchemaViolation {
        field: field.into(),
    }
}

/// First value present under any of `names`, in priority order.
fn first_present<'v>(object: &'v Map<String, Value>, names: &[&str]) -> Option<&'v Value> {
    names.iter().find_map(|name| object.get(*name))
}

/// Coerce a score the way models actually send them: an integer, an
/// integral float (85.0), or a numeric string ("85"). Anything else, or
/// anything outside [0, 100], is rejected.
fn coerce_score(value: &Value) -> Option<u8> {
    let raw: i64 = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 {
                    return None;
                }
                f as i64
            }
        },
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    u8::try_from(raw).ok().filter(|score| *score <= 100)
}

/// Recover one issue entry, naming the exact field on failure.
fn issue_from(entry: &Value, index: usize) -> ConcordiaResult<Issue> {
    let object = entry
        .as_object()
        .ok_or_else(|| schema_violation(format!("issues[{index}]")))?;

    let category = first_present(object, CATEGORY_ALIASES)
        .and_then(Value::as_str)
        .ok_or_else(|| schema_violation(format!("issues[{index}].category")))?;

    let severity = object
        .get("severity")
        .and_then(Value::as_str)
        .and_then(IssueSeverity::from_label)
        .ok_or_else(|| schema_violation(format!("issues[{index}].severity")))?;

    // Finding is optional, like the verdict summary.
    let finding = first_present(object, FINDING_ALIASES)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(Issue {
        category: category.to_string(),
        severity,
        finding,
        excerpt: object
            .get("excerpt")
            .and_then(Value::as_str)
            .map(str::to_string),
        citation: object
            .get("citation")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────
