//! Verdict types: the normalized output of one model invocation.
//!
//! A `VerdictResult` is either a successful `ModelVerdict` or a typed
//! `AnalysisFailure` — never both, never neither. The sum type forces every
//! caller to handle the error arm explicitly instead of relying on callers
//! to notice a sentinel status.

use serde::{Deserialize, Serialize};

/// Stable, human-readable identifier for a model capability.
///
/// Used across reports, consensus policy, and tracing output.
/// Example: ModelId("gemini-1.5-flash")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub String);

impl ModelId {
    /// Construct a model identifier from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three-valued outcome classification of a successful analysis.
///
/// Ordered by severity: `Ok < Warning < Violation`. The wire form is the
/// lowercase English label; the source locale's labels ("양호", "주의",
/// "위험") are accepted on input via [`Status::from_label`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No violation found.
    Ok,
    /// Findings that warrant attention but are not clear violations.
    Warning,
    /// At least one clear violation found.
    Violation,
}

impl Status {
    /// Parse a status label as models actually emit it.
    ///
    /// Accepts the canonical lowercase labels case-insensitively plus the
    /// Korean labels used by the deployed prompts. Returns `None` for
    /// anything outside the enumerated set — an unrecognized label is a
    /// schema violation, not a guess.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "양호" => Some(Self::Ok),
            "주의" => Some(Self::Warning),
            "위험" => Some(Self::Violation),
            other => match other.to_ascii_lowercase().as_str() {
                "ok" => Some(Self::Ok),
                "warning" => Some(Self::Warning),
                "violation" => Some(Self::Violation),
                _ => None,
            },
        }
    }

    /// Uppercase display label for report rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Violation => "VIOLATION",
        }
    }

    /// The source locale's label, for rendering parity with the original UI.
    pub fn korean_label(&self) -> &'static str {
        match self {
            Self::Ok => "양호",
            Self::Warning => "주의",
            Self::Violation => "위험",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-issue severity, ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
}

impl IssueSeverity {
    /// Parse a severity label case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// One finding within a verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Category label (e.g. "최저임금", "위약금 예정").
    pub category: String,
    /// How serious this finding is.
    pub severity: IssueSeverity,
    /// Free-text description of the finding. Defaults to empty when the
    /// model omitted it.
    #[serde(default)]
    pub finding: String,
    /// Quoted excerpt from the source contract, when the model provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Legal citation backing the finding, when the model provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// The success payload of one model invocation, in canonical shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelVerdict {
    /// The categorical outcome.
    pub status: Status,
    /// Integer score in [0, 100]; lower is worse.
    pub score: u8,
    /// One-sentence free-text assessment. Defaults to empty when the model
    /// omitted it.
    #[serde(default)]
    pub summary: String,
    /// Ordered findings, possibly empty.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Which contained error class produced an ERROR result.
///
/// Matches the containment taxonomy: every variant is absorbed at the
/// single-model adapter boundary and never propagates as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Reply was not parseable structured data.
    MalformedPayload,
    /// Reply parsed but did not conform to any recognized verdict shape.
    SchemaViolation,
    /// The capability could not be reached or did not answer in time.
    Transport,
}

/// A contained analysis failure: the ERROR arm of a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// The error class.
    pub kind: FailureKind,
    /// Human-readable diagnostic for the UI panel.
    pub diagnostic: String,
}

/// The two arms of a result. Exactly one is ever populated — the type makes
/// the invariant structural.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisOutcome {
    /// The model answered and its reply normalized successfully.
    Verdict(ModelVerdict),
    /// The invocation failed; the failure was contained at the adapter.
    Failed(AnalysisFailure),
}

/// The normalized output of one model invocation.
///
/// `source` is purely descriptive — it tags which capability produced the
/// outcome and confers no ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResult {
    /// Which model capability produced this result.
    pub source: ModelId,
    /// Success or contained failure.
    pub outcome: AnalysisOutcome,
}

impl VerdictResult {
    /// Wrap a successful verdict.
    pub fn verdict(source: ModelId, verdict: ModelVerdict) -> Self {
        Self {
            source,
            outcome: AnalysisOutcome::Verdict(verdict),
        }
    }

    /// Wrap a contained failure.
    pub fn failure(source: ModelId, kind: FailureKind, diagnostic: impl Into<String>) -> Self {
        Self {
            source,
            outcome: AnalysisOutcome::Failed(AnalysisFailure {
                kind,
                diagnostic: diagnostic.into(),
            }),
        }
    }

    /// The categorical status, or `None` for an ERROR result.
    pub fn status(&self) -> Option<Status> {
        match &self.outcome {
            AnalysisOutcome::Verdict(v) => Some(v.status),
            AnalysisOutcome::Failed(_) => None,
        }
    }

    /// Four-valued display label: OK / WARNING / VIOLATION / ERROR.
    pub fn status_label(&self) -> &'static str {
        match &self.outcome {
            AnalysisOutcome::Verdict(v) => v.status.label(),
            AnalysisOutcome::Failed(_) => "ERROR",
        }
    }

    /// The verdict summary, or the failure diagnostic for an ERROR result.
    ///
    /// This is the text a UI panel shows in either case.
    pub fn summary(&self) -> &str {
        match &self.outcome {
            AnalysisOutcome::Verdict(v) => &v.summary,
            AnalysisOutcome::Failed(f) => &f.diagnostic,
        }
    }

    /// True when the outcome is a contained failure.
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, AnalysisOutcome::Failed(_))
    }
}
