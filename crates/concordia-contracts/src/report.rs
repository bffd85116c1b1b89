//! Cross-check report types: the output of a dual-model run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::request::ImageDigest;
use crate::verdict::{ModelId, ModelVerdict, Status, VerdictResult};

/// Unique identifier for one cross-check run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckId(pub Uuid);

impl CheckId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the participating models reached the same categorical status.
///
/// Agreement is computed over statuses only. Scores, summaries, and issue
/// lists never participate — two models that both say "violation" agree even
/// when they cite different clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Agreement {
    /// Every usable result carries this status.
    Agreed { status: Status },
    /// Usable results carry conflicting statuses (sorted, deduplicated).
    Disagreed { statuses: Vec<Status> },
    /// Fewer than two usable results; no agreement can be computed.
    InsufficientData { usable: usize },
}

impl Agreement {
    /// True only for the `Agreed` state.
    pub fn is_agreed(&self) -> bool {
        matches!(self, Self::Agreed { .. })
    }

    /// Kebab-case display label for report rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agreed { .. } => "agreed",
            Self::Disagreed { .. } => "disagreed",
            Self::InsufficientData { .. } => "insufficient-data",
        }
    }
}

/// The single verdict a report surfaces when the models agree.
///
/// `source` records which model's wording was chosen so the provenance of
/// the displayed text is never ambiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedOpinion {
    /// Whose summary and issues were picked.
    pub source: ModelId,
    /// The picked verdict, redacted like everything else in the report.
    pub verdict: ModelVerdict,
}

/// The complete outcome of one dual-model cross-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossCheckReport {
    /// Unique id for this run.
    pub check_id: CheckId,
    /// Digest of the analyzed image.
    pub image_digest: ImageDigest,
    /// Per-model results, in the order the adapters were registered.
    pub results: Vec<VerdictResult>,
    /// Status-level agreement across usable results.
    pub agreement: Agreement,
    /// Present only when `agreement` is `Agreed`.
    pub consolidated: Option<ConsolidatedOpinion>,
    /// True when the models disagreed on status. Insufficient data does not
    /// raise the flag; one missing opinion is not a split opinion.
    pub needs_human_review: bool,
    /// When the cross-check completed.
    pub checked_at: DateTime<Utc>,
}

impl CrossCheckReport {
    /// Count of non-error results.
    pub fn usable_results(&self) -> usize {
        self.results.iter().filter(|r| !r.is_error()).count()
    }

    /// The result produced by `source`, if that model participated.
    pub fn result_for(&self, source: &ModelId) -> Option<&VerdictResult> {
        self.results.iter().find(|r| &r.source == source)
    }
}
