//! Consensus policy types: how a cross-check turns two verdicts into one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::verdict::ModelId;

/// Which model's wording wins when the models agree.
///
/// Agreement is computed on statuses, but the consolidated opinion needs one
/// concrete summary and issue list. This setting picks whose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredSource {
    /// The first registered adapter's verdict.
    First,
    /// The last registered adapter's verdict.
    Last,
    /// The named adapter's verdict; falls back to `Last` (with a warning)
    /// when no usable result carries this tag.
    Model(ModelId),
}

impl Default for PreferredSource {
    fn default() -> Self {
        Self::Last
    }
}

/// Tunable knobs for one cross-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusConfig {
    /// Whose wording the consolidated opinion uses on agreement.
    pub preferred_source: PreferredSource,
    /// Upper bound on one adapter invocation. `None` means wait forever;
    /// an expired bound becomes a transport-kind ERROR result, never a fault.
    pub adapter_timeout: Option<Duration>,
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            preferred_source: PreferredSource::default(),
            adapter_timeout: None,
        }
    }
}
