//! Consensus policy configuration schema and loading.
//!
//! A `ConsensusPolicy` is deserialized from TOML and yields the
//! `ConsensusConfig` the cross-checker runs under. Every key is optional —
//! an empty document is a valid policy that means "prefer the last adapter,
//! wait forever".

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use concordia_contracts::{ConcordiaError, ConcordiaResult, ConsensusConfig, PreferredSource};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PolicyDocument {
    #[serde(default)]
    consensus: ConsensusSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConsensusSection {
    preferred_source: Option<PreferredSource>,
    adapter_timeout_secs: Option<u64>,
}

/// Consensus policy loaded from a TOML document.
///
/// Construct via `from_toml_str` or `from_file`, then hand the config to
/// `CrossChecker::new`.
///
/// Example:
/// ```toml
/// [consensus]
/// preferred-source = "last"       # or "first"
/// adapter-timeout-secs = 20       # omit for no bounded wait
/// ```
///
/// A named model wins the consolidation with the inline-table form:
/// ```toml
/// preferred-source = { model = "gpt-4o" }
/// ```
#[derive(Debug, Clone)]
pub struct ConsensusPolicy {
    config: ConsensusConfig,
}

impl ConsensusPolicy {
    /// Parse `s` as TOML and build a `ConsensusPolicy`.
    ///
    /// Missing keys take defaults. Returns `ConcordiaError::ConfigError`
    /// when the TOML is malformed, does not match the expected schema, or
    /// sets a zero timeout.
    pub fn from_toml_str(s: &str) -> ConcordiaResult<Self> {
        let document: PolicyDocument =
            toml::from_str(s).map_err(|e| ConcordiaError::ConfigError {
                reason: format!("failed to parse consensus policy TOML: {}", e),
            })?;

        let section = document.consensus;
        let adapter_timeout = match section.adapter_timeout_secs {
            None => None,
            Some(0) => {
                return Err(ConcordiaError::ConfigError {
                    reason: "adapter-timeout-secs must be positive".to_string(),
                })
            }
            Some(secs) => Some(Duration::from_secs(secs)),
        };

        let config = ConsensusConfig {
            preferred_source: section.preferred_source.unwrap_or_default(),
            adapter_timeout,
        };
        debug!(?config, "consensus policy loaded");
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a TOML consensus policy.
    ///
    /// Returns `ConcordiaError::ConfigError` when the file cannot be read
    /// or its contents do not parse.
    pub fn from_file(path: &Path) -> ConcordiaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConcordiaError::ConfigError {
            reason: format!("failed to read policy file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Consume the policy, yielding the configuration.
    pub fn into_config(self) -> ConsensusConfig {
        self.config
    }
}
