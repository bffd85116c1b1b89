//! # concordia-policy
//!
//! TOML-driven consensus policy for the CONCORDIA cross-checker.
//!
//! ## Overview
//!
//! This crate provides [`ConsensusPolicy`], which loads a
//! [`ConsensusConfig`](concordia_contracts::ConsensusConfig) from a TOML
//! document. The policy decides whose wording the consolidated opinion
//! carries when the models agree, and how long one adapter may run.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use concordia_policy::ConsensusPolicy;
//!
//! let policy = ConsensusPolicy::from_file(Path::new("policies/consensus.toml"))?;
//! // Pass `policy.into_config()` to `concordia_core::CrossChecker::new(...)`.
//! ```
//!
//! ## Defaults
//!
//! Every key is optional. A missing `preferred-source` means the last
//! registered adapter's wording wins; a missing `adapter-timeout-secs`
//! means no bounded wait.

pub mod config;

pub use config::ConsensusPolicy;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use concordia_contracts::{ConcordiaError, ModelId, PreferredSource};

    use crate::ConsensusPolicy;

    // ── 1. defaults ───────────────────────────────────────────────────────────

    /// An empty document is a valid policy carrying the defaults.
    #[test]
    fn test_empty_document_yields_defaults() {
        let policy = ConsensusPolicy::from_toml_str("").unwrap();

        assert_eq!(policy.config().preferred_source, PreferredSource::Last);
        assert_eq!(policy.config().adapter_timeout, None);
    }

    /// An empty [consensus] section also carries the defaults.
    #[test]
    fn test_empty_section_yields_defaults() {
        let policy = ConsensusPolicy::from_toml_str("[consensus]\n").unwrap();

        assert_eq!(policy.config().preferred_source, PreferredSource::Last);
        assert_eq!(policy.config().adapter_timeout, None);
    }

    // ── 2. preferred source ───────────────────────────────────────────────────

    #[test]
    fn test_first_and_last_preferred_sources() {
        let first = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            preferred-source = "first"
        "#,
        )
        .unwrap();
        assert_eq!(first.config().preferred_source, PreferredSource::First);

        let last = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            preferred-source = "last"
        "#,
        )
        .unwrap();
        assert_eq!(last.config().preferred_source, PreferredSource::Last);
    }

    /// The inline-table form names a specific model.
    #[test]
    fn test_named_model_preferred_source() {
        let policy = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            preferred-source = { model = "gpt-4o" }
        "#,
        )
        .unwrap();

        assert_eq!(
            policy.config().preferred_source,
            PreferredSource::Model(ModelId::new("gpt-4o"))
        );
    }

    // ── 3. adapter timeout ────────────────────────────────────────────────────

    #[test]
    fn test_timeout_converts_to_duration() {
        let policy = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            adapter-timeout-secs = 20
        "#,
        )
        .unwrap();

        assert_eq!(
            policy.config().adapter_timeout,
            Some(Duration::from_secs(20))
        );
    }

    /// A zero timeout would fail every adapter instantly; reject it at load
    /// time where the operator can see it.
    #[test]
    fn test_zero_timeout_is_a_config_error() {
        let result = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            adapter-timeout-secs = 0
        "#,
        );

        match result {
            Err(ConcordiaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("must be positive"),
                    "unexpected reason: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 4. TOML parse errors ──────────────────────────────────────────────────

    /// Malformed TOML must produce a `ConcordiaError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        let result = ConsensusPolicy::from_toml_str(bad_toml);

        match result {
            Err(ConcordiaError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse consensus policy TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// An unrecognized preferred-source label is a schema mismatch, not a
    /// silent default.
    #[test]
    fn test_unknown_preferred_source_label_is_rejected() {
        let result = ConsensusPolicy::from_toml_str(
            r#"
            [consensus]
            preferred-source = "newest"
        "#,
        );

        assert!(matches!(
            result,
            Err(ConcordiaError::ConfigError { .. })
        ));
    }
}
