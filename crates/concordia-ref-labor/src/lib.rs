//! # concordia-ref-labor
//!
//! Labor-law reference runtime for the CONCORDIA dual-model cross-check
//! system.
//!
//! Demonstrates three contract-review scenarios using stubbed models:
//!
//! 1. **Concurring Verdicts** — both models flag the same wage and penalty
//!    violations; the consolidated opinion is formed and leaked personal
//!    data is masked.
//! 2. **Split Verdicts** — the models read a probation clause differently;
//!    both verdicts are preserved verbatim and human review is demanded.
//! 3. **Degraded Capability** — an unreachable provider and a truncated
//!    reply are contained as ERROR results, plus single-model mode.
//!
//! All contract data is hardcoded and fictional. No external API calls
//! are made.

pub mod prompt;
pub mod scenarios;
pub mod stubs;
