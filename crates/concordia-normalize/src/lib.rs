//! # concordia-normalize
//!
//! Reply validation and normalization for CONCORDIA.
//!
//! Raw model replies are untrusted strings. This crate turns them into
//! canonical [`concordia_contracts::ModelVerdict`] values or rejects them
//! with a precise, typed error — it is the only component allowed to
//! interpret raw model output.

pub mod engine;
pub mod schema;

pub use engine::SchemaNormalizer;
pub use schema::canonical_response_schema;
