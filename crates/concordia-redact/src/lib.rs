//! # concordia-redact
//!
//! PII masking for CONCORDIA report text.
//!
//! Contract scans carry resident registration numbers and phone numbers,
//! and models happily quote them back. This crate supplies the
//! [`PatternRedactor`] the cross-checker runs over every free-text field
//! before a report reaches any caller.

pub mod engine;

pub use engine::PatternRedactor;
