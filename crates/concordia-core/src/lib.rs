//! # concordia-core
//!
//! The failure-containing cross-check runtime for CONCORDIA.
//!
//! This crate provides:
//! - The three core traits (`ModelCapability`, `ResponseNormalizer`, `TextRedactor`)
//! - The `ModelAdapter` that contains one model's failures
//! - The `CrossChecker` that runs the dual-model agreement protocol
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concordia_core::{
//!     CrossChecker, ModelAdapter,
//!     traits::{ModelCapability, ResponseNormalizer, TextRedactor},
//! };
//! ```

pub mod adapter;
pub mod checker;
pub mod traits;

pub use adapter::ModelAdapter;
pub use checker::CrossChecker;
