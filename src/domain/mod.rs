//! Domain layer containing the understanding and gating logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (context snapshots, path resolution, IDs, timestamps)
//! - `entities` - Span pairing into structured records
//! - `validation` - Rule-driven input validation

pub mod entities;
pub mod foundation;
pub mod validation;
