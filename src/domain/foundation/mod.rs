//! Foundation module - Shared domain primitives.
//!
//! Contains the context snapshot and path resolver, identifiers,
//! timestamps, and error types used by the entity and validation modules.

mod context;
mod errors;
mod ids;
mod timestamp;

pub use context::{resolve_path, ContextSnapshot};
pub use errors::ContextError;
pub use ids::TurnId;
pub use timestamp::Timestamp;
