//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod understanding;

pub use understanding::{
    StructureUtteranceCommand, StructureUtteranceHandler, StructureUtteranceResult,
    ValidateInputCommand, ValidateInputHandler, ValidateInputResult,
};
