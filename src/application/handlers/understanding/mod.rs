//! Understanding Command Handlers
//!
//! Handlers that sit between raw user text and flow-state transitions.
//!
//! ## Commands
//! - `StructureUtterance` - Turn recognized spans into a structured record, memoized per turn
//! - `ValidateInput` - Check a message against the rule its flow state expects

mod structure_utterance;
mod validate_input;

pub use structure_utterance::{
    StructureUtteranceCommand, StructureUtteranceHandler, StructureUtteranceResult,
};
pub use validate_input::{ValidateInputCommand, ValidateInputHandler, ValidateInputResult};
