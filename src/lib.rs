//! Dialog Gate - Entity structuring and input validation for flow engines
//!
//! Turns the labeled spans an entity recognizer finds in a message into a
//! structured order record, and checks each message against the validation
//! rule its conversation flow state expects.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
