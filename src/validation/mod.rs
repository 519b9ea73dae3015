//! Validation Engine
//!
//! Clean separation of solution checking from notebook handling and output.

pub mod engine;

pub use engine::{CheckResult, Validator, validate_solution};
