//! Notebook Exercise Checker
//!
//! Validates the solution cell of a Jupyter notebook exercise.
//!
//! This library provides:
//! - Notebook loading and decoding
//! - Solution cell selection
//! - Python syntax checking
//! - Ordered, pattern-based exercise rules
//! - Configuration management

pub mod config;
pub mod error;
pub mod exercise;
pub mod notebook;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod solution;
pub mod validation;

// Re-exports for clean public API
pub use config::{Config, OutputFormat};
pub use error::InputError;
pub use exercise::{Exercise, ExerciseRegistry};
pub use notebook::{Cell, CellType, Document};
pub use pipeline::{Report, check_notebook};
pub use solution::{LastCodeCell, SolutionSelector, extract_solution};
pub use validation::{CheckResult, validate_solution};
