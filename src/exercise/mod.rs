//! Exercises
//!
//! Named, ordered rule sets loaded from TOML.

pub mod registry;
pub mod schema;

pub use registry::{BUILTIN_EXERCISE, ExerciseRegistry};
pub use schema::{Exercise, Rule};
