//! Solution Parser
//!
//! Syntax checking for extracted solutions. Only Python is supported; rule
//! checks never look at the tree, so the parser only has to say yes or no
//! and point at the first problem.

mod indent;
pub mod python;

pub use indent::check_indentation;
pub use python::{PythonParser, SyntaxError};
