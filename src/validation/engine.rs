//! Validation Engine
//!
//! Runs the syntax check and the exercise rules against an extracted solution.
//! Evaluation is strictly ordered and stops at the first failure.

use anyhow::Result;
use serde::Serialize;

use crate::exercise::Exercise;
use crate::parser::PythonParser;

/// Terminal outcome of checking one notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckResult {
    /// Every rule passed
    Success,
    /// The notebook has no cell the selector accepts
    NotFound,
    /// The solution is not valid code
    ParseFailure { detail: String },
    /// A rule's pattern is absent from the solution
    CheckFailure { rule: String, message: String },
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success)
    }

    /// Name of the failing rule, if a rule failed
    pub fn failed_rule(&self) -> Option<&str> {
        match self {
            CheckResult::CheckFailure { rule, .. } => Some(rule),
            _ => None,
        }
    }
}

/// Validator bound to one exercise
#[derive(Debug)]
pub struct Validator<'a> {
    parser: PythonParser,
    exercise: &'a Exercise,
}

impl<'a> Validator<'a> {
    pub fn new(exercise: &'a Exercise) -> Result<Self> {
        Ok(Self {
            parser: PythonParser::new()?,
            exercise,
        })
    }

    pub fn exercise(&self) -> &Exercise {
        self.exercise
    }

    /// Check a solution: syntax first, then each rule in order
    pub fn validate(&mut self, source: &str) -> CheckResult {
        if let Err(err) = self.parser.check_syntax(source) {
            log::debug!("solution failed to parse: {err}");
            return CheckResult::ParseFailure {
                detail: err.to_string(),
            };
        }

        for rule in &self.exercise.rules {
            if !rule.matches(source) {
                log::debug!("rule '{}' failed", rule.name);
                return CheckResult::CheckFailure {
                    rule: rule.name.clone(),
                    message: rule.message.clone(),
                };
            }
            log::trace!("rule '{}' passed", rule.name);
        }

        CheckResult::Success
    }
}

/// Validate a single solution against an exercise
pub fn validate_solution(source: &str, exercise: &Exercise) -> Result<CheckResult> {
    Ok(Validator::new(exercise)?.validate(source))
}
