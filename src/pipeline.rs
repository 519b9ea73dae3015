//! Check Pipeline
//!
//! Load, extract, validate. Input problems abort with an error; everything
//! else ends in a [`Report`].

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::exercise::{Exercise, ExerciseRegistry};
use crate::notebook::{Document, load_document};
use crate::solution::{LastCodeCell, SolutionSelector, extract_solution};
use crate::validation::{CheckResult, Validator};

/// Outcome of one run, with the solution it was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub exercise: String,
    /// Extracted solution text; absent when no solution cell was found
    pub solution: Option<String>,
    pub result: CheckResult,
}

/// Check an already decoded notebook
pub fn check_notebook(
    document: &Document,
    exercise: &Exercise,
    selector: &dyn SolutionSelector,
) -> Result<Report> {
    let Some(solution) = extract_solution(document, selector) else {
        return Ok(Report {
            exercise: exercise.name.clone(),
            solution: None,
            result: CheckResult::NotFound,
        });
    };

    let mut validator = Validator::new(exercise)?;
    let result = validator.validate(&solution);

    Ok(Report {
        exercise: exercise.name.clone(),
        solution: Some(solution),
        result,
    })
}

/// Run the full pipeline for a configuration
pub fn run(config: &Config, registry: &ExerciseRegistry) -> Result<Report> {
    let exercise = registry
        .get_active_exercise()
        .context("No exercise is active")?;

    let document = load_document(&config.input_file)?;
    let report = check_notebook(&document, exercise, &LastCodeCell)?;
    log::info!(
        "checked {} against '{}': {:?}",
        config.input_file.display(),
        exercise.name,
        report.result
    );
    Ok(report)
}
