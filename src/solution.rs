//! Solution Extraction
//!
//! Picks the cell holding the student's answer. The selection heuristic sits
//! behind [`SolutionSelector`] so other strategies can be dropped in without
//! touching validation.

use crate::notebook::{Cell, Document};

/// Strategy for locating the solution among a notebook's cells
pub trait SolutionSelector {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Return the solution text, or `None` if no cell qualifies
    fn select(&self, cells: &[Cell]) -> Option<String>;
}

/// Selects the last code cell in document order.
///
/// Earlier code cells are treated as scratch work or the problem template.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastCodeCell;

impl SolutionSelector for LastCodeCell {
    fn name(&self) -> &'static str {
        "last-code-cell"
    }

    fn select(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().rev().find(|c| c.is_code()).map(Cell::text)
    }
}

/// Extract the solution text from a document
pub fn extract_solution(document: &Document, selector: &dyn SolutionSelector) -> Option<String> {
    let solution = selector.select(&document.cells);
    match &solution {
        Some(text) => log::debug!(
            "{} selected a solution of {} bytes",
            selector.name(),
            text.len()
        ),
        None => log::debug!(
            "{} found no solution among {} cells",
            selector.name(),
            document.cells.len()
        ),
    }
    solution
}
