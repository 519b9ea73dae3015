//! Notebook Schema Types
//!
//! Plain data decoded from nbformat JSON. No validation of cell contents
//! happens here.

use serde::{Deserialize, Deserializer};

/// A decoded notebook
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Document {
    /// Cells in document order; a missing list is a decode error
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub nbformat: Option<u32>,
    #[serde(default)]
    pub nbformat_minor: Option<u32>,
}

/// One notebook cell
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Cell {
    pub cell_type: CellType,
    /// Source fragments, concatenated verbatim to form the cell text
    #[serde(default, deserialize_with = "source_fragments")]
    pub source: Vec<String>,
}

/// Cell type tag
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    Raw,
    /// Any tag this tool does not know about
    #[serde(other)]
    Other,
}

impl Document {
    /// Build a document from cells (mostly useful for tests and embedding)
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            nbformat: None,
            nbformat_minor: None,
        }
    }

    /// Number of code cells in the document
    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }
}

impl Cell {
    pub fn new(cell_type: CellType, source: Vec<String>) -> Self {
        Self { cell_type, source }
    }

    /// Shorthand for a code cell built from string fragments
    pub fn code<S: Into<String>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(CellType::Code, fragments.into_iter().map(Into::into).collect())
    }

    /// Shorthand for a markdown cell built from string fragments
    pub fn markdown<S: Into<String>>(fragments: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            CellType::Markdown,
            fragments.into_iter().map(Into::into).collect(),
        )
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    /// The cell text: fragments joined with no separator
    pub fn text(&self) -> String {
        self.source.concat()
    }
}

/// nbformat allows `source` as either a list of lines or a single string.
fn source_fragments<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSource {
        Lines(Vec<String>),
        Text(String),
    }

    Ok(match RawSource::deserialize(deserializer)? {
        RawSource::Lines(lines) => lines,
        RawSource::Text(text) => vec![text],
    })
}
