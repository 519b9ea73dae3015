//! Notebook Loader
//!
//! Reads a notebook from disk and decodes it. Both steps are all-or-nothing.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::Error as _;

use super::schema::Document;
use crate::error::InputError;

/// Read the full contents of a notebook file
pub fn read_notebook(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode notebook JSON into a [`Document`]
///
/// The top level must be an object with a `cells` list. A missing or
/// malformed list fails here rather than producing an empty document.
pub fn parse_document(text: &str) -> Result<Document, InputError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(InputError::Decode(serde_json::Error::custom(
            "top-level value is not an object",
        )));
    }

    let document = Document::deserialize(value)?;
    log::debug!(
        "decoded notebook (nbformat {}.{}) with {} cells",
        document.nbformat.unwrap_or_default(),
        document.nbformat_minor.unwrap_or_default(),
        document.cells.len()
    );
    Ok(document)
}

/// Read and decode a notebook file
pub fn load_document(path: &Path) -> Result<Document, InputError> {
    log::debug!("loading notebook {}", path.display());
    let text = read_notebook(path)?;
    parse_document(&text)
}
