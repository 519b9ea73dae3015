//! Input Errors
//!
//! Fatal failures while turning a file on disk into a notebook document.
//! Validation outcomes are never errors; see [`crate::validation::CheckResult`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failure that aborts the run before any checking happens
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file is missing, unreadable, or failed mid-read
    #[error("could not read --input-file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contents are not a notebook with a `cells` list
    #[error("could not parse --input-file as a notebook: {0}")]
    Decode(#[from] serde_json::Error),
}
