//! Notebook Documents
//!
//! Reading `.ipynb` files and decoding them into an ordered list of cells.
//! Only the shape needed for checking is kept; outputs and metadata are dropped.

pub mod loader;
pub mod schema;

pub use loader::{load_document, parse_document, read_notebook};
pub use schema::{Cell, CellType, Document};
