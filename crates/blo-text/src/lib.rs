//! blo-text: human-editable projections of a pane tree.
//!
//! Every projection goes through [`SparsePane`], which drops attributes that
//! still hold their default value. The rectangle is the only attribute that is
//! always written.

mod error;
pub mod json;
mod sparse;
pub mod xml;

pub use error::{ProjectError, Result};
pub use sparse::{SparseAlpha, SparsePane, SparseRect};
pub use xml::XmlOptions;
