//! Documentation tree model for cogdocs.
//!
//! A [`Document`] is an ordered list of [`Group`]s ("cogs"), each holding an
//! ordered list of [`Command`]s. Values are immutable once loaded; the render
//! core only reads them.

pub mod document;
pub mod error;
pub mod load;

pub use document::{Command, Document, Group};
pub use error::{ModelError, Result};
pub use load::{load_document, load_optional};
