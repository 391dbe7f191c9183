//! CLI library components for cogdocs.

pub mod commands;
pub mod logging;
