//! cogdocs viewer - desktop documentation browser.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message, Update, View).
//! The collapsible tree itself lives in `cogdoc-core`; this crate turns its
//! [`ViewNode`](cogdoc_core::ViewNode) output into widgets and feeds clicks
//! back as toggles.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
