//! Host-side owner of the document and its visibility state.

use std::sync::Arc;

use cogdoc_model::Document;

use crate::options::RenderOptions;
use crate::render::render;
use crate::view::{Toggle, ViewNode};
use crate::visibility::VisibilityState;

/// Where the page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No document observed yet.
    Uninitialized,
    /// A document is present and the visibility state is built.
    Ready,
    /// The observed document is absent.
    Missing,
}

/// One open documentation page.
///
/// The session is the only writer of its [`VisibilityState`]. It replaces the
/// state value on every change and initializes it once per distinct document
/// reference: observing the same `Arc` again keeps all toggles, a different
/// `Arc` starts from fresh defaults.
#[derive(Debug, Clone, Default)]
pub struct DocsSession {
    document: Option<Arc<Document>>,
    /// Document the current visibility state was built from.
    built_from: Option<Arc<Document>>,
    visibility: VisibilityState,
    options: RenderOptions,
    observed: bool,
}

impl DocsSession {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feed the current document (or its absence) into the session.
    pub fn observe(&mut self, document: Option<Arc<Document>>) -> Phase {
        self.observed = true;
        match document {
            Some(document) => {
                let same_source = self
                    .built_from
                    .as_ref()
                    .is_some_and(|built| Arc::ptr_eq(built, &document));
                if !same_source {
                    tracing::info!(
                        groups = document.groups().len(),
                        commands = document.command_count(),
                        "initializing documentation view"
                    );
                    self.visibility = VisibilityState::new().initialize(Some(&document));
                    self.built_from = Some(Arc::clone(&document));
                }
                self.document = Some(document);
            }
            None => {
                tracing::debug!("documentation missing");
                self.document = None;
            }
        }
        self.phase()
    }

    /// Apply a toggle. Returns true if the visibility state changed.
    pub fn dispatch(&mut self, toggle: &Toggle) -> bool {
        let next = match toggle {
            Toggle::Group(id) => self.visibility.toggle_group(id.as_str()),
            Toggle::Example(id) => self.visibility.toggle_example(id.as_str()),
        };
        let changed = !next.same_snapshot(&self.visibility);
        if changed {
            tracing::debug!(%toggle, revision = next.revision(), "toggled");
        }
        self.visibility = next;
        changed
    }

    pub fn render(&self) -> ViewNode {
        render(self.document.as_deref(), &self.visibility, &self.options)
    }

    pub fn phase(&self) -> Phase {
        match (&self.document, self.observed) {
            (Some(_), _) if self.visibility.is_initialized() => Phase::Ready,
            (_, false) => Phase::Uninitialized,
            _ => Phase::Missing,
        }
    }

    pub fn document(&self) -> Option<&Arc<Document>> {
        self.document.as_ref()
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }
}
