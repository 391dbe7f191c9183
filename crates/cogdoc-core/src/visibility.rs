//! Per-node visibility state.
//!
//! [`VisibilityState`] holds two independent mappings, one for groups and one
//! for command example blocks. Both start unbuilt (`None`), which is distinct
//! from built-but-empty: a document with zero groups still initializes.
//!
//! The state is a value object. Every operation takes `&self` and returns a
//! new value; a mapping that changed is a fresh `Arc`, a mapping that did not
//! change is shared with the previous value. Hosts compare snapshots with
//! [`VisibilityState::same_snapshot`] to decide whether to re-render.
//!
//! # Inverted polarity
//!
//! The flag names are historical and read backwards from their visual effect,
//! and existing snapshots and test harnesses depend on it:
//!
//! - `group_expanded == true` HIDES the group's command list.
//! - `example_expanded == true` HIDES the example block, and it is the default.
//!
//! Do not "fix" the polarity here or in the renderer.

use std::collections::BTreeMap;
use std::sync::Arc;

use cogdoc_model::Document;

use crate::ids::{NodeId, find_collisions};

/// Initial value of every group flag (command list shown).
pub const GROUP_DEFAULT: bool = false;

/// Initial value of every example flag (example block hidden).
pub const EXAMPLE_DEFAULT: bool = true;

type FlagMap = Arc<BTreeMap<NodeId, bool>>;

#[derive(Debug, Clone, Default)]
pub struct VisibilityState {
    groups: Option<FlagMap>,
    examples: Option<FlagMap>,
    /// Incremented on every change to either mapping.
    revision: u64,
}

impl VisibilityState {
    /// Empty, uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build both mappings from `document` in one step.
    ///
    /// Either mapping that is already built is left untouched, so calling this
    /// again never clobbers toggles.
    #[must_use]
    pub fn initialize(&self, document: Option<&Document>) -> Self {
        if let Some(document) = document
            && !self.is_fully_initialized()
        {
            for collision in find_collisions(document) {
                tracing::warn!(
                    kind = collision.kind.label(),
                    id = %collision.id,
                    names = ?collision.names,
                    "derived id collision, nodes will share one toggle"
                );
            }
        }
        self.initialize_groups(document)
            .initialize_examples(document)
    }

    /// Build the group mapping (`id -> false`) if it is not built yet.
    #[must_use]
    pub fn initialize_groups(&self, document: Option<&Document>) -> Self {
        match document {
            Some(document) if self.groups.is_none() => {
                let map = document
                    .groups()
                    .iter()
                    .map(|group| (NodeId::for_group(group), GROUP_DEFAULT))
                    .collect();
                tracing::debug!(groups = document.groups().len(), "initialized group state");
                self.with_groups(Arc::new(map))
            }
            _ => self.clone(),
        }
    }

    /// Build the example mapping (`id -> true`) if it is not built yet.
    #[must_use]
    pub fn initialize_examples(&self, document: Option<&Document>) -> Self {
        match document {
            Some(document) if self.examples.is_none() => {
                let map = document
                    .commands()
                    .map(|command| (NodeId::for_command(command), EXAMPLE_DEFAULT))
                    .collect();
                tracing::debug!(
                    commands = document.command_count(),
                    "initialized example state"
                );
                self.with_examples(Arc::new(map))
            }
            _ => self.clone(),
        }
    }

    /// Flip one group flag. Unknown ids are a no-op.
    #[must_use]
    pub fn toggle_group(&self, id: &str) -> Self {
        match self.groups.as_ref().and_then(|map| flipped(map, id)) {
            Some(map) => self.with_groups(map),
            None => {
                tracing::trace!(id, "ignoring toggle for unknown group");
                self.clone()
            }
        }
    }

    /// Flip one example flag. Unknown ids are a no-op.
    #[must_use]
    pub fn toggle_example(&self, id: &str) -> Self {
        match self.examples.as_ref().and_then(|map| flipped(map, id)) {
            Some(map) => self.with_examples(map),
            None => {
                tracing::trace!(id, "ignoring toggle for unknown example");
                self.clone()
            }
        }
    }

    /// True once the group mapping is built. Rendering requires this.
    pub fn is_initialized(&self) -> bool {
        self.groups.is_some()
    }

    pub fn is_fully_initialized(&self) -> bool {
        self.groups.is_some() && self.examples.is_some()
    }

    pub fn group_expanded(&self, id: &str) -> Option<bool> {
        self.groups.as_ref()?.get(id).copied()
    }

    pub fn example_expanded(&self, id: &str) -> Option<bool> {
        self.examples.as_ref()?.get(id).copied()
    }

    /// The group mapping, `None` before initialization.
    pub fn groups(&self) -> Option<&BTreeMap<NodeId, bool>> {
        self.groups.as_deref()
    }

    /// The example mapping, `None` before initialization.
    pub fn examples(&self) -> Option<&BTreeMap<NodeId, bool>> {
        self.examples.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when both values share the very same mappings.
    pub fn same_snapshot(&self, other: &Self) -> bool {
        same_map(self.groups.as_ref(), other.groups.as_ref())
            && same_map(self.examples.as_ref(), other.examples.as_ref())
    }

    fn with_groups(&self, groups: FlagMap) -> Self {
        Self {
            groups: Some(groups),
            examples: self.examples.clone(),
            revision: self.revision + 1,
        }
    }

    fn with_examples(&self, examples: FlagMap) -> Self {
        Self {
            groups: self.groups.clone(),
            examples: Some(examples),
            revision: self.revision + 1,
        }
    }
}

/// Copy of `map` with `id` flipped, or `None` if `id` is absent.
fn flipped(map: &BTreeMap<NodeId, bool>, id: &str) -> Option<FlagMap> {
    let current = *map.get(id)?;
    let mut next = map.clone();
    next.insert(NodeId::from(id), !current);
    Some(Arc::new(next))
}

fn same_map(a: Option<&FlagMap>, b: Option<&FlagMap>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
