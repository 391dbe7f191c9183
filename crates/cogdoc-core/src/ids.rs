//! Derived node identifiers.
//!
//! Every group and command is identified by a string derived from its display
//! name: spaces become underscores and a kind-specific suffix is appended.
//! The same string is the render key and the visibility-state key, and it is
//! what external test harnesses look nodes up by, so the scheme is kept
//! exactly as the documentation site has always produced it.
//!
//! Only U+0020 is replaced. Names that differ in tabs, case or punctuation
//! produce different ids; names that normalize to the same string collide,
//! see [`find_collisions`].

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use cogdoc_model::{Command, Document, Group};
use serde::{Deserialize, Serialize};

/// Suffix appended to group ids.
pub const GROUP_SUFFIX: &str = "_expanded";

/// Suffix appended to command (example block) ids.
pub const EXAMPLE_SUFFIX: &str = "_example_expanded";

/// Replace every space in `name` with `_` and append `suffix`.
pub fn derive_id(name: &str, suffix: &str) -> String {
    let mut id = name.replace(' ', "_");
    id.push_str(suffix);
    id
}

/// A derived group or command identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Id of a group, e.g. `"My Group"` becomes `My_Group_expanded`.
    pub fn for_group(group: &Group) -> Self {
        Self(derive_id(&group.name, GROUP_SUFFIX))
    }

    /// Id of a command's example block, e.g. `add_example_expanded`.
    pub fn for_command(command: &Command) -> Self {
        Self(derive_id(&command.command, EXAMPLE_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Which mapping a collision happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Group,
    Command,
}

impl IdKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Command => "command",
        }
    }
}

/// Two or more nodes deriving the same id.
///
/// Colliding nodes share a single visibility entry: toggling any of them
/// toggles all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdCollision {
    pub kind: IdKind,
    pub id: NodeId,
    /// Original display names, in document order.
    pub names: Vec<String>,
}

/// Find every id shared by more than one group, or by more than one command.
///
/// Results are ordered groups first, then commands, each by id.
pub fn find_collisions(document: &Document) -> Vec<IdCollision> {
    let groups = document
        .groups()
        .iter()
        .map(|group| (NodeId::for_group(group), group.name.as_str()));
    let commands = document
        .commands()
        .map(|command| (NodeId::for_command(command), command.command.as_str()));

    let mut collisions = collect_duplicates(IdKind::Group, groups);
    collisions.extend(collect_duplicates(IdKind::Command, commands));
    collisions
}

fn collect_duplicates<'a>(
    kind: IdKind,
    entries: impl Iterator<Item = (NodeId, &'a str)>,
) -> Vec<IdCollision> {
    let mut by_id: BTreeMap<NodeId, Vec<String>> = BTreeMap::new();
    for (id, name) in entries {
        by_id.entry(id).or_default().push(name.to_string());
    }
    by_id
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(id, names)| IdCollision { kind, id, names })
        .collect()
}
