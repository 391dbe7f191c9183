//! Document, group and command types.

use serde::{Deserialize, Serialize};

/// The full documentation set: an ordered list of groups.
///
/// Serialized as a bare JSON array, matching the `docs.json` files the
/// documentation site ships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    groups: Vec<Group>,
}

impl Document {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Groups in input order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every command of every group, in document order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.groups.iter().flat_map(|group| group.commands.iter())
    }

    pub fn command_count(&self) -> usize {
        self.groups.iter().map(|group| group.commands.len()).sum()
    }
}

impl From<Vec<Group>> for Document {
    fn from(groups: Vec<Group>) -> Self {
        Self::new(groups)
    }
}

/// A named collection of related commands (a "cog").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub commands: Vec<Command>,
}

impl Group {
    pub fn new(name: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }
}

/// A single documented command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Invocation token, also the source of the command's identity.
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl Command {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            parameters: Vec::new(),
            example: None,
            usage: None,
        }
    }

    #[must_use]
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// The invocation line: the command token followed by each parameter in
    /// brackets, e.g. `add [a] [b]`.
    pub fn invocation(&self) -> String {
        let mut line = self.command.clone();
        for parameter in &self.parameters {
            line.push_str(" [");
            line.push_str(parameter);
            line.push(']');
        }
        line
    }
}
