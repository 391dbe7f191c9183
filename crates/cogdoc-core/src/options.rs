//! Rendering options.

use serde::{Deserialize, Serialize};

/// How the "Open example" affordance behaves for commands without an example.
///
/// Two historical variants of the documentation page disagree here, so the
/// behavior is selectable instead of merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExampleAffordance {
    /// Render the affordance and its toggle for every command.
    #[default]
    AlwaysShow,
    /// Render the affordance hidden and without a toggle when the command has
    /// no example. The example block itself is still rendered.
    HideWhenMissing,
}

impl ExampleAffordance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlwaysShow => "always-show",
            Self::HideWhenMissing => "hide-when-missing",
        }
    }
}

/// Options controlling the rendered view tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub example_affordance: ExampleAffordance,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_example_affordance(mut self, affordance: ExampleAffordance) -> Self {
        self.example_affordance = affordance;
        self
    }
}
