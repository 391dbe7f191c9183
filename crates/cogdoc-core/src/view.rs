//! The rendered view tree.
//!
//! A [`ViewNode`] tree is what hosts consume: the HTML and outline emitters,
//! the desktop viewer, and test harnesses that locate nodes by key or test id.
//! Click handlers are represented as [`Toggle`] values; a host dispatches the
//! toggle back into its [`DocsSession`](crate::DocsSession) when the node is
//! activated.

use std::fmt;

use serde::Serialize;

use crate::ids::NodeId;

/// Stable `data-testid` values carried over from the documentation page.
pub mod test_id {
    pub const DOCUMENTATION: &str = "documentation";
    pub const TITLE: &str = "documentation-title";
    pub const ERROR: &str = "documentation-error";
    pub const GROUP: &str = "expandable-doc";
    pub const GROUP_HEADER: &str = "expand-clickable";
    pub const GROUP_NAME: &str = "documentation-cog-name";
    pub const GROUP_COMMANDS: &str = "cog-commands";
    pub const COMMAND: &str = "documentation-cog-command";
    pub const DESCRIPTION: &str = "documentation-cog-description";
    pub const EXAMPLE: &str = "expandable-example";
    pub const EXAMPLE_TOGGLE: &str = "documentation-cog-example";
    pub const EXAMPLE_BODY: &str = "example-commands";
    pub const USAGE: &str = "example-usage";
    pub const EXAMPLE_TEXT: &str = "example-text";
}

/// Style classes. `HIDDEN` is the only one with behavioral meaning.
pub mod class {
    pub const CONTENT: &str = "content";
    pub const DOCUMENTATION: &str = "documentation";
    pub const TITLE: &str = "documentation__title";
    pub const EXPANDABLE: &str = "documentation__expandable";
    pub const CARET: &str = "documentation__caret";
    pub const GROUP_NAME: &str = "documentation__cogname";
    pub const DIVIDER: &str = "documentation__divider";
    pub const HIDDEN: &str = "documentation__hidden";
}

/// Markup element of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Main,
    Div,
    H1,
    H2,
    Ul,
    Li,
    Code,
    /// Inline text run.
    Span,
    /// Direction indicator.
    Icon(Caret),
}

impl NodeKind {
    /// HTML tag for the element.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Div => "div",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::Ul => "ul",
            Self::Li => "li",
            Self::Code => "code",
            Self::Span | Self::Icon(_) => "span",
        }
    }
}

/// Direction of a caret indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Caret {
    Right,
    Down,
}

impl Caret {
    /// Caret for a visibility flag: `Right` when the flag is set.
    ///
    /// Because the flags are inverted (set means hidden) this points right
    /// for a hidden region and down for a shown one.
    pub fn for_flag(flag: bool) -> Self {
        if flag { Self::Right } else { Self::Down }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Right => "caret-right",
            Self::Down => "caret-down",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Self::Right => '▸',
            Self::Down => '▾',
        }
    }
}

/// Action attached to a clickable node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "target", content = "id", rename_all = "lowercase")]
pub enum Toggle {
    Group(NodeId),
    Example(NodeId),
}

impl Toggle {
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Group(id) | Self::Example(id) => id,
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(id) => write!(f, "group:{id}"),
            Self::Example(id) => write!(f, "example:{id}"),
        }
    }
}

/// One element of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    pub kind: NodeKind,
    /// Derived id of the group or command this node stands for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<&'static str>,
    /// Text content, rendered before the children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Toggle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            test_id: None,
            classes: Vec::new(),
            text: None,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn icon(caret: Caret) -> Self {
        Self::new(NodeKind::Icon(caret)).class(class::CARET)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Span).text(text)
    }

    #[must_use]
    pub fn key(mut self, key: NodeId) -> Self {
        self.key = Some(key);
        self
    }

    #[must_use]
    pub fn test_id(mut self, test_id: &'static str) -> Self {
        self.test_id = Some(test_id);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Add the hidden class when `hidden` is set.
    #[must_use]
    pub fn hidden_if(self, hidden: bool) -> Self {
        if hidden { self.class(class::HIDDEN) } else { self }
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn on_click(mut self, toggle: Toggle) -> Self {
        self.on_click = Some(toggle);
        self
    }

    #[must_use]
    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.classes.contains(&class::HIDDEN)
    }

    /// Depth-first, pre-order walk.
    pub fn walk(&self) -> impl Iterator<Item = &ViewNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node carrying `key`, in document order.
    pub fn find_by_key(&self, key: &str) -> Option<&ViewNode> {
        self.walk()
            .find(|node| node.key.as_ref().is_some_and(|k| k.as_str() == key))
    }

    /// Every node carrying `key`. More than one means a derived id collision.
    pub fn find_all_by_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ViewNode> {
        self.walk()
            .filter(move |node| node.key.as_ref().is_some_and(|k| k.as_str() == key))
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.walk().find(|node| node.test_id == Some(test_id))
    }

    pub fn find_all_by_test_id<'a>(
        &'a self,
        test_id: &'a str,
    ) -> impl Iterator<Item = &'a ViewNode> {
        self.walk().filter(move |node| node.test_id == Some(test_id))
    }

    /// Concatenated text of this subtree, caret glyphs included.
    pub fn inline_text(&self) -> String {
        let mut parts = Vec::new();
        for node in self.walk() {
            if let NodeKind::Icon(caret) = node.kind {
                parts.push(caret.glyph().to_string());
            }
            if let Some(text) = node.text.as_deref().filter(|t| !t.is_empty()) {
                parts.push(text.to_string());
            }
        }
        parts.join(" ")
    }
}
