//! Document → view tree.
//!
//! Rendering is a pure function of the document, the visibility state and
//! the options. Visibility flags are inverted (see [`crate::visibility`]):
//! a set flag renders the region with the hidden class and a right caret.

use cogdoc_model::{Command, Document, Group};

use crate::ids::NodeId;
use crate::options::{ExampleAffordance, RenderOptions};
use crate::view::{Caret, NodeKind, Toggle, ViewNode, class, test_id};
use crate::visibility::{EXAMPLE_DEFAULT, GROUP_DEFAULT, VisibilityState};

/// Heading of the ready page.
pub const TITLE: &str = "LIST OF COGS";

/// Text of the error view.
pub const NOT_FOUND: &str = "Documentation can not be found";

/// Label of the example affordance.
pub const OPEN_EXAMPLE: &str = "Open example";

/// Render the documentation page.
///
/// An absent document, or a state whose group mapping is not built yet,
/// renders the error view and nothing else.
pub fn render(
    document: Option<&Document>,
    visibility: &VisibilityState,
    options: &RenderOptions,
) -> ViewNode {
    let body: Vec<ViewNode> = match document {
        Some(document) if visibility.is_initialized() => {
            let groups = document
                .groups()
                .iter()
                .map(|group| render_group(group, visibility, options));
            std::iter::once(title()).chain(groups).collect()
        }
        _ => {
            tracing::debug!(
                document_present = document.is_some(),
                "rendering documentation error view"
            );
            vec![not_found()]
        }
    };

    ViewNode::new(NodeKind::Main).class(class::CONTENT).child(
        ViewNode::new(NodeKind::Div)
            .class(class::DOCUMENTATION)
            .test_id(test_id::DOCUMENTATION)
            .children(body),
    )
}

fn title() -> ViewNode {
    ViewNode::new(NodeKind::H1)
        .class(class::TITLE)
        .test_id(test_id::TITLE)
        .text(TITLE)
}

fn not_found() -> ViewNode {
    ViewNode::new(NodeKind::Div)
        .class(class::TITLE)
        .test_id(test_id::ERROR)
        .text(NOT_FOUND)
}

fn render_group(group: &Group, visibility: &VisibilityState, options: &RenderOptions) -> ViewNode {
    let id = NodeId::for_group(group);
    // Set means the command list is HIDDEN.
    let flag = visibility.group_expanded(id.as_str()).unwrap_or(GROUP_DEFAULT);

    let header = ViewNode::new(NodeKind::Div)
        .class(class::EXPANDABLE)
        .test_id(test_id::GROUP_HEADER)
        .on_click(Toggle::Group(id.clone()))
        .child(ViewNode::icon(Caret::for_flag(flag)))
        .child(
            ViewNode::new(NodeKind::H2)
                .class(class::GROUP_NAME)
                .test_id(test_id::GROUP_NAME)
                .text(&group.name),
        )
        .child(ViewNode::new(NodeKind::Div).class(class::DIVIDER));

    let commands = ViewNode::new(NodeKind::Ul)
        .test_id(test_id::GROUP_COMMANDS)
        .hidden_if(flag)
        .children(
            group
                .commands
                .iter()
                .map(|command| render_command(command, visibility, options)),
        );

    ViewNode::new(NodeKind::Div)
        .key(id)
        .test_id(test_id::GROUP)
        .child(header)
        .child(commands)
}

fn render_command(
    command: &Command,
    visibility: &VisibilityState,
    options: &RenderOptions,
) -> ViewNode {
    ViewNode::new(NodeKind::Li)
        .child(
            ViewNode::new(NodeKind::Code)
                .test_id(test_id::COMMAND)
                .text(command.invocation()),
        )
        .child(
            ViewNode::new(NodeKind::Div)
                .test_id(test_id::DESCRIPTION)
                .text(&command.description),
        )
        .child(render_example(command, visibility, options))
}

fn render_example(
    command: &Command,
    visibility: &VisibilityState,
    options: &RenderOptions,
) -> ViewNode {
    let id = NodeId::for_command(command);
    // Set means the example block is HIDDEN, and that is the default.
    let flag = visibility
        .example_expanded(id.as_str())
        .unwrap_or(EXAMPLE_DEFAULT);

    let mut affordance = ViewNode::new(NodeKind::Div)
        .test_id(test_id::EXAMPLE_TOGGLE)
        .child(ViewNode::icon(Caret::for_flag(flag)))
        .child(ViewNode::span(OPEN_EXAMPLE));
    let inert = command.example.is_none()
        && options.example_affordance == ExampleAffordance::HideWhenMissing;
    affordance = if inert {
        affordance.hidden_if(true)
    } else {
        affordance.on_click(Toggle::Example(id.clone()))
    };

    let mut usage = ViewNode::new(NodeKind::Div)
        .test_id(test_id::USAGE)
        .hidden_if(command.usage.is_none());
    if let Some(text) = &command.usage {
        usage = usage.text(text);
    }

    let mut example = ViewNode::new(NodeKind::Div).test_id(test_id::EXAMPLE_TEXT);
    if let Some(text) = &command.example {
        example = example.text(text);
    }

    let body = ViewNode::new(NodeKind::Ul)
        .test_id(test_id::EXAMPLE_BODY)
        .hidden_if(flag)
        .child(usage)
        .child(example);

    ViewNode::new(NodeKind::Div)
        .key(id)
        .test_id(test_id::EXAMPLE)
        .child(affordance)
        .child(body)
}
