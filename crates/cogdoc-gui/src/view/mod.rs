//! View functions.
//!
//! [`documentation`] turns the core [`ViewNode`] tree into widgets. Hidden
//! nodes are skipped and every node carrying a toggle becomes a clickable row
//! that sends the toggle back as a [`DocsMessage`].

use iced::widget::{Column, Row, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Font, Length, Padding, Theme, mouse};

use cogdoc_core::view::class;
use cogdoc_core::{Caret, ExampleAffordance, NodeKind, Toggle, ViewNode};

use crate::component::icon::{icon_alert, icon_caret, icon_folder_open, icon_refresh};
use crate::message::{DocsMessage, FileMessage, Message, SettingsMessage};
use crate::state::AppState;
use crate::theme::{
    DIVIDER_HEIGHT, ICON_SIZE, LIST_INDENT, SPACING_MD, SPACING_SM, SPACING_XS, TEXT_BODY,
    TEXT_CAPTION, TEXT_HEADING, TEXT_TITLE,
};

/// Widget tree for a rendered documentation page.
pub fn documentation<'a>(root: ViewNode) -> Element<'a, Message> {
    if root.is_hidden() {
        return column![].into();
    }
    node(root)
}

/// How a node is laid out as widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Layout {
    Caret(Caret),
    /// Single text run at the given size.
    Label(f32),
    Code,
    Divider,
    /// Indented block.
    List,
    /// Clickable row of the children.
    Toggle,
    /// Text line then the children, stacked.
    Block,
}

impl Layout {
    fn of(node: &ViewNode) -> Self {
        match node.kind {
            NodeKind::Icon(caret) => Self::Caret(caret),
            NodeKind::H1 => Self::Label(TEXT_TITLE),
            NodeKind::H2 => Self::Label(TEXT_HEADING),
            NodeKind::Span => Self::Label(TEXT_BODY),
            NodeKind::Code => Self::Code,
            NodeKind::Div if node.classes.contains(&class::DIVIDER) => Self::Divider,
            NodeKind::Ul => Self::List,
            NodeKind::Main | NodeKind::Div | NodeKind::Li if node.on_click.is_some() => {
                Self::Toggle
            }
            NodeKind::Main | NodeKind::Div | NodeKind::Li => Self::Block,
        }
    }
}

/// Children that produce widgets, in order.
fn visible_children(children: Vec<ViewNode>) -> Vec<ViewNode> {
    children
        .into_iter()
        .filter(|child| !child.is_hidden())
        .collect()
}

/// Message sent when the node is clicked.
fn click_message(toggle: Toggle) -> Message {
    Message::Docs(DocsMessage::Toggle(toggle))
}

fn node<'a>(view_node: ViewNode) -> Element<'a, Message> {
    let layout = Layout::of(&view_node);
    let ViewNode {
        text: label,
        on_click,
        children,
        ..
    } = view_node;

    let children: Vec<Element<'a, Message>> =
        visible_children(children).into_iter().map(node).collect();

    let element: Element<'a, Message> = match layout {
        Layout::Caret(caret) => icon_caret(caret).size(ICON_SIZE).into(),
        Layout::Label(size) => text(label.unwrap_or_default()).size(size).into(),
        Layout::Code => text(label.unwrap_or_default())
            .font(Font::MONOSPACE)
            .size(TEXT_BODY)
            .into(),
        Layout::Divider => divider(),
        Layout::List => container(block(label, children))
            .padding(Padding::ZERO.left(LIST_INDENT))
            .into(),
        Layout::Toggle => Row::with_children(children)
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
        Layout::Block => block(label, children),
    };

    match on_click {
        Some(toggle) => mouse_area(element)
            .on_press(click_message(toggle))
            .interaction(mouse::Interaction::Pointer)
            .into(),
        None => element,
    }
}

/// Text line (if any) followed by the children, stacked vertically.
fn block<'a>(label: Option<String>, children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut items: Vec<Element<'a, Message>> = Vec::with_capacity(children.len() + 1);
    if let Some(label) = label {
        items.push(text(label).size(TEXT_BODY).into());
    }
    items.extend(children);
    Column::with_children(items).spacing(SPACING_XS).into()
}

fn divider<'a>() -> Element<'a, Message> {
    container(column![])
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            ..Default::default()
        })
        .into()
}

/// Open / Reload buttons and the example affordance switch.
pub fn toolbar(state: &AppState) -> Element<'_, Message> {
    let open = button(row![icon_folder_open(), text("Open")].spacing(SPACING_XS))
        .on_press(Message::File(FileMessage::OpenClicked));
    let reload = button(row![icon_refresh(), text("Reload")].spacing(SPACING_XS))
        .on_press_maybe(
            state
                .source
                .is_some()
                .then_some(Message::File(FileMessage::ReloadClicked)),
        );

    let (label, next) = match state.session.options().example_affordance {
        ExampleAffordance::AlwaysShow => (
            "Examples: always shown",
            ExampleAffordance::HideWhenMissing,
        ),
        ExampleAffordance::HideWhenMissing => (
            "Examples: hidden when missing",
            ExampleAffordance::AlwaysShow,
        ),
    };
    let affordance = button(text(label).size(TEXT_CAPTION))
        .style(button::secondary)
        .on_press(Message::Settings(SettingsMessage::AffordanceChanged(next)));

    row![open, reload, affordance]
        .spacing(SPACING_SM)
        .padding(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

/// Last error with its suggestion, or nothing.
pub fn status_line(state: &AppState) -> Element<'_, Message> {
    match &state.last_error {
        Some(error) => row![
            icon_alert().size(ICON_SIZE),
            text(error.to_string()).size(TEXT_BODY),
            text(error.suggestion()).size(TEXT_CAPTION),
        ]
        .spacing(SPACING_SM)
        .padding(Padding::ZERO.left(SPACING_MD))
        .align_y(Alignment::Center)
        .into(),
        None => column![].into(),
    }
}
