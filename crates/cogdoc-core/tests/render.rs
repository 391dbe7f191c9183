//! Rendering scenarios for the documentation page.

mod common;

use cogdoc_core::view::{class, test_id};
use cogdoc_core::{
    Caret, ExampleAffordance, NodeKind, RenderOptions, Toggle, VisibilityState, render,
    to_outline,
};
use cogdoc_model::{Command, Document, Group};

use common::{math_doc, math_doc_without_usage};

fn ready(document: &Document) -> VisibilityState {
    VisibilityState::new().initialize(Some(document))
}

#[test]
fn absent_document_renders_only_the_error_view() {
    let view = render(None, &VisibilityState::new(), &RenderOptions::default());

    let error = view.find_by_test_id(test_id::ERROR).unwrap();
    assert_eq!(error.text.as_deref(), Some("Documentation can not be found"));
    assert!(view.find_by_test_id(test_id::TITLE).is_none());
    assert!(view.find_by_test_id(test_id::GROUP).is_none());
    assert!(view.find_by_test_id(test_id::COMMAND).is_none());
}

#[test]
fn uninitialized_state_renders_the_error_view() {
    let document = math_doc();
    let view = render(
        Some(&document),
        &VisibilityState::new(),
        &RenderOptions::default(),
    );

    assert!(view.find_by_test_id(test_id::ERROR).is_some());
    assert!(view.find_by_test_id(test_id::GROUP).is_none());
}

#[test]
fn math_document_renders_keys_and_defaults() {
    let document = math_doc();
    let state = ready(&document);

    assert_eq!(state.group_expanded("Math_expanded"), Some(false));
    assert_eq!(state.example_expanded("add_example_expanded"), Some(true));

    let view = render(Some(&document), &state, &RenderOptions::default());
    assert!(view.find_by_test_id(test_id::ERROR).is_none());
    assert_eq!(
        view.find_by_test_id(test_id::TITLE).unwrap().text.as_deref(),
        Some("LIST OF COGS")
    );

    let group = view.find_by_key("Math_expanded").unwrap();
    assert_eq!(group.test_id, Some(test_id::GROUP));
    let name = group.find_by_test_id(test_id::GROUP_NAME).unwrap();
    assert_eq!(name.text.as_deref(), Some("Math"));
    let commands = group.find_by_test_id(test_id::GROUP_COMMANDS).unwrap();
    assert!(!commands.is_hidden());

    let invocation = view.find_by_test_id(test_id::COMMAND).unwrap();
    assert_eq!(invocation.text.as_deref(), Some("add [a] [b]"));
    let description = view.find_by_test_id(test_id::DESCRIPTION).unwrap();
    assert_eq!(description.text.as_deref(), Some("adds two numbers"));

    let example = view.find_by_key("add_example_expanded").unwrap();
    assert_eq!(example.test_id, Some(test_id::EXAMPLE));
    let body = example.find_by_test_id(test_id::EXAMPLE_BODY).unwrap();
    assert!(body.is_hidden(), "examples start hidden");
    let usage = example.find_by_test_id(test_id::USAGE).unwrap();
    assert!(!usage.is_hidden());
    assert_eq!(usage.text.as_deref(), Some("add <a> <b>"));
    let text = example.find_by_test_id(test_id::EXAMPLE_TEXT).unwrap();
    assert_eq!(text.text.as_deref(), Some("add 2 3"));
}

#[test]
fn missing_usage_hides_only_the_usage_block() {
    let document = math_doc_without_usage();
    let state = ready(&document).toggle_example("add_example_expanded");
    let view = render(Some(&document), &state, &RenderOptions::default());

    let example = view.find_by_key("add_example_expanded").unwrap();
    assert!(example.find_by_test_id(test_id::USAGE).unwrap().is_hidden());
    let body = example.find_by_test_id(test_id::EXAMPLE_BODY).unwrap();
    assert!(!body.is_hidden());
    let text = body.find_by_test_id(test_id::EXAMPLE_TEXT).unwrap();
    assert_eq!(text.text.as_deref(), Some("add 2 3"));
}

#[test]
fn group_header_caret_and_list_follow_inverted_flag() {
    let document = math_doc();
    let state = ready(&document);

    let view = render(Some(&document), &state, &RenderOptions::default());
    let header = view.find_by_test_id(test_id::GROUP_HEADER).unwrap();
    assert_eq!(
        header.on_click,
        Some(Toggle::Group("Math_expanded".into()))
    );
    assert_eq!(header.children[0].kind, NodeKind::Icon(Caret::Down));

    let toggled = state.toggle_group("Math_expanded");
    let view = render(Some(&document), &toggled, &RenderOptions::default());
    let header = view.find_by_test_id(test_id::GROUP_HEADER).unwrap();
    assert_eq!(header.children[0].kind, NodeKind::Icon(Caret::Right));
    let commands = view.find_by_test_id(test_id::GROUP_COMMANDS).unwrap();
    assert!(commands.classes.contains(&class::HIDDEN));
}

#[test]
fn example_caret_points_down_once_shown() {
    let document = math_doc();
    let state = ready(&document);
    let view = render(Some(&document), &state, &RenderOptions::default());
    let toggle = view.find_by_test_id(test_id::EXAMPLE_TOGGLE).unwrap();
    assert_eq!(toggle.children[0].kind, NodeKind::Icon(Caret::Right));

    let shown = state.toggle_example("add_example_expanded");
    let view = render(Some(&document), &shown, &RenderOptions::default());
    let toggle = view.find_by_test_id(test_id::EXAMPLE_TOGGLE).unwrap();
    assert_eq!(toggle.children[0].kind, NodeKind::Icon(Caret::Down));
}

fn doc_without_example() -> Document {
    Document::new(vec![Group::new(
        "Util",
        vec![Command::new("ping", "replies").with_usage("ping")],
    )])
}

#[test]
fn affordance_always_shown_by_default() {
    let document = doc_without_example();
    let view = render(
        Some(&document),
        &ready(&document),
        &RenderOptions::default(),
    );

    let toggle = view.find_by_test_id(test_id::EXAMPLE_TOGGLE).unwrap();
    assert!(!toggle.is_hidden());
    assert_eq!(
        toggle.on_click,
        Some(Toggle::Example("ping_example_expanded".into()))
    );
}

#[test]
fn affordance_hidden_and_inert_when_configured() {
    let document = doc_without_example();
    let options =
        RenderOptions::new().with_example_affordance(ExampleAffordance::HideWhenMissing);
    let view = render(Some(&document), &ready(&document), &options);

    let example = view.find_by_key("ping_example_expanded").unwrap();
    let toggle = example.find_by_test_id(test_id::EXAMPLE_TOGGLE).unwrap();
    assert!(toggle.is_hidden());
    assert!(toggle.on_click.is_none());
    // The block itself is still there.
    assert!(example.find_by_test_id(test_id::EXAMPLE_BODY).is_some());
}

#[test]
fn hide_when_missing_keeps_affordance_for_commands_with_examples() {
    let document = math_doc();
    let options =
        RenderOptions::new().with_example_affordance(ExampleAffordance::HideWhenMissing);
    let view = render(Some(&document), &ready(&document), &options);

    let toggle = view.find_by_test_id(test_id::EXAMPLE_TOGGLE).unwrap();
    assert!(!toggle.is_hidden());
    assert!(toggle.on_click.is_some());
}

#[test]
fn groups_render_in_input_order() {
    let document = Document::new(vec![
        Group::new("Zeta", vec![]),
        Group::new("Alpha", vec![]),
        Group::new("Mid Level", vec![]),
    ]);
    let view = render(
        Some(&document),
        &ready(&document),
        &RenderOptions::default(),
    );

    let keys: Vec<_> = view
        .find_all_by_test_id(test_id::GROUP)
        .filter_map(|node| node.key.as_ref().map(|k| k.as_str().to_string()))
        .collect();
    assert_eq!(keys, ["Zeta_expanded", "Alpha_expanded", "Mid_Level_expanded"]);
}

#[test]
fn empty_document_renders_title_only() {
    let document = Document::default();
    let view = render(
        Some(&document),
        &ready(&document),
        &RenderOptions::default(),
    );

    assert!(view.find_by_test_id(test_id::TITLE).is_some());
    assert!(view.find_by_test_id(test_id::ERROR).is_none());
    assert_eq!(view.find_all_by_test_id(test_id::GROUP).count(), 0);
}

#[test]
fn colliding_groups_share_one_toggle() {
    let document = Document::new(vec![
        Group::new("My Group", vec![Command::new("one", "")]),
        Group::new("My Group", vec![Command::new("two", "")]),
    ]);
    let state = ready(&document);
    assert_eq!(state.groups().unwrap().len(), 1);
    assert_eq!(state.group_expanded("My_Group_expanded"), Some(false));

    let toggled = state.toggle_group("My_Group_expanded");
    let view = render(Some(&document), &toggled, &RenderOptions::default());

    let groups: Vec<_> = view.find_all_by_key("My_Group_expanded").collect();
    assert_eq!(groups.len(), 2);
    for group in groups {
        let commands = group.find_by_test_id(test_id::GROUP_COMMANDS).unwrap();
        assert!(commands.is_hidden(), "both share the toggled entry");
    }
}

#[test]
fn colliding_commands_share_one_example_entry() {
    let document = Document::new(vec![
        Group::new("A", vec![Command::new("run", "").with_example("run a")]),
        Group::new("B", vec![Command::new("run", "").with_example("run b")]),
    ]);
    let state = ready(&document);
    assert_eq!(state.examples().unwrap().len(), 1);

    let shown = state.toggle_example("run_example_expanded");
    let view = render(Some(&document), &shown, &RenderOptions::default());
    let hidden = view
        .find_all_by_test_id(test_id::EXAMPLE_BODY)
        .filter(|node| node.is_hidden())
        .count();
    assert_eq!(hidden, 0);
}

#[test]
fn outline_of_math_document() {
    let document = math_doc();
    let state = ready(&document);
    let view = render(Some(&document), &state, &RenderOptions::default());

    insta::assert_snapshot!(to_outline(&view), @r"
    LIST OF COGS
    ▾ Math  (group:Math_expanded)
      add [a] [b]
      adds two numbers
      ▸ Open example  (example:add_example_expanded)
    ");

    let shown = state.toggle_example("add_example_expanded");
    let view = render(Some(&document), &shown, &RenderOptions::default());

    insta::assert_snapshot!(to_outline(&view), @r"
    LIST OF COGS
    ▾ Math  (group:Math_expanded)
      add [a] [b]
      adds two numbers
      ▾ Open example  (example:add_example_expanded)
        add <a> <b>
        add 2 3
    ");
}

#[test]
fn outline_of_missing_document() {
    let view = render(None, &VisibilityState::new(), &RenderOptions::default());
    assert_eq!(to_outline(&view), "Documentation can not be found");
}
