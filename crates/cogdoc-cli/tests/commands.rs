//! Integration tests for the render and ids commands.

use std::fs;
use std::path::PathBuf;

use cogdoc_cli::commands::{
    OutputFormat, RenderRequest, load_options, parse_toggle, run_ids, run_render,
};
use cogdoc_core::{ExampleAffordance, IdKind, NodeId, Phase, Toggle};

const DOCS: &str = r#"[
  {
    "name": "Math",
    "commands": [
      {
        "command": "add",
        "description": "adds two numbers",
        "parameters": ["a", "b"],
        "example": "add 2 3",
        "usage": "add <a> <b>"
      },
      { "command": "sub", "description": "subtracts", "parameters": ["a", "b"] }
    ]
  },
  { "name": "My Group", "commands": [] },
  { "name": "My Group", "commands": [] }
]"#;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cogdocs-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn docs_file(name: &str) -> PathBuf {
    let path = unique_temp_dir(name).join("docs.json");
    fs::write(&path, DOCS).unwrap();
    path
}

#[test]
fn parse_toggle_accepts_both_targets() {
    assert_eq!(
        parse_toggle("group:Math_expanded").unwrap(),
        Toggle::Group(NodeId::from("Math_expanded"))
    );
    assert_eq!(
        parse_toggle("example:add_example_expanded").unwrap(),
        Toggle::Example(NodeId::from("add_example_expanded"))
    );
}

#[test]
fn parse_toggle_rejects_garbage() {
    assert!(parse_toggle("Math_expanded").is_err());
    assert!(parse_toggle("group:").is_err());
    assert!(parse_toggle("cog:Math_expanded").is_err());
}

#[test]
fn render_outline_applies_toggles_in_order() {
    let path = docs_file("outline");
    let request = RenderRequest {
        toggles: vec![
            parse_toggle("example:add_example_expanded").unwrap(),
            parse_toggle("group:My_Group_expanded").unwrap(),
        ],
        ..RenderRequest::default()
    };

    let outcome = run_render(&path, &request).unwrap();

    assert_eq!(outcome.phase, Phase::Ready);
    assert!(outcome.ignored.is_empty());
    assert!(outcome.output.contains("add [a] [b]"));
    assert!(outcome.output.contains("    add 2 3"));
    assert!(outcome.output.contains("▸ My Group  (group:My_Group_expanded)"));
}

#[test]
fn unknown_toggles_are_reported_not_fatal() {
    let path = docs_file("stale");
    let request = RenderRequest {
        toggles: vec![parse_toggle("group:Gone_expanded").unwrap()],
        ..RenderRequest::default()
    };

    let outcome = run_render(&path, &request).unwrap();

    assert_eq!(outcome.phase, Phase::Ready);
    assert_eq!(outcome.ignored, [Toggle::Group(NodeId::from("Gone_expanded"))]);
}

#[test]
fn html_carries_ids_and_test_ids() {
    let path = docs_file("html");
    let request = RenderRequest {
        format: OutputFormat::Html,
        ..RenderRequest::default()
    };

    let html = run_render(&path, &request).unwrap().output;

    assert!(html.contains(r#"<div id="Math_expanded" data-testid="expandable-doc">"#));
    assert!(html.contains(r#"<div id="add_example_expanded" data-testid="expandable-example">"#));
    assert!(html.contains(r#"<code data-testid="documentation-cog-command">add [a] [b]</code>"#));
    assert!(html.contains("&lt;a&gt; &lt;b&gt;"));
}

#[test]
fn json_output_is_the_serialized_view() {
    let path = docs_file("json");
    let request = RenderRequest {
        format: OutputFormat::Json,
        ..RenderRequest::default()
    };

    let json = run_render(&path, &request).unwrap().output;
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "main");
    assert_eq!(value["children"][0]["test_id"], "documentation");
}

#[test]
fn hide_when_missing_drops_the_affordance_from_the_outline() {
    let path = docs_file("affordance");
    let mut request = RenderRequest::default();
    request.options.example_affordance = ExampleAffordance::HideWhenMissing;

    let outline = run_render(&path, &request).unwrap().output;

    assert!(outline.contains("(example:add_example_expanded)"));
    assert!(!outline.contains("(example:sub_example_expanded)"));
}

#[test]
fn missing_file_renders_the_error_view() {
    let path = unique_temp_dir("missing").join("docs.json");
    let request = RenderRequest {
        format: OutputFormat::Html,
        ..RenderRequest::default()
    };

    let outcome = run_render(&path, &request).unwrap();

    assert_eq!(outcome.phase, Phase::Missing);
    insta::assert_snapshot!(outcome.output, @r#"<main class="content"><div data-testid="documentation" class="documentation"><div data-testid="documentation-error" class="documentation__title">Documentation can not be found</div></div></main>"#);
}

#[test]
fn malformed_file_renders_the_error_view() {
    let path = unique_temp_dir("malformed").join("docs.json");
    fs::write(&path, r#"[{"commands": []}]"#).unwrap();

    let outcome = run_render(&path, &RenderRequest::default()).unwrap();

    assert_eq!(outcome.phase, Phase::Missing);
    assert_eq!(outcome.output, "Documentation can not be found");
}

#[test]
fn ids_lists_groups_and_commands_with_collisions() {
    let path = docs_file("ids");

    let report = run_ids(&path).unwrap();

    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.rows[0].id.as_str(), "Math_expanded");
    assert!(!report.rows[0].initial);
    assert_eq!(report.rows[1].kind, IdKind::Command);
    assert_eq!(report.rows[1].id.as_str(), "add_example_expanded");
    assert!(report.rows[1].initial);
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].id.as_str(), "My_Group_expanded");
}

#[test]
fn ids_fails_on_missing_file() {
    let path = unique_temp_dir("ids-missing").join("docs.json");
    assert!(run_ids(&path).is_err());
}

#[test]
fn options_load_from_toml() {
    let path = unique_temp_dir("options").join("render.toml");
    fs::write(&path, "example_affordance = \"hide-when-missing\"\n").unwrap();

    let options = load_options(Some(&path)).unwrap();

    assert_eq!(options.example_affordance, ExampleAffordance::HideWhenMissing);
    assert_eq!(load_options(None).unwrap().example_affordance, ExampleAffordance::AlwaysShow);
}
