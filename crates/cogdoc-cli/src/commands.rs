use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info_span, warn};

use cogdoc_core::visibility::{EXAMPLE_DEFAULT, GROUP_DEFAULT};
use cogdoc_core::{
    DocsSession, IdCollision, IdKind, NodeId, Phase, RenderOptions, Toggle, find_collisions,
    to_html, to_outline,
};
use cogdoc_model::{load_document, load_optional};

/// Output format of `cogdocs render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Outline,
    Html,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub format: OutputFormat,
    /// Toggles applied in order before rendering.
    pub toggles: Vec<Toggle>,
    pub options: RenderOptions,
}

#[derive(Debug)]
pub struct RenderOutcome {
    pub output: String,
    pub phase: Phase,
    /// Toggles that referenced no known id.
    pub ignored: Vec<Toggle>,
}

/// One row of `cogdocs ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdRow {
    pub kind: IdKind,
    /// Owning group for commands, the group itself for groups.
    pub group: String,
    pub name: String,
    pub id: NodeId,
    pub initial: bool,
}

#[derive(Debug)]
pub struct IdReport {
    pub rows: Vec<IdRow>,
    pub collisions: Vec<IdCollision>,
}

/// Parse `group:ID` or `example:ID`.
pub fn parse_toggle(value: &str) -> Result<Toggle> {
    let (target, id) = value
        .split_once(':')
        .ok_or_else(|| anyhow!("toggle `{value}` must look like TARGET:ID"))?;
    if id.is_empty() {
        bail!("toggle `{value}` has an empty id");
    }
    match target {
        "group" => Ok(Toggle::Group(NodeId::from(id))),
        "example" => Ok(Toggle::Example(NodeId::from(id))),
        other => bail!("unknown toggle target `{other}` (expected `group` or `example`)"),
    }
}

/// Read render options from a TOML file, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<RenderOptions> {
    let Some(path) = path else {
        return Ok(RenderOptions::default());
    };
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

/// Load, initialize, apply toggles and render.
///
/// A file that cannot be loaded renders the "documentation not found" view
/// rather than failing.
pub fn run_render(path: &Path, request: &RenderRequest) -> Result<RenderOutcome> {
    let span = info_span!("render", file = %path.display());
    let _guard = span.enter();

    let mut session = DocsSession::new(request.options.clone());
    let phase = session.observe(load_optional(path).map(Arc::new));

    let mut ignored = Vec::new();
    for toggle in &request.toggles {
        if !session.dispatch(toggle) {
            warn!(%toggle, "toggle matched no node");
            ignored.push(toggle.clone());
        }
    }
    debug!(
        revision = session.visibility().revision(),
        "visibility state settled"
    );

    let view = session.render();
    let output = match request.format {
        OutputFormat::Outline => to_outline(&view),
        OutputFormat::Html => to_html(&view),
        OutputFormat::Json => serde_json::to_string_pretty(&view).context("serialize view")?,
    };
    Ok(RenderOutcome {
        output,
        phase,
        ignored,
    })
}

/// List every derived id with its initial flag.
pub fn run_ids(path: &Path) -> Result<IdReport> {
    let document =
        load_document(path).with_context(|| format!("load documentation {}", path.display()))?;

    let mut rows = Vec::new();
    for group in document.groups() {
        rows.push(IdRow {
            kind: IdKind::Group,
            group: group.name.clone(),
            name: group.name.clone(),
            id: NodeId::for_group(group),
            initial: GROUP_DEFAULT,
        });
        for command in &group.commands {
            rows.push(IdRow {
                kind: IdKind::Command,
                group: group.name.clone(),
                name: command.command.clone(),
                id: NodeId::for_command(command),
                initial: EXAMPLE_DEFAULT,
            });
        }
    }

    Ok(IdReport {
        rows,
        collisions: find_collisions(&document),
    })
}
