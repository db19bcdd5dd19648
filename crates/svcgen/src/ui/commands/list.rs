use std::path::PathBuf;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use crossterm::style::Stylize;
use itertools::Itertools;

use crate::{
  generator::{config::CodegenConfig, orchestrator::Orchestrator},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::model::load_models,
};

const NONE: &str = "-";

async fn load(inputs: &[PathBuf]) -> anyhow::Result<Orchestrator> {
  let model = load_models(inputs).await?;
  Orchestrator::new(model, CodegenConfig::default())
}

fn table(headers: &[&str], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);
  table
}

fn optional_cell(value: Option<String>, colors: &Colors) -> Cell {
  match value {
    Some(value) => Cell::new(value).fg(IntoComfyColor::into(colors.primary())),
    None => Cell::new(NONE).fg(IntoComfyColor::into(colors.muted())),
  }
}

pub async fn list_operations(inputs: &[PathBuf], colors: &Colors) -> anyhow::Result<()> {
  let orchestrator = load(inputs).await?;
  let plan = orchestrator.plan_resources()?;

  let mut table = table(&["OPERATION", "INPUT", "OUTPUT", "ROLE", "RESOURCE"], colors);

  for (name, operation) in orchestrator.model().operations.iter().sorted_by_key(|(name, _)| *name) {
    let assignment = plan.assignments.get(name);
    let role = assignment.map(|assignment| {
      assignment
        .role
        .map_or_else(|| "raw".to_string(), |role| role.to_string())
    });

    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(optional_cell(operation.input_shape().map(String::from), colors));
    row.add_cell(optional_cell(operation.output_shape().map(String::from), colors));
    row.add_cell(optional_cell(role, colors).set_alignment(CellAlignment::Right));
    row.add_cell(optional_cell(
      assignment.map(|assignment| assignment.resource.clone()),
      colors,
    ));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

pub async fn list_resources(inputs: &[PathBuf], colors: &Colors) -> anyhow::Result<()> {
  let orchestrator = load(inputs).await?;
  let plan = orchestrator.plan_resources()?;

  let mut table = table(&["RESOURCE", "ROLES", "RAW ACTIONS", "STATUS"], colors);

  for resource in plan.resources.values() {
    let roles = resource.roles.keys().join(", ");
    let raw = (!resource.raw_actions.is_empty()).then(|| resource.raw_actions.join(", "));
    let status = resource.status.as_ref().map(|status| status.member.clone());

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&resource.name)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(roles).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(optional_cell(raw, colors));
    row.add_cell(optional_cell(status, colors));
    table.add_row(row);
  }

  println!("{table}");

  for (name, reason) in &plan.skipped {
    eprintln!(
      "{} {}",
      "Skipped:".with(colors.accent()),
      format!("{name}: {reason}").with(colors.primary())
    );
  }
  if !plan.unmatched.is_empty() {
    eprintln!(
      "{} {}",
      "Unmatched:".with(colors.accent()),
      plan.unmatched.join(", ").with(colors.primary())
    );
  }

  Ok(())
}
