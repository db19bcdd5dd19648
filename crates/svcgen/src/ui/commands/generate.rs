use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};

use crate::{
  generator::{
    codegen::Visibility,
    config::{CodegenConfig, ShapeScope},
    metrics::GenerationStats,
    orchestrator::{GeneratedFinalOutput, Orchestrator},
  },
  ui::{Colors, GenerateCommand},
  utils::model::load_models,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

fn count(value: usize) -> String {
  value.to_formatted_string(&Locale::en)
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub inputs: Vec<PathBuf>,
  pub output: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
  pub codegen: CodegenConfig,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      visibility,
      support_crate,
      only,
      exclude,
      all_shapes,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be combined");
    }

    let visibility = parse_visibility(&visibility)?;
    let codegen = CodegenConfig::builder()
      .visibility(visibility)
      .support_crate(support_crate)
      .shape_scope(if all_shapes { ShapeScope::All } else { ShapeScope::ReferencedOnly })
      .maybe_only_resources(only.map(|names| names.into_iter().collect()))
      .excluded_resources(exclude.map(|names| names.into_iter().collect()).unwrap_or_default())
      .build();

    Ok(Self {
      inputs: input,
      output,
      verbose,
      quiet,
      codegen,
    })
  }

  fn source_description(&self) -> String {
    self.inputs.iter().map(|path| path.display().to_string()).join(", ")
  }

  async fn write_module_output(&self, output: &GeneratedFinalOutput) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output).await?;
    for (file_type, code) in output.code.files() {
      tokio::fs::write(self.output.join(file_type.to_string()), code).await?;
    }
    Ok(())
  }
}

fn parse_visibility(value: &str) -> anyhow::Result<Visibility> {
  Visibility::parse(value)
    .ok_or_else(|| anyhow::anyhow!("Invalid visibility '{value}': expected one of public, crate, file"))
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    let message = match self.config.inputs.as_slice() {
      [single] => format!("Loading service model from: {}", single.display()),
      inputs => format!("Merging {} service models: {}", inputs.len(), self.config.source_description()),
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn log_generating(&self, orchestrator: &Orchestrator) {
    self.info(
      &format!("Generating {}...", orchestrator.model().display_name())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Shapes resolved:", count(stats.shapes_resolved));
    self.stat("Types generated:", count(stats.types_generated));
    self.stat("", format!("{} structs", count(stats.structs_generated)));
    self.stat("", format!("{} enums", count(stats.enums_generated)));
    self.print_resource_stats(stats);
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", count(stats.warnings.len()));
    }
    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_resource_stats(&self, stats: &GenerationStats) {
    if stats.read_only_resources > 0 {
      self.stat(
        "Resources generated:",
        format!(
          "{} ({} read-only)",
          count(stats.resources_generated),
          count(stats.read_only_resources)
        ),
      );
    } else {
      self.stat("Resources generated:", count(stats.resources_generated));
    }
    if stats.skipped_resources() > 0 {
      self.stat("Resources skipped:", count(stats.skipped_resources()));
    }
    self.stat("Methods generated:", count(stats.methods_generated));

    if self.config.verbose {
      for (role, methods) in &stats.methods_by_role {
        self.stat("", format!("{} {role}", count(*methods)));
      }
      self.stat("Raw actions:", count(stats.raw_actions));
    }
    if stats.unmatched_operations > 0 {
      self.stat("Unmatched operations:", count(stats.unmatched_operations));
    }
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", count(stats.cycles_detected));

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated shapes and resources".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let model = load_models(&config.inputs).await?;

  let orchestrator = Orchestrator::new(model, config.codegen.clone())?;
  logger.log_generating(&orchestrator);
  let output = orchestrator.generate(&config.source_description())?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_module_output(&output).await?;

  if output.stats.resources_generated == 0 {
    logger.info("No resources generated");
  }

  logger.log_success();
  Ok(())
}
