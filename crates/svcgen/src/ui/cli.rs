use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "svcgen")]
#[command(author, version, about = "Generates typed shapes and lifecycle resources from JSON service models")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Inspect how a service model will be classified
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate shapes.rs, resources.rs and mod.rs from one or more models
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Service model JSON file; repeat to merge several models, later files win
  #[arg(short, long, value_name = "FILE", required = true)]
  pub input: Vec<PathBuf>,

  /// Directory the generated module is written to
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Visibility level for generated items (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Path generated code uses to reach the runtime support crate
  #[arg(long, value_name = "PATH", default_value = "svcgen_support")]
  pub support_crate: String,

  /// Generate only these resources (comma-separated)
  #[arg(long, value_name = "RESOURCES", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Skip these resources (comma-separated)
  #[arg(long, value_name = "RESOURCES", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Also emit operation input and output shapes nothing else references
  #[arg(long, default_value_t = false)]
  pub all_shapes: bool,

  /// Print cycles, resource plans and every warning
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List operations with their shapes and lifecycle role
  Operations {
    /// Service model JSON file
    #[arg(short, long, value_name = "FILE", required = true)]
    input: Vec<PathBuf>,
  },
  /// List candidate resources with their roles, raw actions and status attribute
  Resources {
    /// Service model JSON file
    #[arg(short, long, value_name = "FILE", required = true)]
    input: Vec<PathBuf>,
  },
}
