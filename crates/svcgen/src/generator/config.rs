use std::collections::HashSet;

use crate::generator::codegen::Visibility;

pub const DEFAULT_SUPPORT_CRATE: &str = "svcgen_support";

/// Which structures end up in `shapes.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeScope {
  /// Operation input and output shapes are dropped unless another structure
  /// references them.
  #[default]
  ReferencedOnly,
  All,
}

#[derive(Debug, Clone, bon::Builder)]
pub struct CodegenConfig {
  #[builder(default)]
  pub visibility: Visibility,
  #[builder(default = DEFAULT_SUPPORT_CRATE.to_string(), into)]
  pub support_crate: String,
  #[builder(default)]
  pub shape_scope: ShapeScope,
  pub only_resources: Option<HashSet<String>>,
  #[builder(default)]
  pub excluded_resources: HashSet<String>,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl CodegenConfig {
  /// Applies `--only` and `--exclude` to a candidate resource name.
  pub fn includes_resource(&self, name: &str) -> bool {
    if self.excluded_resources.contains(name) {
      return false;
    }
    self.only_resources.as_ref().is_none_or(|only| only.contains(name))
  }
}
