use std::collections::BTreeMap;

use strum::Display;

use crate::generator::{
  ast::{ResourceDef, ShapeItem},
  resource_planner::{LifecycleRole, ResourcePlan, SkipReason},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub shapes_resolved: usize,
  pub types_generated: usize,
  pub structs_generated: usize,
  pub enums_generated: usize,
  pub resources_generated: usize,
  pub read_only_resources: usize,
  pub methods_generated: usize,
  pub methods_by_role: BTreeMap<LifecycleRole, usize>,
  pub raw_actions: usize,
  pub unmatched_operations: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_shapes_resolved(&mut self, count: usize) {
    self.shapes_resolved += count;
  }

  pub fn record_shape_item(&mut self, item: &ShapeItem) {
    self.types_generated += 1;
    match item {
      ShapeItem::Struct(_) => self.structs_generated += 1,
      ShapeItem::Enum(_) => self.enums_generated += 1,
    }
  }

  pub fn record_shape_items(&mut self, items: &[ShapeItem]) {
    for item in items {
      self.record_shape_item(item);
    }
  }

  pub fn record_resource(&mut self, resource: &ResourceDef) {
    self.resources_generated += 1;
    if !resource.has_role(LifecycleRole::Create) {
      self.read_only_resources += 1;
    }
    for method in &resource.methods {
      self.methods_generated += 1;
      *self.methods_by_role.entry(method.role).or_default() += 1;
    }
  }

  pub fn record_plan(&mut self, plan: &ResourcePlan) {
    self.raw_actions += plan.resources.values().map(|r| r.raw_actions.len()).sum::<usize>();
    self.unmatched_operations += plan.unmatched.len();

    for name in &plan.read_only {
      self.record_warning(GenerationWarning::ResourceReadOnly { resource: name.clone() });
    }
    self.record_warnings(plan.skipped.iter().cloned().map(GenerationWarning::from));
    for operation in &plan.unmatched {
      self.record_warning(GenerationWarning::UnmatchedOperation {
        operation: operation.clone(),
      });
    }
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  pub fn skipped_resources(&self) -> usize {
    self.warnings.iter().filter(|w| w.is_skipped_item()).count()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Resource '{resource}' has no Create operation, generated read-only")]
  ResourceReadOnly { resource: String },
  #[strum(to_string = "Resource '{resource}' skipped: {reason}")]
  ResourceSkipped { resource: String, reason: String },
  #[strum(to_string = "Resource '{resource}': create omitted, {reason}")]
  CreateOmitted { resource: String, reason: String },
  #[strum(to_string = "Operation '{operation}' matches no resource")]
  UnmatchedOperation { operation: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::ResourceSkipped { .. })
  }

  pub(crate) fn skipped(resource: &str, reason: impl ToString) -> Self {
    Self::ResourceSkipped {
      resource: resource.to_string(),
      reason: reason.to_string(),
    }
  }
}

impl From<(String, SkipReason)> for GenerationWarning {
  fn from((resource, reason): (String, SkipReason)) -> Self {
    Self::skipped(&resource, reason)
  }
}
