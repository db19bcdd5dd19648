use serde_json::Value;

use crate::generator::{
  config::CodegenConfig,
  model::ServiceModel,
  orchestrator::{GeneratedFinalOutput, Orchestrator},
  resource_planner::{ResourcePlan, ResourcePlanner},
  shape_resolver::ShapeResolver,
};

const WIDGET_SERVICE: &str = include_str!("../../../tests/fixtures/widget_service.json");

/// A small service with a plain resource (`Widget`), a job (`TrainingJob`),
/// a read-only resource (`Endpoint`), one whose identifier only comes back
/// from create (`Gadget`), a self-referencing structure and a two-shape
/// cycle.
pub(crate) fn widget_service() -> Value {
  serde_json::from_str(WIDGET_SERVICE).expect("fixture should be valid JSON")
}

pub(crate) fn model_from(value: Value) -> ServiceModel {
  serde_json::from_value(value).expect("test model should deserialize")
}

pub(crate) fn widget_model() -> ServiceModel {
  model_from(widget_service())
}

pub(crate) fn plan_for(model: &ServiceModel) -> ResourcePlan {
  let resolver = ShapeResolver::new(&model.shapes).expect("test model should resolve");
  let planner = ResourcePlanner::new(&model.operations, &resolver);
  planner.plan(&planner.candidate_names())
}

pub(crate) fn generate(model: ServiceModel, config: CodegenConfig) -> GeneratedFinalOutput {
  Orchestrator::new(model, config)
    .expect("test model should validate")
    .generate("service-2.json")
    .expect("generation should succeed")
}

pub(crate) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(code.contains(expected), "missing {context}: expected '{expected}'");
}

pub(crate) fn assert_not_contains(code: &str, pattern: &str, context: &str) {
  assert!(!code.contains(pattern), "{context}: '{pattern}' should not appear");
}

pub(crate) fn assert_contains_all(code: &str, checks: &[(&str, &str)]) {
  for (expected, context) in checks {
    assert_contains(code, expected, context);
  }
}

pub(crate) fn assert_occurs_at_least(code: &str, pattern: &str, expected: usize, context: &str) {
  let actual = code.matches(pattern).count();
  assert!(
    actual >= expected,
    "{context}: expected at least {expected} occurrences of '{pattern}', found {actual}"
  );
}

/// Formatter-independent view of generated code.
pub(crate) fn without_whitespace(code: &str) -> String {
  code.chars().filter(|c| !c.is_whitespace()).collect()
}
