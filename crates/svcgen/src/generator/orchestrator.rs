//! The generation pipeline behind the `generate` and `list` commands.

use crate::generator::{
  codegen::{
    self, GeneratedCode, GeneratedFileType, RenderContext,
    header::{CodeMetadata, with_header},
  },
  config::CodegenConfig,
  converter::{ResourceConverter, ShapeConverter},
  dependency_graph::DependencyGraph,
  metrics::GenerationStats,
  model::ServiceModel,
  ordering,
  resource_planner::{ResourcePlan, ResourcePlanner},
  shape_resolver::ShapeResolver,
};

pub struct Orchestrator {
  model: ServiceModel,
  config: CodegenConfig,
}

#[derive(Debug, Clone)]
pub struct GeneratedFinalOutput {
  pub code: GeneratedCode,
  pub stats: GenerationStats,
}

impl Orchestrator {
  /// Validates the model up front; every later step assumes operations
  /// point at existing shapes.
  pub fn new(model: ServiceModel, config: CodegenConfig) -> anyhow::Result<Self> {
    model.validate_protocol()?;
    model.validate_operations()?;
    Ok(Self { model, config })
  }

  pub fn model(&self) -> &ServiceModel {
    &self.model
  }

  pub fn metadata(&self, source_path: &str) -> CodeMetadata {
    CodeMetadata {
      title: self.model.display_name().to_string(),
      version: self
        .model
        .metadata
        .api_version
        .clone()
        .unwrap_or_else(|| "unversioned".to_string()),
      source: source_path.to_string(),
    }
  }

  /// Classifies operations without generating anything. Resource filters
  /// from the config apply.
  pub fn plan_resources(&self) -> anyhow::Result<ResourcePlan> {
    let resolver = ShapeResolver::new(&self.model.shapes)?;
    Ok(self.plan_with(&resolver))
  }

  fn plan_with(&self, resolver: &ShapeResolver) -> ResourcePlan {
    let planner = ResourcePlanner::new(&self.model.operations, resolver);
    let mut plan = planner.plan(&planner.candidate_names());
    plan.retain(|name| self.config.includes_resource(name));
    plan
  }

  pub fn generate(&self, source_path: &str) -> anyhow::Result<GeneratedFinalOutput> {
    let mut stats = GenerationStats::default();

    let resolver = ShapeResolver::new(&self.model.shapes)?;
    stats.record_shapes_resolved(resolver.len());

    let graph = DependencyGraph::build(&resolver);
    let cycles = graph.cycles();
    let order = ordering::order(&graph);

    let operation_shapes = self.model.operation_shapes();
    let shape_converter = ShapeConverter::new(
      &resolver,
      &graph,
      &cycles,
      &operation_shapes,
      self.config.shape_scope,
    );
    let items = shape_converter.convert(&order);
    stats.record_shape_items(&items);
    stats.record_cycles(cycles);

    let plan = self.plan_with(&resolver);
    stats.record_plan(&plan);

    let resource_converter = ResourceConverter::new(&self.model.operations, &resolver, &shape_converter);
    let mut resources = vec![];
    for resource_plan in plan.resources.values() {
      match resource_converter.convert(resource_plan) {
        Ok((resource, warnings)) => {
          stats.record_resource(&resource);
          stats.record_warnings(warnings);
          resources.push(resource);
        }
        Err(warning) => stats.record_warning(warning),
      }
    }

    let ctx = RenderContext::new(self.config.visibility, &self.config.support_crate)?;
    let metadata = self.metadata(source_path);

    let mut code = GeneratedCode::default();
    for (file_type, tokens) in [
      (GeneratedFileType::Shapes, codegen::generate_shapes(&items, &ctx)),
      (GeneratedFileType::Resources, codegen::generate_resources(&resources, &ctx)),
      (GeneratedFileType::Module, codegen::generate_module(self.config.visibility)),
    ] {
      let formatted = codegen::format_tokens(tokens)?;
      code.insert(file_type, with_header(&metadata, file_type, &formatted));
    }

    Ok(GeneratedFinalOutput { code, stats })
  }
}
