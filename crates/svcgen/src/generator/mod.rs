pub(crate) mod ast;
pub(crate) mod codegen;
pub mod config;
pub(crate) mod converter;
pub(crate) mod dependency_graph;
pub(crate) mod errors;
pub mod metrics;
pub mod model;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod ordering;
pub mod resource_planner;
pub(crate) mod shape_resolver;

#[cfg(test)]
mod tests;
