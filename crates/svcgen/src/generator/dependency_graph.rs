use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::generator::shape_resolver::{ShapeKind, ShapeResolver};

/// Shape name -> shapes its definition requires, in model order.
///
/// Built once from the resolver and never mutated afterwards. Cycles are
/// recorded like any other edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DependencyGraph {
  dependencies: IndexMap<String, IndexSet<String>>,
}

impl DependencyGraph {
  pub(crate) fn build(resolver: &ShapeResolver) -> Self {
    let dependencies = resolver
      .shapes()
      .map(|shape| {
        let deps = if shape.kind == ShapeKind::Structure {
          shape
            .members
            .iter()
            .flat_map(|member| member.targets.iter().cloned())
            .collect()
        } else {
          IndexSet::new()
        };
        (shape.name.clone(), deps)
      })
      .collect();
    Self { dependencies }
  }

  #[cfg(test)]
  pub(crate) fn from_edges<'a>(
    nodes: impl IntoIterator<Item = &'a str>,
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
  ) -> Self {
    let mut dependencies: IndexMap<String, IndexSet<String>> =
      nodes.into_iter().map(|node| (node.to_string(), IndexSet::new())).collect();
    for (from, to) in edges {
      dependencies.entry(from.to_string()).or_default().insert(to.to_string());
      dependencies.entry(to.to_string()).or_default();
    }
    Self { dependencies }
  }

  pub(crate) fn nodes(&self) -> impl Iterator<Item = &str> {
    self.dependencies.keys().map(String::as_str)
  }

  pub(crate) fn dependencies(&self, node: &str) -> Option<&IndexSet<String>> {
    self.dependencies.get(node)
  }

  pub(crate) fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .dependencies
      .iter()
      .flat_map(|(from, deps)| deps.iter().map(move |to| (from.as_str(), to.as_str())))
  }

  pub(crate) fn len(&self) -> usize {
    self.dependencies.len()
  }

  /// Whether any node depends on `node`.
  pub(crate) fn is_referenced(&self, node: &str) -> bool {
    self.dependencies.values().any(|deps| deps.contains(node))
  }

  /// Strongly connected components that form a cycle: more than one node,
  /// or a single node with a self edge. Members and components are in model
  /// order.
  pub(crate) fn cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for node in self.nodes() {
      graph.add_node(node);
    }
    for (from, to) in self.edges() {
      graph.add_edge(from, to, ());
    }

    let position = |name: &str| self.dependencies.get_index_of(name).unwrap_or(usize::MAX);

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|mut scc| {
        scc.sort_by_key(|name| position(name));
        scc.into_iter().map(String::from).collect()
      })
      .collect();
    cycles.sort_by_key(|cycle| position(&cycle[0]));
    cycles
  }
}

/// Which cycle, if any, each shape belongs to.
#[derive(Debug, Clone, Default)]
pub(crate) struct CycleIndex {
  component: HashMap<String, usize>,
}

impl CycleIndex {
  pub(crate) fn new(cycles: &[Vec<String>]) -> Self {
    let component = cycles
      .iter()
      .enumerate()
      .flat_map(|(index, cycle)| cycle.iter().map(move |name| (name.clone(), index)))
      .collect();
    Self { component }
  }

  /// A direct member from `from` to `to` must be boxed when both sit in the
  /// same cycle.
  pub(crate) fn needs_box(&self, from: &str, to: &str) -> bool {
    matches!((self.component.get(from), self.component.get(to)), (Some(a), Some(b)) if a == b)
  }
}
