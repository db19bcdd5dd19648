use std::collections::HashSet;

use crate::generator::dependency_graph::DependencyGraph;

/// Linearizes the graph so every shape comes after the shapes it depends on.
///
/// Depth-first post-order, starting from each unvisited node in graph order.
/// A node is marked visited before its dependencies are walked, so cycles
/// terminate and leave a forward reference at the point they close.
pub(crate) fn order(graph: &DependencyGraph) -> Vec<String> {
  let mut visited = HashSet::with_capacity(graph.len());
  let mut ordered = Vec::with_capacity(graph.len());

  for node in graph.nodes() {
    visit(graph, node, &mut visited, &mut ordered);
  }

  ordered
}

fn visit<'a>(graph: &'a DependencyGraph, node: &'a str, visited: &mut HashSet<&'a str>, ordered: &mut Vec<String>) {
  if !visited.insert(node) {
    return;
  }

  if let Some(deps) = graph.dependencies(node) {
    for dep in deps {
      visit(graph, dep, visited, ordered);
    }
  }

  ordered.push(node.to_string());
}
