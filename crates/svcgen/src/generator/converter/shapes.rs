use std::collections::HashSet;

use indexmap::IndexSet;

use crate::generator::{
  ast::{ClassDef, Documentation, EnumDef, FieldDef, FieldToken, ShapeItem, TypeRef, TypeToken},
  config::ShapeScope,
  dependency_graph::{CycleIndex, DependencyGraph},
  naming::identifiers::UniqueNames,
  shape_resolver::{ResolvedShape, ShapeKind, ShapeResolver},
};

/// Turns resolved structures and enums into data class definitions.
pub(crate) struct ShapeConverter<'a> {
  resolver: &'a ShapeResolver,
  cycles: CycleIndex,
  excluded: HashSet<&'a str>,
}

impl<'a> ShapeConverter<'a> {
  pub(crate) fn new(
    resolver: &'a ShapeResolver,
    graph: &DependencyGraph,
    cycles: &[Vec<String>],
    operation_shapes: &IndexSet<&'a str>,
    scope: ShapeScope,
  ) -> Self {
    let excluded = match scope {
      ShapeScope::All => HashSet::new(),
      ShapeScope::ReferencedOnly => operation_shapes
        .iter()
        .copied()
        .filter(|shape| !graph.is_referenced(shape))
        .collect(),
    };

    Self {
      resolver,
      cycles: CycleIndex::new(cycles),
      excluded,
    }
  }

  /// Emits items in the given order, skipping scalars, wrappers and
  /// excluded operation shapes.
  pub(crate) fn convert(&self, order: &[String]) -> Vec<ShapeItem> {
    order
      .iter()
      .filter(|name| !self.is_excluded(name))
      .filter_map(|name| self.resolver.get(name))
      .filter_map(|shape| match shape.kind {
        ShapeKind::Structure => Some(ShapeItem::Struct(self.convert_structure(shape))),
        ShapeKind::Enum => Some(ShapeItem::Enum(EnumDef::new(
          &shape.name,
          Documentation::from_optional(shape.documentation.as_deref()),
          &shape.enum_values,
        ))),
        ShapeKind::Scalar | ShapeKind::List | ShapeKind::Map => None,
      })
      .collect()
  }

  pub(crate) fn is_excluded(&self, shape: &str) -> bool {
    self.excluded.contains(shape)
  }

  fn convert_structure(&self, shape: &ResolvedShape) -> ClassDef {
    ClassDef {
      name: TypeToken::from_wire(&shape.name),
      wire_name: shape.name.clone(),
      docs: Documentation::from_optional(shape.documentation.as_deref()),
      fields: self.fields(shape, &[]),
    }
  }

  /// One field per member. Names clashing with `taken` or an earlier member
  /// get a numeric suffix.
  pub(crate) fn fields(&self, shape: &ResolvedShape, taken: &[&str]) -> Vec<FieldDef> {
    let mut names = UniqueNames::reserving(taken);

    shape
      .members
      .iter()
      .map(|member| {
        let name = names.claim(FieldToken::from_wire(&member.wire_name).to_string());

        let type_ref = match &member.type_ref {
          TypeRef::Named(_) if self.cycles.needs_box(&shape.name, &member.shape) => member.type_ref.clone().boxed(),
          other => other.clone(),
        };

        FieldDef {
          name: FieldToken::from(name.as_str()),
          wire_name: member.wire_name.clone(),
          type_ref,
          required: member.required,
          docs: Documentation::from_optional(member.documentation.as_deref()),
        }
      })
      .collect()
  }
}
