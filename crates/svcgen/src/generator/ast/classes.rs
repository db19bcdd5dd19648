use std::collections::HashSet;

use crate::generator::ast::{Documentation, FieldToken, TypeRef, TypeToken};

/// A data class: one struct per model structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
  pub name: TypeToken,
  pub wire_name: String,
  pub docs: Documentation,
  pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
  pub name: FieldToken,
  pub wire_name: String,
  pub type_ref: TypeRef,
  /// Required fields have no default; optional ones are wrapped in `Field`
  /// and start unassigned.
  pub required: bool,
  pub docs: Documentation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
  pub name: TypeToken,
  pub wire_name: String,
  pub docs: Documentation,
  pub variants: Vec<VariantDef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDef {
  pub name: TypeToken,
  pub wire_value: String,
}

impl EnumDef {
  /// Holds wire values the model does not list.
  pub const FALLBACK_VARIANT: &'static str = "Unknown";

  /// Builds variants from wire values. Values that collapse to the same
  /// identifier, or to the fallback variant, get a numeric suffix.
  pub fn new(wire_name: &str, docs: Documentation, values: &[String]) -> Self {
    let mut seen = HashSet::from([Self::FALLBACK_VARIANT.to_string()]);
    let variants = values
      .iter()
      .map(|value| {
        let base = TypeToken::from_wire(value).to_string();
        let mut name = base.clone();
        let mut suffix = 2;
        while !seen.insert(name.clone()) {
          name = format!("{base}{suffix}");
          suffix += 1;
        }
        VariantDef {
          name: TypeToken::from(name.as_str()),
          wire_value: value.clone(),
        }
      })
      .collect();

    Self {
      name: TypeToken::from_wire(wire_name),
      wire_name: wire_name.to_string(),
      docs,
      variants,
    }
  }
}

/// One item of `shapes.rs`, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeItem {
  Struct(ClassDef),
  Enum(EnumDef),
}

impl ShapeItem {
  #[cfg(test)]
  pub(crate) fn name(&self) -> &TypeToken {
    match self {
      Self::Struct(def) => &def.name,
      Self::Enum(def) => &def.name,
    }
  }
}
