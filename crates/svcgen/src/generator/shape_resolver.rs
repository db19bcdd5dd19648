use indexmap::IndexMap;
use strum::Display;

use crate::generator::{
  ast::{RustPrimitive, TypeRef},
  errors::ModelError,
  model::{ShapeDef, ShapeRef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeKind {
  Scalar,
  Structure,
  List,
  Map,
  Enum,
}

impl ShapeKind {
  pub const fn is_wrapper(self) -> bool {
    matches!(self, Self::List | Self::Map)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShape {
  pub name: String,
  pub kind: ShapeKind,
  /// The type a member referencing this shape gets.
  pub target_type: TypeRef,
  pub members: Vec<ResolvedMember>,
  pub enum_values: Vec<String>,
  pub documentation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
  pub wire_name: String,
  /// The shape named in the model, possibly a list or map wrapper.
  pub shape: String,
  /// Non-wrapper shapes reached from `shape`, in key/value order.
  pub targets: Vec<String>,
  pub type_ref: TypeRef,
  pub required: bool,
  pub documentation: Option<String>,
}

impl ResolvedShape {
  pub fn member(&self, wire_name: &str) -> Option<&ResolvedMember> {
    self.members.iter().find(|member| member.wire_name == wire_name)
  }
}

/// Resolves every shape of a model up front and answers lookups from the
/// cache.
#[derive(Debug, Clone, Default)]
pub struct ShapeResolver {
  resolved: IndexMap<String, ResolvedShape>,
}

impl ShapeResolver {
  pub fn new(shapes: &IndexMap<String, ShapeDef>) -> Result<Self, ModelError> {
    let builder = ResolverBuilder { shapes };
    let resolved = shapes
      .iter()
      .map(|(name, def)| Ok((name.clone(), builder.resolve_shape(name, def)?)))
      .collect::<Result<_, ModelError>>()?;
    Ok(Self { resolved })
  }

  pub fn get(&self, name: &str) -> Option<&ResolvedShape> {
    self.resolved.get(name)
  }

  /// All shapes in model order.
  pub fn shapes(&self) -> impl Iterator<Item = &ResolvedShape> {
    self.resolved.values()
  }

  pub fn len(&self) -> usize {
    self.resolved.len()
  }
}

struct ResolverBuilder<'a> {
  shapes: &'a IndexMap<String, ShapeDef>,
}

impl ResolverBuilder<'_> {
  fn resolve_shape(&self, name: &str, def: &ShapeDef) -> Result<ResolvedShape, ModelError> {
    let kind = classify(name, def)?;
    let members = match kind {
      ShapeKind::Structure => def
        .members
        .iter()
        .map(|(wire_name, reference)| self.member(name, wire_name, reference, def.required.contains(wire_name)))
        .collect::<Result<_, _>>()?,
      ShapeKind::List => vec![self.member(name, "member", wrapper_part(name, def, "member")?, true)?],
      ShapeKind::Map => vec![
        self.member(name, "key", wrapper_part(name, def, "key")?, true)?,
        self.member(name, "value", wrapper_part(name, def, "value")?, true)?,
      ],
      ShapeKind::Scalar | ShapeKind::Enum => vec![],
    };

    Ok(ResolvedShape {
      name: name.to_string(),
      kind,
      target_type: self.target_type(name, &mut vec![])?,
      members,
      enum_values: def.enum_values.clone(),
      documentation: def.documentation.clone(),
    })
  }

  fn member(
    &self,
    owner: &str,
    wire_name: &str,
    reference: &ShapeRef,
    required: bool,
  ) -> Result<ResolvedMember, ModelError> {
    if !self.shapes.contains_key(&reference.shape) {
      return Err(ModelError::MissingShape {
        shape: reference.shape.clone(),
        referenced_by: format!("{owner}.{wire_name}"),
      });
    }

    let mut targets = vec![];
    self.collect_targets(&reference.shape, &mut targets, &mut vec![])?;

    Ok(ResolvedMember {
      wire_name: wire_name.to_string(),
      shape: reference.shape.clone(),
      targets,
      type_ref: self.target_type(&reference.shape, &mut vec![])?,
      required,
      documentation: reference.documentation.clone(),
    })
  }

  fn lookup(&self, name: &str, referenced_by: &str) -> Result<&ShapeDef, ModelError> {
    self.shapes.get(name).ok_or_else(|| ModelError::MissingShape {
      shape: name.to_string(),
      referenced_by: referenced_by.to_string(),
    })
  }

  /// The Rust type for a reference to `name`, descending through wrappers.
  fn target_type(&self, name: &str, wrappers: &mut Vec<String>) -> Result<TypeRef, ModelError> {
    let def = self.lookup(name, wrappers.last().map_or(name, String::as_str))?;
    let kind = classify(name, def)?;

    if kind.is_wrapper() {
      enter_wrapper(name, wrappers)?;
    }

    let target = match kind {
      ShapeKind::Scalar => match RustPrimitive::from_kind(&def.kind) {
        Some(primitive) => TypeRef::Primitive(primitive),
        None => {
          return Err(ModelError::UnknownShapeKind {
            shape: name.to_string(),
            kind: def.kind.clone(),
          });
        }
      },
      ShapeKind::Structure | ShapeKind::Enum => TypeRef::named(name),
      ShapeKind::List => {
        let element = wrapper_part(name, def, "member")?;
        TypeRef::List(Box::new(self.target_type(&element.shape, wrappers)?))
      }
      ShapeKind::Map => {
        let key = wrapper_part(name, def, "key")?;
        let value = wrapper_part(name, def, "value")?;
        TypeRef::Map(
          Box::new(self.target_type(&key.shape, wrappers)?),
          Box::new(self.target_type(&value.shape, wrappers)?),
        )
      }
    };

    if kind.is_wrapper() {
      wrappers.pop();
    }
    Ok(target)
  }

  fn collect_targets(&self, name: &str, targets: &mut Vec<String>, wrappers: &mut Vec<String>) -> Result<(), ModelError> {
    let def = self.lookup(name, wrappers.last().map_or(name, String::as_str))?;
    let kind = classify(name, def)?;

    if !kind.is_wrapper() {
      if !targets.iter().any(|target| target == name) {
        targets.push(name.to_string());
      }
      return Ok(());
    }

    enter_wrapper(name, wrappers)?;
    let parts: &[&str] = if kind == ShapeKind::List { &["member"] } else { &["key", "value"] };
    for part in parts {
      let reference = wrapper_part(name, def, part)?;
      self.collect_targets(&reference.shape, targets, wrappers)?;
    }
    wrappers.pop();
    Ok(())
  }
}

fn classify(name: &str, def: &ShapeDef) -> Result<ShapeKind, ModelError> {
  match def.kind.as_str() {
    "structure" => Ok(ShapeKind::Structure),
    "list" => Ok(ShapeKind::List),
    "map" => Ok(ShapeKind::Map),
    "string" if !def.enum_values.is_empty() => Ok(ShapeKind::Enum),
    kind if RustPrimitive::from_kind(kind).is_some() => Ok(ShapeKind::Scalar),
    kind => Err(ModelError::UnknownShapeKind {
      shape: name.to_string(),
      kind: kind.to_string(),
    }),
  }
}

fn wrapper_part<'d>(name: &str, def: &'d ShapeDef, part: &str) -> Result<&'d ShapeRef, ModelError> {
  let reference = match part {
    "member" => def.member.as_ref(),
    "key" => def.key.as_ref(),
    _ => def.value.as_ref(),
  };
  reference.ok_or_else(|| ModelError::MalformedWrapper {
    shape: name.to_string(),
    kind: def.kind.clone(),
    part: part.to_string(),
  })
}

fn enter_wrapper(name: &str, wrappers: &mut Vec<String>) -> Result<(), ModelError> {
  if let Some(first) = wrappers.iter().position(|wrapper| wrapper == name) {
    return Err(ModelError::RecursiveWrapper {
      shape: name.to_string(),
      via: wrappers[first..].join(" -> "),
    });
  }
  wrappers.push(name.to_string());
  Ok(())
}
