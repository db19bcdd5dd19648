use crate::generator::ast::TypeToken;

/// Scalar targets of the shape resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RustPrimitive {
  String,
  I32,
  I64,
  Bool,
  F32,
  F64,
  Timestamp,
  Blob,
}

impl RustPrimitive {
  /// Maps a model scalar kind. `None` for container and structure kinds.
  pub fn from_kind(kind: &str) -> Option<Self> {
    Some(match kind {
      "string" => Self::String,
      "integer" => Self::I32,
      "long" => Self::I64,
      "boolean" => Self::Bool,
      "float" => Self::F32,
      "double" => Self::F64,
      "timestamp" => Self::Timestamp,
      "blob" => Self::Blob,
      _ => return None,
    })
  }
}

/// The Rust type of a structure member, with list/map wrappers resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
  Primitive(RustPrimitive),
  Named(TypeToken),
  List(Box<TypeRef>),
  Map(Box<TypeRef>, Box<TypeRef>),
  Boxed(Box<TypeRef>),
}

impl TypeRef {
  pub fn named(name: &str) -> Self {
    Self::Named(TypeToken::from_wire(name))
  }

  #[must_use]
  pub fn boxed(self) -> Self {
    match self {
      Self::Boxed(_) => self,
      other => Self::Boxed(Box::new(other)),
    }
  }

  pub fn is_string(&self) -> bool {
    matches!(self, Self::Primitive(RustPrimitive::String))
  }
}

impl From<RustPrimitive> for TypeRef {
  fn from(primitive: RustPrimitive) -> Self {
    Self::Primitive(primitive)
  }
}
