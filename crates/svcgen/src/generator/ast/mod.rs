mod classes;
mod documentation;
mod resources;
mod tokens;
mod types;


pub(crate) use classes::{ClassDef, EnumDef, FieldDef, ShapeItem};
pub(crate) use documentation::Documentation;
pub(crate) use resources::{
  IdentifierSource, InputBinding, InputSource, MethodDef, MethodKind, ParamDef, ResourceDef, StatusBinding,
};
pub(crate) use tokens::{FieldToken, MethodToken, TypeToken};
pub(crate) use types::{RustPrimitive, TypeRef};
