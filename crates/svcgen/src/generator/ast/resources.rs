use crate::generator::{
  ast::{Documentation, FieldDef, FieldToken, MethodToken, TypeRef, TypeToken},
  resource_planner::LifecycleRole,
};

/// A resource class: attributes from the describe output plus lifecycle
/// methods bound to operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDef {
  pub name: TypeToken,
  pub resource_type: String,
  pub docs: Documentation,
  pub fields: Vec<FieldDef>,
  pub methods: Vec<MethodDef>,
  pub status: Option<StatusBinding>,
  pub terminal_states: Vec<String>,
}

impl ResourceDef {
  pub fn method(&self, role: LifecycleRole) -> Option<&MethodDef> {
    self.methods.iter().find(|method| method.role == role)
  }

  pub fn has_role(&self, role: LifecycleRole) -> bool {
    self.method(role).is_some()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBinding {
  pub field: FieldToken,
  pub wire_name: String,
  pub required: bool,
  /// The generated enum, when the status shape carries enum values.
  pub enum_type: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
  pub role: LifecycleRole,
  pub name: MethodToken,
  /// The bound operation; empty for the wait methods.
  pub operation: String,
  pub docs: Documentation,
  pub kind: MethodKind,
}

/// A method parameter taken from an operation input member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
  pub name: FieldToken,
  pub wire_name: String,
  pub type_ref: TypeRef,
  pub required: bool,
}

/// Where a request member's value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
  Attribute { field: FieldToken, optional: bool },
  Param { field: FieldToken, optional: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBinding {
  pub wire_name: String,
  pub source: InputSource,
}

/// How `create` fills each `get` argument once the create call returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierSource {
  /// Pass the create argument of the same name through unchanged.
  Param(FieldToken),
  /// A required create argument feeding an optional get argument.
  WrappedParam(FieldToken),
  /// Read the member out of the create response.
  Response { wire_name: String, type_ref: TypeRef },
  Unassigned,
}

impl IdentifierSource {
  pub const fn reads_response(&self) -> bool {
    matches!(self, Self::Response { .. })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
  Create {
    params: Vec<ParamDef>,
    get_args: Vec<IdentifierSource>,
  },
  Get {
    params: Vec<ParamDef>,
  },
  Refresh {
    inputs: Vec<InputBinding>,
  },
  /// `delete` and `stop`.
  Action {
    inputs: Vec<InputBinding>,
    params: Vec<ParamDef>,
  },
  Update {
    inputs: Vec<InputBinding>,
    params: Vec<ParamDef>,
  },
  WaitForStatus,
  Wait,
}
