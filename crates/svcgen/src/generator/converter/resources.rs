use std::collections::HashMap;

use indexmap::IndexMap;

use crate::generator::{
  ast::{
    Documentation, FieldDef, FieldToken, IdentifierSource, InputBinding, InputSource, MethodDef, MethodKind,
    MethodToken, ParamDef, ResourceDef, StatusBinding, TypeToken,
  },
  converter::ShapeConverter,
  metrics::GenerationWarning,
  model::OperationDef,
  naming::identifiers::UniqueNames,
  resource_planner::{LifecycleRole, ResourceActionPlan},
  shape_resolver::{ResolvedMember, ResolvedShape, ShapeKind, ShapeResolver},
};

/// Field names the generated struct reserves for itself.
const RESERVED_FIELDS: &[&str] = &["client"];

/// Parameter names that would shadow locals or arguments of generated methods.
const RESERVED_PARAMS: &[&str] = &["client", "config", "handle", "request", "resource", "response"];

/// Builds resource class definitions from action plans.
pub(crate) struct ResourceConverter<'a> {
  operations: &'a IndexMap<String, OperationDef>,
  resolver: &'a ShapeResolver,
  shapes: &'a ShapeConverter<'a>,
}

/// The describe output as seen from generated methods: wire name -> field.
struct Attributes<'f> {
  by_wire: HashMap<&'f str, &'f FieldDef>,
}

impl<'f> Attributes<'f> {
  fn new(fields: &'f [FieldDef]) -> Self {
    Self {
      by_wire: fields.iter().map(|field| (field.wire_name.as_str(), field)).collect(),
    }
  }

  fn get(&self, wire_name: &str) -> Option<&'f FieldDef> {
    self.by_wire.get(wire_name).copied()
  }

  fn binding(&self, wire_name: &str) -> Option<InputSource> {
    self.get(wire_name).map(|field| InputSource::Attribute {
      field: field.name.clone(),
      optional: !field.required,
    })
  }
}

impl<'a> ResourceConverter<'a> {
  pub(crate) fn new(
    operations: &'a IndexMap<String, OperationDef>,
    resolver: &'a ShapeResolver,
    shapes: &'a ShapeConverter<'a>,
  ) -> Self {
    Self {
      operations,
      resolver,
      shapes,
    }
  }

  /// Converts one plan. `Err` carries the warning explaining why the
  /// resource was dropped; `Ok` may still carry warnings for omitted methods.
  pub(crate) fn convert(
    &self,
    plan: &ResourceActionPlan,
  ) -> Result<(ResourceDef, Vec<GenerationWarning>), GenerationWarning> {
    let skip = |reason: String| GenerationWarning::skipped(&plan.name, reason);

    let get_operation = plan
      .operation(LifecycleRole::Get)
      .ok_or_else(|| skip("no Describe operation".to_string()))?;
    let output = self
      .output_shape(get_operation)
      .ok_or_else(|| skip(format!("{get_operation} has no output shape")))?;

    let fields = self.shapes.fields(output, RESERVED_FIELDS);
    let attributes = Attributes::new(&fields);
    let describe_input = self.input_shape(get_operation);

    let mut warnings = vec![];
    let mut methods = vec![];

    let get_params = describe_input.map(params).unwrap_or_default();

    for (role, operation) in &plan.roles {
      let kind = match role {
        LifecycleRole::Create => match self.create_kind(operation, &get_params) {
          Ok(kind) => kind,
          Err(reason) => {
            warnings.push(GenerationWarning::CreateOmitted {
              resource: plan.name.clone(),
              reason,
            });
            continue;
          }
        },
        LifecycleRole::Get => MethodKind::Get {
          params: get_params.clone(),
        },
        LifecycleRole::Refresh => MethodKind::Refresh {
          inputs: refresh_inputs(describe_input, &attributes).map_err(skip)?,
        },
        LifecycleRole::Delete | LifecycleRole::Stop => {
          let (inputs, params) = self.bind_inputs(operation, &attributes, |_| true);
          MethodKind::Action { inputs, params }
        }
        LifecycleRole::Update => {
          let identifiers: Vec<&str> = describe_input
            .map(|shape| shape.members.iter().map(|m| m.wire_name.as_str()).collect())
            .unwrap_or_default();
          let (inputs, params) = self.bind_inputs(operation, &attributes, |wire| identifiers.contains(&wire));
          MethodKind::Update { inputs, params }
        }
        LifecycleRole::WaitForStatus => MethodKind::WaitForStatus,
        LifecycleRole::Wait => MethodKind::Wait,
      };

      methods.push(MethodDef {
        role: *role,
        name: MethodToken::from(role.to_string().as_str()),
        operation: operation.clone(),
        docs: self.method_docs(*role, operation, plan),
        kind,
      });
    }

    let status = plan
      .status
      .as_ref()
      .and_then(|status| attributes.get(&status.member))
      .map(|field| self.status_binding(output, field));

    if status.is_none() {
      methods.retain(|method| !matches!(method.kind, MethodKind::Wait | MethodKind::WaitForStatus));
    }

    let terminal_states = match (&status, &plan.status) {
      (Some(_), Some(attribute)) if plan.has_role(LifecycleRole::Wait) => attribute.terminal_states.clone(),
      _ => vec![],
    };

    let mut docs = Documentation::from_lines([format!("The `{}` resource, hydrated by `{get_operation}`.", plan.name)]);
    if let Some(doc) = output.documentation.as_deref() {
      docs.push("");
      for line in Documentation::from_html(doc).lines() {
        docs.push(line.clone());
      }
    }

    let resource = ResourceDef {
      name: TypeToken::from_wire(&plan.name),
      resource_type: plan.name.clone(),
      docs,
      fields,
      methods,
      status,
      terminal_states,
    };

    Ok((resource, warnings))
  }

  fn input_shape(&self, operation: &str) -> Option<&'a ResolvedShape> {
    let shape = self.operations.get(operation)?.input_shape()?;
    self.resolver.get(shape)
  }

  fn output_shape(&self, operation: &str) -> Option<&'a ResolvedShape> {
    let shape = self.operations.get(operation)?.output_shape()?;
    self.resolver.get(shape).filter(|shape| shape.kind == ShapeKind::Structure)
  }

  fn create_kind(&self, operation: &str, get_params: &[ParamDef]) -> Result<MethodKind, String> {
    let create_params = self.input_shape(operation).map(params).unwrap_or_default();
    let create_output = self.output_shape(operation);

    let get_args = get_params
      .iter()
      .map(|get_param| {
        let matching = create_params
          .iter()
          .find(|p| p.wire_name == get_param.wire_name && p.type_ref == get_param.type_ref);

        match (matching, get_param.required) {
          (Some(create_param), true) if create_param.required => Ok(IdentifierSource::Param(create_param.name.clone())),
          (Some(create_param), false) if create_param.required => {
            Ok(IdentifierSource::WrappedParam(create_param.name.clone()))
          }
          (Some(create_param), false) => Ok(IdentifierSource::Param(create_param.name.clone())),
          (_, true) if create_output.is_some_and(|out| out.member(&get_param.wire_name).is_some()) => {
            Ok(IdentifierSource::Response {
              wire_name: get_param.wire_name.clone(),
              type_ref: get_param.type_ref.clone(),
            })
          }
          (_, true) => Err(format!(
            "'{}' is neither a create argument nor part of the {operation} response",
            get_param.wire_name
          )),
          (None, false) => Ok(IdentifierSource::Unassigned),
        }
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(MethodKind::Create {
      params: create_params,
      get_args,
    })
  }

  /// Input members found in `attributes` (and accepted by `from_self`) come
  /// from the instance, everything else becomes a parameter.
  fn bind_inputs(
    &self,
    operation: &str,
    attributes: &Attributes<'_>,
    from_self: impl Fn(&str) -> bool,
  ) -> (Vec<InputBinding>, Vec<ParamDef>) {
    let Some(input) = self.input_shape(operation) else {
      return (vec![], vec![]);
    };

    let mut names = UniqueNames::reserving(RESERVED_PARAMS);
    let mut params = vec![];
    let inputs = input
      .members
      .iter()
      .map(|member| {
        let source = attributes
          .binding(&member.wire_name)
          .filter(|_| from_self(&member.wire_name))
          .unwrap_or_else(|| {
            let param = param(member, &mut names);
            let source = InputSource::Param {
              field: param.name.clone(),
              optional: !param.required,
            };
            params.push(param);
            source
          });
        InputBinding {
          wire_name: member.wire_name.clone(),
          source,
        }
      })
      .collect();

    (inputs, order_params(params))
  }

  fn status_binding(&self, output: &ResolvedShape, field: &FieldDef) -> StatusBinding {
    let is_enum = output
      .member(&field.wire_name)
      .and_then(|member| self.resolver.get(&member.shape))
      .is_some_and(|shape| shape.kind == ShapeKind::Enum);

    StatusBinding {
      field: field.name.clone(),
      wire_name: field.wire_name.clone(),
      required: field.required,
      enum_type: is_enum.then(|| field.type_ref.clone()),
    }
  }

  fn method_docs(&self, role: LifecycleRole, operation: &str, plan: &ResourceActionPlan) -> Documentation {
    match role {
      LifecycleRole::Create => Documentation::from_lines([
        format!("Calls `{operation}`, then fetches the new resource with `get`."),
      ]),
      LifecycleRole::Refresh => Documentation::from_lines([format!(
        "Re-reads this resource with `{operation}`. Attributes missing from the response keep their values."
      )]),
      LifecycleRole::Update => {
        Documentation::from_lines([format!("Calls `{operation}` and refreshes the instance afterwards.")])
      }
      LifecycleRole::WaitForStatus => Documentation::from_lines([
        "Refreshes until the status attribute equals `status`.".to_string(),
        String::new(),
        "Fails with `ResourceError::Timeout` once `config.timeout` has elapsed.".to_string(),
      ]),
      LifecycleRole::Wait => Documentation::from_lines([format!(
        "Refreshes until `{}` reaches one of `TERMINAL_STATES`.",
        plan.status.as_ref().map_or("the status", |status| status.member.as_str())
      )]),
      LifecycleRole::Get | LifecycleRole::Delete | LifecycleRole::Stop => self
        .operations
        .get(operation)
        .map(|op| Documentation::from_optional(op.documentation.as_deref()))
        .unwrap_or_default(),
    }
  }
}

fn refresh_inputs(describe_input: Option<&ResolvedShape>, attributes: &Attributes<'_>) -> Result<Vec<InputBinding>, String> {
  let Some(input) = describe_input else {
    return Ok(vec![]);
  };

  input
    .members
    .iter()
    .filter_map(|member| match attributes.binding(&member.wire_name) {
      Some(source) => Some(Ok(InputBinding {
        wire_name: member.wire_name.clone(),
        source,
      })),
      None if member.required => Some(Err(format!(
        "required input '{}' of {} is not an attribute of the response",
        member.wire_name, input.name
      ))),
      None => None,
    })
    .collect()
}

/// Parameters for every member of an input shape, required ones first.
fn params(shape: &ResolvedShape) -> Vec<ParamDef> {
  let mut names = UniqueNames::reserving(RESERVED_PARAMS);
  order_params(shape.members.iter().map(|member| param(member, &mut names)).collect())
}

fn order_params(params: Vec<ParamDef>) -> Vec<ParamDef> {
  let (required, optional): (Vec<_>, Vec<_>) = params.into_iter().partition(|param| param.required);
  required.into_iter().chain(optional).collect()
}

fn param(member: &ResolvedMember, names: &mut UniqueNames) -> ParamDef {
  let name = names.claim(FieldToken::from_wire(&member.wire_name).to_string());

  ParamDef {
    name: FieldToken::from(name.as_str()),
    wire_name: member.wire_name.clone(),
    type_ref: member.type_ref.clone(),
    required: member.required,
  }
}
