use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::generator::{
  model::OperationDef,
  shape_resolver::{ResolvedMember, ShapeKind, ShapeResolver},
};

/// Statuses after which a job-like resource no longer changes on its own.
pub(crate) const TERMINAL_STATES: [&str; 6] = ["Completed", "Stopped", "Deleted", "Failed", "Succeeded", "Cancelled"];

const JOB_SUFFIX: &str = "Job";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleRole {
  Create,
  Get,
  Refresh,
  Update,
  Delete,
  Stop,
  Wait,
  WaitForStatus,
}

impl LifecycleRole {
  /// Operation name prefix that binds an operation to this role.
  pub const fn operation_prefix(self) -> Option<&'static str> {
    match self {
      Self::Create => Some("Create"),
      Self::Get => Some("Describe"),
      Self::Update => Some("Update"),
      Self::Delete => Some("Delete"),
      Self::Stop => Some("Stop"),
      Self::Refresh | Self::Wait | Self::WaitForStatus => None,
    }
  }

  fn matching(operation: &str, resource: &str) -> Option<Self> {
    Self::iter().find(|role| {
      role
        .operation_prefix()
        .and_then(|prefix| operation.strip_prefix(prefix))
        .is_some_and(|rest| rest == resource)
    })
  }
}

/// The status attribute found on a resource's describe output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAttribute {
  pub member: String,
  pub enum_values: Vec<String>,
  pub terminal_states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceActionPlan {
  pub name: String,
  pub roles: BTreeMap<LifecycleRole, String>,
  /// Operations mentioning the resource without matching a role.
  pub raw_actions: Vec<String>,
  pub status: Option<StatusAttribute>,
}

impl ResourceActionPlan {
  fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      roles: BTreeMap::new(),
      raw_actions: vec![],
      status: None,
    }
  }

  pub fn operation(&self, role: LifecycleRole) -> Option<&str> {
    self.roles.get(&role).map(String::as_str)
  }

  pub fn has_role(&self, role: LifecycleRole) -> bool {
    self.roles.contains_key(&role)
  }

  pub fn is_read_only(&self) -> bool {
    !self.has_role(LifecycleRole::Create)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SkipReason {
  #[strum(to_string = "no Create or Describe operation")]
  NoOperations,
  #[strum(to_string = "Create operation without a Describe operation")]
  MissingGet,
  #[strum(to_string = "Describe operation has no output shape")]
  MissingGetOutput,
}

/// How a single operation was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
  pub resource: String,
  /// `None` for raw actions.
  pub role: Option<LifecycleRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePlan {
  pub resources: IndexMap<String, ResourceActionPlan>,
  pub read_only: Vec<String>,
  pub skipped: Vec<(String, SkipReason)>,
  /// Operations that mention no candidate resource at all.
  pub unmatched: Vec<String>,
  pub assignments: IndexMap<String, Assignment>,
}

impl ResourcePlan {
  #[cfg(test)]
  pub(crate) fn get(&self, resource: &str) -> Option<&ResourceActionPlan> {
    self.resources.get(resource)
  }

  /// Drops resources the caller filtered out.
  pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
    self.resources.retain(|name, _| keep(name));
    self.read_only.retain(|name| keep(name));
    self.skipped.retain(|(name, _)| keep(name));
    self.assignments.retain(|_, assignment| keep(&assignment.resource));
  }
}

/// Classifies operations into per-resource lifecycle plans.
pub(crate) struct ResourcePlanner<'a> {
  operations: &'a IndexMap<String, OperationDef>,
  resolver: &'a ShapeResolver,
}

impl<'a> ResourcePlanner<'a> {
  pub(crate) fn new(operations: &'a IndexMap<String, OperationDef>, resolver: &'a ShapeResolver) -> Self {
    Self { operations, resolver }
  }

  /// Suffixes of `Create<R>` and `Describe<R>` operations, in operation order.
  pub(crate) fn candidate_names(&self) -> Vec<String> {
    self
      .operations
      .keys()
      .filter_map(|name| {
        [LifecycleRole::Create, LifecycleRole::Get]
          .into_iter()
          .filter_map(LifecycleRole::operation_prefix)
          .find_map(|prefix| name.strip_prefix(prefix))
      })
      .filter(|suffix| !suffix.is_empty())
      .map(String::from)
      .unique()
      .collect()
  }

  pub(crate) fn plan(&self, candidates: &[String]) -> ResourcePlan {
    let candidates: IndexSet<&str> = candidates.iter().map(String::as_str).collect();
    let mut plans: IndexMap<String, ResourceActionPlan> = candidates
      .iter()
      .map(|name| (name.to_string(), ResourceActionPlan::new(name)))
      .collect();
    let mut plan = ResourcePlan::default();

    for operation in self.operations.keys() {
      let assignment = classify(operation, &candidates);
      match &assignment {
        Some(Assignment {
          resource,
          role: Some(role),
        }) => {
          if let Some(resource) = plans.get_mut(resource) {
            resource.roles.insert(*role, operation.clone());
          }
        }
        Some(Assignment { resource, role: None }) => {
          if let Some(resource) = plans.get_mut(resource) {
            resource.raw_actions.push(operation.clone());
          }
        }
        None => plan.unmatched.push(operation.clone()),
      }
      if let Some(assignment) = assignment {
        plan.assignments.insert(operation.clone(), assignment);
      }
    }

    for (name, mut resource) in plans {
      let has_create = resource.has_role(LifecycleRole::Create);
      let Some(get) = resource.operation(LifecycleRole::Get).map(String::from) else {
        let reason = if has_create {
          SkipReason::MissingGet
        } else {
          SkipReason::NoOperations
        };
        plan.skipped.push((name, reason));
        continue;
      };

      let Some(output) = self.operations.get(&get).and_then(OperationDef::output_shape) else {
        plan.skipped.push((name, SkipReason::MissingGetOutput));
        continue;
      };

      resource.roles.insert(LifecycleRole::Refresh, get.clone());
      resource.status = self.status_attribute(&name, output);
      if resource.status.is_some() {
        resource.roles.insert(LifecycleRole::WaitForStatus, get.clone());
        if name.ends_with(JOB_SUFFIX) {
          resource.roles.insert(LifecycleRole::Wait, get);
        }
      }

      if resource.is_read_only() {
        plan.read_only.push(name.clone());
      }
      plan.resources.insert(name, resource);
    }

    plan
  }

  /// `<Resource>Status` or `Status` on the describe output, when it is a
  /// string or enum member.
  fn status_attribute(&self, resource: &str, output_shape: &str) -> Option<StatusAttribute> {
    let output = self.resolver.get(output_shape)?;
    let member = [format!("{resource}Status"), "Status".to_string()]
      .iter()
      .find_map(|name| output.member(name))?;

    let enum_values = self.status_enum_values(member)?;
    let terminal_states = terminal_states(&enum_values);

    Some(StatusAttribute {
      member: member.wire_name.clone(),
      enum_values,
      terminal_states,
    })
  }

  /// `None` when the member is not string-like.
  fn status_enum_values(&self, member: &ResolvedMember) -> Option<Vec<String>> {
    let shape = self.resolver.get(&member.shape)?;
    match shape.kind {
      ShapeKind::Enum => Some(shape.enum_values.clone()),
      ShapeKind::Scalar if member.type_ref.is_string() => Some(vec![]),
      _ => None,
    }
  }
}

/// Exact role match against any candidate first, then a raw action of the
/// longest candidate the name contains.
fn classify(operation: &str, candidates: &IndexSet<&str>) -> Option<Assignment> {
  if let Some((resource, role)) = candidates
    .iter()
    .find_map(|candidate| LifecycleRole::matching(operation, candidate).map(|role| (*candidate, role)))
  {
    return Some(Assignment {
      resource: resource.to_string(),
      role: Some(role),
    });
  }

  candidates
    .iter()
    .filter(|candidate| operation.contains(**candidate))
    .max_by_key(|candidate| candidate.len())
    .map(|resource| Assignment {
      resource: (*resource).to_string(),
      role: None,
    })
}

/// Enum values in the terminal set, compared case-insensitively and kept in
/// the enum's own spelling. Falls back to the whole set.
fn terminal_states(enum_values: &[String]) -> Vec<String> {
  let matched: Vec<String> = enum_values
    .iter()
    .filter(|value| TERMINAL_STATES.iter().any(|state| state.eq_ignore_ascii_case(value)))
    .cloned()
    .collect();

  if matched.is_empty() {
    TERMINAL_STATES.iter().map(ToString::to_string).collect()
  } else {
    matched
  }
}
