use crate::client::ClientError;

/// Errors returned by generated resource methods.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
  /// The remote call failed. Propagated unmodified from the client.
  #[error(transparent)]
  Client(#[from] ClientError),
  #[error(
    "Timeout exceeded while waiting for {resource_type}. Final Resource State: {status}. Increase the timeout and try again."
  )]
  Timeout { resource_type: String, status: String },
  #[error("failed to (de)serialize {context}: {source}")]
  Serialization {
    context: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("response for {operation} is missing required field '{field}'")]
  MissingField { operation: String, field: String },
  #[error("{resource_type} has no client attached; obtain it through get or create")]
  Unbound { resource_type: String },
  #[error("expected a JSON object for {context}, found {found}")]
  UnexpectedBody { context: String, found: String },
}

impl ResourceError {
  pub(crate) fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
    Self::Serialization {
      context: context.into(),
      source,
    }
  }

  /// Whether this error means the resource may still converge.
  #[must_use]
  pub const fn is_timeout(&self) -> bool {
    matches!(self, Self::Timeout { .. })
  }

  /// Last status observed before a wait gave up.
  #[must_use]
  pub fn last_status(&self) -> Option<&str> {
    match self {
      Self::Timeout { status, .. } => Some(status),
      _ => None,
    }
  }
}
