use std::{
  fmt::{Debug, Formatter},
  sync::Arc,
};

use serde_json::Value;

use crate::{body::RequestBody, error::ResourceError};

/// Failure reported by an [`ApiClient`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {message}")]
pub struct ClientError {
  pub operation: String,
  pub code: Option<String>,
  pub message: String,
}

impl ClientError {
  pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      operation: operation.into(),
      code: None,
      message: message.into(),
    }
  }

  #[must_use]
  pub fn with_code(mut self, code: impl Into<String>) -> Self {
    self.code = Some(code.into());
    self
  }
}

/// The transport used by generated resources.
///
/// Implementations own session, credential and region handling. Every
/// lifecycle method issues exactly one `invoke` per remote action; nothing is
/// retried at this layer.
pub trait ApiClient: Debug + Send + Sync {
  fn invoke(&self, operation: &str, request: Value) -> Result<Value, ClientError>;

  fn region(&self) -> Option<&str> {
    None
  }
}

pub type SharedClient = Arc<dyn ApiClient>;

/// Client slot carried by every generated resource instance.
///
/// Not serialized. Instances deserialized outside of `get`/`create` start
/// unbound and fail with [`ResourceError::Unbound`] on the first remote call.
#[derive(Clone, Default)]
pub struct ClientHandle(Option<SharedClient>);

impl ClientHandle {
  #[must_use]
  pub fn bound(client: &SharedClient) -> Self {
    Self(Some(Arc::clone(client)))
  }

  #[must_use]
  pub const fn is_bound(&self) -> bool {
    self.0.is_some()
  }

  #[must_use]
  pub const fn client(&self) -> Option<&SharedClient> {
    self.0.as_ref()
  }

  pub fn invoke(&self, resource_type: &str, operation: &str, request: RequestBody) -> Result<Value, ResourceError> {
    let Some(client) = &self.0 else {
      return Err(ResourceError::Unbound {
        resource_type: resource_type.to_string(),
      });
    };

    tracing::debug!(resource_type, operation, "invoking remote operation");
    let response = client.invoke(operation, request.into_value())?;
    tracing::debug!(resource_type, operation, "remote operation succeeded");
    Ok(response)
  }
}

impl Debug for ClientHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.0 {
      Some(client) => f.debug_tuple("ClientHandle").field(client).finish(),
      None => f.write_str("ClientHandle(unbound)"),
    }
  }
}
