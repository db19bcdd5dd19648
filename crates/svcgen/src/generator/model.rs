use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::generator::errors::ModelError;

const SUPPORTED_PROTOCOL: &str = "json";

/// A botocore-style `service-2.json` document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceModel {
  #[serde(default)]
  pub metadata: ServiceMetadata,
  #[serde(default)]
  pub operations: IndexMap<String, OperationDef>,
  #[serde(default)]
  pub shapes: IndexMap<String, ShapeDef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
  pub api_version: Option<String>,
  pub protocol: Option<String>,
  pub service_full_name: Option<String>,
  pub service_id: Option<String>,
  pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationDef {
  pub input: Option<ShapeRef>,
  pub output: Option<ShapeRef>,
  pub documentation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShapeRef {
  pub shape: String,
  pub documentation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeDef {
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub members: IndexMap<String, ShapeRef>,
  #[serde(default)]
  pub required: Vec<String>,
  pub member: Option<ShapeRef>,
  pub key: Option<ShapeRef>,
  pub value: Option<ShapeRef>,
  #[serde(default, rename = "enum")]
  pub enum_values: Vec<String>,
  pub documentation: Option<String>,
}

impl OperationDef {
  pub fn input_shape(&self) -> Option<&str> {
    self.input.as_ref().map(|r| r.shape.as_str())
  }

  pub fn output_shape(&self) -> Option<&str> {
    self.output.as_ref().map(|r| r.shape.as_str())
  }
}

impl ServiceModel {
  pub fn from_slice(bytes: &[u8]) -> anyhow::Result<Self> {
    Ok(serde_json::from_slice(bytes)?)
  }

  /// Folds `other` into this model. Operations and shapes from `other` win
  /// on name collisions; metadata is only taken where this model has none.
  pub fn merge(&mut self, other: ServiceModel) {
    let ServiceModel {
      metadata,
      operations,
      shapes,
    } = other;

    self.metadata.api_version = self.metadata.api_version.take().or(metadata.api_version);
    self.metadata.protocol = self.metadata.protocol.take().or(metadata.protocol);
    self.metadata.service_full_name = self.metadata.service_full_name.take().or(metadata.service_full_name);
    self.metadata.service_id = self.metadata.service_id.take().or(metadata.service_id);
    self.metadata.uid = self.metadata.uid.take().or(metadata.uid);

    self.operations.extend(operations);
    self.shapes.extend(shapes);
  }

  /// Rejects models whose wire protocol the generated resources cannot speak.
  pub fn validate_protocol(&self) -> Result<(), ModelError> {
    match self.metadata.protocol.as_deref() {
      None | Some(SUPPORTED_PROTOCOL) => Ok(()),
      Some(other) => Err(ModelError::UnsupportedProtocol {
        protocol: other.to_string(),
      }),
    }
  }

  /// Every operation must point at shapes that exist.
  pub fn validate_operations(&self) -> Result<(), ModelError> {
    for (name, operation) in &self.operations {
      for (direction, shape) in [("input", operation.input_shape()), ("output", operation.output_shape())] {
        if let Some(shape) = shape
          && !self.shapes.contains_key(shape)
        {
          return Err(ModelError::OperationShapeMissing {
            operation: name.clone(),
            direction: direction.to_string(),
            shape: shape.to_string(),
          });
        }
      }
    }
    Ok(())
  }

  /// Shapes that appear directly as an operation's input or output.
  pub fn operation_shapes(&self) -> IndexSet<&str> {
    self
      .operations
      .values()
      .flat_map(|op| [op.input_shape(), op.output_shape()])
      .flatten()
      .collect()
  }

  pub fn display_name(&self) -> &str {
    self
      .metadata
      .service_full_name
      .as_deref()
      .or(self.metadata.service_id.as_deref())
      .unwrap_or("Unnamed service")
  }
}
