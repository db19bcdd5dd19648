use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{error::ResourceError, field::Field};

/// Implemented by every generated shape and resource.
///
/// The wire body is the serde representation of the value: attributes still
/// holding [`Field::Unassigned`] are skipped, nested shapes and containers of
/// them serialize recursively.
pub trait Serializable: Serialize {
  fn serialize_body(&self) -> Result<Map<String, Value>, ResourceError> {
    let context = std::any::type_name::<Self>();
    match serde_json::to_value(self).map_err(|err| ResourceError::serialization(context, err))? {
      Value::Object(map) => Ok(map),
      other => Err(ResourceError::UnexpectedBody {
        context: context.to_string(),
        found: json_kind(&other).to_string(),
      }),
    }
  }
}

/// Request mapping handed to [`crate::ApiClient::invoke`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody(Map<String, Value>);

impl RequestBody {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a required member.
  pub fn insert<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<&mut Self, ResourceError> {
    let value = serde_json::to_value(value).map_err(|err| ResourceError::serialization(name, err))?;
    self.0.insert(name.to_string(), value);
    Ok(self)
  }

  /// Adds an optional member unless it is still unassigned.
  pub fn insert_field<T: Serialize>(&mut self, name: &str, value: &Field<T>) -> Result<&mut Self, ResourceError> {
    if value.is_unassigned() {
      return Ok(self);
    }
    self.insert(name, value)
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&Value> {
    self.0.get(name)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  #[must_use]
  pub fn into_value(self) -> Value {
    Value::Object(self.0)
  }
}

/// Hydrates a fresh instance from a response mapping.
pub fn from_response<T: DeserializeOwned>(operation: &str, response: Value) -> Result<T, ResourceError> {
  serde_json::from_value(response).map_err(|err| ResourceError::serialization(operation, err))
}

/// Overlays a response onto an existing instance.
///
/// Fields present in the response replace the current values, fields it
/// omits keep what `current` already held.
pub fn merge_response<T>(current: &T, operation: &str, response: Value) -> Result<T, ResourceError>
where
  T: Serialize + DeserializeOwned,
{
  let Value::Object(updates) = response else {
    return Err(ResourceError::UnexpectedBody {
      context: operation.to_string(),
      found: json_kind(&response).to_string(),
    });
  };

  let mut merged = match serde_json::to_value(current).map_err(|err| ResourceError::serialization(operation, err))? {
    Value::Object(map) => map,
    _ => Map::new(),
  };
  merged.extend(updates);

  from_response(operation, Value::Object(merged))
}

/// Reads a single member out of a response, e.g. an identifier returned by a
/// create call.
pub fn response_field<T: DeserializeOwned>(response: &Value, operation: &str, field: &str) -> Result<T, ResourceError> {
  let value = response
    .get(field)
    .filter(|value| !value.is_null())
    .ok_or_else(|| ResourceError::MissingField {
      operation: operation.to_string(),
      field: field.to_string(),
    })?;
  serde_json::from_value(value.clone()).map_err(|err| ResourceError::serialization(field, err))
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
  struct Tag {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Value", default, skip_serializing_if = "Field::is_unassigned")]
    value: Field<String>,
  }

  impl Serializable for Tag {}

  #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
  struct Config {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Field::is_unassigned")]
    description: Field<String>,
    #[serde(rename = "Tags", default, skip_serializing_if = "Field::is_unassigned")]
    tags: Field<Vec<Tag>>,
    #[serde(rename = "Count", default, skip_serializing_if = "Field::is_unassigned")]
    count: Field<i32>,
  }

  impl Serializable for Config {}

  #[test]
  fn serialize_body_omits_unassigned_and_keeps_empty() {
    let config = Config {
      name: "alpha".to_string(),
      description: Field::Value(String::new()),
      tags: Field::Value(vec![Tag {
        key: "team".to_string(),
        value: Field::Unassigned,
      }]),
      count: Field::Unassigned,
    };

    let body = config.serialize_body().unwrap();
    assert_eq!(
      Value::Object(body),
      json!({ "Name": "alpha", "Description": "", "Tags": [{ "Key": "team" }] })
    );
  }

  #[test]
  fn round_trip_is_restricted_to_declared_fields() {
    let response = json!({
      "Name": "alpha",
      "Tags": [{ "Key": "team", "Value": "core" }],
      "Count": 3,
      "Undeclared": true,
    });

    let config: Config = from_response("DescribeConfig", response).unwrap();
    assert!(config.description.is_unassigned());

    let body = config.serialize_body().unwrap();
    assert_eq!(
      Value::Object(body),
      json!({ "Name": "alpha", "Tags": [{ "Key": "team", "Value": "core" }], "Count": 3 })
    );
  }

  #[test]
  fn merge_keeps_fields_missing_from_response() {
    let current = Config {
      name: "alpha".to_string(),
      description: Field::Value("kept".to_string()),
      tags: Field::Unassigned,
      count: Field::Value(1),
    };

    let merged = merge_response(&current, "DescribeConfig", json!({ "Name": "alpha", "Count": 2 })).unwrap();
    assert_eq!(merged.description, Field::Value("kept".to_string()));
    assert_eq!(merged.count, Field::Value(2));
  }

  #[test]
  fn merge_rejects_non_object_response() {
    let current = Config {
      name: "alpha".to_string(),
      description: Field::Unassigned,
      tags: Field::Unassigned,
      count: Field::Unassigned,
    };
    let err = merge_response(&current, "DescribeConfig", json!([1, 2])).unwrap_err();
    assert!(matches!(err, ResourceError::UnexpectedBody { .. }));
  }

  #[test]
  fn request_body_skips_unassigned_fields_only() {
    let mut body = RequestBody::new();
    body
      .insert("Name", "alpha")
      .unwrap()
      .insert_field("Description", &Field::<String>::Unassigned)
      .unwrap()
      .insert_field("Count", &Field::<i32>::Null)
      .unwrap();

    assert_eq!(body.len(), 2);
    assert_eq!(body.get("Count"), Some(&Value::Null));
    assert!(body.get("Description").is_none());
  }

  #[test]
  fn response_field_reports_missing_identifier() {
    let response = json!({ "WidgetArn": "arn:widget/alpha" });
    let arn: String = response_field(&response, "CreateWidget", "WidgetArn").unwrap();
    assert_eq!(arn, "arn:widget/alpha");

    let err = response_field::<String>(&response, "CreateWidget", "WidgetName").unwrap_err();
    assert!(matches!(err, ResourceError::MissingField { ref field, .. } if field == "WidgetName"));
  }
}
