use crate::generator::naming::identifiers::{UniqueNames, sanitize, to_rust_field_name, to_rust_type_name};

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("ml.t2.medium"), "ml_t2_medium");
  assert_eq!(sanitize("--a  b--"), "a_b");
  assert_eq!(sanitize("café"), "cafe");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_field_names() {
  assert_eq!(to_rust_field_name("WidgetName"), "widget_name");
  assert_eq!(to_rust_field_name("foo-bar"), "foo_bar");
  assert_eq!(to_rust_field_name("match"), "r#match");
  assert_eq!(to_rust_field_name("Type"), "r#type");
  assert_eq!(to_rust_field_name("self"), "self_");
  assert_eq!(to_rust_field_name("Crate"), "crate_");
  assert_eq!(to_rust_field_name("super"), "super_");
  assert_eq!(to_rust_field_name("123name"), "_123name");
  assert_eq!(to_rust_field_name(""), "_");
  assert_eq!(to_rust_field_name("  "), "_");
}

#[test]
fn test_field_names_keep_acronyms_together() {
  assert_eq!(to_rust_field_name("AutoMLJobName"), "auto_ml_job_name");
  assert_eq!(to_rust_field_name("KmsKeyId"), "kms_key_id");
  assert_eq!(to_rust_field_name("KMSKeyId"), "kms_key_id");
  assert_eq!(to_rust_field_name("S3Uri"), "s3_uri");
  assert_eq!(to_rust_field_name("IN_PROGRESS"), "in_progress");
}

#[test]
fn test_operation_names_to_methods() {
  assert_eq!(to_rust_field_name("DescribeTrainingJob"), "describe_training_job");
  assert_eq!(to_rust_field_name("CreateAutoMLJobV2"), "create_auto_ml_job_v2");
}

#[test]
fn test_type_names_preserve_pascal_case() {
  assert_eq!(to_rust_type_name("DescribeWidgetResponse"), "DescribeWidgetResponse");
  assert_eq!(to_rust_type_name("AutoMLJobStatus"), "AutoMLJobStatus");
  assert_eq!(to_rust_type_name("oAuth"), "OAuth");
}

#[test]
fn test_type_names_from_enum_values() {
  assert_eq!(to_rust_type_name("InService"), "InService");
  assert_eq!(to_rust_type_name("IN_PROGRESS"), "InProgress");
  assert_eq!(to_rust_type_name("PENDING"), "Pending");
  assert_eq!(to_rust_type_name("ml.t2.medium"), "MlT2Medium");
  assert_eq!(to_rust_type_name("123Response"), "T123Response");
  assert_eq!(to_rust_type_name(""), "Unnamed");
  assert_eq!(to_rust_type_name("  "), "Unnamed");
}

#[test]
fn test_type_names_avoid_prelude_collisions() {
  assert_eq!(to_rust_type_name("String"), "StringShape");
  assert_eq!(to_rust_type_name("Vec"), "VecShape");
  assert_eq!(to_rust_type_name("Self"), "SelfShape");
}

#[test]
fn test_unique_names_compare_like_builder_setters() {
  let mut names = UniqueNames::reserving(&["client"]);

  assert_eq!(names.claim("r#type".to_string()), "r#type");
  assert_eq!(names.claim("type_".to_string()), "type_2");
  assert_eq!(names.claim("widget_name".to_string()), "widget_name");
  assert_eq!(names.claim("widgetname".to_string()), "widgetname_2");
  assert_eq!(names.claim("client".to_string()), "client_2");
}
