//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget Service: Data shapes
//! Source: service-2.json
//! Version: 2024-01-01
//! Generated by `svcgen`

/// Sizing for a widget.
#[derive(Debug, Clone, PartialEq, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize, ::svcgen_support::bon::Builder)]
#[serde(crate = "::svcgen_support::serde")]
#[builder(crate = ::svcgen_support::bon)]
pub struct WidgetConfig {
    #[serde(rename = "Size", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub size: ::svcgen_support::Field<i32>,
    #[serde(rename = "Parent", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub parent: ::svcgen_support::Field<Box<WidgetConfig>>
}
impl ::svcgen_support::Serializable for WidgetConfig {}
#[derive(Debug, Clone, PartialEq, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize, ::svcgen_support::bon::Builder)]
#[serde(crate = "::svcgen_support::serde")]
#[builder(crate = ::svcgen_support::bon)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub value: ::svcgen_support::Field<String>
}
impl ::svcgen_support::Serializable for Tag {}
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetStatus {
    Creating,
    InService,
    Deleting,
    Failed,
    /// A value this model does not list.
    Unknown(String),
}
impl WidgetStatus {
    /// The wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Creating => "Creating",
            Self::InService => "InService",
            Self::Deleting => "Deleting",
            Self::Failed => "Failed",
            Self::Unknown(value) => value.as_str(),
        }
    }
}
impl ::std::fmt::Display for WidgetStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::svcgen_support::serde::Serialize for WidgetStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ::svcgen_support::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::svcgen_support::serde::Deserialize<'de> for WidgetStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: ::svcgen_support::serde::Deserializer<'de>,
    {
        let value = <String as ::svcgen_support::serde::Deserialize>::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "Creating" => Self::Creating,
            "InService" => Self::InService,
            "Deleting" => Self::Deleting,
            "Failed" => Self::Failed,
            _ => Self::Unknown(value),
        })
    }
}
#[derive(Debug, Clone, PartialEq, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize, ::svcgen_support::bon::Builder)]
#[serde(crate = "::svcgen_support::serde")]
#[builder(crate = ::svcgen_support::bon)]
pub struct WidgetSummary {
    #[serde(rename = "WidgetName", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub widget_name: ::svcgen_support::Field<String>,
    #[serde(rename = "Labels", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub labels: ::svcgen_support::Field<::std::collections::BTreeMap<String, String>>
}
impl ::svcgen_support::Serializable for WidgetSummary {}
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrainingJobStatus {
    InProgress,
    Completed,
    Failed,
    Stopping,
    Stopped,
    /// A value this model does not list.
    Unknown(String),
}
impl TrainingJobStatus {
    /// The wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Stopping => "Stopping",
            Self::Stopped => "Stopped",
            Self::Unknown(value) => value.as_str(),
        }
    }
}
impl ::std::fmt::Display for TrainingJobStatus {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl ::svcgen_support::serde::Serialize for TrainingJobStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ::svcgen_support::serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> ::svcgen_support::serde::Deserialize<'de> for TrainingJobStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: ::svcgen_support::serde::Deserializer<'de>,
    {
        let value = <String as ::svcgen_support::serde::Deserialize>::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "InProgress" => Self::InProgress,
            "Completed" => Self::Completed,
            "Failed" => Self::Failed,
            "Stopping" => Self::Stopping,
            "Stopped" => Self::Stopped,
            _ => Self::Unknown(value),
        })
    }
}
#[derive(Debug, Clone, PartialEq, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize, ::svcgen_support::bon::Builder)]
#[serde(crate = "::svcgen_support::serde")]
#[builder(crate = ::svcgen_support::bon)]
pub struct TreeEdge {
    #[serde(rename = "Target")]
    pub target: Box<TreeNode>
}
impl ::svcgen_support::Serializable for TreeEdge {}
#[derive(Debug, Clone, PartialEq, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize, ::svcgen_support::bon::Builder)]
#[serde(crate = "::svcgen_support::serde")]
#[builder(crate = ::svcgen_support::bon)]
pub struct TreeNode {
    #[serde(rename = "Name", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub name: ::svcgen_support::Field<String>,
    #[serde(rename = "Children", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    #[builder(default, into)]
    pub children: ::svcgen_support::Field<Vec<TreeEdge>>
}
impl ::svcgen_support::Serializable for TreeNode {}
