//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Widget Service: Resource classes
//! Source: service-2.json
//! Version: 2024-01-01
//! Generated by `svcgen`

#[allow(unused_imports)]
use super::shapes::*;
/// The `Widget` resource, hydrated by `DescribeWidget`.
#[derive(Debug, Clone, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize)]
#[serde(crate = "::svcgen_support::serde")]
pub struct Widget {
    #[serde(rename = "WidgetName")]
    pub widget_name: String,
    #[serde(rename = "WidgetArn")]
    pub widget_arn: String,
    #[serde(rename = "WidgetStatus", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub widget_status: ::svcgen_support::Field<WidgetStatus>,
    #[serde(rename = "WidgetConfig", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub widget_config: ::svcgen_support::Field<WidgetConfig>,
    #[serde(rename = "Tags", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub tags: ::svcgen_support::Field<Vec<Tag>>,
    #[serde(rename = "CreationTime", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub creation_time: ::svcgen_support::Field<::svcgen_support::Timestamp>,
    #[serde(skip)]
    client: ::svcgen_support::ClientHandle,
}
impl Widget {
    pub const RESOURCE_TYPE: &'static str = "Widget";
    /// Calls `CreateWidget`, then fetches the new resource with `get`.
    pub fn create(client: &::svcgen_support::SharedClient, widget_name: String, widget_config: ::svcgen_support::Field<WidgetConfig>, tags: ::svcgen_support::Field<Vec<Tag>>) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("WidgetName", &widget_name)?;
        request.insert_field("WidgetConfig", &widget_config)?;
        request.insert_field("Tags", &tags)?;
        ::svcgen_support::ClientHandle::bound(client).invoke(Self::RESOURCE_TYPE, "CreateWidget", request)?;
        Self::get(client, widget_name)
    }
    /// Returns the `Widget` details.
    pub fn get(client: &::svcgen_support::SharedClient, widget_name: String) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("WidgetName", &widget_name)?;
        let handle = ::svcgen_support::ClientHandle::bound(client);
        let response = handle.invoke(Self::RESOURCE_TYPE, "DescribeWidget", request)?;
        let mut resource: Self = ::svcgen_support::from_response("DescribeWidget", response)?;
        resource.client = handle;
        Ok(resource)
    }
    /// Re-reads this resource with `DescribeWidget`. Attributes missing from the response keep their values.
    pub fn refresh(&mut self) -> Result<&mut Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("WidgetName", &self.widget_name)?;
        let response = self.client.invoke(Self::RESOURCE_TYPE, "DescribeWidget", request)?;
        let client = self.client.clone();
        *self = ::svcgen_support::merge_response(&*self, "DescribeWidget", response)?;
        self.client = client;
        Ok(self)
    }
    /// Calls `UpdateWidget` and refreshes the instance afterwards.
    pub fn update(&mut self, widget_config: ::svcgen_support::Field<WidgetConfig>) -> Result<&mut Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("WidgetName", &self.widget_name)?;
        request.insert_field("WidgetConfig", &widget_config)?;
        self.client.invoke(Self::RESOURCE_TYPE, "UpdateWidget", request)?;
        self.refresh()
    }
    pub fn delete(&self, force: ::svcgen_support::Field<bool>) -> Result<(), ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("WidgetName", &self.widget_name)?;
        request.insert_field("Force", &force)?;
        self.client.invoke(Self::RESOURCE_TYPE, "DeleteWidget", request)?;
        Ok(())
    }
    /// Refreshes until the status attribute equals `status`.
    ///
    /// Fails with `ResourceError::Timeout` once `config.timeout` has elapsed.
    pub fn wait_for_status(&mut self, status: WidgetStatus, config: &::svcgen_support::WaitConfig) -> Result<(), ::svcgen_support::ResourceError> {
        ::svcgen_support::wait_for_status(self, status.as_str(), config)
    }
}
impl ::svcgen_support::Resource for Widget {
    const RESOURCE_TYPE: &'static str = "Widget";
    fn refresh(&mut self) -> Result<(), ::svcgen_support::ResourceError> {
        Widget::refresh(self)?;
        Ok(())
    }
}
impl ::svcgen_support::StatusResource for Widget {
    fn current_status(&self) -> Option<&str> {
        self.widget_status.as_value().map(|status| status.as_str())
    }
}
impl ::svcgen_support::Serializable for Widget {}
/// The `TrainingJob` resource, hydrated by `DescribeTrainingJob`.
#[derive(Debug, Clone, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize)]
#[serde(crate = "::svcgen_support::serde")]
pub struct TrainingJob {
    #[serde(rename = "TrainingJobName")]
    pub training_job_name: String,
    #[serde(rename = "TrainingJobStatus")]
    pub training_job_status: TrainingJobStatus,
    #[serde(rename = "Tree", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub tree: ::svcgen_support::Field<TreeNode>,
    #[serde(skip)]
    client: ::svcgen_support::ClientHandle,
}
impl TrainingJob {
    pub const RESOURCE_TYPE: &'static str = "TrainingJob";
    /// Statuses `wait` stops at.
    pub const TERMINAL_STATES: &'static [&'static str] = &["Completed", "Failed", "Stopped"];
    /// Calls `CreateTrainingJob`, then fetches the new resource with `get`.
    pub fn create(client: &::svcgen_support::SharedClient, training_job_name: String, stopping_condition: ::svcgen_support::Field<i64>) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("TrainingJobName", &training_job_name)?;
        request.insert_field("StoppingCondition", &stopping_condition)?;
        ::svcgen_support::ClientHandle::bound(client).invoke(Self::RESOURCE_TYPE, "CreateTrainingJob", request)?;
        Self::get(client, training_job_name)
    }
    pub fn get(client: &::svcgen_support::SharedClient, training_job_name: String) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("TrainingJobName", &training_job_name)?;
        let handle = ::svcgen_support::ClientHandle::bound(client);
        let response = handle.invoke(Self::RESOURCE_TYPE, "DescribeTrainingJob", request)?;
        let mut resource: Self = ::svcgen_support::from_response("DescribeTrainingJob", response)?;
        resource.client = handle;
        Ok(resource)
    }
    /// Re-reads this resource with `DescribeTrainingJob`. Attributes missing from the response keep their values.
    pub fn refresh(&mut self) -> Result<&mut Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("TrainingJobName", &self.training_job_name)?;
        let response = self.client.invoke(Self::RESOURCE_TYPE, "DescribeTrainingJob", request)?;
        let client = self.client.clone();
        *self = ::svcgen_support::merge_response(&*self, "DescribeTrainingJob", response)?;
        self.client = client;
        Ok(self)
    }
    pub fn stop(&self) -> Result<(), ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("TrainingJobName", &self.training_job_name)?;
        self.client.invoke(Self::RESOURCE_TYPE, "StopTrainingJob", request)?;
        Ok(())
    }
    /// Refreshes until `TrainingJobStatus` reaches one of `TERMINAL_STATES`.
    pub fn wait(&mut self, config: &::svcgen_support::WaitConfig) -> Result<(), ::svcgen_support::ResourceError> {
        ::svcgen_support::wait_until_terminal(self, Self::TERMINAL_STATES, config)
    }
    /// Refreshes until the status attribute equals `status`.
    ///
    /// Fails with `ResourceError::Timeout` once `config.timeout` has elapsed.
    pub fn wait_for_status(&mut self, status: TrainingJobStatus, config: &::svcgen_support::WaitConfig) -> Result<(), ::svcgen_support::ResourceError> {
        ::svcgen_support::wait_for_status(self, status.as_str(), config)
    }
}
impl ::svcgen_support::Resource for TrainingJob {
    const RESOURCE_TYPE: &'static str = "TrainingJob";
    fn refresh(&mut self) -> Result<(), ::svcgen_support::ResourceError> {
        TrainingJob::refresh(self)?;
        Ok(())
    }
}
impl ::svcgen_support::StatusResource for TrainingJob {
    fn current_status(&self) -> Option<&str> {
        Some(self.training_job_status.as_str())
    }
}
impl ::svcgen_support::Serializable for TrainingJob {}
/// The `Endpoint` resource, hydrated by `DescribeEndpoint`.
#[derive(Debug, Clone, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize)]
#[serde(crate = "::svcgen_support::serde")]
pub struct Endpoint {
    #[serde(rename = "EndpointName", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub endpoint_name: ::svcgen_support::Field<String>,
    #[serde(rename = "EndpointStatus", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub endpoint_status: ::svcgen_support::Field<String>,
    #[serde(skip)]
    client: ::svcgen_support::ClientHandle,
}
impl Endpoint {
    pub const RESOURCE_TYPE: &'static str = "Endpoint";
    pub fn get(client: &::svcgen_support::SharedClient, endpoint_name: String) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("EndpointName", &endpoint_name)?;
        let handle = ::svcgen_support::ClientHandle::bound(client);
        let response = handle.invoke(Self::RESOURCE_TYPE, "DescribeEndpoint", request)?;
        let mut resource: Self = ::svcgen_support::from_response("DescribeEndpoint", response)?;
        resource.client = handle;
        Ok(resource)
    }
    /// Re-reads this resource with `DescribeEndpoint`. Attributes missing from the response keep their values.
    pub fn refresh(&mut self) -> Result<&mut Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert_field("EndpointName", &self.endpoint_name)?;
        let response = self.client.invoke(Self::RESOURCE_TYPE, "DescribeEndpoint", request)?;
        let client = self.client.clone();
        *self = ::svcgen_support::merge_response(&*self, "DescribeEndpoint", response)?;
        self.client = client;
        Ok(self)
    }
    /// Refreshes until the status attribute equals `status`.
    ///
    /// Fails with `ResourceError::Timeout` once `config.timeout` has elapsed.
    pub fn wait_for_status(&mut self, status: &str, config: &::svcgen_support::WaitConfig) -> Result<(), ::svcgen_support::ResourceError> {
        ::svcgen_support::wait_for_status(self, status, config)
    }
}
impl ::svcgen_support::Resource for Endpoint {
    const RESOURCE_TYPE: &'static str = "Endpoint";
    fn refresh(&mut self) -> Result<(), ::svcgen_support::ResourceError> {
        Endpoint::refresh(self)?;
        Ok(())
    }
}
impl ::svcgen_support::StatusResource for Endpoint {
    fn current_status(&self) -> Option<&str> {
        self.endpoint_status.as_value().map(|status| status.as_str())
    }
}
impl ::svcgen_support::Serializable for Endpoint {}
/// The `Gadget` resource, hydrated by `DescribeGadget`.
#[derive(Debug, Clone, ::svcgen_support::serde::Serialize, ::svcgen_support::serde::Deserialize)]
#[serde(crate = "::svcgen_support::serde")]
pub struct Gadget {
    #[serde(rename = "GadgetId", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub gadget_id: ::svcgen_support::Field<String>,
    #[serde(rename = "Payload", default, skip_serializing_if = "::svcgen_support::Field::is_unassigned")]
    pub payload: ::svcgen_support::Field<::svcgen_support::Blob>,
    #[serde(skip)]
    client: ::svcgen_support::ClientHandle,
}
impl Gadget {
    pub const RESOURCE_TYPE: &'static str = "Gadget";
    /// Calls `CreateGadget`, then fetches the new resource with `get`.
    pub fn create(client: &::svcgen_support::SharedClient, display_name: String) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("DisplayName", &display_name)?;
        let response = ::svcgen_support::ClientHandle::bound(client).invoke(Self::RESOURCE_TYPE, "CreateGadget", request)?;
        Self::get(client, ::svcgen_support::response_field::<String>(&response, "CreateGadget", "GadgetId")?)
    }
    pub fn get(client: &::svcgen_support::SharedClient, gadget_id: String) -> Result<Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert("GadgetId", &gadget_id)?;
        let handle = ::svcgen_support::ClientHandle::bound(client);
        let response = handle.invoke(Self::RESOURCE_TYPE, "DescribeGadget", request)?;
        let mut resource: Self = ::svcgen_support::from_response("DescribeGadget", response)?;
        resource.client = handle;
        Ok(resource)
    }
    /// Re-reads this resource with `DescribeGadget`. Attributes missing from the response keep their values.
    pub fn refresh(&mut self) -> Result<&mut Self, ::svcgen_support::ResourceError> {
        let mut request = ::svcgen_support::RequestBody::new();
        request.insert_field("GadgetId", &self.gadget_id)?;
        let response = self.client.invoke(Self::RESOURCE_TYPE, "DescribeGadget", request)?;
        let client = self.client.clone();
        *self = ::svcgen_support::merge_response(&*self, "DescribeGadget", response)?;
        self.client = client;
        Ok(self)
    }
}
impl ::svcgen_support::Resource for Gadget {
    const RESOURCE_TYPE: &'static str = "Gadget";
    fn refresh(&mut self) -> Result<(), ::svcgen_support::ResourceError> {
        Gadget::refresh(self)?;
        Ok(())
    }
}
impl ::svcgen_support::Serializable for Gadget {}
