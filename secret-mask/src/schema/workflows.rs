//! Automation workflows run on behalf of a client.

use serde::{Deserialize, Serialize};

use super::{
    connections::{ServiceConnection, ServiceType},
    metadata::OpenMetadataConnection,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowType {
    TestConnection,
}

/// Ask the server to test a connection before it is saved.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestServiceConnectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ServiceConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
}

/// Two independent trees hold secrets: `request.connection` and
/// `open_metadata_server_connection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub name: String,
    pub workflow_type: WorkflowType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<TestServiceConnectionRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_metadata_server_connection: Option<OpenMetadataConnection>,
}
