//! Connection back to the metadata server, embedded in pipelines and workflows.

use serde::{Deserialize, Serialize};

use super::security::SsoClientConfig;
use crate::MaskTree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthProvider {
    #[default]
    NoAuth,
    Basic,
    Google,
    Okta,
    Auth0,
    Azure,
    CustomOidc,
    Openmetadata,
}

/// How an ingestion process reaches the metadata server.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct OpenMetadataConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    pub host_port: String,
    #[serde(default)]
    pub auth_provider: AuthProvider,
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_config: Option<SsoClientConfig>,
}

impl OpenMetadataConnection {
    pub fn new(host_port: impl Into<String>) -> Self {
        Self {
            host_port: host_port.into(),
            ..Self::default()
        }
    }

    pub fn with_security_config(
        mut self,
        auth_provider: AuthProvider,
        security_config: SsoClientConfig,
    ) -> Self {
        self.auth_provider = auth_provider;
        self.security_config = Some(security_config);
        self
    }
}
