//! Authentication mechanisms of users and bots.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::security::SsoClientConfig;
use crate::{MaskTree, SecretLeaf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthType {
    Jwt,
    Sso,
    Basic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SsoServiceType {
    Google,
    Okta,
    Auth0,
    Azure,
    CustomOidc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct SsoAuthMechanism {
    pub sso_service_type: SsoServiceType,
    #[mask]
    pub auth_config: SsoClientConfig,
}

/// A personal or bot access token.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
pub struct JwtAuthMechanism {
    #[secret]
    #[serde(rename = "JWTToken")]
    pub jwt_token: String,
    #[serde(rename = "JWTTokenExpiry", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token_expiry: Option<String>,
    #[serde(rename = "JWTTokenExpiresAt", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token_expires_at: Option<i64>,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
pub struct BasicAuthMechanism {
    pub username: String,
    #[secret]
    pub password: String,
}

/// The payload of an authentication mechanism; its shape follows `authType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(untagged)]
pub enum AuthMechanismConfig {
    Sso(#[mask] SsoAuthMechanism),
    Jwt(#[mask] JwtAuthMechanism),
    Basic(#[mask] BasicAuthMechanism),
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationMechanism {
    pub auth_type: AuthType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<AuthMechanismConfig>,
}

impl AuthenticationMechanism {
    pub fn new(auth_type: AuthType, config: AuthMechanismConfig) -> Self {
        Self {
            auth_type,
            config: Some(config),
        }
    }
}
