//! Credentials and client configurations: the secret leaves of the schema.
//!
//! Every type deriving `SecretLeaf` here is masked wherever it appears, whatever
//! the parent field is called.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{MaskTree, SecretLeaf};

/// Password half of a database connection's basic auth.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BasicAuth {
    #[secret]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl BasicAuth {
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
        }
    }
}

/// Service account key material.
///
/// Every field is optional, so unknown keys are rejected to keep other
/// credential shapes out of this one.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GcpValues {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_id: Option<String>,
    #[secret]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider_x509_cert_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_x509_cert_url: Option<String>,
}

impl GcpValues {
    pub fn with_private_key(private_key: impl Into<String>) -> Self {
        Self {
            private_key: Some(private_key.into()),
            ..Self::default()
        }
    }
}

/// GCP credentials given inline or as a path to a key file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(untagged)]
pub enum GcpConfig {
    Values(#[mask] GcpValues),
    CredentialsPath(String),
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct GcpCredentials {
    #[mask]
    pub gcp_config: GcpConfig,
}

impl GcpCredentials {
    pub fn with_private_key(private_key: impl Into<String>) -> Self {
        Self {
            gcp_config: GcpConfig::Values(GcpValues::with_private_key(private_key)),
        }
    }

    /// The inline private key, if the credentials carry one.
    pub fn private_key(&self) -> Option<&str> {
        match &self.gcp_config {
            GcpConfig::Values(values) => values.private_key.as_deref(),
            GcpConfig::CredentialsPath(_) | GcpConfig::Unrecognized(_) => None,
        }
    }
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[secret]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
    pub aws_region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_session_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_point_url: Option<String>,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSsoClientConfig {
    #[secret]
    pub secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl GoogleSsoClientConfig {
    pub fn with_secret_key(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct OktaSsoClientConfig {
    pub client_id: String,
    #[serde(rename = "orgURL")]
    pub org_url: String,
    #[secret]
    pub private_key: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct Auth0SsoClientConfig {
    pub client_id: String,
    #[secret]
    pub secret_key: String,
    pub domain: String,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct AzureSsoClientConfig {
    #[secret]
    pub client_secret: String,
    pub authority: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct CustomOidcSsoClientConfig {
    pub client_id: String,
    #[secret]
    pub secret_key: String,
    pub token_endpoint: String,
}

#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct OpenMetadataJwtClientConfig {
    #[secret]
    pub jwt_token: String,
}

/// Client-side security configuration used to talk to an identity provider.
///
/// Variants are tried in order, most specific first; a payload matching none of
/// them is kept verbatim as [`SsoClientConfig::Unrecognized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(untagged)]
pub enum SsoClientConfig {
    Okta(#[mask] OktaSsoClientConfig),
    Azure(#[mask] AzureSsoClientConfig),
    CustomOidc(#[mask] CustomOidcSsoClientConfig),
    Auth0(#[mask] Auth0SsoClientConfig),
    OpenMetadataJwt(#[mask] OpenMetadataJwtClientConfig),
    Google(#[mask] GoogleSsoClientConfig),
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sso_payloads_resolve_to_the_most_specific_shape() {
        let google: SsoClientConfig =
            serde_json::from_value(json!({ "secretKey": "k", "audience": "a" })).unwrap();
        assert!(matches!(google, SsoClientConfig::Google(_)));

        let auth0: SsoClientConfig = serde_json::from_value(
            json!({ "clientId": "c", "secretKey": "k", "domain": "d" }),
        )
        .unwrap();
        assert!(matches!(auth0, SsoClientConfig::Auth0(_)));

        let okta: SsoClientConfig = serde_json::from_value(json!({
            "clientId": "c", "orgURL": "https://okta", "privateKey": "k", "email": "e"
        }))
        .unwrap();
        assert!(matches!(okta, SsoClientConfig::Okta(_)));

        let jwt: SsoClientConfig =
            serde_json::from_value(json!({ "jwtToken": "t" })).unwrap();
        assert!(matches!(jwt, SsoClientConfig::OpenMetadataJwt(_)));
    }

    #[test]
    fn unknown_sso_payload_is_kept_verbatim() {
        let payload = json!({ "samlCertificate": "cert" });
        let config: SsoClientConfig = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(config, SsoClientConfig::Unrecognized(payload.clone()));
        assert_eq!(serde_json::to_value(&config).unwrap(), payload);
    }

    #[test]
    fn gcp_config_accepts_a_credentials_path() {
        let credentials: GcpCredentials =
            serde_json::from_value(json!({ "gcpConfig": "/etc/key.json" })).unwrap();
        assert_eq!(
            credentials.gcp_config,
            GcpConfig::CredentialsPath("/etc/key.json".into())
        );
        assert_eq!(credentials.private_key(), None);
    }

    #[test]
    fn gcp_values_use_camel_case() {
        let credentials: GcpCredentials = serde_json::from_value(
            json!({ "gcpConfig": { "type": "service_account", "privateKey": "pk" } }),
        )
        .unwrap();
        assert_eq!(credentials.private_key(), Some("pk"));
    }

    #[test]
    fn service_account_key_fields_are_accepted() {
        let credentials: GcpCredentials = serde_json::from_value(json!({
            "gcpConfig": {
                "type": "service_account",
                "privateKey": "pk",
                "authUri": "https://accounts.google.com/o/oauth2/auth",
                "tokenUri": "https://oauth2.googleapis.com/token",
                "authProviderX509CertUrl": "https://www.googleapis.com/oauth2/v1/certs",
                "clientX509CertUrl": "https://www.googleapis.com/robot/v1/metadata/x509/sa"
            }
        }))
        .unwrap();
        assert_eq!(credentials.private_key(), Some("pk"));
    }

    #[test]
    fn unknown_gcp_config_is_kept_verbatim() {
        let payload = json!({
            "externalType": "external_account",
            "audience": "//iam.googleapis.com/pool",
            "credentialSource": { "file": "/var/token" }
        });
        let config: GcpConfig = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(config, GcpConfig::Unrecognized(payload.clone()));
        assert_eq!(serde_json::to_value(&config).unwrap(), payload);
    }
}
