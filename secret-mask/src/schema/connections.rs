//! Service connection configurations.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::security::{AwsCredentials, BasicAuth, GcpCredentials};
use crate::{MaskTree, SecretLeaf};

/// The service category a connection belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Database,
    Dashboard,
    Messaging,
    Pipeline,
    MlModel,
    Metadata,
    Storage,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct IamAuthConfig {
    #[mask]
    pub aws_config: AwsCredentials,
}

/// How a relational connection authenticates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(untagged)]
pub enum DatabaseAuth {
    Iam(#[mask] IamAuthConfig),
    Basic(#[mask] BasicAuth),
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct MysqlConnection {
    #[serde(default)]
    pub username: String,
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<DatabaseAuth>,
    #[serde(default)]
    pub host_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_schema: Option<String>,
}

impl MysqlConnection {
    pub fn with_password(password: impl Into<String>) -> Self {
        Self {
            auth_type: Some(DatabaseAuth::Basic(BasicAuth::with_password(password))),
            ..Self::default()
        }
    }

    /// The basic-auth password, if this connection uses one.
    pub fn password(&self) -> Option<&str> {
        match &self.auth_type {
            Some(DatabaseAuth::Basic(auth)) => auth.password.as_deref(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct PostgresConnection {
    #[serde(default)]
    pub username: String,
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<DatabaseAuth>,
    #[serde(default)]
    pub host_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct BigQueryConnection {
    #[mask]
    pub credentials: GcpCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_port: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct GcsConfig {
    #[mask]
    pub security_config: GcpCredentials,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct S3Config {
    #[mask]
    pub security_config: AwsCredentials,
}

/// Files on the ingestion host. Only the empty object matches.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalConfig {}

/// Where a data lake reads its files from.
///
/// A source matching none of the known shapes is kept verbatim as
/// [`DatalakeConfigSource::Unrecognized`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(untagged)]
pub enum DatalakeConfigSource {
    Gcs(#[mask] GcsConfig),
    S3(#[mask] S3Config),
    Local(LocalConfig),
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct DatalakeConnection {
    #[mask]
    pub config_source: DatalakeConfigSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqliteConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_mode: Option<String>,
}

/// Use the metadata server's own backend database.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BackendConnection {}

/// The metadata database an Airflow instance runs on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(tag = "type")]
pub enum AirflowBackend {
    Mysql(#[mask] MysqlConnection),
    Postgres(#[mask] PostgresConnection),
    #[serde(rename = "SQLite")]
    Sqlite(SqliteConnection),
    Backend(BackendConnection),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct AirflowConnection {
    #[serde(default)]
    pub host_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_status: Option<u32>,
    #[mask]
    pub connection: AirflowBackend,
}

/// Superset's own REST API login.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct SupersetApiConnection {
    #[serde(default)]
    pub provider: String,
    pub username: String,
    #[secret]
    pub password: String,
}

/// How metadata is read from a Superset instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(tag = "type")]
pub enum SupersetBackend {
    SupersetApi(#[mask] SupersetApiConnection),
    Mysql(#[mask] MysqlConnection),
    Postgres(#[mask] PostgresConnection),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct SupersetConnection {
    #[serde(default)]
    pub host_port: String,
    #[mask]
    pub connection: SupersetBackend,
}

/// The configuration of a service connection, keyed by its `type`.
///
/// A `type` this enum does not list is kept verbatim as
/// [`ServiceConnectionConfig::Unrecognized`] and never masked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(tag = "type")]
pub enum ServiceConnectionConfig {
    Mysql(#[mask] MysqlConnection),
    Postgres(#[mask] PostgresConnection),
    BigQuery(#[mask] BigQueryConnection),
    Datalake(#[mask] DatalakeConnection),
    Airflow(#[mask] AirflowConnection),
    Superset(#[mask] SupersetConnection),
    #[serde(untagged)]
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

/// A service's connection, as stored on the service entity.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
pub struct ServiceConnection {
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ServiceConnectionConfig>,
}

impl ServiceConnection {
    pub fn new(config: ServiceConnectionConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn connection_config_is_tagged_by_type() {
        let connection: ServiceConnection = serde_json::from_value(json!({
            "config": {
                "type": "Mysql",
                "username": "openmetadata_user",
                "authType": { "password": "PASSWORD" },
                "hostPort": "localhost:3306"
            }
        }))
        .unwrap();
        let Some(ServiceConnectionConfig::Mysql(mysql)) = &connection.config else {
            panic!("expected a MySQL config, got {connection:?}");
        };
        assert_eq!(mysql.password(), Some("PASSWORD"));
    }

    #[test]
    fn iam_auth_wins_over_basic_auth() {
        let auth: DatabaseAuth = serde_json::from_value(json!({
            "awsConfig": { "awsRegion": "eu-west-1", "awsSecretAccessKey": "key" }
        }))
        .unwrap();
        assert!(matches!(auth, DatabaseAuth::Iam(_)));
    }

    #[test]
    fn unknown_connection_type_is_kept_verbatim() {
        let payload = json!({ "type": "Snowflake", "password": "pw" });
        let config: ServiceConnectionConfig = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(config, ServiceConnectionConfig::Unrecognized(payload.clone()));
        assert_eq!(serde_json::to_value(&config).unwrap(), payload);
    }

    #[test]
    fn airflow_backend_serializes_with_its_type() {
        let airflow = AirflowConnection {
            host_port: "http://airflow:8080".into(),
            number_of_status: None,
            connection: AirflowBackend::Sqlite(SqliteConnection::default()),
        };
        let value = serde_json::to_value(&airflow).unwrap();
        assert_eq!(value["connection"], json!({ "type": "SQLite" }));
    }

    #[test]
    fn datalake_source_resolves_by_shape() {
        let gcs: DatalakeConfigSource = serde_json::from_value(json!({
            "securityConfig": { "gcpConfig": { "privateKey": "pk" } }
        }))
        .unwrap();
        assert!(matches!(gcs, DatalakeConfigSource::Gcs(_)));

        let s3: DatalakeConfigSource = serde_json::from_value(json!({
            "securityConfig": { "awsRegion": "us-east-1" }
        }))
        .unwrap();
        assert!(matches!(s3, DatalakeConfigSource::S3(_)));

        let local: DatalakeConfigSource = serde_json::from_value(json!({})).unwrap();
        assert_eq!(local, DatalakeConfigSource::Local(LocalConfig {}));
    }

    #[test]
    fn unknown_datalake_source_is_not_mistaken_for_local() {
        let payload = json!({
            "securityConfig": { "clientId": "c", "clientSecret": "AZURE-SECRET", "tenantId": "t" }
        });
        let source: DatalakeConfigSource = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(source, DatalakeConfigSource::Unrecognized(payload.clone()));
        assert_eq!(serde_json::to_value(&source).unwrap(), payload);
    }

    #[test]
    fn unknown_database_auth_is_not_mistaken_for_basic() {
        let payload = json!({ "azureConfig": { "clientSecret": "s" } });
        let auth: DatabaseAuth = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(auth, DatabaseAuth::Unrecognized(payload));

        let basic: DatabaseAuth = serde_json::from_value(json!({ "password": "pw" })).unwrap();
        assert_eq!(basic, DatabaseAuth::Basic(BasicAuth::with_password("pw")));
    }
}
