//! The configuration shapes that carry secrets.
//!
//! Every type deserializes from the camelCase JSON the API exchanges.
//! Polymorphic families are closed enums; each keeps payloads it does not
//! recognize verbatim in an `Unrecognized` variant so they round-trip unchanged.

mod auth;
mod connections;
mod metadata;
mod pipelines;
mod security;
mod workflows;

pub use auth::{
    AuthMechanismConfig, AuthType, AuthenticationMechanism, BasicAuthMechanism,
    JwtAuthMechanism, SsoAuthMechanism, SsoServiceType,
};
pub use connections::{
    AirflowBackend, AirflowConnection, BackendConnection, BigQueryConnection, DatabaseAuth,
    DatalakeConfigSource, DatalakeConnection, GcsConfig, IamAuthConfig, LocalConfig,
    MysqlConnection, PostgresConnection, S3Config, ServiceConnection, ServiceConnectionConfig,
    ServiceType, SqliteConnection, SupersetApiConnection, SupersetBackend, SupersetConnection,
};
pub use metadata::{AuthProvider, OpenMetadataConnection};
pub use pipelines::{
    DatabaseMetadataPipeline, DbtCloudConfig, DbtConfigSource, DbtGcsConfig, DbtHttpConfig,
    DbtLocalConfig, DbtPipeline, DbtS3Config, IngestionPipeline, PipelineConfig, PipelineType,
    ProfilerPipeline, SourceConfig,
};
pub use security::{
    Auth0SsoClientConfig, AwsCredentials, AzureSsoClientConfig, BasicAuth,
    CustomOidcSsoClientConfig, GcpConfig, GcpCredentials, GcpValues, GoogleSsoClientConfig,
    OktaSsoClientConfig, OpenMetadataJwtClientConfig, SsoClientConfig,
};
pub use workflows::{TestServiceConnectionRequest, Workflow, WorkflowType};
