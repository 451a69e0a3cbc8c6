//! Ingestion pipelines and their source configurations.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{
    metadata::OpenMetadataConnection,
    security::{AwsCredentials, GcpCredentials},
};
use crate::{MaskTree, SecretLeaf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineType {
    Metadata,
    Usage,
    Lineage,
    Profiler,
    Dbt,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseMetadataPipeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_deleted_tables: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_views: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerPipeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_sample_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_sample: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbtLocalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_catalog_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_manifest_file_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbtHttpConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_catalog_http_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_manifest_http_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct DbtS3Config {
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_security_config: Option<AwsCredentials>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct DbtGcsConfig {
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_security_config: Option<GcpCredentials>,
}

/// dbt Cloud API access.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, SecretLeaf)]
#[serde(rename_all = "camelCase")]
pub struct DbtCloudConfig {
    pub dbt_cloud_account_id: String,
    #[secret]
    pub dbt_cloud_auth_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_cloud_url: Option<String>,
}

/// Where a dbt pipeline fetches its artifacts from, keyed by `dbtConfigType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(tag = "dbtConfigType", rename_all = "lowercase")]
pub enum DbtConfigSource {
    Local(DbtLocalConfig),
    Http(DbtHttpConfig),
    S3(#[mask] DbtS3Config),
    Gcs(#[mask] DbtGcsConfig),
    Cloud(#[mask] DbtCloudConfig),
    #[serde(untagged)]
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize, MaskTree)]
#[serde(rename_all = "camelCase")]
pub struct DbtPipeline {
    #[mask]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_config_source: Option<DbtConfigSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_update_descriptions: Option<bool>,
}

/// The workload-specific part of a pipeline, keyed by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, MaskTree)]
#[serde(tag = "type")]
pub enum PipelineConfig {
    DatabaseMetadata(DatabaseMetadataPipeline),
    #[serde(rename = "DBT")]
    Dbt(#[mask] DbtPipeline),
    Profiler(ProfilerPipeline),
    #[serde(untagged)]
    #[mask(unrecognized)]
    Unrecognized(JsonValue),
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PipelineConfig>,
}

/// A scheduled ingestion job.
///
/// Two independent trees hold secrets: `source_config.config` and
/// `open_metadata_server_connection`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionPipeline {
    pub name: String,
    pub pipeline_type: PipelineType,
    #[serde(default)]
    pub source_config: SourceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_metadata_server_connection: Option<OpenMetadataConnection>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn dbt_pipeline_deserializes_nested_tags() {
        let pipeline: IngestionPipeline = serde_json::from_value(json!({
            "name": "dbt",
            "pipelineType": "dbt",
            "sourceConfig": {
                "config": {
                    "type": "DBT",
                    "dbtConfigSource": {
                        "dbtConfigType": "gcs",
                        "dbtSecurityConfig": { "gcpConfig": { "privateKey": "pk" } }
                    }
                }
            }
        }))
        .unwrap();
        let Some(PipelineConfig::Dbt(dbt)) = &pipeline.source_config.config else {
            panic!("expected a dbt config, got {pipeline:?}");
        };
        let Some(DbtConfigSource::Gcs(gcs)) = &dbt.dbt_config_source else {
            panic!("expected a GCS source, got {dbt:?}");
        };
        assert_eq!(
            gcs.dbt_security_config.as_ref().and_then(GcpCredentials::private_key),
            Some("pk")
        );
    }

    #[test]
    fn unknown_dbt_source_is_kept_verbatim() {
        let payload = json!({ "dbtConfigType": "azure", "dbtSecret": "x" });
        let source: DbtConfigSource = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(source, DbtConfigSource::Unrecognized(payload));
    }
}
