//! The masking façade.

use slog::{o, Discard, Logger};

use super::{EntityMasker, EntityMaskerKind};
use crate::{
    schema::{AuthenticationMechanism, IngestionPipeline, ServiceConnection, Workflow},
    walker::{MaskTree, SentinelMapper},
};

/// Replaces secrets with [`MASKED_SECRET`](crate::MASKED_SECRET) and restores them.
///
/// Skipped variants are reported on the logger at `warn`.
#[derive(Clone)]
pub struct PasswordMasker {
    logger: Logger,
}

impl PasswordMasker {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.new(o!("masker" => "password")),
        }
    }

    fn mapper(&self) -> SentinelMapper<'_> {
        SentinelMapper::new(&self.logger)
    }

    fn mask_tree<T: MaskTree>(&self, tree: Option<&mut T>) {
        if let Some(tree) = tree {
            tree.mask_with(&self.mapper());
        }
    }

    fn unmask_tree<T: MaskTree>(&self, tree: Option<&mut T>, original: Option<&T>) {
        if let (Some(tree), Some(original)) = (tree, original) {
            tree.unmask_with(original, &self.mapper());
        }
    }
}

impl Default for PasswordMasker {
    fn default() -> Self {
        Self::new(Logger::root(Discard, o!()))
    }
}

impl EntityMasker for PasswordMasker {
    fn kind(&self) -> EntityMaskerKind {
        EntityMaskerKind::Password
    }

    fn mask_service_connection<'a>(
        &self,
        connection: &'a mut ServiceConnection,
    ) -> &'a mut ServiceConnection {
        self.mask_tree(connection.config.as_mut());
        connection
    }

    fn unmask_service_connection<'a>(
        &self,
        submitted: &'a mut ServiceConnection,
        original: &ServiceConnection,
    ) -> &'a mut ServiceConnection {
        self.unmask_tree(submitted.config.as_mut(), original.config.as_ref());
        submitted
    }

    fn mask_ingestion_pipeline<'a>(
        &self,
        pipeline: &'a mut IngestionPipeline,
    ) -> &'a mut IngestionPipeline {
        self.mask_tree(pipeline.source_config.config.as_mut());
        self.mask_tree(pipeline.open_metadata_server_connection.as_mut());
        pipeline
    }

    fn unmask_ingestion_pipeline<'a>(
        &self,
        submitted: &'a mut IngestionPipeline,
        original: &IngestionPipeline,
    ) -> &'a mut IngestionPipeline {
        self.unmask_tree(
            submitted.source_config.config.as_mut(),
            original.source_config.config.as_ref(),
        );
        self.unmask_tree(
            submitted.open_metadata_server_connection.as_mut(),
            original.open_metadata_server_connection.as_ref(),
        );
        submitted
    }

    fn mask_authentication_mechanism<'a>(
        &self,
        mechanism: &'a mut AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism {
        self.mask_tree(mechanism.config.as_mut());
        mechanism
    }

    fn unmask_authentication_mechanism<'a>(
        &self,
        submitted: &'a mut AuthenticationMechanism,
        original: &AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism {
        self.unmask_tree(submitted.config.as_mut(), original.config.as_ref());
        submitted
    }

    fn mask_workflow<'a>(&self, workflow: &'a mut Workflow) -> &'a mut Workflow {
        self.mask_tree(
            workflow
                .request
                .as_mut()
                .and_then(|request| request.connection.as_mut()),
        );
        self.mask_tree(workflow.open_metadata_server_connection.as_mut());
        workflow
    }

    fn unmask_workflow<'a>(
        &self,
        submitted: &'a mut Workflow,
        original: &Workflow,
    ) -> &'a mut Workflow {
        self.unmask_tree(
            submitted
                .request
                .as_mut()
                .and_then(|request| request.connection.as_mut()),
            original
                .request
                .as_ref()
                .and_then(|request| request.connection.as_ref()),
        );
        self.unmask_tree(
            submitted.open_metadata_server_connection.as_mut(),
            original.open_metadata_server_connection.as_ref(),
        );
        submitted
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordMasker;
    use crate::{
        schema::{
            AuthProvider, GoogleSsoClientConfig, IngestionPipeline, MysqlConnection,
            OpenMetadataConnection, PipelineType, ServiceConnection, ServiceConnectionConfig,
            SourceConfig, SsoClientConfig,
        },
        EntityMasker, MASKED_SECRET,
    };

    #[test]
    fn service_connection_without_config_is_untouched() {
        let masker = PasswordMasker::default();
        let mut connection = ServiceConnection::default();
        masker.mask_service_connection(&mut connection);
        assert_eq!(connection, ServiceConnection::default());
    }

    #[test]
    fn unmask_without_original_tree_keeps_sentinel() {
        let masker = PasswordMasker::default();
        let mut submitted =
            ServiceConnection::new(ServiceConnectionConfig::Mysql(MysqlConnection::with_password(
                MASKED_SECRET,
            )));
        masker.unmask_service_connection(&mut submitted, &ServiceConnection::default());
        let Some(ServiceConnectionConfig::Mysql(mysql)) = &submitted.config else {
            panic!("config variant changed");
        };
        assert_eq!(mysql.password(), Some(MASKED_SECRET));
    }

    #[test]
    fn pipeline_server_connection_is_masked_independently() {
        let masker = PasswordMasker::default();
        let original = IngestionPipeline {
            name: "metadata".into(),
            pipeline_type: PipelineType::Metadata,
            source_config: SourceConfig::default(),
            open_metadata_server_connection: Some(
                OpenMetadataConnection::new("http://localhost:8585/api").with_security_config(
                    AuthProvider::Google,
                    SsoClientConfig::Google(GoogleSsoClientConfig::with_secret_key("secret")),
                ),
            ),
        };
        let mut pipeline = original.clone();
        masker.mask_ingestion_pipeline(&mut pipeline);
        assert_ne!(pipeline, original);
        masker.unmask_ingestion_pipeline(&mut pipeline, &original);
        assert_eq!(pipeline, original);
    }
}
