use super::{EntityMasker, EntityMaskerKind};
use crate::schema::{AuthenticationMechanism, IngestionPipeline, ServiceConnection, Workflow};

/// Leaves every entity untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMasker;

impl EntityMasker for NoopMasker {
    fn kind(&self) -> EntityMaskerKind {
        EntityMaskerKind::Noop
    }

    fn mask_service_connection<'a>(
        &self,
        connection: &'a mut ServiceConnection,
    ) -> &'a mut ServiceConnection {
        connection
    }

    fn unmask_service_connection<'a>(
        &self,
        submitted: &'a mut ServiceConnection,
        _original: &ServiceConnection,
    ) -> &'a mut ServiceConnection {
        submitted
    }

    fn mask_ingestion_pipeline<'a>(
        &self,
        pipeline: &'a mut IngestionPipeline,
    ) -> &'a mut IngestionPipeline {
        pipeline
    }

    fn unmask_ingestion_pipeline<'a>(
        &self,
        submitted: &'a mut IngestionPipeline,
        _original: &IngestionPipeline,
    ) -> &'a mut IngestionPipeline {
        submitted
    }

    fn mask_authentication_mechanism<'a>(
        &self,
        mechanism: &'a mut AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism {
        mechanism
    }

    fn unmask_authentication_mechanism<'a>(
        &self,
        submitted: &'a mut AuthenticationMechanism,
        _original: &AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism {
        submitted
    }

    fn mask_workflow<'a>(&self, workflow: &'a mut Workflow) -> &'a mut Workflow {
        workflow
    }

    fn unmask_workflow<'a>(
        &self,
        submitted: &'a mut Workflow,
        _original: &Workflow,
    ) -> &'a mut Workflow {
        submitted
    }
}
