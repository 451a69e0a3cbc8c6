//! Entity-level entry points.
//!
//! - **`password`**: [`PasswordMasker`], the masking façade
//! - **`noop`**: [`NoopMasker`], the identity façade used when masking is off
//! - **`selector`**: [`MaskerSelector`], the configuration-driven holder of the active façade

mod noop;
mod password;
mod selector;

pub use noop::NoopMasker;
pub use password::PasswordMasker;
#[cfg(any(test, feature = "testing"))]
pub use selector::MaskerOverride;
pub use selector::{EntityMaskerKind, MaskerSelector};

use crate::schema::{AuthenticationMechanism, IngestionPipeline, ServiceConnection, Workflow};

/// Masks and unmasks the secret-bearing trees of each entity family.
///
/// Every operation mutates the entity in place and hands back the reference it
/// was given. Unmask restores secrets from `original`, the stored copy of the
/// entity; secrets the client changed are kept.
pub trait EntityMasker: Send + Sync {
    /// Which implementation this is.
    fn kind(&self) -> EntityMaskerKind;

    fn mask_service_connection<'a>(
        &self,
        connection: &'a mut ServiceConnection,
    ) -> &'a mut ServiceConnection;

    fn unmask_service_connection<'a>(
        &self,
        submitted: &'a mut ServiceConnection,
        original: &ServiceConnection,
    ) -> &'a mut ServiceConnection;

    /// Masks `sourceConfig` and `openMetadataServerConnection`.
    fn mask_ingestion_pipeline<'a>(
        &self,
        pipeline: &'a mut IngestionPipeline,
    ) -> &'a mut IngestionPipeline;

    fn unmask_ingestion_pipeline<'a>(
        &self,
        submitted: &'a mut IngestionPipeline,
        original: &IngestionPipeline,
    ) -> &'a mut IngestionPipeline;

    fn mask_authentication_mechanism<'a>(
        &self,
        mechanism: &'a mut AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism;

    fn unmask_authentication_mechanism<'a>(
        &self,
        submitted: &'a mut AuthenticationMechanism,
        original: &AuthenticationMechanism,
    ) -> &'a mut AuthenticationMechanism;

    /// Masks `request.connection` and `openMetadataServerConnection`.
    fn mask_workflow<'a>(&self, workflow: &'a mut Workflow) -> &'a mut Workflow;

    fn unmask_workflow<'a>(
        &self,
        submitted: &'a mut Workflow,
        original: &Workflow,
    ) -> &'a mut Workflow;
}
