//! Holder of the process-wide active masker.

use std::sync::Arc;

use parking_lot::RwLock;
use slog::{info, o, Logger};

use super::{EntityMasker, NoopMasker, PasswordMasker};
use crate::config::MaskingConfig;

/// The available [`EntityMasker`] implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityMaskerKind {
    Password,
    Noop,
}

impl EntityMaskerKind {
    pub const fn from_config(config: &MaskingConfig) -> Self {
        if config.mask_passwords_api {
            Self::Password
        } else {
            Self::Noop
        }
    }

    fn build(self, logger: &Logger) -> Arc<dyn EntityMasker> {
        match self {
            Self::Password => Arc::new(PasswordMasker::new(logger.clone())),
            Self::Noop => Arc::new(NoopMasker),
        }
    }
}

/// Hands out the active masker to request handlers.
///
/// Reads are concurrent; [`reload`](Self::reload) swaps the masker for all
/// subsequent [`current`](Self::current) calls. Callers already holding a masker
/// keep using it until they drop it.
pub struct MaskerSelector {
    active: RwLock<Arc<dyn EntityMasker>>,
    logger: Logger,
}

impl MaskerSelector {
    pub fn from_config(config: &MaskingConfig, logger: Logger) -> Self {
        let logger = logger.new(o!("component" => "masker-selector"));
        let kind = EntityMaskerKind::from_config(config);
        info!(logger, "entity masker selected"; "kind" => ?kind);
        Self {
            active: RwLock::new(kind.build(&logger)),
            logger,
        }
    }

    pub fn current(&self) -> Arc<dyn EntityMasker> {
        Arc::clone(&*self.active.read())
    }

    /// Rebuilds the active masker from `config`.
    pub fn reload(&self, config: &MaskingConfig) {
        let kind = EntityMaskerKind::from_config(config);
        let masker = kind.build(&self.logger);
        let previous = std::mem::replace(&mut *self.active.write(), masker);
        info!(
            self.logger,
            "entity masker reloaded";
            "kind" => ?kind,
            "previous" => ?previous.kind(),
        );
    }

    /// Installs `masker` until the returned guard is dropped.
    #[cfg(any(test, feature = "testing"))]
    pub fn override_with(&self, masker: Arc<dyn EntityMasker>) -> MaskerOverride<'_> {
        let previous = std::mem::replace(&mut *self.active.write(), masker);
        MaskerOverride {
            selector: self,
            previous: Some(previous),
        }
    }
}

/// Restores the masker replaced by [`MaskerSelector::override_with`] on drop.
#[cfg(any(test, feature = "testing"))]
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct MaskerOverride<'a> {
    selector: &'a MaskerSelector,
    previous: Option<Arc<dyn EntityMasker>>,
}

#[cfg(any(test, feature = "testing"))]
impl Drop for MaskerOverride<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.selector.active.write() = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use slog::{o, Discard, Logger};

    use super::{EntityMaskerKind, MaskerSelector};
    use crate::{config::MaskingConfig, masker::NoopMasker};

    fn logger() -> Logger {
        Logger::root(Discard, o!())
    }

    #[test]
    fn kind_follows_config() {
        assert_eq!(
            EntityMaskerKind::from_config(&MaskingConfig::default()),
            EntityMaskerKind::Noop
        );
        assert_eq!(
            EntityMaskerKind::from_config(&MaskingConfig::enabled()),
            EntityMaskerKind::Password
        );
    }

    #[test]
    fn reload_swaps_the_active_masker() {
        let selector = MaskerSelector::from_config(&MaskingConfig::default(), logger());
        assert_eq!(selector.current().kind(), EntityMaskerKind::Noop);
        selector.reload(&MaskingConfig::enabled());
        assert_eq!(selector.current().kind(), EntityMaskerKind::Password);
    }

    #[test]
    fn override_is_reverted_on_drop() {
        let selector = MaskerSelector::from_config(&MaskingConfig::enabled(), logger());
        {
            let _guard = selector.override_with(Arc::new(NoopMasker));
            assert_eq!(selector.current().kind(), EntityMaskerKind::Noop);
        }
        assert_eq!(selector.current().kind(), EntityMaskerKind::Password);
    }

    #[test]
    fn concurrent_readers_see_a_masker() {
        let selector = MaskerSelector::from_config(&MaskingConfig::enabled(), logger());
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(selector.current().kind(), EntityMaskerKind::Password);
                });
            }
        });
    }
}
