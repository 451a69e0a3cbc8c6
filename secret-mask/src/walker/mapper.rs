//! What the walker does when it reaches a secret leaf.
//!
//! [`SecretMapper`] is the seam between traversal and policy. The derive
//! macros generate traversal that calls into a mapper; [`SentinelMapper`] is the
//! mapper that implements masking and unmasking with [`MASKED_SECRET`].

use std::fmt;

use slog::{debug, o, warn, Logger};

use crate::leaf::SecretLeaf;

/// The fixed string that replaces every secret in a masked entity.
///
/// Clients send it back unchanged to mean "keep the stored secret".
pub const MASKED_SECRET: &str = "[MASKED_SECRET]";

/// The direction of a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Mask,
    Unmask,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mask => "mask",
            Self::Unmask => "unmask",
        })
    }
}

/// Applies a policy to the secret leaves found by a [`MaskTree`](crate::MaskTree) walk.
///
/// The generated traversal calls [`mask_leaf`](Self::mask_leaf) and
/// [`unmask_leaf`](Self::unmask_leaf) for every leaf, and reports shapes it could
/// not walk through the two notification hooks. The hooks default to doing
/// nothing.
pub trait SecretMapper {
    /// Masks a single leaf in place.
    fn mask_leaf<L: SecretLeaf + ?Sized>(&self, leaf: &mut L);

    /// Reconciles a submitted leaf with its stored counterpart.
    fn unmask_leaf<L: SecretLeaf + ?Sized>(&self, leaf: &mut L, original: &L);

    /// A variant the schema does not describe was skipped.
    fn unrecognized(&self, _mode: Mode, _family: &'static str, _variant: &'static str) {}

    /// The submitted value has a different concrete shape than the stored one, so
    /// nothing inside it was restored.
    fn variant_switched(
        &self,
        _family: &'static str,
        _submitted: &'static str,
        _original: &'static str,
    ) {
    }
}

/// The masking policy: swap secrets for [`MASKED_SECRET`] and restore them back.
///
/// - **mask**: a present secret becomes the sentinel; an absent one stays absent.
/// - **unmask**: a secret equal to the sentinel takes the stored secret (and is
///   cleared when the stored one was absent); any other value is a client edit
///   and is kept.
#[derive(Clone, Copy)]
pub struct SentinelMapper<'a> {
    logger: &'a Logger,
}

impl<'a> SentinelMapper<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }
}

impl SecretMapper for SentinelMapper<'_> {
    fn mask_leaf<L: SecretLeaf + ?Sized>(&self, leaf: &mut L) {
        if leaf.read_secret().is_some() {
            leaf.write_secret(Some(MASKED_SECRET.to_string()));
        }
    }

    fn unmask_leaf<L: SecretLeaf + ?Sized>(&self, leaf: &mut L, original: &L) {
        if leaf.read_secret() != Some(MASKED_SECRET) {
            return;
        }
        leaf.write_secret(original.read_secret().map(str::to_string));
    }

    fn unrecognized(&self, mode: Mode, family: &'static str, variant: &'static str) {
        warn!(
            self.logger.new(o!("mode" => mode.to_string())),
            "skipping unrecognized configuration variant; secrets inside it are left as-is";
            "family" => family,
            "variant" => variant,
        );
    }

    fn variant_switched(&self, family: &'static str, submitted: &'static str, original: &'static str) {
        debug!(
            self.logger,
            "configuration variant changed, keeping submitted values";
            "family" => family,
            "submitted" => submitted,
            "original" => original,
        );
    }
}
