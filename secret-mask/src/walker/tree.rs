//! Types that can hold secret leaves, and how to walk into them.
//!
//! ## Field handling
//!
//! | Annotation | Generated code | Behavior |
//! |------------|----------------|----------|
//! | None | nothing | Field is never touched (external types work) |
//! | `#[mask]` | `MaskTree::mask_with` / `unmask_with` | Walk into the field |
//!
//! ## Pairing during unmask
//!
//! Unmask walks the submitted tree and its stored original side by side:
//!
//! - `Option`: both sides must be present, otherwise nothing is restored
//! - `Vec`: elements pair by position; extra elements on either side are left alone
//! - maps: entries pair by key; new keys are left alone
//! - enums: both sides must be the same variant (see `#[derive(MaskTree)]`)

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use slog::{o, Discard, Logger};

use super::mapper::{SecretMapper, SentinelMapper};

/// A type that can contain secret leaves and can be walked for them.
///
/// Derive it with `#[derive(MaskTree)]`; secret leaves get it from
/// `#[derive(SecretLeaf)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `MaskTree`",
    label = "this type cannot be walked for secrets",
    note = "use `#[derive(MaskTree)]` on the type definition",
    note = "or `#[derive(SecretLeaf)]` if the type itself holds a secret",
    note = "fields that can never hold a secret need no `#[mask]`"
)]
pub trait MaskTree {
    /// Hands every reachable leaf to `mapper.mask_leaf`.
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M);

    /// Pairs every reachable leaf with its counterpart in `original` and hands
    /// both to `mapper.unmask_leaf`. Leaves without a counterpart are untouched.
    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M);
}

/// Entrypoint for masking a tree with [`MASKED_SECRET`](crate::MASKED_SECRET).
///
/// Blanket-implemented for every [`MaskTree`]. Skipped variants are not logged;
/// use [`PasswordMasker`](crate::PasswordMasker) or a
/// [`SentinelMapper`] with a real logger for that.
pub trait Maskable: MaskTree {
    /// Replaces every present secret with the sentinel.
    fn mask(&mut self) {
        let logger = Logger::root(Discard, o!());
        self.mask_with(&SentinelMapper::new(&logger));
    }

    /// Restores every sentinel from `original`.
    fn unmask(&mut self, original: &Self) {
        let logger = Logger::root(Discard, o!());
        self.unmask_with(original, &SentinelMapper::new(&logger));
    }
}

impl<T> Maskable for T where T: MaskTree + ?Sized {}

impl<T> MaskTree for Option<T>
where
    T: MaskTree,
{
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M) {
        if let Some(value) = self {
            value.mask_with(mapper);
        }
    }

    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M) {
        if let (Some(value), Some(original)) = (self, original) {
            value.unmask_with(original, mapper);
        }
    }
}

impl<T> MaskTree for Box<T>
where
    T: MaskTree,
{
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M) {
        (**self).mask_with(mapper);
    }

    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M) {
        (**self).unmask_with(original, mapper);
    }
}

impl<T> MaskTree for Vec<T>
where
    T: MaskTree,
{
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M) {
        for value in self {
            value.mask_with(mapper);
        }
    }

    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M) {
        for (value, original) in self.iter_mut().zip(original) {
            value.unmask_with(original, mapper);
        }
    }
}

impl<K, V> MaskTree for BTreeMap<K, V>
where
    K: Ord,
    V: MaskTree,
{
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M) {
        for value in self.values_mut() {
            value.mask_with(mapper);
        }
    }

    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M) {
        for (key, value) in self.iter_mut() {
            if let Some(original) = original.get(key) {
                value.unmask_with(original, mapper);
            }
        }
    }
}

impl<K, V, S> MaskTree for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: MaskTree,
    S: BuildHasher,
{
    fn mask_with<M: SecretMapper>(&mut self, mapper: &M) {
        for value in self.values_mut() {
            value.mask_with(mapper);
        }
    }

    fn unmask_with<M: SecretMapper>(&mut self, original: &Self, mapper: &M) {
        for (key, value) in self.iter_mut() {
            if let Some(original) = original.get(key) {
                value.unmask_with(original, mapper);
            }
        }
    }
}
