//! Type-directed masking of secrets inside polymorphic configuration entities.
//!
//! Configuration entities (service connections, ingestion pipelines,
//! authentication mechanisms, workflows) carry secrets at arbitrary depths inside
//! shapes chosen at runtime. This crate:
//! - **masks** them before an entity leaves the server, replacing every secret with
//!   [`MASKED_SECRET`], and
//! - **unmasks** a submitted entity against the stored original, restoring every
//!   secret the client sent back as the sentinel while keeping any secret the
//!   client actually changed.
//!
//! The pieces:
//! - **Registry**: [`SecretLeaf`] marks the types that *are* secrets (basic auth,
//!   GCP values, SSO client configs, JWT holders). Leaves are found by type, never
//!   by field name.
//! - **Resolver**: [`ResolveVariant`] names the concrete shape of a polymorphic
//!   configuration enum and flags shapes the schema does not recognize.
//! - **Walker**: [`MaskTree`] walks a tree and hands every leaf to a
//!   [`SecretMapper`]; [`SentinelMapper`] applies the sentinel rules.
//! - **Façade**: [`EntityMasker`] locates the trees inside each entity family.
//!   [`PasswordMasker`] masks; [`NoopMasker`] is the identity.
//! - **Selector**: [`MaskerSelector`] holds the active façade chosen from
//!   [`MaskingConfig`].
//!
//! Key rules:
//! - Use `#[derive(SecretLeaf)]` with one `#[secret]` field for a secret-bearing type.
//! - Use `#[derive(MaskTree)]` with `#[mask]` on every field that can hold a tree.
//! - Unannotated fields are never touched.
//! - Unrecognized variants are skipped and logged, never fatal.
//!
//! What it does not do:
//! - encrypt, generate or rotate secrets
//! - guess secrets from field names

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::derive_partial_eq_without_eq,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use secret_mask_derive::{MaskTree, SecretLeaf};

#[allow(unused_extern_crates)]
extern crate self as secret_mask;

// Module declarations
mod config;
mod leaf;
mod masker;
mod resolver;
pub mod schema;
pub mod slog;
mod walker;

// Re-exports
pub use config::{ConfigError, MaskingConfig};
pub use leaf::{SecretLeaf, SecretText};
pub use masker::{
    EntityMasker, EntityMaskerKind, MaskerSelector, NoopMasker, PasswordMasker,
};
#[cfg(any(test, feature = "testing"))]
pub use masker::MaskerOverride;
pub use resolver::{ResolveVariant, Variant};
pub use walker::{Maskable, MaskTree, Mode, SecretMapper, SentinelMapper, MASKED_SECRET};
