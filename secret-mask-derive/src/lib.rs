//! Derive macros for `secret-mask`.
//!
//! This crate generates the traversal code behind `#[derive(MaskTree)]` and the
//! registry entries behind `#[derive(SecretLeaf)]`. It:
//! - reads `#[mask]` / `#[mask(unrecognized)]` and `#[secret]` attributes
//! - emits `MaskTree`, `ResolveVariant` and `SecretLeaf` implementations that call
//!   into a mapper
//!
//! It does **not** decide what a masked value looks like. The sentinel and the
//! restore rules live in the main `secret-mask` crate and are applied at runtime.

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
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod derive_enum;
mod derive_struct;
mod generics;
mod secret_leaf;
mod strategy;
mod transform;
mod types;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_tree_bounds;

/// Derives `secret_mask::MaskTree` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field passes through unchanged on both mask and unmask.
///   Use this for scalars, plain strings and any external type.
///
/// - `#[mask]`: the field is a structural position that can hold a configuration
///   tree (a type deriving `MaskTree` or `SecretLeaf`, or an `Option`, `Vec`, `Box`
///   or map of one). The walker recurses into it, pairing it with the same field of
///   the original value on unmask. Primitive scalars are rejected.
///
/// # Variant Attributes (enums only)
///
/// - `#[mask(unrecognized)]`: marks the catch-all variant holding a shape the
///   schema does not know. Its contents are never walked; the mapper is told about
///   the skip so it can be logged.
///
/// # Additional Generated Impls
///
/// - `ResolveVariant` for enums, naming the active variant and whether it is
///   recognized.
///
/// On unmask, an enum whose submitted variant differs from the original variant is
/// left as submitted. Unions are rejected at compile time.
#[proc_macro_derive(MaskTree, attributes(mask))]
pub fn derive_mask_tree(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives `secret_mask::SecretLeaf` (and `MaskTree`) for a struct holding one secret.
///
/// Exactly one field must carry `#[secret]`. Its type must implement
/// `secret_mask::SecretText` (`String` or `Option<String>`). Every value of the
/// type is then a secret leaf wherever it appears in a tree.
///
/// # Container Attributes
///
/// - `#[secret(skip_debug)]`: opt out of the generated `Debug` impl.
///
/// # Additional Generated Impls
///
/// - `Debug`: when *not* building with `cfg(any(test, feature = "testing"))`, the
///   secret field is formatted as `"[MASKED]"`.
#[proc_macro_derive(SecretLeaf, attributes(secret))]
pub fn derive_secret_leaf(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match secret_leaf::expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the secret-mask crate root.
///
/// Handles crate renaming (e.g., `masking = { package = "secret-mask", ... }`)
/// and internal usage (when a derive is used inside secret-mask itself).
fn crate_root() -> TokenStream {
    match crate_name("secret-mask") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::secret_mask },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = syn::parse_str::<syn::Path>(item).expect("secret-mask crate path should parse");
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    mask_body: TokenStream,
    unmask_body: TokenStream,
    walked_generics: Vec<syn::Ident>,
    resolve_body: Option<TokenStream>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let crate_root = crate_root();

    let output = match &data {
        Data::Struct(data) => derive_struct(data.clone(), &generics)?,
        Data::Enum(data) => derive_enum(&ident, data.clone(), &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`MaskTree` cannot be derived for unions",
            ));
        }
    };

    let tree_generics = add_tree_bounds(generics.clone(), &output.walked_generics);
    let (impl_generics, ty_generics, where_clause) = tree_generics.split_for_impl();
    let mask_body = &output.mask_body;
    let unmask_body = &output.unmask_body;

    let resolve_impl = output.resolve_body.as_ref().map_or_else(
        || quote! {},
        |resolve_body| {
            let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
            quote! {
                impl #impl_generics #crate_root::ResolveVariant for #ident #ty_generics #where_clause {
                    fn resolve_variant(&self) -> #crate_root::Variant {
                        #resolve_body
                    }
                }
            }
        },
    );

    Ok(quote! {
        impl #impl_generics #crate_root::MaskTree for #ident #ty_generics #where_clause {
            #[allow(unused_variables, unreachable_patterns)]
            fn mask_with<M: #crate_root::SecretMapper>(&mut self, mapper: &M) {
                #mask_body
            }

            #[allow(unused_variables, unreachable_patterns)]
            fn unmask_with<M: #crate_root::SecretMapper>(&mut self, original: &Self, mapper: &M) {
                #unmask_body
            }
        }

        #resolve_impl
    })
}
