//! Shared field traversal logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;
use syn::Result;

use crate::{generics::collect_generics_from_type, strategy::Strategy, types::is_scalar_type};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) tree_path: &'a TokenStream,
    pub(crate) walked_generics: &'a mut Vec<Ident>,
}

/// Mask and unmask statements generated for one field.
#[derive(Default)]
pub(crate) struct FieldTransform {
    pub(crate) mask: TokenStream,
    pub(crate) unmask: TokenStream,
}

/// Generates the traversal statements for a single field.
///
/// `current` must evaluate to `&mut FieldType` and `original` to `&FieldType`.
///
/// | Annotation | Mask | Unmask |
/// |------------|------|--------|
/// | None | nothing | nothing |
/// | `#[mask]` | `MaskTree::mask_with` | `MaskTree::unmask_with` against the original |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    current: &TokenStream,
    original: &TokenStream,
    span: Span,
    strategy: Strategy,
) -> Result<FieldTransform> {
    match strategy {
        Strategy::PassThrough => Ok(FieldTransform::default()),
        Strategy::Walk => {
            if is_scalar_type(ty) {
                return Err(syn::Error::new(
                    span,
                    "scalar fields never hold secrets: remove #[mask]. \
                    Secrets are found by walking into types that derive `MaskTree` or `SecretLeaf`.",
                ));
            }
            collect_generics_from_type(ty, ctx.generics, ctx.walked_generics);
            let tree_path = ctx.tree_path;
            Ok(FieldTransform {
                mask: quote_spanned! { span =>
                    #tree_path::mask_with(#current, mapper);
                },
                unmask: quote_spanned! { span =>
                    #tree_path::unmask_with(#current, #original, mapper);
                },
            })
        }
    }
}
