//! Enum-specific `MaskTree` derivation.
//!
//! An enum is a polymorphic object: the active variant is the concrete shape.
//! On unmask the submitted and original values are matched pairwise, so fields
//! are only paired when both sides hold the same variant. Any other pairing
//! falls through to `SecretMapper::variant_switched` and leaves the submitted
//! value as it is.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    crate_path, crate_root,
    strategy::{parse_field_strategy, parse_variant_kind, Strategy, VariantKind},
    transform::{generate_field_transform, DeriveContext},
    DeriveOutput,
};

/// Bindings for one variant's fields in the generated match arms.
struct VariantPatterns {
    /// Pattern binding the walked fields of the submitted value.
    current: TokenStream,
    /// Pattern binding the walked fields of the original value.
    original: TokenStream,
}

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let crate_root = crate_root();
    let tree_path = crate_path("MaskTree");
    let mut walked_generics = Vec::new();

    if data.variants.is_empty() {
        return Ok(DeriveOutput {
            mask_body: quote! { match *self {} },
            unmask_body: quote! { match *self {} },
            walked_generics,
            resolve_body: Some(quote! { match *self {} }),
        });
    }

    let mut mask_arms = Vec::new();
    let mut unmask_arms = Vec::new();
    let mut resolve_arms = Vec::new();

    for variant in data.variants {
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();
        let kind = parse_variant_kind(&variant.attrs)?;

        if kind == VariantKind::Unrecognized {
            if let Some(field) = variant
                .fields
                .iter()
                .find(|field| !matches!(parse_field_strategy(&field.attrs), Ok(Strategy::PassThrough)))
            {
                return Err(syn::Error::new(
                    field.span(),
                    "fields of a #[mask(unrecognized)] variant are never walked: remove #[mask]",
                ));
            }
            resolve_arms.push(quote! {
                Self::#variant_ident { .. } => #crate_root::Variant::Unrecognized(#variant_name)
            });
            mask_arms.push(quote! {
                Self::#variant_ident { .. } => mapper.unrecognized(
                    #crate_root::Mode::Mask,
                    stringify!(#name),
                    #variant_name,
                )
            });
            unmask_arms.push(quote! {
                (Self::#variant_ident { .. }, _) => mapper.unrecognized(
                    #crate_root::Mode::Unmask,
                    stringify!(#name),
                    #variant_name,
                )
            });
            continue;
        }

        resolve_arms.push(quote! {
            Self::#variant_ident { .. } => #crate_root::Variant::Known(#variant_name)
        });

        let mut ctx = DeriveContext {
            generics,
            tree_path: &tree_path,
            walked_generics: &mut walked_generics,
        };
        let mut masks = Vec::new();
        let mut unmasks = Vec::new();
        let patterns = match variant.fields {
            Fields::Unit => VariantPatterns {
                current: quote! { Self::#variant_ident },
                original: quote! { Self::#variant_ident },
            },
            Fields::Named(fields) => {
                let mut current_bindings = Vec::new();
                let mut original_bindings = Vec::new();
                for field in fields.named {
                    let strategy = parse_field_strategy(&field.attrs)?;
                    if strategy == Strategy::PassThrough {
                        continue;
                    }
                    let ident = field.ident.clone().expect("named field should have an identifier");
                    let original_ident = format_ident!("__original_{}", ident);
                    let transform = generate_field_transform(
                        &mut ctx,
                        &field.ty,
                        &quote! { #ident },
                        &quote! { #original_ident },
                        field.span(),
                        strategy,
                    )?;
                    masks.push(transform.mask);
                    unmasks.push(transform.unmask);
                    current_bindings.push(quote! { #ident });
                    original_bindings.push(quote! { #ident: #original_ident });
                }
                VariantPatterns {
                    current: quote! { Self::#variant_ident { #(#current_bindings,)* .. } },
                    original: quote! { Self::#variant_ident { #(#original_bindings,)* .. } },
                }
            }
            Fields::Unnamed(fields) => {
                let mut current_bindings = Vec::new();
                let mut original_bindings = Vec::new();
                for (index, field) in fields.unnamed.into_iter().enumerate() {
                    let strategy = parse_field_strategy(&field.attrs)?;
                    if strategy == Strategy::PassThrough {
                        current_bindings.push(quote! { _ });
                        original_bindings.push(quote! { _ });
                        continue;
                    }
                    let binding = format_ident!("field_{index}");
                    let original_binding = format_ident!("__original_field_{index}");
                    let transform = generate_field_transform(
                        &mut ctx,
                        &field.ty,
                        &quote! { #binding },
                        &quote! { #original_binding },
                        field.span(),
                        strategy,
                    )?;
                    masks.push(transform.mask);
                    unmasks.push(transform.unmask);
                    current_bindings.push(quote! { #binding });
                    original_bindings.push(quote! { #original_binding });
                }
                VariantPatterns {
                    current: quote! { Self::#variant_ident ( #(#current_bindings),* ) },
                    original: quote! { Self::#variant_ident ( #(#original_bindings),* ) },
                }
            }
        };

        let VariantPatterns { current, original } = patterns;
        mask_arms.push(quote! {
            #current => {
                #(#masks)*
            }
        });
        unmask_arms.push(quote! {
            (#current, #original) => {
                #(#unmasks)*
            }
        });
    }

    let resolve_path = crate_path("ResolveVariant");
    Ok(DeriveOutput {
        mask_body: quote! {
            match self {
                #(#mask_arms),*
            }
        },
        unmask_body: quote! {
            match (self, original) {
                #(#unmask_arms,)*
                (current, previous) => mapper.variant_switched(
                    stringify!(#name),
                    #resolve_path::resolve_variant(current).name(),
                    #resolve_path::resolve_variant(previous).name(),
                ),
            }
        },
        walked_generics,
        resolve_body: Some(quote! {
            match self {
                #(#resolve_arms),*
            }
        }),
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn derive(tokens: TokenStream) -> Result<DeriveOutput> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        let syn::Data::Enum(data) = input.data else {
            panic!("expected an enum");
        };
        derive_enum(&input.ident, data, &input.generics)
    }

    #[test]
    fn same_variant_pairs_fields_with_original() {
        let output = derive(quote! {
            enum Config {
                Mysql { #[mask] auth: BasicAuth, host: String },
            }
        })
        .unwrap();
        let unmask = output.unmask_body.to_string();
        assert!(unmask.contains("auth : __original_auth"));
        assert!(unmask.contains("variant_switched"));
        assert!(!unmask.contains("host"));
    }

    #[test]
    fn tuple_variant_skips_passthrough_positions() {
        let output = derive(quote! {
            enum Config {
                Pair(String, #[mask] BasicAuth),
            }
        })
        .unwrap();
        let mask = output.mask_body.to_string();
        assert!(mask.contains("Self :: Pair (_ , field_1)"));
    }

    #[test]
    fn unrecognized_variant_reports_to_mapper() {
        let output = derive(quote! {
            enum Config {
                Known(#[mask] BasicAuth),
                #[mask(unrecognized)]
                Other(Value),
            }
        })
        .unwrap();
        let mask = output.mask_body.to_string();
        assert!(mask.contains("mapper . unrecognized"));
        assert!(mask.contains("\"Other\""));
        let resolve = output.resolve_body.unwrap().to_string();
        assert!(resolve.contains("Variant :: Unrecognized (\"Other\")"));
        assert!(resolve.contains("Variant :: Known (\"Known\")"));
    }

    #[test]
    fn walked_field_in_unrecognized_variant_is_rejected() {
        let result = derive(quote! {
            enum Config {
                #[mask(unrecognized)]
                Other(#[mask] Value),
            }
        });
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("never walked"));
    }

    #[test]
    fn empty_enum_matches_on_deref() {
        let output = derive(quote! { enum Never {} }).unwrap();
        assert!(output.mask_body.to_string().starts_with("match * self"));
    }
}
