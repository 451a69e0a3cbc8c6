//! `SecretLeaf` derivation: registering a type as a secret leaf.
//!
//! The generated code reads and writes the one `#[secret]` field through
//! `SecretText`, routes `MaskTree` straight to the mapper's leaf operations and,
//! unless opted out, emits a `Debug` impl that hides the secret.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Attribute, Data, DeriveInput, Fields, Member, Meta, Result};

use crate::{
    crate_path, crate_root,
    generics::{add_debug_bounds, collect_generics_from_type},
    types::is_scalar_type,
};

struct LeafField {
    member: Member,
    ty: syn::Type,
    span: Span,
    is_secret: bool,
}

fn is_secret_field(attrs: &[Attribute]) -> Result<bool> {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("secret") {
            continue;
        }
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "field-level #[secret] takes no arguments",
            ));
        }
        if found {
            return Err(syn::Error::new(
                attr.span(),
                "multiple #[secret] attributes specified on the same field",
            ));
        }
        found = true;
    }
    Ok(found)
}

fn collect_fields(ident: &Ident, data: &Data) -> Result<(Vec<LeafField>, bool)> {
    let Data::Struct(data) = data else {
        return Err(syn::Error::new(
            ident.span(),
            "`SecretLeaf` can only be derived for structs; use `MaskTree` for enums",
        ));
    };
    let named = matches!(data.fields, Fields::Named(_));
    let mut fields = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let member = field
            .ident
            .clone()
            .map_or_else(|| Member::Unnamed(index.into()), Member::Named);
        fields.push(LeafField {
            member,
            ty: field.ty.clone(),
            span: field.span(),
            is_secret: is_secret_field(&field.attrs)?,
        });
    }
    Ok((fields, named))
}

pub(crate) fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let skip_debug = skip_debug_requested(&attrs)?;
    let (fields, named) = collect_fields(&ident, &data)?;

    let mut secret_fields = fields.iter().filter(|field| field.is_secret);
    let Some(secret) = secret_fields.next() else {
        return Err(syn::Error::new(
            ident.span(),
            "`SecretLeaf` needs exactly one field marked #[secret]",
        ));
    };
    if let Some(extra) = secret_fields.next() {
        return Err(syn::Error::new(
            extra.span,
            "a secret leaf holds exactly one secret; split the type or wrap the second secret \
            in its own `SecretLeaf`",
        ));
    }
    if is_scalar_type(&secret.ty) {
        return Err(syn::Error::new(
            secret.span,
            "#[secret] must be on a string slot (`String` or `Option<String>`), not a scalar",
        ));
    }

    let crate_root = crate_root();
    let text_path = crate_path("SecretText");

    let mut secret_generics = Vec::new();
    collect_generics_from_type(&secret.ty, &generics, &mut secret_generics);
    let mut leaf_generics = generics.clone();
    for param in leaf_generics.type_params_mut() {
        if secret_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(syn::parse_quote!(#text_path));
        }
    }
    let (impl_generics, ty_generics, where_clause) = leaf_generics.split_for_impl();
    let secret_member = &secret.member;

    let debug_impl = if skip_debug {
        quote! {}
    } else {
        let mut printed = Vec::new();
        for field in &fields {
            collect_generics_from_type(&field.ty, &generics, &mut printed);
        }
        let debug_generics = add_debug_bounds(generics.clone(), &printed);
        let (debug_impl_generics, debug_ty_generics, debug_where_clause) =
            debug_generics.split_for_impl();
        let masked_body = debug_body(&ident, &fields, named, true);
        let plain_body = debug_body(&ident, &fields, named, false);
        quote! {
            #[cfg(any(test, feature = "testing"))]
            impl #debug_impl_generics ::core::fmt::Debug for #ident #debug_ty_generics #debug_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #plain_body
                }
            }

            #[cfg(not(any(test, feature = "testing")))]
            impl #debug_impl_generics ::core::fmt::Debug for #ident #debug_ty_generics #debug_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #masked_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::SecretLeaf for #ident #ty_generics #where_clause {
            fn read_secret(&self) -> ::core::option::Option<&str> {
                #text_path::secret_str(&self.#secret_member)
            }

            fn write_secret(&mut self, value: ::core::option::Option<::std::string::String>) {
                #text_path::store_secret(&mut self.#secret_member, value);
            }
        }

        impl #impl_generics #crate_root::MaskTree for #ident #ty_generics #where_clause {
            fn mask_with<M: #crate_root::SecretMapper>(&mut self, mapper: &M) {
                mapper.mask_leaf(self);
            }

            fn unmask_with<M: #crate_root::SecretMapper>(&mut self, original: &Self, mapper: &M) {
                mapper.unmask_leaf(self, original);
            }
        }

        #debug_impl
    })
}

/// Reads `#[secret(skip_debug)]` off the type itself.
fn skip_debug_requested(attrs: &[Attribute]) -> Result<bool> {
    let mut skip_debug = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("secret")) {
        if let Meta::Path(path) = &attr.meta {
            return Err(syn::Error::new_spanned(
                path,
                "#[secret] belongs on the field holding the secret, not on the type",
            ));
        }
        attr.meta.require_list()?.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip_debug") {
                skip_debug = true;
                return Ok(());
            }
            let path = &meta.path;
            Err(meta.error(format!(
                "unknown container option `{}`; expected `skip_debug`",
                quote!(#path)
            )))
        })?;
    }
    Ok(skip_debug)
}

fn debug_body(ident: &Ident, fields: &[LeafField], named: bool, mask_secret: bool) -> TokenStream {
    let entries = fields.iter().map(|field| {
        let member = &field.member;
        let span = field.span;
        let value = if mask_secret && field.is_secret {
            quote_spanned! { span => &"[MASKED]" }
        } else {
            quote_spanned! { span => &self.#member }
        };
        if named {
            quote_spanned! { span => debug.field(stringify!(#member), #value); }
        } else {
            quote_spanned! { span => debug.field(#value); }
        }
    });
    if named {
        quote! {
            let mut debug = f.debug_struct(stringify!(#ident));
            #(#entries)*
            debug.finish()
        }
    } else {
        quote! {
            let mut debug = f.debug_tuple(stringify!(#ident));
            #(#entries)*
            debug.finish()
        }
    }
}
