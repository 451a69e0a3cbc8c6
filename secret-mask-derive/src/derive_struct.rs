//! Struct-specific `MaskTree` derivation.
//!
//! A struct is a plain object: every walked field is visited in place and paired
//! with the same field of the original on unmask.

use quote::quote;
use syn::{spanned::Spanned, DataStruct, Fields, Member, Result};

use crate::{
    crate_path,
    strategy::parse_field_strategy,
    transform::{generate_field_transform, DeriveContext},
    DeriveOutput,
};

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let tree_path = crate_path("MaskTree");
    let mut walked_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        tree_path: &tree_path,
        walked_generics: &mut walked_generics,
    };

    let mut masks = Vec::new();
    let mut unmasks = Vec::new();

    let members: Vec<(Member, syn::Field)> = match data.fields {
        Fields::Named(fields) => fields
            .named
            .into_iter()
            .map(|field| {
                let ident = field.ident.clone().expect("named field should have an identifier");
                (Member::Named(ident), field)
            })
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .into_iter()
            .enumerate()
            .map(|(index, field)| (Member::Unnamed(index.into()), field))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    for (member, field) in members {
        let strategy = parse_field_strategy(&field.attrs)?;
        let current = quote! { &mut self.#member };
        let original = quote! { &original.#member };
        let transform = generate_field_transform(
            &mut ctx,
            &field.ty,
            &current,
            &original,
            field.span(),
            strategy,
        )?;
        masks.push(transform.mask);
        unmasks.push(transform.unmask);
    }

    Ok(DeriveOutput {
        mask_body: quote! { #(#masks)* },
        unmask_body: quote! { #(#unmasks)* },
        walked_generics,
        resolve_body: None,
    })
}
