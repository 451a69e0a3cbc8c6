//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in walked (`#[mask]`) fields.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics:
//!
//! ```ignore
//! struct Typed<T> {
//!     #[mask]
//!     config: Config,
//!     _marker: PhantomData<T>,  // T should NOT require MaskTree
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    let syn::Type::Path(path) = ty else {
        return;
    };
    let Some(segment) = path.path.segments.last() else {
        return;
    };
    if segment.ident == "PhantomData" {
        return;
    }

    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        for arg in &args.args {
            if let syn::GenericArgument::Type(inner_ty) = arg {
                collect_generics_from_type(inner_ty, generics, result);
            }
        }
    }

    for param in generics.type_params() {
        if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
            result.push(param.ident.clone());
        }
    }
}

/// Adds `MaskTree` bounds to generic parameters used in walked fields.
pub(crate) fn add_tree_bounds(mut generics: syn::Generics, walked: &[Ident]) -> syn::Generics {
    for param in generics.type_params_mut() {
        if walked.iter().any(|g| g == &param.ident) {
            let tree_path = crate_path("MaskTree");
            param.bounds.push(parse_quote!(#tree_path));
        }
    }
    generics
}

/// Adds `Debug` bounds to generic parameters printed by a generated `Debug` impl.
pub(crate) fn add_debug_bounds(mut generics: syn::Generics, printed: &[Ident]) -> syn::Generics {
    for param in generics.type_params_mut() {
        if printed.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(::core::fmt::Debug));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn generics_of(tokens: proc_macro2::TokenStream) -> syn::Generics {
        let input: syn::DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        input.generics
    }

    #[test]
    fn nested_generic_is_collected_once() {
        let generics = generics_of(quote! { struct S<T> { a: T } });
        let ty: syn::Type = syn::parse2(quote! { Option<Vec<T>> }).unwrap();
        let mut found = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut found);
        collect_generics_from_type(&ty, &generics, &mut found);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], "T");
    }

    #[test]
    fn phantom_data_is_skipped() {
        let generics = generics_of(quote! { struct S<T> { a: T } });
        let ty: syn::Type = syn::parse2(quote! { PhantomData<T> }).unwrap();
        let mut found = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut found);
        assert!(found.is_empty());
    }
}
