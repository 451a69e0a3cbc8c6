//! Parsing of `#[mask(...)]` field and variant attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Field traversal strategy based on `#[mask]` attributes.
///
/// ## Strategy Mapping
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `PassThrough` | Field untouched by mask and unmask |
/// | `#[mask]` | `Walk` | Recurse, pairing with the original field on unmask |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// No annotation: the field is not part of any configuration tree.
    PassThrough,
    /// Bare `#[mask]`: the field holds a nested tree, collection or secret leaf.
    Walk,
}

/// How an enum variant takes part in variant resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VariantKind {
    /// A concrete shape whose fields are walked.
    Known,
    /// `#[mask(unrecognized)]`: a shape the schema cannot describe; skipped.
    Unrecognized,
}

fn set_once<T>(target: &mut Option<T>, next: T, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] attributes specified on the same item",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                set_once(&mut strategy, Strategy::Walk, attr.span())?;
            }
            Meta::List(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "field-level #[mask] takes no arguments; secrets are identified by \
                    their type, so use bare #[mask] to walk into this field",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[mask]",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::PassThrough))
}

pub(crate) fn parse_variant_kind(attrs: &[Attribute]) -> Result<VariantKind> {
    let mut kind: Option<VariantKind> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                let mut parsed = None;
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("unrecognized") {
                        parsed = Some(VariantKind::Unrecognized);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown variant option `{}`; expected `unrecognized`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
                if let Some(parsed) = parsed {
                    set_once(&mut kind, parsed, attr.span())?;
                }
            }
            Meta::Path(_) | Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "variant-level #[mask] expects `#[mask(unrecognized)]`",
                ));
            }
        }
    }

    Ok(kind.unwrap_or(VariantKind::Known))
}
