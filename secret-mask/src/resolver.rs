//! Polymorphic container resolution.
//!
//! A configuration family (connection configs, security configs, pipeline
//! configs) is a closed Rust enum; after deserialization the value already is its
//! concrete shape. [`ResolveVariant`] names that shape so the walker can report
//! skipped or switched variants. `#[derive(MaskTree)]` implements it for enums.

use std::fmt;

/// The concrete shape of a polymorphic configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// A shape the schema describes; its fields are walked.
    Known(&'static str),
    /// A catch-all shape the schema does not describe; never walked.
    Unrecognized(&'static str),
}

impl Variant {
    /// The variant name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Known(name) | Self::Unrecognized(name) => name,
        }
    }

    /// Whether secrets inside this shape can be found.
    pub const fn is_recognized(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a polymorphic configuration value to its concrete shape.
pub trait ResolveVariant {
    /// Returns the active variant.
    fn resolve_variant(&self) -> Variant;
}

impl<T> ResolveVariant for Box<T>
where
    T: ResolveVariant + ?Sized,
{
    fn resolve_variant(&self) -> Variant {
        (**self).resolve_variant()
    }
}

#[cfg(test)]
mod tests {
    use super::{ResolveVariant, Variant};
    use crate::MaskTree;

    #[derive(MaskTree)]
    enum Shape {
        Circle,
        Square { side: u32 },
        #[mask(unrecognized)]
        Other(String),
    }

    #[test]
    fn known_variants_resolve_by_name() {
        assert_eq!(Shape::Circle.resolve_variant(), Variant::Known("Circle"));
        assert_eq!(
            Shape::Square { side: 2 }.resolve_variant(),
            Variant::Known("Square")
        );
    }

    #[test]
    fn unrecognized_variant_is_flagged() {
        let variant = Shape::Other("hexagon".into()).resolve_variant();
        assert!(!variant.is_recognized());
        assert_eq!(variant.name(), "Other");
        assert_eq!(variant.to_string(), "Other");
    }

    #[test]
    fn boxed_value_resolves_through_the_box() {
        let boxed = Box::new(Shape::Circle);
        assert!(boxed.resolve_variant().is_recognized());
    }
}
