//! Secret field registry: types that *are* secrets.
//!
//! - [`SecretText`]: the string slot a secret lives in (`String`, `Option<String>`)
//! - [`SecretLeaf`]: a type registered as a secret, with its accessor/mutator pair
//!
//! A value is a secret leaf because of its type. `#[derive(SecretLeaf)]` registers a
//! type by pointing at the one field that holds the secret; from then on every value
//! of that type is treated as a secret wherever it sits in a tree, whatever the
//! parent field is called.

/// A string slot that can hold a secret.
///
/// An empty `String` reads as "no secret", the same as `None`. Storing `None`
/// clears the slot, which is a no-op when no secret was ever set.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot hold a secret",
    label = "`#[secret]` must be on a string slot",
    note = "`#[secret]` supports `String` and `Option<String>`"
)]
pub trait SecretText {
    /// Returns the secret, or `None` when no secret is set.
    fn secret_str(&self) -> Option<&str>;
    /// Replaces the secret in place.
    fn store_secret(&mut self, value: Option<String>);
}

impl SecretText for String {
    fn secret_str(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self.as_str())
    }

    fn store_secret(&mut self, value: Option<String>) {
        match value {
            Some(value) => *self = value,
            None => self.clear(),
        }
    }
}

impl SecretText for Option<String> {
    fn secret_str(&self) -> Option<&str> {
        self.as_deref()
    }

    fn store_secret(&mut self, value: Option<String>) {
        *self = value;
    }
}

/// A configuration type whose semantic purpose is holding one secret.
///
/// Implemented by `#[derive(SecretLeaf)]`, which also implements
/// [`MaskTree`](crate::MaskTree) by routing the value to the mapper's leaf
/// operations. Hand-written implementations must do the same.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a registered secret leaf",
    label = "this type cannot be masked directly",
    note = "add `#[derive(SecretLeaf)]` and mark the secret field with `#[secret]`"
)]
pub trait SecretLeaf {
    /// Reads the secret, `None` when absent.
    fn read_secret(&self) -> Option<&str>;
    /// Overwrites the secret in place; `None` clears it.
    fn write_secret(&mut self, value: Option<String>);
}
