use std::{collections::BTreeMap, marker::PhantomData};

use secret_mask::{Maskable, MaskTree, SecretLeaf, MASKED_SECRET};

#[derive(Clone, SecretLeaf)]
struct Token<S> {
    #[secret]
    value: S,
}

#[derive(Clone, MaskTree)]
struct Registry<T, Tag> {
    #[mask]
    entries: BTreeMap<String, T>,
    label: String,
    marker: PhantomData<Tag>,
}

#[derive(Clone)]
struct Production;

fn main() {
    let mut registry: Registry<Token<String>, Production> = Registry {
        entries: BTreeMap::from([(
            "api".to_string(),
            Token {
                value: "secret".to_string(),
            },
        )]),
        label: "keys".into(),
        marker: PhantomData,
    };
    let original = registry.clone();
    registry.mask();
    assert_eq!(registry.entries["api"].value, MASKED_SECRET);
    registry.unmask(&original);
    assert_eq!(registry.entries["api"].value, "secret");
}
