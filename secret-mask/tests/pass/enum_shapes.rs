use secret_mask::{MaskTree, Maskable, ResolveVariant, SecretLeaf, Variant};

#[derive(Clone, SecretLeaf)]
#[secret(skip_debug)]
struct Password(#[secret] Option<String>);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}

#[derive(Clone, Debug, MaskTree)]
enum Credentials {
    None,
    Basic {
        user: String,
        #[mask]
        password: Password,
    },
    Chain(#[mask] Box<Credentials>, u8),
    #[mask(unrecognized)]
    Other(String),
}

#[derive(MaskTree)]
enum Never {}

fn main() {
    let mut chain = Credentials::Chain(
        Box::new(Credentials::Basic {
            user: "admin".into(),
            password: Password(Some("pw".into())),
        }),
        1,
    );
    let original = chain.clone();
    chain.mask();
    chain.unmask(&original);
    assert_eq!(chain.resolve_variant(), Variant::Known("Chain"));
    assert!(!Credentials::Other(String::new()).resolve_variant().is_recognized());
    assert_eq!(format!("{:?}", Credentials::None), "None");
}
