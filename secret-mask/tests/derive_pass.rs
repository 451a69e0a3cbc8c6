//! Expansion tests: derive usages that must keep compiling.

#[test]
fn derive_pass_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/pass/*.rs");
}
