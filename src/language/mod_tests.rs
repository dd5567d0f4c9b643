use super::*;

#[test]
fn registry_is_reexported() {
    let registry = LanguageRegistry::default();
    assert_eq!(registry.resolve(".java"), "Java");
}
