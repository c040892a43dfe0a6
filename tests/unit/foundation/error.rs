use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MorphError::render("x").to_string().contains("render error:"));
    assert!(
        MorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_expression_names_the_lookup() {
    let err = MorphError::unknown_expression("Grumpy");
    assert_eq!(err.to_string(), "unknown expression 'Grumpy'");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
