use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PathMorphError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PathMorphError::interpolation("x")
            .to_string()
            .contains("interpolation error:")
    );
    assert!(
        PathMorphError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn conversion_names_both_kinds() {
    let msg = PathMorphError::conversion(CommandKind::Arc, CommandKind::BezierCurve).to_string();
    assert_eq!(msg, "conversion error: cannot convert A to C");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PathMorphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
