use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::surface_unavailable("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SceneError::render("x").to_string().contains("render error:"));
    assert!(SceneError::export("x").to_string().contains("export error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
