use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollCueError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollCueError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        ScrollCueError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        ScrollCueError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollCueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: ScrollCueError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollCueError::Serde(_)));
}
