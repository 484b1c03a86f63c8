use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RingletError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        RingletError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        RingletError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RingletError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = RingletError::from(e);
    assert!(matches!(err, RingletError::Serde(_)));
}
