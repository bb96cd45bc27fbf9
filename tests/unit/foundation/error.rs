use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EpicycleError::empty_input("x")
            .to_string()
            .contains("empty input:")
    );
    assert!(
        EpicycleError::degenerate_curve("x")
            .to_string()
            .contains("degenerate curve:")
    );
    assert!(
        EpicycleError::InvalidOrder(-1)
            .to_string()
            .contains("invalid truncation order: -1")
    );
    assert!(
        EpicycleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(EpicycleError::svg("x").to_string().contains("svg error:"));
    assert!(
        EpicycleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EpicycleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
