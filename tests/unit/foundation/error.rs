use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlatlayError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = FlatlayError::dimension_mismatch(
        2,
        Canvas {
            width: 4,
            height: 4,
        },
        Canvas {
            width: 8,
            height: 4,
        },
    );
    let msg = err.to_string();
    assert!(msg.contains("layer 2"));
    assert!(msg.contains("got 8x4"));
    assert!(msg.contains("expected 4x4"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlatlayError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
