use super::*;

#[test]
fn test_error_display() {
    let err = ConfigError::NonPositive {
        name: "neck_width",
        value: -1.0,
    };
    assert!(err.to_string().contains("neck_width"));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn test_range_display() {
    let err = ConfigError::OutOfRange {
        name: "num_frets",
        value: 40,
        min: 1,
        max: 24,
    };
    assert_eq!(err.to_string(), "num_frets must lie in 1..=24, got 40");
}

#[test]
fn test_truss_display_names_the_section() {
    let err = ConfigError::TrussRodExposed {
        section: "counterbore",
        wall: -1.0,
        margin: 2.0,
    };
    let text = err.to_string();
    assert!(text.starts_with("truss rod counterbore leaves -1.00 mm"));
    assert!(text.contains("neck_width"));
}
