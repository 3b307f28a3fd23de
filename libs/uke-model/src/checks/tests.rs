use super::*;
use approx::assert_relative_eq;
use uke_csg::Shape;

#[test]
fn test_defaults_pass_every_check() {
    let reports = run_checks(&InstrumentParams::default());
    for r in &reports {
        assert!(r.passed, "{} failed: {}", r.name, r.detail);
    }
}

#[test]
fn test_report_names() {
    let names: Vec<String> = run_checks(&InstrumentParams::default())
        .into_iter()
        .map(|r| r.name)
        .collect();
    for expected in [
        "fret positions",
        "octave",
        "body wall",
        "sound hole",
        "neck bolts",
        "string action",
        "truss rod slot",
        "neck registration",
        "body registration",
        "fingerboard registration",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {}", expected);
    }
}

#[test]
fn test_thin_neck_fails_truss_check() {
    let params = InstrumentParams {
        neck_width: 20.0,
        ..InstrumentParams::default()
    };
    let failed: Vec<CheckReport> = run_checks(&params)
        .into_iter()
        .filter(|r| !r.passed)
        .collect();
    assert!(failed.iter().any(|r| r.name.starts_with("truss rod")));
    assert!(failed
        .iter()
        .all(|r| r.name.starts_with("truss rod") || r.name == "neck registration"));
}

#[test]
fn test_thin_neck_leaves_dowels_unseated() {
    let params = InstrumentParams {
        neck_width: 20.0,
        ..InstrumentParams::default()
    };
    let reports = run_checks(&params);
    let neck = reports
        .iter()
        .find(|r| r.name == "neck registration")
        .unwrap();
    assert!(!neck.passed);
    assert!(neck.detail.contains("2/2 dowels mate"));
    assert!(neck.detail.ends_with("4 not seated"));
    let board = reports
        .iter()
        .find(|r| r.name == "fingerboard registration")
        .unwrap();
    assert!(board.passed, "{}", board.detail);
}

#[test]
fn test_features_off_the_part_fail_registration() {
    let params = InstrumentParams::default();
    let split = neck::neck_split(&params);
    let heel = neck::heel_half(&params);
    let mut head = neck::head_half(&params);
    assert!(check_registration(&split, [&heel, &head], |_, _| true).passed);

    head.shape = Shape::cube(glam::DVec3::splat(1.0));
    let report = check_registration(&split, [&heel, &head], |_, _| true);
    assert!(!report.passed);
    assert!(report.detail.contains("0 not seated"));
}

#[test]
fn test_strings_clear_the_board() {
    let params = InstrumentParams::default();
    let standard = string_clearance(&params, BridgeVariant::Standard);
    let low = string_clearance(&params, BridgeVariant::Low);
    assert!(low > 0.0);
    // The strings fall towards the nut, so the tightest spot is there for
    // either bridge.
    let at_nut = nut_string_elevations(&params)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
        - FINGERBOARD_THICKNESS;
    assert_relative_eq!(standard, at_nut, epsilon = 1e-9);
    assert_relative_eq!(low, at_nut, epsilon = 1e-9);
}

#[test]
fn test_clamped_sound_hole_is_reported() {
    let params = InstrumentParams {
        sound_hole_radius: 80.0,
        ..InstrumentParams::default()
    };
    let hole = run_checks(&params)
        .into_iter()
        .find(|r| r.name == "sound hole")
        .unwrap();
    assert!(hole.passed);
    assert!(hole.detail.contains("clamped"));
}

#[test]
fn test_report_serializes() {
    let report = &run_checks(&InstrumentParams::default())[0];
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["passed"], true);
}
