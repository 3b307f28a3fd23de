//! Tests for file emission and the kernel runner.

use super::*;
use config::InstrumentParams;
use uke_model::{build, Part};

fn balanced(source: &str) -> bool {
    let mut depth: i64 = 0;
    for c in source.chars() {
        match c {
            '{' | '(' | '[' => depth += 1,
            '}' | ')' | ']' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

#[test]
fn test_every_part_emits_balanced_source() {
    let params = InstrumentParams::default();
    let settings = RenderSettings::default();
    for part in Part::ALL {
        let shape = build(part, &params).unwrap();
        let source = to_scad(&shape, &settings, part.name());
        assert!(balanced(&source), "{} has unbalanced brackets", part);
        assert!(source.starts_with(&format!("// {}\n", part.name())));
        assert!(!source.contains("NaN"));
    }
}

#[test]
fn test_write_scad_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nut.scad");
    let shape = build(Part::Nut, &InstrumentParams::default()).unwrap();
    write_scad(&path, &shape, &RenderSettings::default(), "nut").unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("difference() {"));
}

#[test]
fn test_write_scad_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nut.scad");
    let err = write_scad(&path, &Shape::Empty, &RenderSettings::default(), "nut").unwrap_err();
    assert!(matches!(err, ScadError::Io { .. }));
    assert!(err.to_string().contains("nut.scad"));
}

#[test]
fn test_missing_kernel_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_stl(
        "uke-no-such-kernel",
        &dir.path().join("a.scad"),
        &dir.path().join("a.stl"),
    )
    .unwrap_err();
    assert!(matches!(err, ScadError::Spawn { .. }));
}

#[cfg(unix)]
#[test]
fn test_failing_kernel_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_stl("false", &dir.path().join("a.scad"), &dir.path().join("a.stl"))
        .unwrap_err();
    assert!(matches!(err, ScadError::Kernel { .. }));
}
