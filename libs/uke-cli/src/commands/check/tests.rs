use super::*;

#[test]
fn default_project_passes() {
    let summary = collect(&ProjectConfig::default()).unwrap();
    let failed: Vec<_> = summary.checks.iter().filter(|c| !c.passed).collect();
    assert!(failed.is_empty(), "failed: {failed:?}");
    assert!(summary.passed);
}

#[test]
fn reports_a_build_line_per_part() {
    let summary = collect(&ProjectConfig::default()).unwrap();
    let builds = summary
        .checks
        .iter()
        .filter(|c| c.name.starts_with("build "))
        .count();
    assert_eq!(builds, uke_model::Part::ALL.len());
}

#[test]
fn invalid_parameters_are_an_error() {
    let mut project = ProjectConfig::default();
    project.instrument.neck_offset = project.instrument.scale_length + 1.0;
    assert!(collect(&project).is_err());
}

#[test]
fn neck_too_narrow_for_the_truss_rod_is_an_error() {
    let mut project = ProjectConfig::default();
    project.instrument.neck_width = 20.0;
    let err = collect(&project).unwrap_err();
    assert!(format!("{err:#}").contains("truss rod"));
}
