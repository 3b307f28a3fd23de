use super::*;

fn options(dir: &Path) -> BuildOptions {
    BuildOptions {
        out_dir: dir.to_path_buf(),
        stl: None,
        json_tree: false,
    }
}

#[test]
fn selection_parses_keywords_and_parts() {
    assert_eq!(Selection::parse("all").unwrap(), Selection::All);
    assert_eq!(Selection::parse("NONE").unwrap(), Selection::Nothing);
    assert_eq!(
        Selection::parse("neck_heel").unwrap(),
        Selection::One(Part::NeckHeel)
    );
    assert!(Selection::parse("banjo").is_err());
}

#[test]
fn emits_every_part() {
    let dir = tempfile::tempdir().unwrap();
    let emitted = emit(Selection::All, &options(dir.path()), &ProjectConfig::default()).unwrap();
    assert_eq!(emitted.len(), Part::ALL.len());
    for part in Part::ALL {
        let path = dir.path().join(format!("{}.scad", part.name()));
        let source = std::fs::read_to_string(&path).unwrap();
        assert!(source.starts_with(&format!("// {}\n", part.name())));
    }
}

#[test]
fn emits_one_part_with_its_tree() {
    let dir = tempfile::tempdir().unwrap();
    let opts = BuildOptions {
        json_tree: true,
        ..options(dir.path())
    };
    let emitted = emit(Selection::One(Part::Nut), &opts, &ProjectConfig::default()).unwrap();
    assert_eq!(emitted.len(), 1);
    let tree_path = emitted[0].tree.as_ref().unwrap();
    let tree: Shape = serde_json::from_str(&std::fs::read_to_string(tree_path).unwrap()).unwrap();
    assert_eq!(tree.node_count(), emitted[0].nodes);
}

#[test]
fn empty_selection_writes_a_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let opts = BuildOptions {
        stl: Some("uke-no-such-kernel".to_string()),
        ..options(dir.path())
    };
    let emitted = emit(Selection::Nothing, &opts, &ProjectConfig::default()).unwrap();
    assert!(emitted[0].stl.is_none());
    let source = std::fs::read_to_string(dir.path().join("nothing.scad")).unwrap();
    assert!(source.contains("// nothing selected"));
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    emit(Selection::One(Part::Bridge), &options(&nested), &ProjectConfig::default()).unwrap();
    assert!(nested.join("bridge.scad").exists());
}

#[test]
fn missing_kernel_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let opts = BuildOptions {
        stl: Some("uke-no-such-kernel".to_string()),
        ..options(dir.path())
    };
    let err = emit(Selection::One(Part::Nut), &opts, &ProjectConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to render nut"));
}
