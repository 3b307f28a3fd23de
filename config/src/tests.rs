//! Crate-level tests: defaults in `params` must agree with `constants`.

use crate::constants::*;
use crate::{InstrumentParams, ProjectConfig, RenderSettings};

#[test]
fn test_params_default_from_constants() {
    let params = InstrumentParams::default();
    assert_eq!(params.num_frets, DEFAULT_NUM_FRETS);
    assert_eq!(params.string_count, DEFAULT_STRING_COUNT);
    assert!(approx_equal(params.body_size, DEFAULT_BODY_SIZE));
}

#[test]
fn test_render_default_from_constants() {
    let render = RenderSettings::default();
    assert_eq!(render.fn_, DEFAULT_FN);
    assert!(approx_equal(render.fa, DEFAULT_FA));
    assert!(approx_equal(render.fs, DEFAULT_FS));
}

#[test]
fn test_empty_project_is_default() {
    let config = ProjectConfig::from_toml_str("").unwrap();
    assert_eq!(config, ProjectConfig::default());
}
