//! # Uke SCAD
//!
//! Emits a [`Shape`] as OpenSCAD source and runs the `openscad` binary to
//! turn it into a mesh. Tessellation, boolean solving and STL writing all
//! happen in the kernel.
//!
//! ## Example
//!
//! ```rust
//! use config::RenderSettings;
//! use glam::DVec3;
//! use uke_csg::Shape;
//! use uke_scad::to_scad;
//!
//! let source = to_scad(&Shape::cube(DVec3::splat(10.0)), &RenderSettings::default(), "cube");
//! assert!(source.contains("cube([10, 10, 10]);"));
//! ```

pub mod error;
pub mod writer;

use std::path::Path;
use std::process::Command;

use config::RenderSettings;
use tracing::{debug, info};
use uke_csg::Shape;

pub use error::ScadError;
pub use writer::{format_number, ScadWriter};

/// Default kernel executable.
pub const OPENSCAD: &str = "openscad";

/// Full OpenSCAD source for `shape`: header comment, resolution settings,
/// then the tree.
pub fn to_scad(shape: &Shape, settings: &RenderSettings, title: &str) -> String {
    let mut writer = ScadWriter::new();
    writer.header(title, settings);
    writer.shape(shape);
    writer.finish()
}

/// Writes the source for `shape` to `path`.
pub fn write_scad(
    path: &Path,
    shape: &Shape,
    settings: &RenderSettings,
    title: &str,
) -> Result<(), ScadError> {
    let source = to_scad(shape, settings, title);
    std::fs::write(path, source).map_err(|source| ScadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote scad");
    Ok(())
}

/// Runs `openscad -o stl scad`.
pub fn render_stl(openscad: &str, scad: &Path, stl: &Path) -> Result<(), ScadError> {
    debug!(program = openscad, scad = %scad.display(), "running kernel");
    let output = Command::new(openscad)
        .arg("-o")
        .arg(stl)
        .arg(scad)
        .output()
        .map_err(|source| ScadError::Spawn {
            program: openscad.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ScadError::Kernel {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    info!(path = %stl.display(), "wrote stl");
    Ok(())
}

#[cfg(test)]
mod tests;
