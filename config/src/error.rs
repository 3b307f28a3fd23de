//! # Configuration Errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dimension must be finite and strictly positive.
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A count lies outside its supported range.
    #[error("{name} must lie in {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// The body/neck joint must sit between the saddle and the nut.
    #[error("neck_offset {neck_offset} must be smaller than scale_length {scale_length}")]
    JointBeyondNut { neck_offset: f64, scale_length: f64 },

    /// Derived body wall would vanish or invert.
    #[error("body wall thickness {thickness:.3} mm is not positive; increase thickness or body_size")]
    WallTooThin { thickness: f64 },

    /// A truss-rod cut would break through the neck surface.
    #[error(
        "truss rod {section} leaves {wall:.2} mm of neck around it, {margin:.2} mm required; increase neck_width"
    )]
    TrussRodExposed {
        section: &'static str,
        wall: f64,
        margin: f64,
    },

    /// A neck split dowel would leave the blank or run into the truss channel.
    #[error("neck dowels leave {wall:.2} mm of material, {margin:.2} mm required; increase neck_width")]
    NeckDowelExposed { wall: f64, margin: f64 },

    /// Config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::ProjectConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests;
