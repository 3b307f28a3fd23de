//! # Model Errors

use thiserror::Error;

use config::ConfigError;
use uke_csg::GeometryError;

use crate::assembly::Part;

/// Errors raised while building a part.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Parameters were rejected before anything was built.
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),

    /// A built tree would be rejected by the kernel.
    #[error("part {part} is malformed: {source}")]
    Geometry {
        part: Part,
        #[source]
        source: GeometryError,
    },

    /// The part came out with no volume.
    #[error("part {0} is empty")]
    EmptyPart(Part),

    /// Part name not in [`Part::ALL`].
    #[error("unknown part '{0}'")]
    UnknownPart(String),
}
