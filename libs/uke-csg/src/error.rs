//! # Geometry Errors
//!
//! Structural problems the kernel would reject. Every variant carries the
//! path of the offending node, e.g. `difference[1]/translate/cylinder`.

use thiserror::Error;

/// Errors found while validating a [`crate::Shape`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A size, radius, height or scale is zero or negative.
    #[error("{path}: {what} must be positive, got {value}")]
    NonPositive {
        path: String,
        what: &'static str,
        value: f64,
    },

    /// A coordinate is NaN or infinite.
    #[error("{path}: {what} is not finite")]
    NonFinite { path: String, what: &'static str },

    /// Fixed fragment count below the kernel minimum.
    #[error("{path}: {segments} segments requested, at least {min} required")]
    TooFewSegments { path: String, segments: u32, min: u32 },

    /// Polygon with fewer than three points.
    #[error("{path}: polygon needs at least 3 points, got {count}")]
    DegeneratePolygon { path: String, count: usize },

    /// Children of one operation mix 2D and 3D shapes.
    #[error("{path}: children mix 2D and 3D geometry")]
    MixedDimensions { path: String },

    /// Extrusion of something that is not planar.
    #[error("{path}: linear_extrude needs a 2D child")]
    NotPlanar { path: String },
}

impl GeometryError {
    /// Path of the node that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::NonPositive { path, .. }
            | Self::NonFinite { path, .. }
            | Self::TooFewSegments { path, .. }
            | Self::DegeneratePolygon { path, .. }
            | Self::MixedDimensions { path }
            | Self::NotPlanar { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::NonPositive {
            path: "union[0]/cube".to_string(),
            what: "size",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "union[0]/cube: size must be positive, got 0");
        assert_eq!(err.path(), "union[0]/cube");
    }
}
