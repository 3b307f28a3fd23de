//! # Validation
//!
//! Structural checks run on every part before it is emitted. A tree that
//! passes is something the kernel accepts: positive finite sizes, enough
//! fragments on round primitives, planar input to extrusions, and no
//! operation mixing 2D and 3D children.

use config::constants::MIN_FRAGMENTS;
use glam::{DVec2, DVec3};

use crate::error::GeometryError;
use crate::shape::Shape;

impl Shape {
    /// Checks the whole tree, returning the first problem found.
    pub fn validate(&self) -> Result<(), GeometryError> {
        validate_node(self, self.kind().to_string())
    }
}

fn validate_node(shape: &Shape, path: String) -> Result<(), GeometryError> {
    match shape {
        Shape::Cube { size, .. } => positive_vec3(&path, "size", *size),
        Shape::Sphere { radius, segments } => {
            positive(&path, "radius", *radius)?;
            fragments(&path, *segments)
        }
        Shape::Cylinder {
            height,
            radius_bottom,
            radius_top,
            segments,
            ..
        } => {
            positive(&path, "height", *height)?;
            non_negative(&path, "bottom radius", *radius_bottom)?;
            non_negative(&path, "top radius", *radius_top)?;
            // A cone may come to a point at one end, not both.
            positive(&path, "radius", radius_bottom.max(*radius_top))?;
            fragments(&path, *segments)
        }
        Shape::Circle { radius, segments } => {
            positive(&path, "radius", *radius)?;
            fragments(&path, *segments)
        }
        Shape::Square { size, .. } => positive_vec2(&path, "size", *size),
        Shape::Polygon { points } => {
            if points.len() < 3 {
                return Err(GeometryError::DegeneratePolygon {
                    path,
                    count: points.len(),
                });
            }
            if points.iter().any(|p| !p.is_finite()) {
                return Err(GeometryError::NonFinite {
                    path,
                    what: "point",
                });
            }
            Ok(())
        }
        Shape::Translate { offset, child } => {
            finite(&path, "offset", *offset)?;
            validate_child(child, &path)
        }
        Shape::Rotate { angles, child } => {
            finite(&path, "angles", *angles)?;
            validate_child(child, &path)
        }
        Shape::Scale { factors, child } => {
            positive_vec3(&path, "scale factor", *factors)?;
            validate_child(child, &path)
        }
        Shape::Mirror { normal, child } => {
            finite(&path, "normal", *normal)?;
            positive(&path, "normal length", normal.length())?;
            validate_child(child, &path)
        }
        Shape::LinearExtrude {
            height,
            scale,
            child,
            ..
        } => {
            positive(&path, "height", *height)?;
            non_negative(&path, "top scale", scale.x)?;
            non_negative(&path, "top scale", scale.y)?;
            validate_child(child, &path)?;
            if child.dimension() == Some(crate::Dimension::Solid) {
                return Err(GeometryError::NotPlanar { path });
            }
            Ok(())
        }
        Shape::Boolean { children, .. }
        | Shape::Hull { children }
        | Shape::Minkowski { children } => {
            for (i, child) in children.iter().enumerate() {
                validate_node(child, format!("{path}[{i}]/{}", child.kind()))?;
            }
            let mut dims = children.iter().filter_map(Shape::dimension);
            if let Some(first) = dims.next() {
                if dims.any(|d| d != first) {
                    return Err(GeometryError::MixedDimensions { path });
                }
            }
            Ok(())
        }
        Shape::Empty => Ok(()),
    }
}

fn validate_child(child: &Shape, path: &str) -> Result<(), GeometryError> {
    validate_node(child, format!("{path}/{}", child.kind()))
}

// =============================================================================
// VALUE CHECKS
// =============================================================================

fn positive(path: &str, what: &'static str, value: f64) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite {
            path: path.to_string(),
            what,
        });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositive {
            path: path.to_string(),
            what,
            value,
        });
    }
    Ok(())
}

fn non_negative(path: &str, what: &'static str, value: f64) -> Result<(), GeometryError> {
    if value == 0.0 {
        return Ok(());
    }
    positive(path, what, value)
}

fn positive_vec2(path: &str, what: &'static str, v: DVec2) -> Result<(), GeometryError> {
    positive(path, what, v.x)?;
    positive(path, what, v.y)
}

fn positive_vec3(path: &str, what: &'static str, v: DVec3) -> Result<(), GeometryError> {
    positive(path, what, v.x)?;
    positive(path, what, v.y)?;
    positive(path, what, v.z)
}

fn finite(path: &str, what: &'static str, v: DVec3) -> Result<(), GeometryError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite {
            path: path.to_string(),
            what,
        })
    }
}

fn fragments(path: &str, segments: Option<u32>) -> Result<(), GeometryError> {
    match segments {
        Some(n) if n < MIN_FRAGMENTS => Err(GeometryError::TooFewSegments {
            path: path.to_string(),
            segments: n,
            min: MIN_FRAGMENTS,
        }),
        _ => Ok(()),
    }
}
