//! # Bounds
//!
//! Conservative axis-aligned bounds of a [`Shape`], computed without
//! tessellating anything. The box always contains the solid the kernel would
//! produce, but may be larger:
//!
//! - difference: bounds of the base
//! - intersection: overlap of the children's bounds
//! - hull, union: merged bounds
//! - Minkowski sum: sum of the bounds
//! - transforms: all eight corners mapped through the transform
//!
//! Round primitives use their nominal radius, which encloses any polygonal
//! approximation.

use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::shape::{BooleanOperation, Shape};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Aabb>, p| {
            Some(match acc {
                Some(b) => Aabb::new(b.min.min(p), b.max.max(p)),
                None => Aabb::new(p, p),
            })
        })
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Smallest box containing both.
    pub fn merge(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap of both boxes, `None` when they are disjoint.
    pub fn intersect(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min.cmple(max).all() {
            Some(Aabb::new(min, max))
        } else {
            None
        }
    }

    /// Bounds of the Minkowski sum of two boxes.
    pub fn minkowski(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min + other.min, self.max + other.max)
    }

    pub fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, b.y, b.z),
            DVec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounds of this box after an affine transform.
    pub fn transformed(&self, matrix: &DMat4) -> Aabb {
        let corners = self.corners().map(|c| matrix.transform_point3(c));
        // Eight corners always yield a box.
        let mut out = Aabb::new(corners[0], corners[0]);
        for c in &corners[1..] {
            out = Aabb::new(out.min.min(*c), out.max.max(*c));
        }
        out
    }
}

// =============================================================================
// TRANSFORM MATRICES
// =============================================================================

/// Matrix of a kernel rotation: x first, then y, then z.
pub fn rotation_matrix(angles_deg: DVec3) -> DMat4 {
    DMat4::from_rotation_z(angles_deg.z.to_radians())
        * DMat4::from_rotation_y(angles_deg.y.to_radians())
        * DMat4::from_rotation_x(angles_deg.x.to_radians())
}

/// Reflection through the plane through the origin with `normal`.
pub fn mirror_matrix(normal: DVec3) -> DMat4 {
    let n = normal.normalize_or_zero();
    if n == DVec3::ZERO {
        return DMat4::IDENTITY;
    }
    let col = |axis: DVec3| axis - 2.0 * n * n.dot(axis);
    DMat4::from_cols(
        col(DVec3::X).extend(0.0),
        col(DVec3::Y).extend(0.0),
        col(DVec3::Z).extend(0.0),
        glam::DVec4::W,
    )
}

// =============================================================================
// SHAPE BOUNDS
// =============================================================================

impl Shape {
    /// Conservative bounds, or `None` for a shape with no volume.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Shape::Cube { size, center } => Some(if *center {
                Aabb::new(-*size * 0.5, *size * 0.5)
            } else {
                Aabb::new(DVec3::ZERO, *size)
            }),
            Shape::Sphere { radius, .. } => {
                Some(Aabb::new(DVec3::splat(-radius), DVec3::splat(*radius)))
            }
            Shape::Cylinder {
                height,
                radius_bottom,
                radius_top,
                center,
                ..
            } => {
                let r = radius_bottom.max(*radius_top);
                let (z0, z1) = if *center {
                    (-height / 2.0, height / 2.0)
                } else {
                    (0.0, *height)
                };
                Some(Aabb::new(DVec3::new(-r, -r, z0), DVec3::new(r, r, z1)))
            }
            Shape::Circle { radius, .. } => {
                Some(planar(DVec2::splat(-radius), DVec2::splat(*radius)))
            }
            Shape::Square { size, center } => Some(if *center {
                planar(-*size * 0.5, *size * 0.5)
            } else {
                planar(DVec2::ZERO, *size)
            }),
            Shape::Polygon { points } => {
                Aabb::from_points(points.iter().map(|p| p.extend(0.0)))
            }
            Shape::Translate { offset, child } => child
                .bounds()
                .map(|b| Aabb::new(b.min + *offset, b.max + *offset)),
            Shape::Rotate { angles, child } => child
                .bounds()
                .map(|b| b.transformed(&rotation_matrix(*angles))),
            Shape::Scale { factors, child } => child
                .bounds()
                .map(|b| b.transformed(&DMat4::from_scale(*factors))),
            Shape::Mirror { normal, child } => child
                .bounds()
                .map(|b| b.transformed(&mirror_matrix(*normal))),
            Shape::Boolean {
                operation,
                children,
            } => match operation {
                BooleanOperation::Union => merged(children),
                BooleanOperation::Difference => children.first().and_then(Shape::bounds),
                BooleanOperation::Intersection => {
                    let mut iter = children.iter();
                    let first = iter.next()?.bounds()?;
                    iter.try_fold(first, |acc, child| acc.intersect(&child.bounds()?))
                }
            },
            Shape::Hull { children } => merged(children),
            Shape::Minkowski { children } => {
                let mut iter = children.iter();
                let first = iter.next()?.bounds()?;
                iter.try_fold(first, |acc, child| child.bounds().map(|b| acc.minkowski(&b)))
            }
            Shape::LinearExtrude {
                height,
                center,
                scale,
                child,
            } => {
                let base = child.bounds()?;
                let top = Aabb::new(
                    base.min * scale.extend(1.0),
                    base.max * scale.extend(1.0),
                );
                let xy = base.merge(&top);
                let (z0, z1) = if *center {
                    (-height / 2.0, height / 2.0)
                } else {
                    (0.0, *height)
                };
                Some(Aabb::new(
                    DVec3::new(xy.min.x, xy.min.y, z0),
                    DVec3::new(xy.max.x, xy.max.y, z1),
                ))
            }
            Shape::Empty => None,
        }
    }
}

fn planar(min: DVec2, max: DVec2) -> Aabb {
    Aabb::new(min.extend(0.0), max.extend(0.0))
}

fn merged(children: &[Shape]) -> Option<Aabb> {
    children
        .iter()
        .filter_map(Shape::bounds)
        .reduce(|a, b| a.merge(&b))
}
