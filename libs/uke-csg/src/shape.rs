//! # Shape Tree
//!
//! Immutable CSG nodes and the fluent combinators used to build them.
//!
//! Combinators normalise as they go: empty operands are dropped, nested
//! unions are flattened, and a difference keeps appending cutters to the same
//! node. Operand order is otherwise preserved, since difference is not
//! commutative.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// SHAPE
// =============================================================================

/// Boolean operation applied to a list of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanOperation {
    /// All children merged.
    Union,
    /// First child minus all the others.
    Difference,
    /// Space common to all children.
    Intersection,
}

impl BooleanOperation {
    /// Kernel keyword for the operation.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }
}

/// Whether a shape is planar or solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Planar,
    Solid,
}

/// A node in the scene tree.
///
/// All values are concrete: sizes are numbers, segment counts are either
/// fixed or left to the kernel's `$fa`/`$fs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================
    /// Rectangular box.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z], center = true);
    /// ```
    Cube { size: DVec3, center: bool },

    /// Sphere about the origin.
    Sphere { radius: f64, segments: Option<u32> },

    /// Cylinder or cone along +z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h = 10, r1 = 5, r2 = 3, center = true, $fn = 6);
    /// ```
    Cylinder {
        height: f64,
        radius_bottom: f64,
        radius_top: f64,
        center: bool,
        segments: Option<u32>,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================
    Circle { radius: f64, segments: Option<u32> },

    Square { size: DVec2, center: bool },

    Polygon { points: Vec<DVec2> },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================
    Translate { offset: DVec3, child: Box<Shape> },

    /// Euler rotation in degrees, applied about x, then y, then z.
    Rotate { angles: DVec3, child: Box<Shape> },

    /// Scale about the origin.
    Scale { factors: DVec3, child: Box<Shape> },

    /// Reflection through the plane with the given normal.
    Mirror { normal: DVec3, child: Box<Shape> },

    // =========================================================================
    // OPERATIONS
    // =========================================================================
    Boolean {
        operation: BooleanOperation,
        children: Vec<Shape>,
    },

    /// Convex hull of all children.
    Hull { children: Vec<Shape> },

    /// Minkowski sum of all children.
    Minkowski { children: Vec<Shape> },

    /// Linear extrusion of a 2D child along +z, scaled towards the top.
    LinearExtrude {
        height: f64,
        center: bool,
        scale: DVec2,
        child: Box<Shape>,
    },

    /// Nothing. Produced by empty selections and absorbed by combinators.
    Empty,
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

impl Shape {
    /// Box with one corner at the origin.
    pub fn cube(size: DVec3) -> Self {
        Self::Cube {
            size,
            center: false,
        }
    }

    /// Box centred on the origin.
    pub fn centered_cube(size: DVec3) -> Self {
        Self::Cube { size, center: true }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::Sphere {
            radius,
            segments: None,
        }
    }

    /// Cylinder standing on the xy plane.
    pub fn cylinder(height: f64, radius: f64) -> Self {
        Self::cone(height, radius, radius)
    }

    /// Cylinder centred on the origin along z.
    pub fn centered_cylinder(height: f64, radius: f64) -> Self {
        Self::Cylinder {
            height,
            radius_bottom: radius,
            radius_top: radius,
            center: true,
            segments: None,
        }
    }

    /// Cone or frustum standing on the xy plane.
    pub fn cone(height: f64, radius_bottom: f64, radius_top: f64) -> Self {
        Self::Cylinder {
            height,
            radius_bottom,
            radius_top,
            center: false,
            segments: None,
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self::Circle {
            radius,
            segments: None,
        }
    }

    /// Rectangle with one corner at the origin.
    pub fn square(size: DVec2) -> Self {
        Self::Square {
            size,
            center: false,
        }
    }

    pub fn centered_square(size: DVec2) -> Self {
        Self::Square { size, center: true }
    }

    pub fn polygon(points: Vec<DVec2>) -> Self {
        Self::Polygon { points }
    }

    /// Fixes the fragment count of a round primitive.
    ///
    /// Used for shapes whose facets matter, such as hexagonal nut slots and
    /// octagons. Has no effect on other nodes.
    ///
    /// ```rust
    /// use uke_csg::Shape;
    ///
    /// let hex = Shape::cylinder(3.0, 4.0).with_segments(6);
    /// assert!(matches!(hex, Shape::Cylinder { segments: Some(6), .. }));
    /// ```
    pub fn with_segments(self, count: u32) -> Self {
        match self {
            Self::Sphere { radius, .. } => Self::Sphere {
                radius,
                segments: Some(count),
            },
            Self::Cylinder {
                height,
                radius_bottom,
                radius_top,
                center,
                ..
            } => Self::Cylinder {
                height,
                radius_bottom,
                radius_top,
                center,
                segments: Some(count),
            },
            Self::Circle { radius, .. } => Self::Circle {
                radius,
                segments: Some(count),
            },
            other => other,
        }
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

impl Shape {
    pub fn translate(self, offset: DVec3) -> Self {
        if self.is_empty() || offset == DVec3::ZERO {
            return self;
        }
        Self::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Rotates by Euler angles in degrees (x first, then y, then z).
    pub fn rotate(self, angles: DVec3) -> Self {
        if self.is_empty() || angles == DVec3::ZERO {
            return self;
        }
        Self::Rotate {
            angles,
            child: Box::new(self),
        }
    }

    pub fn scale(self, factors: DVec3) -> Self {
        if self.is_empty() || factors == DVec3::ONE {
            return self;
        }
        Self::Scale {
            factors,
            child: Box::new(self),
        }
    }

    pub fn mirror(self, normal: DVec3) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::Mirror {
            normal,
            child: Box::new(self),
        }
    }

    /// Extrudes a 2D shape straight up.
    pub fn extrude(self, height: f64) -> Self {
        self.extrude_scaled(height, DVec2::ONE)
    }

    /// Extrudes a 2D shape, scaling it about the origin towards the top.
    pub fn extrude_scaled(self, height: f64, scale: DVec2) -> Self {
        if self.is_empty() {
            return self;
        }
        Self::LinearExtrude {
            height,
            center: false,
            scale,
            child: Box::new(self),
        }
    }
}

// =============================================================================
// BOOLEAN COMBINATORS
// =============================================================================

impl Shape {
    /// Merges `other` into this shape.
    pub fn union(self, other: Shape) -> Self {
        union_all([self, other])
    }

    /// Removes `cutter` from this shape.
    pub fn difference(self, cutter: Shape) -> Self {
        difference_all(self, [cutter])
    }

    pub fn intersection(self, other: Shape) -> Self {
        intersection_all([self, other])
    }
}

/// Union of all shapes, flattening nested unions and skipping empties.
pub fn union_all(shapes: impl IntoIterator<Item = Shape>) -> Shape {
    let mut children = Vec::new();
    for shape in shapes {
        match shape {
            Shape::Empty => {}
            Shape::Boolean {
                operation: BooleanOperation::Union,
                children: nested,
            } => children.extend(nested),
            other => children.push(other),
        }
    }
    collapse(BooleanOperation::Union, children)
}

/// `base` minus every cutter, in order.
///
/// An empty base stays empty; empty cutters are ignored.
pub fn difference_all(base: Shape, cutters: impl IntoIterator<Item = Shape>) -> Shape {
    if base.is_empty() {
        return Shape::Empty;
    }
    let mut children = match base {
        Shape::Boolean {
            operation: BooleanOperation::Difference,
            children,
        } => children,
        other => vec![other],
    };
    children.extend(cutters.into_iter().filter(|cutter| !cutter.is_empty()));
    collapse(BooleanOperation::Difference, children)
}

/// Intersection of all shapes. Any empty operand empties the result.
pub fn intersection_all(shapes: impl IntoIterator<Item = Shape>) -> Shape {
    let mut children = Vec::new();
    for shape in shapes {
        if shape.is_empty() {
            return Shape::Empty;
        }
        children.push(shape);
    }
    collapse(BooleanOperation::Intersection, children)
}

/// Convex hull of the non-empty shapes.
pub fn hull(shapes: impl IntoIterator<Item = Shape>) -> Shape {
    let children: Vec<Shape> = shapes.into_iter().filter(|s| !s.is_empty()).collect();
    if children.is_empty() {
        return Shape::Empty;
    }
    Shape::Hull { children }
}

/// Minkowski sum of two shapes, typically a body swept by a sphere.
pub fn minkowski(shape: Shape, brush: Shape) -> Shape {
    if shape.is_empty() || brush.is_empty() {
        return Shape::Empty;
    }
    Shape::Minkowski {
        children: vec![shape, brush],
    }
}

fn collapse(operation: BooleanOperation, mut children: Vec<Shape>) -> Shape {
    match children.len() {
        0 => Shape::Empty,
        1 => children.remove(0),
        _ => Shape::Boolean {
            operation,
            children,
        },
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl Shape {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Planar or solid, or `None` for [`Shape::Empty`].
    ///
    /// Operations take the dimension of their first non-empty child.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Self::Circle { .. } | Self::Square { .. } | Self::Polygon { .. } => {
                Some(Dimension::Planar)
            }
            Self::Cube { .. }
            | Self::Sphere { .. }
            | Self::Cylinder { .. }
            | Self::LinearExtrude { .. } => Some(Dimension::Solid),
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Scale { child, .. }
            | Self::Mirror { child, .. } => child.dimension(),
            Self::Boolean { children, .. }
            | Self::Hull { children }
            | Self::Minkowski { children } => children.iter().find_map(Shape::dimension),
            Self::Empty => None,
        }
    }

    pub fn is_2d(&self) -> bool {
        self.dimension() == Some(Dimension::Planar)
    }

    /// Number of nodes in the tree, leaves included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[Shape] {
        match self {
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Scale { child, .. }
            | Self::Mirror { child, .. }
            | Self::LinearExtrude { child, .. } => std::slice::from_ref(child.as_ref()),
            Self::Boolean { children, .. }
            | Self::Hull { children }
            | Self::Minkowski { children } => children,
            _ => &[],
        }
    }

    /// Short node name used in paths and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "cube",
            Self::Sphere { .. } => "sphere",
            Self::Cylinder { .. } => "cylinder",
            Self::Circle { .. } => "circle",
            Self::Square { .. } => "square",
            Self::Polygon { .. } => "polygon",
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
            Self::Mirror { .. } => "mirror",
            Self::Boolean { operation, .. } => operation.keyword(),
            Self::Hull { .. } => "hull",
            Self::Minkowski { .. } => "minkowski",
            Self::LinearExtrude { .. } => "linear_extrude",
            Self::Empty => "empty",
        }
    }
}

#[cfg(test)]
mod tests;
