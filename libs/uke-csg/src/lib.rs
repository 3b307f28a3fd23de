//! # Uke CSG
//!
//! The scene tree every part of the instrument is built from. A [`Shape`] is
//! an immutable value: primitives at the leaves, transforms, booleans, hull,
//! Minkowski sum and linear extrusion above them. Nothing here tessellates;
//! the tree is handed to an external kernel by `uke-scad`.
//!
//! ## Architecture
//!
//! ```text
//! uke-model (part builders) → uke-csg (Shape) → uke-scad (kernel source)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use uke_csg::Shape;
//!
//! let plate = Shape::cube(DVec3::new(40.0, 20.0, 4.0));
//! let hole = Shape::cylinder(10.0, 3.0).translate(DVec3::new(20.0, 10.0, -1.0));
//! let part = plate.difference(hole);
//!
//! let bounds = part.bounds().unwrap();
//! assert_eq!(bounds.max, DVec3::new(40.0, 20.0, 4.0));
//! assert!(part.validate().is_ok());
//! ```

pub mod bounds;
pub mod error;
pub mod shape;
pub mod validate;

pub use bounds::Aabb;
pub use error::GeometryError;
pub use shape::{
    difference_all, hull, intersection_all, minkowski, union_all, BooleanOperation, Dimension,
    Shape,
};
