//! # Primitives
//!
//! Small reusable solids shared by several parts.

use config::constants::OVERCUT;
use glam::{DVec2, DVec3};
use uke_csg::{hull, union_all, Shape};

/// Hexagonal nut pocket with its axis along x, centred on the origin, and a
/// slot running down (`-z`) by `slot_length` so the nut can be dropped in.
///
/// The flats face ±y, so the slot is exactly one nut wide and the nut cannot
/// turn.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// hull() {
///     rotate([0, 90, 0]) cylinder(h = t, r = af / sqrt(3), center = true, $fn = 6);
///     translate([0, 0, -slot]) rotate([0, 90, 0]) cylinder(...);
/// }
/// ```
pub fn hex_nut_slot(across_flats: f64, thickness: f64, slot_length: f64) -> Shape {
    let hex = Shape::centered_cylinder(thickness, across_flats / 3f64.sqrt())
        .with_segments(6)
        .rotate(DVec3::new(0.0, 90.0, 0.0));
    if slot_length <= 0.0 {
        return hex;
    }
    let lowered = hex.clone().translate(DVec3::new(0.0, 0.0, -slot_length));
    hull([hex, lowered])
}

/// Frustum of a rectangle: `bottom` at `z = 0`, `top` at `z = height`, both
/// centred on the z axis.
///
/// Degenerates to a pyramid or a wedge when a top side is zero.
pub fn prismoid(bottom: DVec2, top: DVec2, height: f64) -> Shape {
    let scale = DVec2::new(ratio(top.x, bottom.x), ratio(top.y, bottom.y));
    Shape::centered_square(bottom).extrude_scaled(height, scale)
}

fn ratio(top: f64, bottom: f64) -> f64 {
    if bottom > 0.0 {
        top / bottom
    } else {
        1.0
    }
}

/// Lower half of a cylinder lying along +x from `x = 0` to `x = length`.
///
/// The full cylinder is halved by an oversized box covering `z > 0`.
pub fn half_cylinder(length: f64, radius: f64) -> Shape {
    let rod = Shape::cylinder(length, radius).rotate(DVec3::new(0.0, 90.0, 0.0));
    let upper = Shape::cube(DVec3::new(
        length + 2.0 * OVERCUT,
        2.0 * (radius + OVERCUT),
        radius + OVERCUT,
    ))
    .translate(DVec3::new(-OVERCUT, -radius - OVERCUT, 0.0));
    rod.difference(upper)
}

/// Maker's mark glyph: two uprights under a chevron, over an underline.
///
/// Lies on the xy plane centred on the origin, `depth` thick, about `size`
/// across. Engraved by subtraction.
pub fn makers_mark(size: f64, depth: f64) -> Shape {
    let bar = DVec3::new(0.15 * size, 0.55 * size, depth);
    let uprights = [-0.3, 0.3].map(|x| {
        Shape::centered_cube(bar).translate(DVec3::new(x * size, 0.0, depth / 2.0))
    });

    // Trapezoid with its wide edge on the uprights, stood on the xy plane.
    let chevron = prismoid(
        DVec2::new(0.75 * size, depth),
        DVec2::new(0.2 * size, depth),
        0.25 * size,
    )
    .rotate(DVec3::new(-90.0, 0.0, 0.0))
    .translate(DVec3::new(0.0, 0.275 * size, depth / 2.0));

    let underline = Shape::centered_cube(DVec3::new(0.8 * size, 0.1 * size, depth))
        .translate(DVec3::new(0.0, -0.4 * size, depth / 2.0));

    let [left, right] = uprights;
    union_all([left, right, chevron, underline])
}

#[cfg(test)]
mod tests;
