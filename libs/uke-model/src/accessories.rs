//! # Accessories
//!
//! Nut, bridge and tailpiece. Each is built in its own frame standing on
//! `z = 0` and centred on the string line; the assembly moves them into
//! place.

use config::constants::*;
use config::InstrumentParams;
use glam::{DVec2, DVec3};
use serde::Serialize;
use uke_csg::{difference_all, minkowski, union_all, Shape};

use crate::primitives::prismoid;

/// `count` evenly spaced offsets across `span`, centred on zero.
///
/// ```rust
/// use uke_model::accessories::string_positions;
///
/// assert_eq!(string_positions(30.0, 4), vec![-15.0, -5.0, 5.0, 15.0]);
/// assert_eq!(string_positions(30.0, 1), vec![0.0]);
/// ```
pub fn string_positions(span: f64, count: u32) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0; count as usize];
    }
    let step = span / f64::from(count - 1);
    (0..count)
        .map(|i| -span / 2.0 + step * f64::from(i))
        .collect()
}

/// Notch depth for string `index`: thicker strings sit deeper.
pub fn notch_depth(index: usize) -> f64 {
    NOTCH_BASE_DEPTH + string_gauge(index) * NOTCH_DEPTH_RATIO
}

fn notch_width(index: usize) -> f64 {
    string_gauge(index) + NOTCH_CLEARANCE
}

/// String notches across the top of a part `height` tall and `length` long
/// in x, at the given y offsets.
fn notches(offsets: &[f64], length: f64, height: f64) -> impl Iterator<Item = Shape> + '_ {
    offsets.iter().enumerate().map(move |(i, &y)| {
        let depth = notch_depth(i);
        Shape::centered_cube(DVec3::new(length + 2.0 * OVERCUT, notch_width(i), 2.0 * depth))
            .translate(DVec3::new(0.0, y, height))
    })
}

// =============================================================================
// NUT
// =============================================================================

/// String span at the nut.
pub fn nut_string_span(params: &InstrumentParams) -> f64 {
    params.neck_width - 2.0 * NUT_EDGE_MARGIN
}

/// Height of each string above the neck top where it leaves the nut.
pub fn nut_string_elevations(params: &InstrumentParams) -> Vec<f64> {
    (0..params.string_count as usize)
        .map(|i| NUT_HEIGHT - notch_depth(i))
        .collect()
}

/// Block tapering towards the top, notched per string gauge.
pub fn nut(params: &InstrumentParams) -> Shape {
    let block = prismoid(
        DVec2::new(NUT_LENGTH, params.neck_width),
        DVec2::new(NUT_TOP_LENGTH, params.neck_width),
        NUT_HEIGHT,
    );
    let offsets = string_positions(nut_string_span(params), params.string_count);
    difference_all(block, notches(&offsets, NUT_LENGTH, NUT_HEIGHT).collect::<Vec<_>>())
}

// =============================================================================
// BRIDGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeVariant {
    #[default]
    Standard,
    /// Lower action, for a neck set with less angle.
    Low,
}

impl BridgeVariant {
    pub fn height(self) -> f64 {
        match self {
            Self::Standard => BRIDGE_HEIGHT,
            Self::Low => BRIDGE_HEIGHT - BRIDGE_LOW_DROP,
        }
    }
}

/// String span at the bridge.
pub fn bridge_string_span(params: &InstrumentParams) -> f64 {
    nut_string_span(params) * BRIDGE_SPREAD
}

pub fn bridge_length(params: &InstrumentParams) -> f64 {
    bridge_string_span(params) + 2.0 * BRIDGE_END_MARGIN
}

/// Y centres of the three feet.
pub fn bridge_feet(params: &InstrumentParams) -> [f64; 3] {
    let reach = bridge_length(params) / 2.0 - BRIDGE_FOOT_LENGTH / 2.0;
    [-reach, 0.0, reach]
}

/// Tapered blade across the strings on three feet, with arch relief cuts
/// between the feet and a notch per string.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// rotate([90, 0, 0]) linear_extrude(length, center = true)
///     polygon([[-b/2, 0], [b/2, 0], [t/2, h], [-t/2, h]]);
/// ```
pub fn bridge(params: &InstrumentParams, variant: BridgeVariant) -> Shape {
    let length = bridge_length(params);
    let height = variant.height();
    let blade_height = height - BRIDGE_FOOT_HEIGHT;

    let profile = Shape::polygon(vec![
        DVec2::new(-BRIDGE_BASE / 2.0, 0.0),
        DVec2::new(BRIDGE_BASE / 2.0, 0.0),
        DVec2::new(BRIDGE_TOP / 2.0, blade_height),
        DVec2::new(-BRIDGE_TOP / 2.0, blade_height),
    ]);
    let blade = profile
        .extrude(length)
        .rotate(DVec3::new(90.0, 0.0, 0.0))
        .translate(DVec3::new(0.0, length / 2.0, BRIDGE_FOOT_HEIGHT));

    let feet = bridge_feet(params).map(|y| {
        Shape::centered_cube(DVec3::new(
            BRIDGE_FOOT_WIDTH,
            BRIDGE_FOOT_LENGTH,
            BRIDGE_FOOT_HEIGHT + OVERCUT,
        ))
        .translate(DVec3::new(0.0, y, (BRIDGE_FOOT_HEIGHT + OVERCUT) / 2.0))
    });

    // Arches between neighbouring feet.
    let feet_y = bridge_feet(params);
    let reliefs = feet_y.windows(2).map(|pair| {
        let gap = pair[1] - pair[0] - BRIDGE_FOOT_LENGTH;
        Shape::centered_cube(DVec3::new(
            BRIDGE_BASE + 2.0 * OVERCUT,
            gap,
            2.0 * BRIDGE_RELIEF_HEIGHT,
        ))
        .translate(DVec3::new(0.0, (pair[0] + pair[1]) / 2.0, BRIDGE_FOOT_HEIGHT))
    });

    let offsets = string_positions(bridge_string_span(params), params.string_count);
    let [a, b, c] = feet;
    difference_all(
        union_all([blade, a, b, c]),
        reliefs
            .chain(notches(&offsets, BRIDGE_BASE, height))
            .collect::<Vec<_>>(),
    )
}

/// Height of each string above the soundboard where it crosses the bridge.
pub fn bridge_string_elevations(params: &InstrumentParams, variant: BridgeVariant) -> Vec<f64> {
    (0..params.string_count as usize)
        .map(|i| variant.height() - notch_depth(i))
        .collect()
}

// =============================================================================
// TAILPIECE
// =============================================================================

/// Rounded tapered plate with one anchor hole per string, wide end towards
/// the tail. Centred on the origin in x and y.
pub fn tailpiece(params: &InstrumentParams) -> Shape {
    let rr = TAILPIECE_ROUNDING;
    let half_length = TAILPIECE_LENGTH / 2.0 - rr;
    let wide = TAILPIECE_WIDE / 2.0 - rr;
    let narrow = TAILPIECE_NARROW / 2.0 - rr;

    let plate = Shape::polygon(vec![
        DVec2::new(-half_length, -wide),
        DVec2::new(half_length, -narrow),
        DVec2::new(half_length, narrow),
        DVec2::new(-half_length, wide),
    ])
    .extrude_scaled(TAILPIECE_HEIGHT - 2.0 * rr, DVec2::splat(TAILPIECE_TAPER))
    .translate(DVec3::new(0.0, 0.0, rr));
    let rounded = minkowski(plate, Shape::sphere(rr));

    let holes = string_positions(TAILPIECE_STRING_SPAN, params.string_count)
        .into_iter()
        .map(|y| {
            Shape::centered_cylinder(TAILPIECE_LENGTH + 2.0 * OVERCUT, ANCHOR_HOLE_DIAMETER / 2.0)
                .rotate(DVec3::new(0.0, 90.0, 0.0))
                .translate(DVec3::new(0.0, y, TAILPIECE_HEIGHT / 2.0))
        })
        .collect::<Vec<_>>();
    difference_all(rounded, holes)
}

#[cfg(test)]
mod tests;
