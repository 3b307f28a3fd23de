//! # Body
//!
//! Hollow teardrop shell with the neck socket, screw block, brace, sound
//! hole and integrated tailpiece.
//!
//! ## Construction
//!
//! 1. Outline: hull of the lower and upper bout circles, inset by the
//!    rounding radius.
//! 2. Outer shell: the outline at the top hulled with a copy at the bottom
//!    that is squeezed in x about the joint (the slant), then swept by a
//!    sphere.
//! 3. Cavity: the outer shell shrunk about the cavity centre and nudged
//!    towards the top.
//! 4. Screw block, brace and tailpiece are added; sound hole and neck socket
//!    are cut last.

use config::constants::*;
use config::InstrumentParams;
use glam::{DVec2, DVec3};
use serde::Serialize;
use tracing::warn;
use uke_csg::{difference_all, hull, minkowski, union_all, Aabb, Shape};

use crate::accessories;
use crate::neck::{self, Joinery};
use crate::primitives::{hex_nut_slot, prismoid};
use crate::registration::{DowelStyle, Feature, HalfPart, Side, Split};

// =============================================================================
// SHELL
// =============================================================================

/// Teardrop outline on the xy plane, inset by the rounding radius.
pub fn outline(params: &InstrumentParams) -> Shape {
    let lower = Shape::circle(params.lower_bout_radius() - BODY_ROUNDING)
        .translate(DVec3::new(params.lower_bout_x(), 0.0, 0.0));
    let upper = Shape::circle(params.upper_bout_radius() - BODY_ROUNDING)
        .translate(DVec3::new(params.upper_bout_x(), 0.0, 0.0));
    hull([lower, upper])
}

/// Outer shell from `z = -thickness` to `z = 0`.
pub fn outer_shell(params: &InstrumentParams) -> Shape {
    let pivot = params.slant_pivot_x();
    let rr = BODY_ROUNDING;

    let top = outline(params)
        .extrude(BODY_SLAB)
        .translate(DVec3::new(0.0, 0.0, -rr - BODY_SLAB));
    let bottom = outline(params)
        .translate(DVec3::new(-pivot, 0.0, 0.0))
        .scale(DVec3::new(BODY_SLANT, 1.0, 1.0))
        .translate(DVec3::new(pivot, 0.0, 0.0))
        .extrude(BODY_SLAB)
        .translate(DVec3::new(0.0, 0.0, -params.thickness + rr));

    minkowski(hull([top, bottom]), Shape::sphere(rr))
}

fn cavity_center(params: &InstrumentParams) -> DVec3 {
    DVec3::from(params.cavity_center())
}

/// Where a point of the outer shell lands on the cavity surface.
fn to_cavity(params: &InstrumentParams, p: DVec3) -> DVec3 {
    let c = cavity_center(params);
    c + BODY_SHRINK * (p - c) + DVec3::new(0.0, 0.0, BODY_CAVITY_OFFSET)
}

/// Underside of the soundboard.
pub fn cavity_top_z(params: &InstrumentParams) -> f64 {
    to_cavity(params, DVec3::ZERO).z
}

/// Inside face of the back.
pub fn cavity_bottom_z(params: &InstrumentParams) -> f64 {
    to_cavity(params, DVec3::new(0.0, 0.0, -params.thickness)).z
}

/// The outer shell shrunk about the cavity centre and offset towards the top.
pub fn cavity(params: &InstrumentParams) -> Shape {
    let c = cavity_center(params);
    outer_shell(params)
        .translate(-c)
        .scale(DVec3::splat(BODY_SHRINK))
        .translate(c + DVec3::new(0.0, 0.0, BODY_CAVITY_OFFSET))
}

/// Lower bound of the wall between outer shell and cavity.
pub fn min_wall_thickness(params: &InstrumentParams) -> f64 {
    params.min_body_wall()
}

// =============================================================================
// SOUND HOLE
// =============================================================================

/// Sound hole placement.
///
/// The hole is centred on the cavity's upper bout and clamped so it stays
/// [`SOUND_HOLE_MARGIN`] inside both the cavity outline and the screw block.
/// Its cutter only spans the soundboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundHole {
    pub center: DVec2,
    pub radius: f64,
    pub requested_radius: f64,
    /// Underside of the soundboard.
    pub floor_z: f64,
    /// Distance from the hole edge to the nearest side wall or block.
    pub clearance: f64,
}

impl SoundHole {
    pub fn is_clamped(&self) -> bool {
        self.radius < self.requested_radius
    }

    /// Cylinder through the soundboard only.
    pub fn cutter(&self) -> Shape {
        if self.radius <= 0.0 {
            return Shape::Empty;
        }
        Shape::cylinder(-self.floor_z + 2.0 * OVERCUT, self.radius).translate(DVec3::new(
            self.center.x,
            self.center.y,
            self.floor_z - OVERCUT,
        ))
    }
}

pub fn sound_hole(params: &InstrumentParams) -> SoundHole {
    let center = to_cavity(params, DVec3::new(params.upper_bout_x(), 0.0, 0.0));
    let cavity_radius = BODY_SHRINK * (params.upper_bout_radius() - BODY_ROUNDING);
    let room = cavity_radius.min(screw_block_inner_x(params) - center.x);

    let requested = params.sound_hole_radius;
    let radius = requested.min(room - SOUND_HOLE_MARGIN).max(0.0);
    if radius < requested {
        warn!(
            requested,
            radius, "sound hole clamped to stay inside the cavity"
        );
    }
    SoundHole {
        center: center.truncate(),
        radius,
        requested_radius: requested,
        floor_z: cavity_top_z(params),
        clearance: room - radius,
    }
}

// =============================================================================
// SCREW BLOCK
// =============================================================================

/// Inside face of the screw block.
pub fn screw_block_inner_x(params: &InstrumentParams) -> f64 {
    params.heel_start_x() - SCREW_BLOCK_LENGTH
}

/// Bolt axes through the screw block. Shared with the heel.
pub fn screw_block_bolts(params: &InstrumentParams) -> [DVec3; 2] {
    neck::neck_bolts(params)
}

fn axial(from: f64, to: f64, radius: f64, at: DVec3) -> Shape {
    Shape::cylinder(to - from, radius)
        .rotate(DVec3::new(0.0, 90.0, 0.0))
        .translate(DVec3::new(from, at.y, at.z))
}

/// Block behind the neck socket, clipped to the shell, holding the captive
/// bolt nuts. Solid when the neck is fused.
pub fn screw_block(params: &InstrumentParams, joinery: Joinery) -> Shape {
    let inner = screw_block_inner_x(params);
    let half_width = params.neck_width / 2.0 + SCREW_BLOCK_MARGIN;
    let bottom = -(params.heel_depth() + SCREW_BLOCK_FLOOR);

    let block = Shape::cube(DVec3::new(
        params.neck_offset - inner,
        2.0 * half_width,
        -bottom,
    ))
    .translate(DVec3::new(inner, -half_width, bottom))
    .intersection(outer_shell(params));

    if joinery == Joinery::Fused {
        return block;
    }

    let truss_access = axial(
        inner - OVERCUT,
        params.heel_start_x() + OVERCUT,
        TRUSS_COUNTERBORE_DIAMETER / 2.0,
        DVec3::new(0.0, 0.0, -TRUSS_ROD_DEPTH / 2.0),
    );
    let cutters = screw_block_bolts(params).into_iter().flat_map(|bolt| {
        let through = axial(inner - OVERCUT, params.neck_offset, BOLT_DIAMETER / 2.0, bolt);
        let nut = hex_nut_slot(
            HEX_NUT_ACROSS_FLATS,
            HEX_NUT_THICKNESS,
            bolt.z - bottom + OVERCUT,
        )
        .translate(DVec3::new(inner + HEX_NUT_INSET, bolt.y, bolt.z));
        [through, nut]
    });
    difference_all(block, std::iter::once(truss_access).chain(cutters))
}

// =============================================================================
// BRACE
// =============================================================================

/// Brace under the soundboard from the tail to just short of the sound hole,
/// with a channel for the reinforcement rod.
pub fn brace(params: &InstrumentParams) -> Shape {
    let hole = sound_hole(params);
    let start = params.tail_x();
    let end = hole.center.x - hole.radius - BRACE_HOLE_GAP;
    if end <= start {
        return Shape::Empty;
    }
    let length = end - start;
    let top = cavity_top_z(params) + OVERCUT;

    let rib = prismoid(
        DVec2::new(length, BRACE_TOP_WIDTH),
        DVec2::new(length, BRACE_BOTTOM_WIDTH),
        BRACE_HEIGHT + OVERCUT,
    )
    .mirror(DVec3::Z)
    .translate(DVec3::new((start + end) / 2.0, 0.0, top))
    .intersection(outer_shell(params));

    let rod_z = cavity_top_z(params) - BRACE_HEIGHT + BRACE_ROD_HEIGHT;
    let rod_start = to_cavity(params, DVec3::new(params.tail_x(), 0.0, 0.0)).x;
    let rod = axial(
        rod_start,
        end + OVERCUT,
        BRACE_ROD_DIAMETER / 2.0,
        DVec3::new(0.0, 0.0, rod_z),
    );
    rib.difference(rod)
}

// =============================================================================
// BODY
// =============================================================================

/// Tailpiece on the soundboard, inset from the tail edge.
pub fn placed_tailpiece(params: &InstrumentParams) -> Shape {
    accessories::tailpiece(params).translate(DVec3::new(
        params.tail_x() + TAILPIECE_INSET + TAILPIECE_LENGTH / 2.0,
        0.0,
        0.0,
    ))
}

/// The whole body in model coordinates.
pub fn body(params: &InstrumentParams, joinery: Joinery) -> Shape {
    let shell = outer_shell(params).difference(cavity(params));
    let solid = union_all([
        shell,
        screw_block(params, joinery),
        brace(params),
        placed_tailpiece(params),
    ]);
    difference_all(
        solid,
        [sound_hole(params).cutter(), neck::envelope(params)],
    )
}

/// Split across the lower bout centre. Two lugs on the back carry the
/// dowels, the brace rod bridges the soundboard.
pub fn body_split(params: &InstrumentParams) -> Split {
    let lug_z = cavity_bottom_z(params) + SPLIT_LUG_SIZE[2] / 2.0;
    let y = params.body_size * SPLIT_LUG_Y_RATIO;
    Split::new(
        "body",
        params.lower_bout_x(),
        vec![DVec2::new(-y, lug_z), DVec2::new(y, lug_z)],
        DowelStyle::Pins,
    )
}

/// Extent of each split lug, one per dowel. Lugs rise from the back to
/// [`SPLIT_LUG_SIZE`] above the cavity floor.
pub fn split_lug_boxes(params: &InstrumentParams) -> Vec<Aabb> {
    let split = body_split(params);
    let [lx, ly, lz] = SPLIT_LUG_SIZE;
    let floor = cavity_bottom_z(params) - OVERCUT;
    split
        .dowels
        .iter()
        .map(|d| {
            Aabb::new(
                DVec3::new(split.station - lx / 2.0, d.x - ly / 2.0, floor),
                DVec3::new(split.station + lx / 2.0, d.x + ly / 2.0, floor + lz + OVERCUT),
            )
        })
        .collect()
}

/// Lugs glued to the back, straddling the split.
pub fn split_lugs(params: &InstrumentParams) -> Shape {
    union_all(
        split_lug_boxes(params)
            .into_iter()
            .map(|b| Shape::cube(b.size()).translate(b.min)),
    )
}

/// Whether a split feature of the `side` half is buried in one of the lugs.
pub fn dowel_seated(params: &InstrumentParams, feature: &Feature, side: Side) -> bool {
    let seat = feature.seat(side);
    split_lug_boxes(params)
        .iter()
        .any(|lug| lug.contains(seat.min) && lug.contains(seat.max))
}

fn bolted_with_lugs(params: &InstrumentParams) -> Shape {
    body(params, Joinery::Bolted).union(split_lugs(params))
}

/// Half towards the neck.
pub fn neck_side(params: &InstrumentParams) -> HalfPart {
    body_split(params).half(&bolted_with_lugs(params), Side::Head)
}

/// Half towards the tail, carrying the tailpiece.
pub fn tail_side(params: &InstrumentParams) -> HalfPart {
    body_split(params).half(&bolted_with_lugs(params), Side::Tail)
}

#[cfg(test)]
mod tests;
