//! # Neck
//!
//! Half-round neck blank with a truss-rod channel, a tapered heel that sits
//! in the body socket, and an octagonal headstock with four tuner holes.
//!
//! ## Layout
//!
//! ```text
//!  heel start   joint        nut   nut seat end         headstock
//!      |---------|------------|----|======================|
//!   J - tenon    J            L   L + nut length
//! ```
//!
//! The neck top is `z = 0`; everything hangs below it.

use config::constants::*;
use config::{truss_profiles, InstrumentParams};
use glam::{DVec2, DVec3};
use serde::Serialize;
use uke_csg::{difference_all, hull, union_all, Shape};

use crate::primitives::{half_cylinder, makers_mark, prismoid};
use crate::registration::{DowelStyle, Feature, HalfPart, Side, Split};

/// How the neck is attached to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Joinery {
    /// Two bolts through the heel into captive nuts in the screw block.
    #[default]
    Bolted,
    /// Solid heel, glued or printed in one piece.
    Fused,
}

// =============================================================================
// BLANK
// =============================================================================

fn blank_radius(params: &InstrumentParams) -> f64 {
    params.neck_blank_radius()
}

/// Half-round blank from the heel start to the end of the nut seat, flattened
/// in z.
///
/// ## OpenSCAD Equivalent
///
/// ```text
/// scale([1, 1, 0.8]) translate([J - tenon, 0, 0])
///     difference() { rotate([0, 90, 0]) cylinder(h, r); cube(...); }
/// ```
pub fn blank(params: &InstrumentParams) -> Shape {
    let start = params.heel_start_x();
    let length = params.nut_seat_end_x() - start;
    half_cylinder(length, blank_radius(params))
        .translate(DVec3::new(start, 0.0, 0.0))
        .scale(DVec3::new(1.0, 1.0, NECK_DEPTH_RATIO))
}

// =============================================================================
// TRUSS ROD
// =============================================================================

/// One stretch of the truss-rod channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrussSection {
    pub name: &'static str,
    pub start_x: f64,
    pub end_x: f64,
    pub half_width: f64,
    /// Deepest point below the neck top.
    pub depth: f64,
}

impl TrussSection {
    /// Material left between the channel and the blank surface, sideways at
    /// the channel floor or below it.
    pub fn side_wall(&self, params: &InstrumentParams) -> f64 {
        params.neck_section_wall(self.half_width, self.depth)
    }

    pub fn is_enclosed(&self, params: &InstrumentParams) -> bool {
        self.side_wall(params) >= TRUSS_MARGIN
    }
}

/// The four sections of the channel, from the heel end towards the nut.
pub fn truss_rod_sections(params: &InstrumentParams) -> [TrussSection; 4] {
    let heel = params.heel_start_x();
    let pocket_end = heel + TRUSS_POCKET_LENGTH;
    let slot_start = pocket_end + TRUSS_TRANSITION_LENGTH;
    let spans = [
        (heel, heel + TRUSS_COUNTERBORE_DEPTH),
        (heel, pocket_end),
        (pocket_end, slot_start),
        (slot_start, params.scale_length - TRUSS_NUT_END_GAP),
    ];
    let profiles = truss_profiles();
    std::array::from_fn(|i| TrussSection {
        name: profiles[i].name,
        start_x: spans[i].0,
        end_x: spans[i].1,
        half_width: profiles[i].half_width,
        depth: profiles[i].depth,
    })
}

/// Channel cutter: uniform slot, adjustment pocket at the heel, prismoid
/// transition between them and an axial counterbore through the heel face.
/// Open at the top, where the fingerboard closes it.
pub fn truss_rod_channel(params: &InstrumentParams) -> Shape {
    let [bore, pocket, transition, slot] = truss_rod_sections(params);
    let height = TRUSS_ROD_DEPTH + OVERCUT;

    let trench = |start: f64, end: f64, width: f64| {
        Shape::cube(DVec3::new(end - start, width, height))
            .translate(DVec3::new(start, -width / 2.0, -TRUSS_ROD_DEPTH))
    };

    // Rotated so the extrusion runs along +x: local x becomes -z.
    let taper = prismoid(
        DVec2::new(height, TRUSS_POCKET_WIDTH),
        DVec2::new(height, TRUSS_ROD_WIDTH),
        transition.end_x - transition.start_x,
    )
    .rotate(DVec3::new(0.0, 90.0, 0.0))
    .translate(DVec3::new(
        transition.start_x,
        0.0,
        (OVERCUT - TRUSS_ROD_DEPTH) / 2.0,
    ));

    let counterbore = Shape::cylinder(bore.end_x - bore.start_x + OVERCUT, bore.half_width)
        .rotate(DVec3::new(0.0, 90.0, 0.0))
        .translate(DVec3::new(
            bore.start_x - OVERCUT,
            0.0,
            -TRUSS_ROD_DEPTH / 2.0,
        ));

    union_all([
        trench(slot.start_x - OVERCUT, slot.end_x, TRUSS_ROD_WIDTH),
        taper,
        trench(pocket.start_x - OVERCUT, pocket.end_x + OVERCUT, TRUSS_POCKET_WIDTH),
        counterbore,
    ])
}

// =============================================================================
// HEEL
// =============================================================================

/// Bolt axis entry points on the heel face, `(x, y, z)`.
///
/// Used for both the heel bores and the screw block so the two cannot drift
/// apart.
pub fn neck_bolts(params: &InstrumentParams) -> [DVec3; 2] {
    let half = NECK_BOLT_SPACING / 2.0;
    let z = -params.heel_depth() / 2.0;
    let x = params.heel_start_x();
    [DVec3::new(x, -half, z), DVec3::new(x, half, z)]
}

/// Solid heel: a tenon from the heel start to the joint with a half-round
/// cap past the joint, extruded downwards and tapered.
pub fn heel_solid(params: &InstrumentParams) -> Shape {
    let r = blank_radius(params);
    let tenon = Shape::square(DVec2::new(HEEL_TENON, params.neck_width))
        .translate(DVec3::new(-HEEL_TENON, -r, 0.0));
    let cap = Shape::circle(r).intersection(
        Shape::square(DVec2::new(r, params.neck_width)).translate(DVec3::new(0.0, -r, 0.0)),
    );
    let profile = tenon.union(cap);
    profile
        .extrude_scaled(params.heel_depth(), DVec2::from(HEEL_TAPER))
        .mirror(DVec3::Z)
        .translate(DVec3::new(params.neck_offset, 0.0, 0.0))
}

/// Bolt shafts from the heel face through the cap, with a head counterbore
/// seated [`BOLT_HEAD_SEAT`] past the joint.
pub fn bolt_bores(params: &InstrumentParams) -> Shape {
    let seat = params.neck_offset + BOLT_HEAD_SEAT;
    union_all(neck_bolts(params).into_iter().flat_map(|bolt| {
        let shaft = axial(bolt.x - OVERCUT, seat + OVERCUT, BOLT_DIAMETER / 2.0, bolt);
        let head = axial(
            seat,
            params.neck_offset + BOLT_REACH,
            BOLT_HEAD_DIAMETER / 2.0,
            bolt,
        );
        [shaft, head]
    }))
}

fn axial(from: f64, to: f64, radius: f64, at: DVec3) -> Shape {
    Shape::cylinder(to - from, radius)
        .rotate(DVec3::new(0.0, 90.0, 0.0))
        .translate(DVec3::new(from, at.y, at.z))
}

// =============================================================================
// HEADSTOCK
// =============================================================================

/// Centre between the two octagons.
fn headstock_mid(params: &InstrumentParams) -> f64 {
    let [a, b] = HEADSTOCK_OCTAGON_OFFSETS;
    params.nut_seat_end_x() + (a + b) / 2.0
}

/// Two overlapping octagons, tapered towards the back, blended into the
/// blank by a hull.
pub fn headstock_solid(params: &InstrumentParams) -> Shape {
    let x0 = params.nut_seat_end_x();
    let mid = headstock_mid(params);
    let octagon = |offset: f64| {
        Shape::circle(HEADSTOCK_OCTAGON_RADIUS)
            .with_segments(8)
            .translate(DVec3::new(x0 + offset - mid, 0.0, 0.0))
    };
    let [a, b] = HEADSTOCK_OCTAGON_OFFSETS;
    let plate = octagon(a)
        .union(octagon(b))
        .extrude_scaled(HEADSTOCK_THICKNESS, DVec2::splat(HEADSTOCK_TAPER))
        .mirror(DVec3::Z)
        .translate(DVec3::new(mid, 0.0, 0.0));

    let neck_slice = half_cylinder(1.0, blank_radius(params))
        .scale(DVec3::new(1.0, 1.0, NECK_DEPTH_RATIO))
        .translate(DVec3::new(x0 - 1.0, 0.0, 0.0));
    let shoulder = Shape::cube(DVec3::new(1.0, params.neck_width, HEADSTOCK_THICKNESS))
        .translate(DVec3::new(
            x0 + HEADSTOCK_BLEND,
            -blank_radius(params),
            -HEADSTOCK_THICKNESS,
        ));

    union_all([hull([neck_slice, shoulder]), plate])
}

/// Tuner post holes, two pairs.
pub fn tuner_holes(params: &InstrumentParams) -> Shape {
    let height = HEADSTOCK_THICKNESS + 2.0 * OVERCUT;
    union_all(tuner_positions(params).into_iter().map(|p| {
        Shape::cylinder(height, TUNER_HOLE_DIAMETER / 2.0).translate(DVec3::new(
            p.x,
            p.y,
            -HEADSTOCK_THICKNESS - OVERCUT,
        ))
    }))
}

/// Tuner post centres `(x, y)`.
pub fn tuner_positions(params: &InstrumentParams) -> Vec<DVec2> {
    let x0 = params.nut_seat_end_x();
    TUNER_OFFSETS_X
        .into_iter()
        .flat_map(|dx| [DVec2::new(x0 + dx, -TUNER_OFFSET_Y), DVec2::new(x0 + dx, TUNER_OFFSET_Y)])
        .collect()
}

fn engraving(params: &InstrumentParams) -> Shape {
    makers_mark(MAKERS_MARK_SIZE, MAKERS_MARK_DEPTH + OVERCUT)
        .rotate(DVec3::new(0.0, 0.0, -90.0))
        .translate(DVec3::new(
            params.nut_seat_end_x() + MAKERS_MARK_OFFSET,
            0.0,
            -MAKERS_MARK_DEPTH,
        ))
}

// =============================================================================
// NECK
// =============================================================================

/// Solid outline of blank and heel, subtracted from the body to make the
/// neck socket.
pub fn envelope(params: &InstrumentParams) -> Shape {
    blank(params).union(heel_solid(params))
}

/// The complete neck.
pub fn neck(params: &InstrumentParams, joinery: Joinery) -> Shape {
    let solid = union_all([blank(params), heel_solid(params), headstock_solid(params)]);
    let bores = match joinery {
        Joinery::Bolted => bolt_bores(params),
        Joinery::Fused => Shape::Empty,
    };
    difference_all(
        solid,
        [
            truss_rod_channel(params),
            bores,
            tuner_holes(params),
            engraving(params),
        ],
    )
}

/// Split between the joint and the nut, pinned on both sides of the truss
/// channel.
pub fn neck_split(params: &InstrumentParams) -> Split {
    let y = params.neck_dowel_y();
    Split::new(
        "neck",
        (params.neck_offset + params.scale_length) / 2.0,
        vec![
            DVec2::new(-y, -NECK_DOWEL_DEPTH),
            DVec2::new(y, -NECK_DOWEL_DEPTH),
        ],
        DowelStyle::Pins,
    )
}

/// Whether a split feature sits inside the neck section with
/// [`DOWEL_MIN_WALL`] to spare, clear of the truss slot.
pub fn dowel_seated(params: &InstrumentParams, feature: &Feature) -> bool {
    let r = feature.diameter / 2.0;
    let y = feature.position.y.abs();
    let depth = -feature.position.z;
    let outside = params.neck_section_wall(y + r, depth + r);
    let channel = y - r - TRUSS_ROD_WIDTH / 2.0;
    outside.min(channel) >= DOWEL_MIN_WALL
}

/// Headstock half of the bolted neck.
pub fn head_half(params: &InstrumentParams) -> HalfPart {
    neck_split(params).half(&neck(params, Joinery::Bolted), Side::Head)
}

/// Heel half of the bolted neck.
pub fn heel_half(params: &InstrumentParams) -> HalfPart {
    neck_split(params).half(&neck(params, Joinery::Bolted), Side::Tail)
}
