//! # Fingerboard
//!
//! Flat board on the neck top with a slot at every fret, face markers and
//! side dots. For printing it splits in two between frets 5 and 6, clear of
//! the neck split, and the halves are lined up by printed pegs.

use config::constants::*;
use config::InstrumentParams;
use glam::{DVec2, DVec3};
use uke_csg::{difference_all, Shape};

use crate::frets::{fret_midpoint, fret_position};
use crate::registration::{DowelStyle, Feature, HalfPart, Side, Split};

/// X of the end of the board past the last fret.
pub fn board_start_x(params: &InstrumentParams) -> f64 {
    fret_position(params.scale_length, params.num_frets) - FINGERBOARD_TAIL
}

/// Plain board from past the last fret to the nut.
pub fn blank(params: &InstrumentParams) -> Shape {
    let start = board_start_x(params);
    Shape::cube(DVec3::new(
        params.scale_length - start,
        params.neck_width,
        FINGERBOARD_THICKNESS,
    ))
    .translate(DVec3::new(start, -params.neck_width / 2.0, 0.0))
}

/// One slot per fret across the full width.
pub fn fret_slots(params: &InstrumentParams) -> Vec<Shape> {
    (1..=params.num_frets)
        .map(|n| {
            Shape::centered_cube(DVec3::new(
                FRET_SLOT_WIDTH,
                params.neck_width + 2.0 * OVERCUT,
                2.0 * FRET_SLOT_DEPTH,
            ))
            .translate(DVec3::new(
                fret_position(params.scale_length, n),
                0.0,
                FINGERBOARD_THICKNESS,
            ))
        })
        .collect()
}

/// Marker frets that exist on this board.
pub fn marker_frets(params: &InstrumentParams) -> Vec<u32> {
    MARKER_FRETS
        .into_iter()
        .filter(|&n| n <= params.num_frets)
        .collect()
}

/// Face dot centres `(x, y)`, two at the octave.
pub fn marker_positions(params: &InstrumentParams) -> Vec<DVec2> {
    let quarter = params.neck_width / 4.0;
    marker_frets(params)
        .into_iter()
        .flat_map(|n| {
            let x = fret_midpoint(params.scale_length, n);
            if n == OCTAVE_FRET {
                vec![DVec2::new(x, -quarter), DVec2::new(x, quarter)]
            } else {
                vec![DVec2::new(x, 0.0)]
            }
        })
        .collect()
}

/// Side dot x positions on the playing edge, paired at the octave.
pub fn side_dot_positions(params: &InstrumentParams) -> Vec<f64> {
    let half_gap = SIDE_DOT_PAIR_GAP / 2.0;
    marker_frets(params)
        .into_iter()
        .flat_map(|n| {
            let x = fret_midpoint(params.scale_length, n);
            if n == OCTAVE_FRET {
                vec![x - half_gap, x + half_gap]
            } else {
                vec![x]
            }
        })
        .collect()
}

fn markers(params: &InstrumentParams) -> Vec<Shape> {
    let face = marker_positions(params).into_iter().map(|p| {
        Shape::cylinder(MARKER_DEPTH + OVERCUT, MARKER_DIAMETER / 2.0).translate(DVec3::new(
            p.x,
            p.y,
            FINGERBOARD_THICKNESS - MARKER_DEPTH,
        ))
    });
    // Drilled in from the -y edge.
    let edge = -params.neck_width / 2.0 - OVERCUT;
    let side = side_dot_positions(params).into_iter().map(move |x| {
        Shape::cylinder(SIDE_DOT_DEPTH + OVERCUT, SIDE_DOT_DIAMETER / 2.0)
            .rotate(DVec3::new(-90.0, 0.0, 0.0))
            .translate(DVec3::new(x, edge, FINGERBOARD_THICKNESS / 2.0))
    });
    face.chain(side).collect()
}

/// The complete board in model coordinates.
pub fn fingerboard(params: &InstrumentParams) -> Shape {
    difference_all(
        blank(params),
        fret_slots(params).into_iter().chain(markers(params)),
    )
}

/// Fret the board splits after. Falls back to an earlier fret on short
/// boards so both halves keep some length.
pub fn split_fret(params: &InstrumentParams) -> u32 {
    FINGERBOARD_SPLIT_FRET.min(params.num_frets.saturating_sub(1))
}

/// Split midway between [`split_fret`] and the next fret, pegs on the nut
/// side.
pub fn fingerboard_split(params: &InstrumentParams) -> Split {
    let n = split_fret(params);
    let station = (fret_position(params.scale_length, n)
        + fret_position(params.scale_length, n + 1))
        / 2.0;
    let y = params.neck_width / 4.0;
    let z = (FINGERBOARD_THICKNESS - FRET_SLOT_DEPTH) / 2.0;
    Split::new(
        "fingerboard",
        station,
        vec![DVec2::new(-y, z), DVec2::new(y, z)],
        DowelStyle::Pegs { on: Side::Head },
    )
}

/// Whether a split feature stays inside the board, under the fret slots.
pub fn dowel_seated(params: &InstrumentParams, feature: &Feature) -> bool {
    let r = feature.diameter / 2.0;
    let p = feature.position;
    p.y.abs() + r <= params.neck_width / 2.0
        && p.z - r >= 0.0
        && p.z + r <= FINGERBOARD_THICKNESS - FRET_SLOT_DEPTH
}

/// Half towards the nut, carrying the pegs.
pub fn nut_side(params: &InstrumentParams) -> HalfPart {
    fingerboard_split(params).half(&fingerboard(params), Side::Head)
}

/// Half towards the body, carrying the sockets.
pub fn body_side(params: &InstrumentParams) -> HalfPart {
    fingerboard_split(params).half(&fingerboard(params), Side::Tail)
}
