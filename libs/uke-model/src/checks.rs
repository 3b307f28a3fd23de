//! # Checks
//!
//! Geometric invariants that the kernel cannot catch: fret spacing, wall
//! thickness, sound hole clearance, truss rod enclosure, bolt alignment,
//! string action over the board and registration fit of every split.

use config::constants::{approx_equal, FINGERBOARD_THICKNESS, TRUSS_MARGIN};
use config::InstrumentParams;
use serde::Serialize;

use crate::accessories::{bridge_string_elevations, nut_string_elevations, BridgeVariant};
use crate::body;
use crate::fingerboard;
use crate::frets::{fret_position, fret_table};
use crate::neck;
use crate::registration::{
    features_mate, features_within, registration_features, Feature, HalfPart, Side, Split,
};

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckReport {
    fn new(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

/// Runs every check against `params`.
///
/// Parameters are assumed valid; see [`InstrumentParams::validate`].
pub fn run_checks(params: &InstrumentParams) -> Vec<CheckReport> {
    let mut reports = vec![
        check_frets(params),
        check_octave(params),
        check_body_wall(params),
        check_sound_hole(params),
        check_bolts(params),
        check_string_action(params),
    ];
    reports.extend(check_truss_rod(params));
    reports.push(check_registration(
        &neck::neck_split(params),
        [&neck::heel_half(params), &neck::head_half(params)],
        |f, _| neck::dowel_seated(params, f),
    ));
    reports.push(check_registration(
        &body::body_split(params),
        [&body::tail_side(params), &body::neck_side(params)],
        |f, side| body::dowel_seated(params, f, side),
    ));
    reports.push(check_registration(
        &fingerboard::fingerboard_split(params),
        [&fingerboard::body_side(params), &fingerboard::nut_side(params)],
        |f, _| fingerboard::dowel_seated(params, f),
    ));
    reports
}

fn check_frets(params: &InstrumentParams) -> CheckReport {
    let table = fret_table(params);
    let positive = table.iter().all(|f| f.position > 0.0);
    let decreasing = table.windows(2).all(|w| w[1].position < w[0].position);
    CheckReport::new(
        "fret positions",
        positive && decreasing,
        format!("{} frets, strictly decreasing and positive", table.len()),
    )
}

fn check_octave(params: &InstrumentParams) -> CheckReport {
    let octave = fret_position(params.scale_length, 12);
    let half = params.scale_length / 2.0;
    CheckReport::new(
        "octave",
        approx_equal(octave, half),
        format!("fret 12 at {octave:.3}, half scale {half:.3}"),
    )
}

fn check_body_wall(params: &InstrumentParams) -> CheckReport {
    let wall = body::min_wall_thickness(params);
    CheckReport::new(
        "body wall",
        wall > 0.0,
        format!("at least {wall:.2} mm"),
    )
}

fn check_sound_hole(params: &InstrumentParams) -> CheckReport {
    let hole = body::sound_hole(params);
    let detail = if hole.is_clamped() {
        format!(
            "radius {:.2} mm (clamped from {:.2}), clearance {:.2} mm",
            hole.radius, hole.requested_radius, hole.clearance
        )
    } else {
        format!("radius {:.2} mm, clearance {:.2} mm", hole.radius, hole.clearance)
    };
    CheckReport::new(
        "sound hole",
        hole.radius > 0.0 && hole.clearance > 0.0,
        detail,
    )
}

fn check_bolts(params: &InstrumentParams) -> CheckReport {
    let heel = neck::neck_bolts(params);
    let block = body::screw_block_bolts(params);
    CheckReport::new(
        "neck bolts",
        heel == block,
        format!("{} bolts shared by heel and screw block", heel.len()),
    )
}

fn check_truss_rod(params: &InstrumentParams) -> Vec<CheckReport> {
    neck::truss_rod_sections(params)
        .into_iter()
        .map(|section| {
            let wall = section.side_wall(params);
            CheckReport::new(
                format!("truss rod {}", section.name),
                section.is_enclosed(params),
                format!("side wall {wall:.2} mm, margin {TRUSS_MARGIN:.2} mm"),
            )
        })
        .collect()
}

/// Lowest clearance between a string and the board top, over the length of
/// the board. Strings run straight from the bridge at the saddle to the nut
/// at the scale length, so the extremes sit at the ends of the board.
pub fn string_clearance(params: &InstrumentParams, variant: BridgeVariant) -> f64 {
    let start = fingerboard::board_start_x(params);
    let ends = [start / params.scale_length, 1.0];
    nut_string_elevations(params)
        .into_iter()
        .zip(bridge_string_elevations(params, variant))
        .flat_map(|(nut, bridge)| ends.map(|t| bridge + (nut - bridge) * t))
        .map(|z| z - FINGERBOARD_THICKNESS)
        .fold(f64::INFINITY, f64::min)
}

fn check_string_action(params: &InstrumentParams) -> CheckReport {
    let standard = string_clearance(params, BridgeVariant::Standard);
    let low = string_clearance(params, BridgeVariant::Low);
    CheckReport::new(
        "string action",
        standard > 0.0 && low > 0.0,
        format!("strings clear the board by {standard:.2} mm, {low:.2} mm on the low bridge"),
    )
}

/// Pairs must mate and every feature must sit inside its half, as judged by
/// `seated` for the part at hand.
fn check_registration(
    split: &Split,
    [tail, head]: [&HalfPart; 2],
    seated: impl Fn(&Feature, Side) -> bool,
) -> CheckReport {
    let pairs = registration_features(split);
    let mated = pairs.iter().filter(|(a, b)| features_mate(a, b)).count();
    let within = features_within(tail, Side::Tail) && features_within(head, Side::Head);
    let loose = [(tail, Side::Tail), (head, Side::Head)]
        .into_iter()
        .flat_map(|(half, side)| half.features.iter().map(move |f| (f, side)))
        .filter(|(f, side)| !seated(f, *side))
        .count();
    CheckReport::new(
        format!("{} registration", split.name),
        !pairs.is_empty() && mated == pairs.len() && within && loose == 0,
        format!(
            "{mated}/{} dowels mate at x = {:.2}, {loose} not seated",
            pairs.len(),
            split.station
        ),
    )
}

#[cfg(test)]
mod tests;
