//! # Assembly
//!
//! The part selector. [`Part`] names the full assembly and the nine
//! printable pieces; [`build`] turns one of them into a validated
//! [`Shape`].
//!
//! The assembly stays in model coordinates. Printable parts are turned so a
//! flat face is down and dropped onto the print bed (`min z = 0`).

use std::fmt;
use std::str::FromStr;

use config::constants::NUT_LENGTH;
use config::InstrumentParams;
use glam::DVec3;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use uke_csg::{union_all, Shape};

use crate::accessories::{self, BridgeVariant};
use crate::body;
use crate::error::ModelError;
use crate::fingerboard;
use crate::neck::{self, Joinery};

/// One of the ten selectable outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    Assembly,
    NeckHead,
    NeckHeel,
    BodyNeckSide,
    BodyTailSide,
    FingerboardNutSide,
    FingerboardBodySide,
    Bridge,
    BridgeLow,
    Nut,
}

impl Part {
    pub const ALL: [Part; 10] = [
        Part::Assembly,
        Part::NeckHead,
        Part::NeckHeel,
        Part::BodyNeckSide,
        Part::BodyTailSide,
        Part::FingerboardNutSide,
        Part::FingerboardBodySide,
        Part::Bridge,
        Part::BridgeLow,
        Part::Nut,
    ];

    /// Kebab-case name, also used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            Part::Assembly => "assembly",
            Part::NeckHead => "neck-head",
            Part::NeckHeel => "neck-heel",
            Part::BodyNeckSide => "body-neck-side",
            Part::BodyTailSide => "body-tail-side",
            Part::FingerboardNutSide => "fingerboard-nut-side",
            Part::FingerboardBodySide => "fingerboard-body-side",
            Part::Bridge => "bridge",
            Part::BridgeLow => "bridge-low",
            Part::Nut => "nut",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Part::Assembly => "whole instrument in playing position, for preview",
            Part::NeckHead => "neck from the split to the headstock, with tuner holes",
            Part::NeckHeel => "neck from the heel to the split, with bolt bores",
            Part::BodyNeckSide => "body half with the neck socket and screw block",
            Part::BodyTailSide => "body half with the tailpiece",
            Part::FingerboardNutSide => "fingerboard half at the nut, with pegs",
            Part::FingerboardBodySide => "fingerboard half over the body, with sockets",
            Part::Bridge => "bridge on three feet",
            Part::BridgeLow => "bridge with lower action",
            Part::Nut => "nut with per-string notches",
        }
    }

    /// Whether the part is meant to be printed.
    pub fn is_printable(self) -> bool {
        self != Part::Assembly
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Part {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Part::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ModelError::UnknownPart(s.to_string()))
    }
}

// =============================================================================
// BUILD
// =============================================================================

/// Whole instrument: body, bolted neck, fingerboard, nut and bridge in place.
pub fn assembly(params: &InstrumentParams) -> Shape {
    union_all([
        body::body(params, Joinery::Bolted),
        neck::neck(params, Joinery::Bolted),
        fingerboard::fingerboard(params),
        accessories::nut(params).translate(DVec3::new(
            params.scale_length + NUT_LENGTH / 2.0,
            0.0,
            0.0,
        )),
        accessories::bridge(params, BridgeVariant::Standard),
    ])
}

/// Quarter turn about y that puts the split face down. Tail halves have
/// their split face at their largest x.
fn stand_on_end(shape: Shape, split_face_at_max_x: bool) -> Shape {
    let angle = if split_face_at_max_x { 90.0 } else { -90.0 };
    shape.rotate(DVec3::new(0.0, angle, 0.0))
}

/// Moves a shape so it rests on `z = 0`.
fn drop_to_bed(shape: Shape) -> Shape {
    match shape.bounds() {
        Some(b) => shape.translate(DVec3::new(0.0, 0.0, -b.min.z)),
        None => shape,
    }
}

fn build_raw(part: Part, params: &InstrumentParams) -> Shape {
    match part {
        Part::Assembly => assembly(params),
        // Split faces go down: they are flat and need no support.
        Part::NeckHead => stand_on_end(neck::head_half(params).shape, false),
        Part::NeckHeel => stand_on_end(neck::heel_half(params).shape, true),
        Part::BodyNeckSide => stand_on_end(body::neck_side(params).shape, false),
        Part::BodyTailSide => stand_on_end(body::tail_side(params).shape, true),
        Part::FingerboardNutSide => fingerboard::nut_side(params).shape,
        Part::FingerboardBodySide => fingerboard::body_side(params).shape,
        Part::Bridge => accessories::bridge(params, BridgeVariant::Standard),
        Part::BridgeLow => accessories::bridge(params, BridgeVariant::Low),
        Part::Nut => accessories::nut(params),
    }
}

/// Builds and validates one part.
///
/// # Example
///
/// ```rust
/// use config::InstrumentParams;
/// use uke_model::{build, Part};
///
/// let bridge = build(Part::Bridge, &InstrumentParams::default()).unwrap();
/// assert!(bridge.validate().is_ok());
/// ```
pub fn build(part: Part, params: &InstrumentParams) -> Result<Shape, ModelError> {
    params.validate()?;

    let raw = build_raw(part, params);
    let shape = if part.is_printable() {
        drop_to_bed(raw)
    } else {
        raw
    };

    if shape.is_empty() {
        return Err(ModelError::EmptyPart(part));
    }
    shape
        .validate()
        .map_err(|source| ModelError::Geometry { part, source })?;

    debug!(part = %part, nodes = shape.node_count(), "built part");
    Ok(shape)
}

/// Builds the selected part, or nothing when no part is selected.
pub fn build_selection(
    part: Option<Part>,
    params: &InstrumentParams,
) -> Result<Shape, ModelError> {
    match part {
        Some(part) => build(part, params),
        None => Ok(Shape::Empty),
    }
}

/// Builds every part in parallel, in [`Part::ALL`] order.
pub fn build_all(params: &InstrumentParams) -> Result<Vec<(Part, Shape)>, ModelError> {
    Part::ALL
        .par_iter()
        .map(|&part| build(part, params).map(|shape| (part, shape)))
        .collect()
}
