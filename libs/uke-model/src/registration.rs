//! # Registration
//!
//! Splitting a part in two for printing, and the dowels that line the halves
//! up again. Every split in the instrument is a plane `x = station`, so
//! dowels always run along x.
//!
//! Two dowel styles are used:
//!
//! - **Pins**: both halves get sockets and a length of filament is glued in.
//! - **Pegs**: one half carries printed pegs, the other sockets. A peg is
//!   [`PEG_CLEARANCE`] thinner than its socket.

use config::constants::{
    approx_equal, DOWEL_DEPTH, EPSILON, OVERCUT, PEG_CLEARANCE, PEG_END_GAP, SOCKET_DIAMETER,
};
use glam::{DVec2, DVec3};
use serde::Serialize;
use uke_csg::{difference_all, union_all, Aabb, Shape};

/// Which side of a split plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// `x < station`, towards the saddle and tail.
    Tail,
    /// `x > station`, towards the headstock.
    Head,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Tail => Side::Head,
            Side::Head => Side::Tail,
        }
    }
}

/// How the dowels of a split are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DowelStyle {
    /// Sockets on both halves for a loose filament pin.
    Pins,
    /// Printed pegs on one side, sockets on the other.
    Pegs { on: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureKind {
    Peg,
    Socket,
}

/// One registration feature as it appears on a half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feature {
    pub kind: FeatureKind,
    /// Centre of the feature on the split face.
    pub position: DVec3,
    pub diameter: f64,
    /// How far the feature reaches from the split face.
    pub depth: f64,
}

impl Feature {
    /// Box around the part of the feature that lies inside the `side` half:
    /// the whole bore of a socket, the root of a peg.
    pub fn seat(&self, side: Side) -> Aabb {
        let r = self.diameter / 2.0;
        let reach = match self.kind {
            FeatureKind::Socket => self.depth,
            FeatureKind::Peg => OVERCUT,
        };
        let p = self.position;
        let far = p.x + into(side) * reach;
        Aabb::new(
            DVec3::new(p.x.min(far), p.y - r, p.z - r),
            DVec3::new(p.x.max(far), p.y + r, p.z + r),
        )
    }
}

/// A half of a split part with its registration features.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfPart {
    pub shape: Shape,
    pub features: Vec<Feature>,
}

pub fn socket_diameter() -> f64 {
    SOCKET_DIAMETER
}

pub fn peg_diameter() -> f64 {
    socket_diameter() - PEG_CLEARANCE
}

/// A split plane with its dowels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    /// Name used in reports, e.g. `neck`.
    pub name: &'static str,
    /// X of the split plane.
    pub station: f64,
    /// Dowel centres on the split face, as `(y, z)`.
    pub dowels: Vec<DVec2>,
    pub style: DowelStyle,
}

impl Split {
    pub fn new(name: &'static str, station: f64, dowels: Vec<DVec2>, style: DowelStyle) -> Self {
        Self {
            name,
            station,
            dowels,
            style,
        }
    }

    fn dowel_center(&self, dowel: DVec2) -> DVec3 {
        DVec3::new(self.station, dowel.x, dowel.y)
    }

    fn kind_on(&self, side: Side) -> FeatureKind {
        match self.style {
            DowelStyle::Pegs { on } if on == side => FeatureKind::Peg,
            _ => FeatureKind::Socket,
        }
    }

    /// Features carried by the `side` half.
    pub fn features(&self, side: Side) -> Vec<Feature> {
        let kind = self.kind_on(side);
        let (diameter, depth) = match kind {
            FeatureKind::Peg => (peg_diameter(), DOWEL_DEPTH - PEG_END_GAP),
            FeatureKind::Socket => (socket_diameter(), DOWEL_DEPTH),
        };
        self.dowels
            .iter()
            .map(|&d| Feature {
                kind,
                position: self.dowel_center(d),
                diameter,
                depth,
            })
            .collect()
    }

    /// Cuts `shape` at the station and adds this side's features.
    pub fn half(&self, shape: &Shape, side: Side) -> HalfPart {
        let Some(bounds) = shape.bounds() else {
            return HalfPart {
                shape: Shape::Empty,
                features: Vec::new(),
            };
        };

        let lo = bounds.min - DVec3::splat(OVERCUT);
        let hi = bounds.max + DVec3::splat(OVERCUT);
        let (x0, x1) = match side {
            Side::Tail => (lo.x, self.station),
            Side::Head => (self.station, hi.x),
        };
        let keep = Shape::cube(DVec3::new(x1 - x0, hi.y - lo.y, hi.z - lo.z))
            .translate(DVec3::new(x0, lo.y, lo.z));
        let cut = shape.clone().intersection(keep);

        let features = self.features(side);
        let shape = match self.kind_on(side) {
            FeatureKind::Socket => {
                difference_all(cut, features.iter().map(|f| socket_cutter(f, side)))
            }
            FeatureKind::Peg => union_all(
                std::iter::once(cut).chain(features.iter().map(|f| peg_solid(f, side))),
            ),
        };
        HalfPart { shape, features }
    }
}

/// Pairs the features of both halves dowel by dowel as `(tail, head)`.
pub fn registration_features(split: &Split) -> Vec<(Feature, Feature)> {
    split
        .features(Side::Tail)
        .into_iter()
        .zip(split.features(Side::Head))
        .collect()
}

/// Whether a pair of features mates.
pub fn features_mate(a: &Feature, b: &Feature) -> bool {
    let same_place = approx_equal(a.position.distance(b.position), 0.0);
    let fit = match (a.kind, b.kind) {
        (FeatureKind::Socket, FeatureKind::Socket) => approx_equal(a.diameter, b.diameter),
        (FeatureKind::Peg, FeatureKind::Socket) => {
            approx_equal(b.diameter - a.diameter, PEG_CLEARANCE) && a.depth < b.depth
        }
        (FeatureKind::Socket, FeatureKind::Peg) => {
            approx_equal(a.diameter - b.diameter, PEG_CLEARANCE) && b.depth < a.depth
        }
        (FeatureKind::Peg, FeatureKind::Peg) => false,
    };
    same_place && fit
}

/// Whether the seat of every feature of `half` lies within the half's
/// bounds. Bounds are conservative, so this only catches features placed off
/// the part altogether.
pub fn features_within(half: &HalfPart, side: Side) -> bool {
    let Some(b) = half.shape.bounds() else {
        return half.features.is_empty();
    };
    let room = Aabb::new(b.min - DVec3::splat(EPSILON), b.max + DVec3::splat(EPSILON));
    half.features.iter().all(|f| {
        let seat = f.seat(side);
        room.contains(seat.min) && room.contains(seat.max)
    })
}

/// Direction from the split face into the `side` half.
fn into(side: Side) -> f64 {
    match side {
        Side::Tail => -1.0,
        Side::Head => 1.0,
    }
}

/// Axial cylinder covering `[from, to]` along x.
fn along_x(center: DVec3, from: f64, to: f64, diameter: f64) -> Shape {
    let (start, end) = (from.min(to), from.max(to));
    Shape::cylinder(end - start, diameter / 2.0)
        .rotate(DVec3::new(0.0, 90.0, 0.0))
        .translate(DVec3::new(start, center.y, center.z))
}

fn socket_cutter(feature: &Feature, side: Side) -> Shape {
    let x = feature.position.x;
    along_x(
        feature.position,
        x - into(side) * OVERCUT,
        x + into(side) * feature.depth,
        feature.diameter,
    )
}

/// Peg reaching out of the `side` half into the other one.
fn peg_solid(feature: &Feature, side: Side) -> Shape {
    let x = feature.position.x;
    along_x(
        feature.position,
        x + into(side) * OVERCUT,
        x + into(side.opposite()) * feature.depth,
        feature.diameter,
    )
}

#[cfg(test)]
mod tests;
