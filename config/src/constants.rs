//! # Construction Constants
//!
//! Tuned literals for every part of the instrument. Most of these were fitted
//! on printed test pieces rather than derived, so they are kept as plain
//! numbers. All lengths are millimetres.
//!
//! ## Categories
//!
//! - **Precision**: comparison tolerance and cutter overlap
//! - **Resolution**: default `$fn`, `$fa`, `$fs`
//! - **Body**, **Neck**, **Headstock**, **Fingerboard**
//! - **Registration**: filament dowels, pegs and bolts
//! - **Accessories**: nut, bridge, tailpiece, maker's mark

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for comparing derived lengths, far below print resolution.
pub const EPSILON: f64 = 1e-10;

/// Extra length added to every cutter so that no difference leaves a
/// coplanar skin behind.
pub const OVERCUT: f64 = 0.5;

// =============================================================================
// RESOLUTION CONSTANTS (OpenSCAD $fn, $fa, $fs)
// =============================================================================

/// Default `$fn`. Zero lets the kernel derive fragments from `$fa`/`$fs`.
pub const DEFAULT_FN: u32 = 0;

/// Default `$fa` in degrees. Finer than OpenSCAD's 12 so the bouts print
/// without visible facets.
pub const DEFAULT_FA: f64 = 4.0;

/// Default `$fs` in millimetres.
pub const DEFAULT_FS: f64 = 0.5;

/// Smallest fragment count a fixed-segment primitive may request.
pub const MIN_FRAGMENTS: u32 = 3;

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// 18 inches.
pub const DEFAULT_SCALE_LENGTH: f64 = 18.0 * 25.4;
pub const DEFAULT_NECK_OFFSET: f64 = 100.0;
pub const DEFAULT_NECK_WIDTH: f64 = 40.0;
pub const DEFAULT_BODY_SIZE: f64 = 160.0;
pub const DEFAULT_THICKNESS: f64 = 50.0;
pub const DEFAULT_NUM_FRETS: u32 = 18;
pub const DEFAULT_STRING_COUNT: u32 = 4;
pub const DEFAULT_SOUND_HOLE_RADIUS: f64 = 20.0;

/// Supported fret counts.
pub const MAX_FRETS: u32 = 24;

/// Supported string counts.
pub const MAX_STRINGS: u32 = 8;

// =============================================================================
// BODY CONSTANTS
// =============================================================================

/// Upper bout radius as a fraction of `body_size`.
pub const UPPER_BOUT_RATIO: f64 = 0.28;

/// Lower bout centre sits this fraction of `body_size` behind the saddle.
pub const LOWER_BOUT_OFFSET_RATIO: f64 = 0.25;

/// X scale of the bottom outline about the neck joint.
///
/// The neck end stays square, the tail end leans in.
pub const BODY_SLANT: f64 = 0.85;

/// Radius of the sphere swept around the shell to round its edges.
pub const BODY_ROUNDING: f64 = 2.0;

/// Uniform scale of the cavity relative to the outer shell.
pub const BODY_SHRINK: f64 = 0.9;

/// Cavity offset along z. Positive values thin the soundboard and thicken
/// the back.
pub const BODY_CAVITY_OFFSET: f64 = 0.5;

/// Thickness of the outline slabs that are hulled into the shell.
pub const BODY_SLAB: f64 = 1.0;

/// Minimum distance between the sound hole and the cavity side wall.
pub const SOUND_HOLE_MARGIN: f64 = 4.0;

/// Brace cross-section, widest where it meets the soundboard.
pub const BRACE_TOP_WIDTH: f64 = 8.0;
pub const BRACE_BOTTOM_WIDTH: f64 = 4.0;
pub const BRACE_HEIGHT: f64 = 8.0;

/// Gap between the brace end and the sound hole edge.
pub const BRACE_HOLE_GAP: f64 = 6.0;

/// Channel for the 4 mm carbon reinforcement rod.
pub const BRACE_ROD_DIAMETER: f64 = 4.2;

/// Height of the rod axis above the brace bottom.
pub const BRACE_ROD_HEIGHT: f64 = 3.5;

/// Screw block length behind the heel tenon.
pub const SCREW_BLOCK_LENGTH: f64 = 14.0;

/// Screw block overhang past each side of the neck.
pub const SCREW_BLOCK_MARGIN: f64 = 8.0;

/// Screw block material below the heel.
pub const SCREW_BLOCK_FLOOR: f64 = 4.0;

/// Split lug size `[x, y, z]`, glued to the back on both sides of the body
/// split.
pub const SPLIT_LUG_SIZE: [f64; 3] = [12.0, 10.0, 10.0];

/// Lug distance from the centre line as a fraction of `body_size`.
pub const SPLIT_LUG_Y_RATIO: f64 = 0.125;

// =============================================================================
// NECK CONSTANTS
// =============================================================================

/// Neck depth as a fraction of the blank radius.
pub const NECK_DEPTH_RATIO: f64 = 0.8;

/// Length of the heel tenon that sits inside the body.
pub const HEEL_TENON: f64 = 15.0;

/// Heel depth as a fraction of the body `thickness`.
pub const HEEL_DEPTH_RATIO: f64 = 0.6;

/// Extrusion scale `[x, y]` at the bottom of the heel.
pub const HEEL_TAPER: [f64; 2] = [0.7, 0.6];

/// Truss rod slot.
pub const TRUSS_ROD_WIDTH: f64 = 6.0;
pub const TRUSS_ROD_DEPTH: f64 = 8.0;

/// Widened adjustment pocket at the heel end.
pub const TRUSS_POCKET_WIDTH: f64 = 10.0;
pub const TRUSS_POCKET_LENGTH: f64 = 20.0;

/// Prismoid transition between pocket and slot.
pub const TRUSS_TRANSITION_LENGTH: f64 = 15.0;

/// Axial counterbore for the adjustment nut.
pub const TRUSS_COUNTERBORE_DIAMETER: f64 = 10.0;
pub const TRUSS_COUNTERBORE_DEPTH: f64 = 12.0;

/// The slot stops this far short of the nut.
pub const TRUSS_NUT_END_GAP: f64 = 10.0;

/// Material kept between any truss cut and the neck surface.
pub const TRUSS_MARGIN: f64 = 2.0;

// =============================================================================
// HEADSTOCK CONSTANTS
// =============================================================================

/// Length of the round-to-flat blend behind the nut.
pub const HEADSTOCK_BLEND: f64 = 20.0;

/// Octagon centres measured from the nut seat end.
pub const HEADSTOCK_OCTAGON_OFFSETS: [f64; 2] = [40.0, 70.0];
pub const HEADSTOCK_OCTAGON_RADIUS: f64 = 22.0;
pub const HEADSTOCK_THICKNESS: f64 = 14.0;

/// Extrusion scale towards the back of the headstock.
pub const HEADSTOCK_TAPER: f64 = 0.9;

/// Tuner post holes, measured from the nut seat end.
pub const TUNER_OFFSETS_X: [f64; 2] = [42.0, 72.0];
pub const TUNER_OFFSET_Y: f64 = 13.0;
pub const TUNER_HOLE_DIAMETER: f64 = 10.0;

/// Maker's mark position from the nut seat end.
pub const MAKERS_MARK_OFFSET: f64 = 57.0;
pub const MAKERS_MARK_SIZE: f64 = 12.0;
pub const MAKERS_MARK_DEPTH: f64 = 0.8;

// =============================================================================
// FINGERBOARD CONSTANTS
// =============================================================================

pub const FINGERBOARD_THICKNESS: f64 = 5.0;

/// Board length past the last fret.
pub const FINGERBOARD_TAIL: f64 = 6.0;

pub const FRET_SLOT_WIDTH: f64 = 0.6;
pub const FRET_SLOT_DEPTH: f64 = 1.6;

/// Frets with a position marker in the space below them.
pub const MARKER_FRETS: [u32; 7] = [3, 5, 7, 10, 12, 15, 17];

/// Fret with the double marker.
pub const OCTAVE_FRET: u32 = 12;

pub const MARKER_DIAMETER: f64 = 5.0;
pub const MARKER_DEPTH: f64 = 1.0;
pub const SIDE_DOT_DIAMETER: f64 = 2.0;
pub const SIDE_DOT_DEPTH: f64 = 2.0;

/// Spacing of the two side dots at the octave.
pub const SIDE_DOT_PAIR_GAP: f64 = 6.0;

/// The board splits midway between this fret and the next.
pub const FINGERBOARD_SPLIT_FRET: u32 = 5;

// =============================================================================
// REGISTRATION CONSTANTS
// =============================================================================

/// Filament used as alignment pins.
pub const FILAMENT_DIAMETER: f64 = 1.75;

/// Socket oversize over the filament diameter.
pub const SOCKET_CLEARANCE: f64 = 0.25;

pub const SOCKET_DIAMETER: f64 = FILAMENT_DIAMETER + SOCKET_CLEARANCE;

/// Printed pegs are this much smaller than their socket.
pub const PEG_CLEARANCE: f64 = 0.15;

/// Socket depth on each side of a split.
pub const DOWEL_DEPTH: f64 = 4.0;

/// Printed pegs stop this short of the socket bottom.
pub const PEG_END_GAP: f64 = 0.3;

/// Neck split dowels: distance from the centre line as a fraction of
/// `neck_width`, and depth below the neck top.
pub const NECK_DOWEL_Y_RATIO: f64 = 0.25;
pub const NECK_DOWEL_DEPTH: f64 = 6.0;

/// Material kept around a dowel socket.
pub const DOWEL_MIN_WALL: f64 = 1.0;

/// Neck bolts (M4). The spacing keeps the head counterbores inside the
/// tapered heel.
pub const NECK_BOLT_SPACING: f64 = 20.0;
pub const BOLT_DIAMETER: f64 = 4.4;
pub const BOLT_HEAD_DIAMETER: f64 = 8.0;

/// Bolt head seat, measured from the joint towards the headstock.
pub const BOLT_HEAD_SEAT: f64 = 5.0;

/// Bolt bore reach past the joint.
pub const BOLT_REACH: f64 = 40.0;

/// M4 nut across flats including clearance.
pub const HEX_NUT_ACROSS_FLATS: f64 = 7.3;
pub const HEX_NUT_THICKNESS: f64 = 3.4;

/// Nut slot distance from the screw block back face.
pub const HEX_NUT_INSET: f64 = 3.0;

// =============================================================================
// ACCESSORY CONSTANTS
// =============================================================================

pub const NUT_LENGTH: f64 = 5.0;
pub const NUT_TOP_LENGTH: f64 = 3.0;
pub const NUT_HEIGHT: f64 = 8.5;

/// Distance from the neck edge to the outer strings at the nut.
pub const NUT_EDGE_MARGIN: f64 = 5.0;

/// String gauges, repeated for instruments with more strings.
pub const STRING_GAUGES: [f64; 4] = [0.9, 1.1, 1.0, 0.8];

/// Notch depth is `NOTCH_BASE_DEPTH + gauge * NOTCH_DEPTH_RATIO`.
pub const NOTCH_BASE_DEPTH: f64 = 0.6;
pub const NOTCH_DEPTH_RATIO: f64 = 0.5;
pub const NOTCH_CLEARANCE: f64 = 0.2;

/// Bridge string spread relative to the nut spread.
pub const BRIDGE_SPREAD: f64 = 1.4;
pub const BRIDGE_END_MARGIN: f64 = 6.0;
pub const BRIDGE_HEIGHT: f64 = 10.0;
pub const BRIDGE_LOW_DROP: f64 = 1.5;
pub const BRIDGE_BASE: f64 = 8.0;
pub const BRIDGE_TOP: f64 = 2.5;
pub const BRIDGE_FOOT_LENGTH: f64 = 10.0;
pub const BRIDGE_FOOT_WIDTH: f64 = 8.0;
pub const BRIDGE_FOOT_HEIGHT: f64 = 1.5;
pub const BRIDGE_RELIEF_HEIGHT: f64 = 3.0;

pub const TAILPIECE_LENGTH: f64 = 24.0;
pub const TAILPIECE_WIDE: f64 = 48.0;
pub const TAILPIECE_NARROW: f64 = 36.0;
pub const TAILPIECE_HEIGHT: f64 = 6.0;
pub const TAILPIECE_TAPER: f64 = 0.8;
pub const TAILPIECE_ROUNDING: f64 = 1.5;

/// Tailpiece distance from the tail edge.
pub const TAILPIECE_INSET: f64 = 8.0;
pub const TAILPIECE_STRING_SPAN: f64 = 28.0;
pub const ANCHOR_HOLE_DIAMETER: f64 = 1.6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Whether two lengths agree to within [`EPSILON`].
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(457.2 / 2.0, 228.6));
/// assert!(!approx_equal(2.0, 1.85));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Gauge of string `index`, cycling through [`STRING_GAUGES`].
#[inline]
pub fn string_gauge(index: usize) -> f64 {
    STRING_GAUGES[index % STRING_GAUGES.len()]
}
