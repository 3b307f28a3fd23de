//! # Instrument Parameters
//!
//! The handful of numbers every part is a pure function of, plus the render
//! settings written into each emitted file. Both load from a TOML project
//! file:
//!
//! ```toml
//! [instrument]
//! scale_length = 457.2
//! num_frets = 18
//!
//! [render]
//! fa = 4.0
//! fs = 0.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

// =============================================================================
// INSTRUMENT PARAMETERS
// =============================================================================

/// Geometric parameters of the instrument.
///
/// Coordinates used by the derived values: `x = 0` is the bridge saddle and
/// `+x` points at the headstock, so the nut is at `x = scale_length` and the
/// body/neck joint at `x = neck_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstrumentParams {
    /// Vibrating string length from nut to saddle.
    pub scale_length: f64,
    /// Distance from the scale origin (saddle) to the body/neck joint.
    pub neck_offset: f64,
    /// Neck and fingerboard width.
    pub neck_width: f64,
    /// Lower bout width.
    pub body_size: f64,
    /// Body depth.
    pub thickness: f64,
    pub num_frets: u32,
    pub string_count: u32,
    /// Requested sound hole radius. The body may clamp it.
    pub sound_hole_radius: f64,
}

impl Default for InstrumentParams {
    fn default() -> Self {
        Self {
            scale_length: DEFAULT_SCALE_LENGTH,
            neck_offset: DEFAULT_NECK_OFFSET,
            neck_width: DEFAULT_NECK_WIDTH,
            body_size: DEFAULT_BODY_SIZE,
            thickness: DEFAULT_THICKNESS,
            num_frets: DEFAULT_NUM_FRETS,
            string_count: DEFAULT_STRING_COUNT,
            sound_hole_radius: DEFAULT_SOUND_HOLE_RADIUS,
        }
    }
}

impl InstrumentParams {
    /// Checks every parameter the part builders rely on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::InstrumentParams;
    ///
    /// let mut params = InstrumentParams::default();
    /// assert!(params.validate().is_ok());
    ///
    /// params.neck_width = 0.0;
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scale_length", self.scale_length)?;
        positive("neck_offset", self.neck_offset)?;
        positive("neck_width", self.neck_width)?;
        positive("body_size", self.body_size)?;
        positive("thickness", self.thickness)?;
        positive("sound_hole_radius", self.sound_hole_radius)?;
        in_range("num_frets", self.num_frets, 1, MAX_FRETS)?;
        in_range("string_count", self.string_count, 1, MAX_STRINGS)?;

        if self.neck_offset >= self.scale_length {
            return Err(ConfigError::JointBeyondNut {
                neck_offset: self.neck_offset,
                scale_length: self.scale_length,
            });
        }

        let wall = self.min_body_wall();
        if wall <= 0.0 {
            return Err(ConfigError::WallTooThin { thickness: wall });
        }

        for profile in truss_profiles() {
            let wall = self.neck_section_wall(profile.half_width, profile.depth);
            if wall < TRUSS_MARGIN {
                return Err(ConfigError::TrussRodExposed {
                    section: profile.name,
                    wall,
                    margin: TRUSS_MARGIN,
                });
            }
        }

        let wall = self.neck_dowel_wall();
        if wall < DOWEL_MIN_WALL {
            return Err(ConfigError::NeckDowelExposed {
                wall,
                margin: DOWEL_MIN_WALL,
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Derived body layout
    // -------------------------------------------------------------------------

    /// Radius of the lower bout cylinder.
    pub fn lower_bout_radius(&self) -> f64 {
        self.body_size / 2.0
    }

    /// X of the lower bout centre on the soundboard.
    pub fn lower_bout_x(&self) -> f64 {
        -self.body_size * LOWER_BOUT_OFFSET_RATIO
    }

    /// Radius of the upper bout cylinder.
    pub fn upper_bout_radius(&self) -> f64 {
        self.body_size * UPPER_BOUT_RATIO
    }

    /// X of the upper bout centre; the bout touches the neck joint.
    pub fn upper_bout_x(&self) -> f64 {
        self.neck_offset - self.upper_bout_radius()
    }

    /// X the slant is taken about: the square neck end of the inset outline.
    pub fn slant_pivot_x(&self) -> f64 {
        self.neck_offset - BODY_ROUNDING
    }

    /// X of the lower bout centre on the back, after the slant.
    pub fn bottom_lower_bout_x(&self) -> f64 {
        let pivot = self.slant_pivot_x();
        pivot + BODY_SLANT * (self.lower_bout_x() - pivot)
    }

    /// X coordinate of the tail edge of the soundboard.
    pub fn tail_x(&self) -> f64 {
        self.lower_bout_x() - self.lower_bout_radius()
    }

    /// Centre about which the cavity is shrunk.
    pub fn cavity_center(&self) -> [f64; 3] {
        [
            (self.lower_bout_x() + self.bottom_lower_bout_x()) / 2.0,
            0.0,
            -self.thickness / 2.0,
        ]
    }

    /// Lower bound of the shell wall thickness.
    ///
    /// The shell is convex, so shrinking it by `s` about a centre whose
    /// distance to the surface is at least `rho`, then shifting by `d`,
    /// leaves a wall of at least `(1 - s) * rho - |d|` everywhere. `rho` is
    /// bounded through the top disk and the slanted bottom ellipse of the
    /// lower bout, whose outline is inset by the rounding radius; the
    /// rounding sphere adds that radius back.
    pub fn min_body_wall(&self) -> f64 {
        let span = self.thickness - 2.0 * BODY_ROUNDING;
        if span <= 0.0 {
            return -BODY_CAVITY_OFFSET.abs();
        }
        let core = self.lower_bout_radius() - BODY_ROUNDING;
        let shift = (self.lower_bout_x() - self.bottom_lower_bout_x()).abs();
        let lean = BODY_SLANT * core / (1.0 + shift / span);
        let rho = (span / 2.0).min(lean) + BODY_ROUNDING;
        (1.0 - BODY_SHRINK) * rho - BODY_CAVITY_OFFSET.abs()
    }

    // -------------------------------------------------------------------------
    // Derived neck layout
    // -------------------------------------------------------------------------

    /// X where the heel tenon starts inside the body.
    pub fn heel_start_x(&self) -> f64 {
        self.neck_offset - HEEL_TENON
    }

    pub fn heel_depth(&self) -> f64 {
        self.thickness * HEEL_DEPTH_RATIO
    }

    /// X where the nut seat ends and the headstock blend begins.
    pub fn nut_seat_end_x(&self) -> f64 {
        self.scale_length + NUT_LENGTH
    }

    pub fn neck_blank_radius(&self) -> f64 {
        self.neck_width / 2.0
    }

    /// Depth of the half-elliptic neck section below the neck top.
    pub fn neck_blank_depth(&self) -> f64 {
        self.neck_blank_radius() * NECK_DEPTH_RATIO
    }

    /// Half width of the neck section `depth` below the neck top. Zero at
    /// and below the bottom of the section.
    pub fn neck_half_width_at_depth(&self, depth: f64) -> f64 {
        let r = self.neck_blank_radius();
        let t = depth / self.neck_blank_depth();
        if t <= 0.0 {
            r
        } else if t >= 1.0 {
            0.0
        } else {
            r * (1.0 - t * t).sqrt()
        }
    }

    /// Thinnest neck material around a cut that reaches `half_width` to each
    /// side of the centre line and `depth` below the top. Negative when the
    /// cut breaks through.
    pub fn neck_section_wall(&self, half_width: f64, depth: f64) -> f64 {
        let side = self.neck_half_width_at_depth(depth) - half_width;
        let floor = self.neck_blank_depth() - depth;
        side.min(floor)
    }

    /// Distance of the neck split dowels from the centre line.
    pub fn neck_dowel_y(&self) -> f64 {
        self.neck_width * NECK_DOWEL_Y_RATIO
    }

    /// Thinnest material around a neck split dowel socket, towards either
    /// the neck surface or the truss slot between the two dowels.
    pub fn neck_dowel_wall(&self) -> f64 {
        let r = SOCKET_DIAMETER / 2.0;
        let y = self.neck_dowel_y();
        let outside = self.neck_section_wall(y + r, NECK_DOWEL_DEPTH + r);
        let channel = y - r - TRUSS_ROD_WIDTH / 2.0;
        outside.min(channel)
    }
}

// =============================================================================
// TRUSS ROD PROFILE
// =============================================================================

/// Cross-section of one stretch of the truss-rod channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelProfile {
    pub name: &'static str,
    pub half_width: f64,
    /// Deepest point below the neck top.
    pub depth: f64,
}

/// Channel stretches from the heel end towards the nut: axial counterbore,
/// adjustment pocket, transition and slot.
pub fn truss_profiles() -> [ChannelProfile; 4] {
    let bore_radius = TRUSS_COUNTERBORE_DIAMETER / 2.0;
    [
        ChannelProfile {
            name: "counterbore",
            half_width: bore_radius,
            depth: TRUSS_ROD_DEPTH / 2.0 + bore_radius,
        },
        ChannelProfile {
            name: "pocket",
            half_width: TRUSS_POCKET_WIDTH / 2.0,
            depth: TRUSS_ROD_DEPTH,
        },
        ChannelProfile {
            name: "transition",
            half_width: TRUSS_POCKET_WIDTH.max(TRUSS_ROD_WIDTH) / 2.0,
            depth: TRUSS_ROD_DEPTH,
        },
        ChannelProfile {
            name: "slot",
            half_width: TRUSS_ROD_WIDTH / 2.0,
            depth: TRUSS_ROD_DEPTH,
        },
    ]
}

// =============================================================================
// RENDER SETTINGS
// =============================================================================

/// Kernel resolution written at the top of every emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// `$fn`; zero means derive from `$fa`/`$fs`.
    #[serde(rename = "fn")]
    pub fn_: u32,
    /// `$fa` in degrees.
    pub fa: f64,
    /// `$fs` in millimetres.
    pub fs: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fn_: DEFAULT_FN,
            fa: DEFAULT_FA,
            fs: DEFAULT_FS,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fa", self.fa)?;
        positive("fs", self.fs)?;
        if self.fn_ != 0 && self.fn_ < MIN_FRAGMENTS {
            return Err(ConfigError::OutOfRange {
                name: "fn",
                value: self.fn_,
                min: MIN_FRAGMENTS,
                max: u32::MAX,
            });
        }
        Ok(())
    }
}

// =============================================================================
// PROJECT FILE
// =============================================================================

/// Contents of a `uke.toml` project file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub instrument: InstrumentParams,
    pub render: RenderSettings,
}

impl ProjectConfig {
    /// Parses and validates a project file body.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ProjectConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a project file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.instrument.validate()?;
        self.render.validate()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn in_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
