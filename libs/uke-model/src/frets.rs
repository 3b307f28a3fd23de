//! # Frets
//!
//! Equal-tempered fret positions. `fret_position(L, n)` is the distance of
//! fret `n` from the bridge saddle, which is also its x coordinate in model
//! space. Fret 0 is the nut.

use config::InstrumentParams;
use serde::Serialize;

/// Distance of fret `n` from the saddle: `L / 2^(n/12)`.
///
/// ```rust
/// use uke_model::fret_position;
///
/// assert_eq!(fret_position(457.2, 0), 457.2);
/// assert!((fret_position(457.2, 12) - 228.6).abs() < 1e-9);
/// ```
pub fn fret_position(scale_length: f64, n: u32) -> f64 {
    scale_length / 2f64.powf(f64::from(n) / 12.0)
}

/// Distance of fret `n` from the nut.
pub fn fret_distance_from_nut(scale_length: f64, n: u32) -> f64 {
    scale_length - fret_position(scale_length, n)
}

/// Gap between fret `n - 1` and fret `n`. Zero for the nut.
pub fn fret_spacing(scale_length: f64, n: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    fret_position(scale_length, n - 1) - fret_position(scale_length, n)
}

/// Midpoint between fret `n - 1` and fret `n`, where a finger (and a marker)
/// goes.
pub fn fret_midpoint(scale_length: f64, n: u32) -> f64 {
    if n == 0 {
        return fret_position(scale_length, 0);
    }
    (fret_position(scale_length, n - 1) + fret_position(scale_length, n)) / 2.0
}

/// One row of the fret table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fret {
    pub number: u32,
    /// Distance from the saddle.
    pub position: f64,
    pub from_nut: f64,
    /// Gap to the previous fret.
    pub spacing: f64,
}

/// Frets `1..=num_frets`.
pub fn fret_table(params: &InstrumentParams) -> Vec<Fret> {
    let l = params.scale_length;
    (1..=params.num_frets)
        .map(|n| Fret {
            number: n,
            position: fret_position(l, n),
            from_nut: fret_distance_from_nut(l, n),
            spacing: fret_spacing(l, n),
        })
        .collect()
}

#[cfg(test)]
mod tests;
