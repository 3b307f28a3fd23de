//! # Uke Model
//!
//! Every printable part of the mini-guitar as a pure function of
//! [`InstrumentParams`]. Nothing is cached: each call builds a fresh
//! [`Shape`] tree.
//!
//! ## Architecture
//!
//! ```text
//! InstrumentParams → frets, neck, body, fingerboard, accessories
//!                  → assembly (Part selector) → Shape
//! ```
//!
//! ## Coordinates
//!
//! Millimetres. `x = 0` is the bridge saddle and `+x` runs towards the
//! headstock, so the nut face is at `x = scale_length`. `z = 0` is the
//! soundboard and neck top: body and neck hang below it, the fingerboard,
//! nut, bridge and tailpiece stand on it.
//!
//! ## Example
//!
//! ```rust
//! use config::InstrumentParams;
//! use uke_model::{build, Part};
//!
//! let params = InstrumentParams::default();
//! let nut = build(Part::Nut, &params).unwrap();
//! let bounds = nut.bounds().unwrap();
//! assert!(bounds.min.z.abs() < 1e-9);
//! ```

pub mod accessories;
pub mod assembly;
pub mod body;
pub mod checks;
pub mod error;
pub mod fingerboard;
pub mod frets;
pub mod neck;
pub mod primitives;
pub mod registration;

pub use assembly::{build, build_all, build_selection, Part};
pub use checks::{run_checks, CheckReport};
pub use error::ModelError;
pub use frets::{fret_position, fret_table, Fret};
pub use registration::{Feature, FeatureKind, Split};

pub use config::InstrumentParams;
pub use uke_csg::Shape;
