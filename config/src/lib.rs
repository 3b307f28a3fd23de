//! # Config Crate
//!
//! Instrument parameters, render settings and the tuned construction
//! constants of the mini-guitar model. Every magic number used by the part
//! builders lives here so the model crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::{InstrumentParams, ProjectConfig};
//!
//! let params = InstrumentParams::default();
//! assert!(params.validate().is_ok());
//!
//! let project: ProjectConfig = ProjectConfig::from_toml_str(
//!     "[instrument]\nnum_frets = 15\n",
//! ).unwrap();
//! assert_eq!(project.instrument.num_frets, 15);
//! ```
//!
//! ## Layout
//!
//! - [`constants`]: tuned literals (clearances, offsets, ratios)
//! - [`params`]: user-facing parameters and their validation
//! - [`error`]: configuration errors

pub mod constants;
pub mod error;
pub mod params;

pub use error::ConfigError;
pub use params::{truss_profiles, ChannelProfile, InstrumentParams, ProjectConfig, RenderSettings};

#[cfg(test)]
mod tests;
