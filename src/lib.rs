//! chromadelta converts colors between sRGB, CIE-XYZ, CIE-Lab and LCh and
//! measures the perceptual difference between two colors with CIEDE2000.
//!
//! All conversions use the sRGB primaries and the D65 reference white, see
//! [`D65_SRGB`].
//!
//! ```rust
//! use chromadelta::{ciede2000, Rgb8};
//!
//! let distance = ciede2000(Rgb8::new(241, 214, 147), Rgb8::new(248, 236, 202));
//! assert!((distance - 9.5882).abs() < 1.0e-4);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod difference;
mod error;
mod math;
pub mod models;
mod reference;

#[cfg(test)]
mod test;

pub use color::{Channels, Component, Components};
pub use convert::{lab_to_lch, lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
pub use difference::{ciede2000, ciede2000_lab, ciede2000_weighted, Weights};
pub use error::{Error, Result};
pub use models::{Lab, Lch, Rgb8, Srgb, SrgbLinear, ToXyz, Xyz};
pub use reference::{Reference, D65_SRGB};
