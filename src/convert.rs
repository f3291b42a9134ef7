//! Free functions for every step of the conversion pipeline.
//!
//! Each color space/form is modeled with its own type (see
//! [`crate::models`]); these functions chain the model conversions for the
//! common paths:
//!
//! ```text
//! Rgb8 -> Srgb -> SrgbLinear -> Xyz -> Lab -> Lch
//! Rgb8 <- Srgb <- SrgbLinear <- Xyz <- Lab
//! ```
//!
//! ```rust
//! use chromadelta::{lab_to_xyz, rgb_to_xyz, xyz_to_lab, xyz_to_rgb, Rgb8};
//!
//! let color = Rgb8::new(241, 214, 147);
//! let lab = xyz_to_lab(rgb_to_xyz(color));
//! assert_eq!(xyz_to_rgb(lab_to_xyz(lab)), Ok(color));
//! ```

use tracing::trace;

use crate::{
    error::Result,
    models::{Lab, Lch, Rgb8, SrgbLinear, ToXyz, Xyz},
};

/// Convert an 8-bit sRGB color to CIE-XYZ.
pub fn rgb_to_xyz(rgb: Rgb8) -> Xyz {
    let xyz = rgb.to_srgb().to_linear_light().to_xyz();
    trace!(%rgb, %xyz, "rgb to xyz");
    xyz
}

/// Convert a CIE-XYZ color to CIE-Lab.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let lab = Lab::from(xyz);
    trace!(%xyz, %lab, "xyz to lab");
    lab
}

/// Convert a CIE-Lab color to its polar form, rounded for presentation.
///
/// Chroma is rounded to one decimal place and hue to a whole degree. Use
/// [`Lab::to_polar`] for the unrounded values.
pub fn lab_to_lch(lab: Lab) -> Lch {
    lab.to_polar().rounded()
}

/// Convert a CIE-Lab color to CIE-XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// Convert a CIE-XYZ color to 8-bit sRGB.
///
/// Channels are rounded half to even and never clamped: colors outside of
/// the sRGB gamut return [`crate::Error::OutOfGamut`].
pub fn xyz_to_rgb(xyz: Xyz) -> Result<Rgb8> {
    let srgb = SrgbLinear::from(xyz).to_gamma_encoded();
    trace!(%xyz, %srgb, "xyz to rgb");
    srgb.quantize()
}
