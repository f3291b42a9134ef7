//! The colorimetric constants every conversion is based on.

use crate::{
    color::{Component, Components},
    math::{transform_3x3, Transform},
};

/// The fixed set of constants describing the viewing conditions: the
/// reference white, the RGB primaries (as matrices to and from CIE-XYZ) and
/// the CIE-Lab thresholds.
#[derive(Clone, Debug)]
pub struct Reference {
    /// XYZ of the reference white, with Y = 1.
    pub white_point: Components,
    /// Linear RGB to CIE-XYZ.
    pub to_xyz: Transform,
    /// CIE-XYZ to linear RGB.
    pub from_xyz: Transform,
    /// Normalized XYZ value where the Lab curve switches from linear to cube
    /// root.
    pub epsilon: Component,
    /// Slope of the linear part of the Lab curve.
    pub kappa: Component,
}

/// sRGB primaries with a D65 white point.
///
/// Matrices from <http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html>,
/// white point as published for the `d65` illuminant.
#[rustfmt::skip]
pub const D65_SRGB: Reference = Reference {
    white_point: Components(0.9504, 1.0000, 1.0888),
    to_xyz: transform_3x3(
        0.4124564, 0.2126729, 0.0193339,
        0.3575761, 0.7151522, 0.1191920,
        0.1804375, 0.0721750, 0.9503041,
    ),
    from_xyz: transform_3x3(
         3.2404542, -0.9692660,  0.0556434,
        -1.5371385,  1.8760108, -0.2040259,
        -0.4985314,  0.0415560,  1.0572252,
    ),
    epsilon: 0.008856,
    kappa: 903.3,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::math::transform;

    #[test]
    fn matrices_are_inverses() {
        for input in [
            Components(1.0, 0.0, 0.0),
            Components(0.0, 1.0, 0.0),
            Components(0.0, 0.0, 1.0),
            Components(0.2, 0.5, 0.8),
        ] {
            let back = transform(&D65_SRGB.from_xyz, transform(&D65_SRGB.to_xyz, input));
            assert_component_eq!(back.0, input.0, 1.0e-6);
            assert_component_eq!(back.1, input.1, 1.0e-6);
            assert_component_eq!(back.2, input.2, 1.0e-6);
        }
    }

    #[test]
    fn luminance_row_sums_to_one() {
        let Components(_, y, _) = transform(&D65_SRGB.to_xyz, Components(1.0, 1.0, 1.0));
        assert_component_eq!(y, 1.0, 1.0e-6);
    }
}
