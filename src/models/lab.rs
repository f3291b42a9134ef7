//! Models for the rectangular and polar forms of the CIE-Lab color space.

use tracing::trace;

use crate::{
    color::{Component, Components},
    math::{normalize_hue, round_to_places},
    models::xyz::{ToXyz, Xyz},
    reference::D65_SRGB,
};

chromadelta_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component, in [0..100].
        pub lightness: Component,
        /// The a component (green to red).
        pub a: Component,
        /// The b component (blue to yellow).
        pub b: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form, without any rounding.
    ///
    /// Achromatic colors get a hue of 0.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.lightness, chroma, hue)
    }
}

/// The CIE-Lab companding function for a single white-normalized XYZ value.
fn lab_f(value: Component) -> Component {
    if value > D65_SRGB.epsilon {
        value.cbrt()
    } else {
        (D65_SRGB.kappa * value + 16.0) / 116.0
    }
}

/// Inverse of [`lab_f`], used for the X and Z components.
fn lab_f_inverse(f: Component) -> Component {
    let f_cubed = f * f * f;
    if f_cubed > D65_SRGB.epsilon {
        f_cubed
    } else {
        (116.0 * f - 16.0) / D65_SRGB.kappa
    }
}

/// Normalized luminance from lightness. The branch is taken on L itself, not
/// on the cube of f_y.
fn luminance_from_lightness(lightness: Component) -> Component {
    if lightness > D65_SRGB.kappa * D65_SRGB.epsilon {
        let v = (lightness + 16.0) / 116.0;
        v * v * v
    } else {
        lightness / D65_SRGB.kappa
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let white = D65_SRGB.white_point;
        let normalized = Components(value.x / white.0, value.y / white.1, value.z / white.2);

        let Components(f0, f1, f2) = normalized.map(lab_f);
        trace!(f_x = f0, f_y = f1, f_z = f2, "xyz to lab");

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

impl ToXyz for Lab {
    fn to_xyz(&self) -> Xyz {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = a / 500.0 + f1;
        let f2 = f1 - b / 200.0;

        let x = lab_f_inverse(f0);
        let y = luminance_from_lightness(lightness);
        let z = lab_f_inverse(f2);

        let white = D65_SRGB.white_point;
        Xyz::new(x * white.0, y * white.1, z * white.2)
    }
}

chromadelta_macros::gen_model! {
    /// The model for a color specified in the CIE-Lab color space with the
    /// cylindrical polar form.
    pub struct Lch {
        /// The lightness component, same as for [`Lab`].
        pub lightness: Component,
        /// The chroma component, never negative.
        pub chroma: Component,
        /// The hue component, in degrees in [0..360).
        pub hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }

    /// Round for presentation: chroma to one decimal place and hue to a whole
    /// degree, both half to even on the stored value. Lightness is left
    /// untouched.
    pub fn rounded(&self) -> Lch {
        let chroma = round_to_places(self.chroma, 1);
        let hue = normalize_hue(self.hue.round_ties_even());

        Lch::new(self.lightness, chroma, hue)
    }
}
