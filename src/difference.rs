//! The CIEDE2000 color difference.
//! <https://www.ece.rochester.edu/~gsharma/ciede2000/>

use std::{
    f64::consts::{PI, TAU},
    str::FromStr,
};

use tracing::{debug, trace};

use crate::{
    color::Component,
    convert::{rgb_to_xyz, xyz_to_lab},
    error::{Error, Result},
    models::{Lab, Rgb8},
};

/// 25^7, used by the chroma correction and the rotation term.
const TWENTY_FIVE_POW_7: Component = 6103515625.0;

/// The parametric weighting factors k_L, k_C and k_H.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    /// Weight of the lightness difference.
    pub lightness: Component,
    /// Weight of the chroma difference.
    pub chroma: Component,
    /// Weight of the hue difference.
    pub hue: Component,
}

impl Weights {
    /// Create a new set of weighting factors.
    pub const fn new(lightness: Component, chroma: Component, hue: Component) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Returns true if every factor is finite and greater than zero.
    pub fn is_valid(&self) -> bool {
        [self.lightness, self.chroma, self.hue]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// All factors set to 1, the reference conditions.
impl Default for Weights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Parses `kl,kc,kh`. Every factor must be finite and greater than zero.
impl FromStr for Weights {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<Component>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::ParseWeights(s.to_string()))?;

        match values.as_slice() {
            &[lightness, chroma, hue] => {
                let weights = Self::new(lightness, chroma, hue);
                if weights.is_valid() {
                    Ok(weights)
                } else {
                    Err(Error::ParseWeights(s.to_string()))
                }
            }
            _ => Err(Error::ParseWeights(s.to_string())),
        }
    }
}

/// CIEDE2000 difference between two 8-bit sRGB colors.
pub fn ciede2000(first: Rgb8, second: Rgb8) -> Component {
    let first = xyz_to_lab(rgb_to_xyz(first));
    let second = xyz_to_lab(rgb_to_xyz(second));
    delta_e_2000(&first, &second, &Weights::default())
}

/// CIEDE2000 difference between two CIE-Lab colors with the reference
/// weighting factors.
pub fn ciede2000_lab(first: &Lab, second: &Lab) -> Result<Component> {
    ciede2000_weighted(first, second, &Weights::default())
}

/// CIEDE2000 difference between two CIE-Lab colors with custom weighting
/// factors.
///
/// Fails with [`Error::InvalidWeights`] unless every factor is finite and
/// positive, and with [`Error::NonFinite`] if either color or the result is
/// not finite.
pub fn ciede2000_weighted(first: &Lab, second: &Lab, weights: &Weights) -> Result<Component> {
    if !weights.is_valid() {
        debug!(?weights, "rejecting weighting factors");
        return Err(Error::InvalidWeights(*weights));
    }

    if !first.is_finite() || !second.is_finite() {
        debug!(%first, %second, "rejecting non-finite lab color");
        return Err(Error::NonFinite);
    }

    let delta_e = delta_e_2000(first, second, weights);
    if !delta_e.is_finite() {
        debug!(%first, %second, "color difference overflowed");
        return Err(Error::NonFinite);
    }

    Ok(delta_e)
}

/// Hue angle in radians of a (primed) a, b pair.
///
/// 0 for the achromatic case, otherwise negative angles are kept when a is
/// not negative and a full turn is added when a is negative.
fn hue_angle(a: Component, b: Component) -> Component {
    if a == 0.0 && b == 0.0 {
        0.0
    } else if a >= 0.0 {
        b.atan2(a)
    } else {
        b.atan2(a) + TAU
    }
}

/// Difference between two hue angles wrapped into (-PI, PI]. Zero when either
/// color is achromatic.
fn hue_difference(h1: Component, h2: Component, chroma_product: Component) -> Component {
    if chroma_product == 0.0 {
        return 0.0;
    }

    let mut dh = h2 - h1;
    while dh > PI {
        dh -= TAU;
    }
    while dh <= -PI {
        dh += TAU;
    }
    dh
}

/// Mean of two hue angles, taking the short way around the circle.
fn mean_hue(h1: Component, h2: Component, chroma_product: Component) -> Component {
    let diff = (h1 - h2).abs();
    let sum = h1 + h2;

    if chroma_product == 0.0 {
        sum
    } else if diff <= PI {
        sum / 2.0
    } else if sum < TAU {
        sum / 2.0 + PI
    } else {
        sum / 2.0 - PI
    }
}

/// sqrt(C^7 / (C^7 + 25^7))
fn chroma_factor(chroma: Component) -> Component {
    let c7 = chroma.powi(7);
    (c7 / (c7 + TWENTY_FIVE_POW_7)).sqrt()
}

fn delta_e_2000(first: &Lab, second: &Lab, weights: &Weights) -> Component {
    let (l1, a1, b1) = (first.lightness, first.a, first.b);
    let (l2, a2, b2) = (second.lightness, second.a, second.b);

    // 1. Chroma from the raw a, b.
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_mean = (c1 + c2) / 2.0;

    // 2. Correct a for the neutral axis.
    let g = 0.5 * (1.0 - chroma_factor(c_mean));
    let a1 = (1.0 + g) * a1;
    let a2 = (1.0 + g) * a2;

    // 3. Chroma and hue from the corrected a.
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let h1 = hue_angle(a1, b1);
    let h2 = hue_angle(a2, b2);

    // 4. Differences.
    let chroma_product = c1 * c2;
    let dl = l2 - l1;
    let dc = c2 - c1;
    let dh = hue_difference(h1, h2, chroma_product);
    let dh_big = 2.0 * chroma_product.sqrt() * (dh / 2.0).sin();

    // 5. Means.
    let l_mean = (l1 + l2) / 2.0;
    let c_mean = (c1 + c2) / 2.0;
    let h_mean = mean_hue(h1, h2, chroma_product);

    // 6. Weighting functions. T uses the mean hue in radians, the rotation
    //    term in degrees.
    let t = 1.0 - 0.17 * (h_mean - PI / 6.0).cos()
        + 0.24 * (2.0 * h_mean).cos()
        + 0.32 * (3.0 * h_mean + PI / 30.0).cos()
        - 0.2 * (4.0 * h_mean - 63.0 * PI / 180.0).cos();

    let mut h_mean_degrees = h_mean * 180.0 / PI;
    if h_mean_degrees < 0.0 {
        h_mean_degrees += 360.0;
    } else if h_mean_degrees > 360.0 {
        h_mean_degrees -= 360.0;
    }
    let d_theta = 30.0 * (-((h_mean_degrees - 275.0) / 25.0).powi(2)).exp();

    let r_c = 2.0 * chroma_factor(c_mean);
    let s_c = 1.0 + 0.045 * c_mean;
    let s_h = 1.0 + 0.015 * c_mean * t;
    let l_offset = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let r_t = -(d_theta * PI / 90.0).sin() * r_c;

    // 7. Combine.
    let f_l = dl / weights.lightness / s_l;
    let f_c = dc / weights.chroma / s_c;
    let f_h = dh_big / weights.hue / s_h;

    let delta_e = (f_l * f_l + f_c * f_c + f_h * f_h + r_t * f_c * f_h).sqrt();
    trace!(
        dl,
        dc,
        dh = dh_big,
        s_l,
        s_c,
        s_h,
        r_t,
        delta_e,
        "ciede2000"
    );
    delta_e
}
