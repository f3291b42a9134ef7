//! Model a color in the sRGB color space.

use std::{fmt, str::FromStr};

use num_traits::ToPrimitive;
use tracing::debug;

use crate::{
    color::{Channels, Component},
    error::{Error, Result},
    math::transform,
    models::xyz::{ToXyz, Xyz},
    reference::D65_SRGB,
};

pub mod gamma;

/// An 8-bit sRGB color, the way colors are stored for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Rgb8 {
    /// Create a new 8-bit color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new 8-bit color from channels of any numeric type.
    ///
    /// Channels must be integers in [0, 255]. Anything else is rejected
    /// instead of being truncated or clamped.
    pub fn try_new<T: ToPrimitive>(red: T, green: T, blue: T) -> Result<Self> {
        Ok(Self {
            red: validate_channel("red", red)?,
            green: validate_channel("green", green)?,
            blue: validate_channel("blue", blue)?,
        })
    }

    /// The three channels in red, green, blue order.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert to floating point sRGB components in [0..1].
    pub fn to_srgb(&self) -> Srgb {
        Srgb::new(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }
}

fn validate_channel<T: ToPrimitive>(channel: &'static str, value: T) -> Result<u8> {
    let value = value.to_f64().ok_or(Error::NonFinite)?;

    if value.is_nan() {
        debug!(channel, "rejecting NaN channel");
        return Err(Error::NonFinite);
    }

    if !(0.0..=255.0).contains(&value) {
        debug!(channel, value, "rejecting channel out of range");
        return Err(Error::ChannelOutOfRange { channel, value });
    }

    if value.fract() != 0.0 {
        debug!(channel, value, "rejecting fractional channel");
        return Err(Error::NonIntegerChannel { channel, value });
    }

    Ok(value as u8)
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Parses `r,g,b`, optionally wrapped in `rgb(...)`, with each channel an
/// integer in [0, 255].
impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let values = inner
            .split(',')
            .map(|part| part.trim().parse::<Component>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| Error::Parse(s.to_string()))?;

        match values.as_slice() {
            &[red, green, blue] => Self::try_new(red, green, blue),
            _ => Err(Error::Parse(s.to_string())),
        }
    }
}

chromadelta_macros::gen_model! {
    /// A gamma encoded sRGB color with floating point components, nominally
    /// in [0..1].
    pub struct Srgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Srgb {
    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        gamma::to_linear_light(&self.to_components()).into()
    }

    /// Scale to 8-bit channels, rounding half to even.
    ///
    /// Fails with [`Error::OutOfGamut`] if any channel lands outside
    /// [0, 255]; the error carries the unclamped values. Use [`Srgb::clip`]
    /// first to force a displayable color.
    pub fn quantize(&self) -> Result<Rgb8> {
        if !self.is_finite() {
            return Err(Error::NonFinite);
        }

        let rgb = [
            scale_to_8bit(self.red),
            scale_to_8bit(self.green),
            scale_to_8bit(self.blue),
        ];

        let channels = Channels::from_predicate(rgb, |v| !(0..=255).contains(&v));
        if !channels.is_empty() {
            debug!(?channels, ?rgb, "color is outside of the sRGB gamut");
            return Err(Error::OutOfGamut { channels, rgb });
        }

        Ok(Rgb8::new(rgb[0] as u8, rgb[1] as u8, rgb[2] as u8))
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Srgb {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }
}

fn scale_to_8bit(value: Component) -> i32 {
    (255.0 * value).round_ties_even() as i32
}

chromadelta_macros::gen_model! {
    /// An sRGB color in linear light, conventionally in [0..1] but not
    /// clamped.
    pub struct SrgbLinear {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        gamma::to_gamma_encoded(&self.to_components()).into()
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        transform(&D65_SRGB.to_xyz, self.to_components()).into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        transform(&D65_SRGB.from_xyz, value.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn try_new_accepts_integral_values() {
        assert_eq!(Rgb8::try_new(241, 214, 147), Ok(Rgb8::new(241, 214, 147)));
        assert_eq!(Rgb8::try_new(0.0, 255.0, 128.0), Ok(Rgb8::new(0, 255, 128)));
        assert_eq!(Rgb8::try_new(0u64, 1u64, 2u64), Ok(Rgb8::new(0, 1, 2)));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert_eq!(
            Rgb8::try_new(256, 0, 0),
            Err(Error::ChannelOutOfRange {
                channel: "red",
                value: 256.0
            })
        );
        assert_eq!(
            Rgb8::try_new(0, -1, 0),
            Err(Error::ChannelOutOfRange {
                channel: "green",
                value: -1.0
            })
        );
        assert!(matches!(
            Rgb8::try_new(0.0, 0.0, Component::INFINITY),
            Err(Error::ChannelOutOfRange { channel: "blue", .. })
        ));
    }

    #[test]
    fn try_new_rejects_fractions_and_nan() {
        assert_eq!(
            Rgb8::try_new(0.0, 0.0, 12.5),
            Err(Error::NonIntegerChannel {
                channel: "blue",
                value: 12.5
            })
        );
        assert_eq!(
            Rgb8::try_new(Component::NAN, 0.0, 0.0),
            Err(Error::NonFinite)
        );
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("241,214,147".parse(), Ok(Rgb8::new(241, 214, 147)));
        assert_eq!(" 1, 2 ,3 ".parse(), Ok(Rgb8::new(1, 2, 3)));
        assert_eq!("rgb(248, 236, 202)".parse(), Ok(Rgb8::new(248, 236, 202)));

        assert!(matches!("1,2".parse::<Rgb8>(), Err(Error::Parse(_))));
        assert!(matches!("1,2,3,4".parse::<Rgb8>(), Err(Error::Parse(_))));
        assert!(matches!("red,2,3".parse::<Rgb8>(), Err(Error::Parse(_))));
        assert!(matches!(
            "1,2,300".parse::<Rgb8>(),
            Err(Error::ChannelOutOfRange { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let color = Rgb8::new(12, 34, 56);
        assert_eq!(color.to_string(), "rgb(12, 34, 56)");
        assert_eq!(color.to_string().parse(), Ok(color));
    }

    #[test]
    fn quantize_rounds_half_to_even() {
        // 255 * 0.5 = 127.5 and 255 * 1.5 = 382.5 are exact.
        assert_eq!(scale_to_8bit(0.5), 128);
        assert_eq!(scale_to_8bit(1.5), 382);
        assert_eq!(scale_to_8bit(-0.5), -128);
        assert_eq!(scale_to_8bit(-1.5), -382);
        assert_eq!(scale_to_8bit(0.25), 64);

        assert_eq!(Srgb::new(0.5, 0.0, 1.0).quantize(), Ok(Rgb8::new(128, 0, 255)));
    }

    #[test]
    fn quantize_reports_out_of_gamut_channels() {
        let err = Srgb::new(1.2, 0.5, -0.1).quantize().unwrap_err();
        assert_eq!(
            err,
            Error::OutOfGamut {
                channels: Channels::RED | Channels::BLUE,
                rgb: [306, 128, -26],
            }
        );

        assert_eq!(
            Srgb::new(Component::NAN, 0.0, 0.0).quantize(),
            Err(Error::NonFinite)
        );
    }

    #[test]
    fn clip_forces_a_displayable_color() {
        let clipped = Srgb::new(1.2, 0.5, -0.1).clip();
        assert_eq!(clipped, Srgb::new(1.0, 0.5, 0.0));
        assert_eq!(clipped.quantize(), Ok(Rgb8::new(255, 128, 0)));
    }

    #[test]
    fn linear_light_round_trip() {
        let srgb = Rgb8::new(200, 100, 7).to_srgb();
        let back = srgb.to_linear_light().to_gamma_encoded();
        assert_component_eq!(back.red, srgb.red, 1.0e-12);
        assert_component_eq!(back.green, srgb.green, 1.0e-12);
        assert_component_eq!(back.blue, srgb.blue, 1.0e-12);
    }

    #[test]
    fn white_maps_to_reference_white() {
        let xyz = Rgb8::new(255, 255, 255)
            .to_srgb()
            .to_linear_light()
            .to_xyz();
        assert_component_eq!(xyz.x, 0.95047, 1.0e-9);
        assert_component_eq!(xyz.y, 1.0000001, 1.0e-9);
        assert_component_eq!(xyz.z, 1.08883, 1.0e-9);
    }

    #[test]
    fn model_display() {
        let srgb = Srgb::new(0.5, 0.25, 1.0);
        assert_eq!(srgb.to_string(), "srgb(0.5, 0.25, 1)");
        assert_eq!(format!("{:.2}", srgb), "srgb(0.50, 0.25, 1.00)");
        assert_eq!(
            SrgbLinear::new(0.0, 0.0, 0.0).to_string(),
            "srgb-linear(0, 0, 0)"
        );
    }
}
