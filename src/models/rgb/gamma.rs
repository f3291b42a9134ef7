//! sRGB gamma encoding and decoding.
//!
//! Both directions are applied to the magnitude of the value and the sign is
//! carried over, so out of gamut (negative) linear values never raise a
//! negative base to a fractional power.

use crate::color::{Component, Components};

/// Gamma encoded values above this threshold use the power curve.
const DECODE_THRESHOLD: Component = 0.04045;

/// Linear light values above this threshold use the power curve.
const ENCODE_THRESHOLD: Component = 0.0031308;

const GAMMA: Component = 2.4;

/// Convert a single gamma encoded channel to linear light.
pub fn decode(value: Component) -> Component {
    let abs = value.abs();

    if abs > DECODE_THRESHOLD {
        value.signum() * ((abs + 0.055) / 1.055).powf(GAMMA)
    } else {
        value / 12.92
    }
}

/// Convert a single linear light channel to gamma encoded.
pub fn encode(value: Component) -> Component {
    let abs = value.abs();

    if abs > ENCODE_THRESHOLD {
        value.signum() * (1.055 * abs.powf(1.0 / GAMMA) - 0.055)
    } else {
        12.92 * value
    }
}

/// Convert the components from gamma encoded to linear light.
pub fn to_linear_light(from: &Components) -> Components {
    from.map(decode)
}

/// Convert the components from linear light to gamma encoded.
pub fn to_gamma_encoded(from: &Components) -> Components {
    from.map(encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn decode_known_values() {
        assert_eq!(decode(0.0), 0.0);
        assert_eq!(decode(1.0), 1.0);
        assert_component_eq!(decode(0.5), 0.21404114048223255);
        // Linear segment near black.
        assert_component_eq!(decode(0.04), 0.0030959752321981426);
    }

    #[test]
    fn encode_known_values() {
        assert_eq!(encode(0.0), 0.0);
        assert_component_eq!(encode(1.0), 1.0);
        assert_component_eq!(encode(0.5), 0.7353569830524495);
        assert_component_eq!(encode(0.002), 0.02584);
    }

    #[test]
    fn curves_are_continuous_at_thresholds() {
        let below = decode(DECODE_THRESHOLD);
        let above = decode(DECODE_THRESHOLD + 1.0e-12);
        assert_component_eq!(below, above, 1.0e-7);

        let below = encode(ENCODE_THRESHOLD);
        let above = encode(ENCODE_THRESHOLD + 1.0e-12);
        assert_component_eq!(below, above, 1.0e-7);
    }

    #[test]
    fn negative_values_keep_their_sign() {
        for value in [-0.001, -0.02, -0.5, -1.2] {
            let encoded = encode(value);
            assert!(encoded.is_finite());
            assert_eq!(encoded, -encode(-value));

            let decoded = decode(value);
            assert!(decoded.is_finite());
            assert_eq!(decoded, -decode(-value));
        }
    }

    #[test]
    fn encode_reverses_decode() {
        for i in 0..=255 {
            let value = i as Component / 255.0;
            assert_component_eq!(encode(decode(value)), value, 1.0e-12);
        }
    }
}
