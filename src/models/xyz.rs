//! Model a color in the CIE-XYZ color space.

use crate::color::Component;

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

chromadelta_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the D65
    /// reference white.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color, the luminance.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;
    use crate::models::Model;

    #[test]
    fn components_round_trip() {
        let xyz = Xyz::new(0.1, 0.2, 0.3);
        let components: Components = xyz.into();
        assert_eq!(components, Components(0.1, 0.2, 0.3));
        assert_eq!(Xyz::from(components), xyz);
    }

    #[test]
    fn name_and_display() {
        assert_eq!(Xyz::NAME, "xyz");
        assert_eq!(format!("{:.1}", Xyz::new(0.3, 1.0, 0.0)), "xyz(0.3, 1.0, 0.0)");
    }
}
