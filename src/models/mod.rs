//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! ```rust
//! use chromadelta::models::{Lab, Rgb8, ToXyz};
//!
//! let lch = Lab::from(
//!     Rgb8::new(0, 0, 255)
//!         .to_srgb()              // floating point sRGB.
//!         .to_linear_light()      // convert to srgb-linear.
//!         .to_xyz(),              // convert to xyz.
//! )
//! .to_polar();                    // convert to lch.
//!
//! assert!(lch.chroma > 100.0);
//! ```

use std::fmt;

use crate::color::Components;

mod lab;
mod rgb;
mod xyz;

pub use lab::*;
pub use rgb::*;
pub use xyz::*;

/// A trait implemented by all the floating point color models.
pub trait Model: Copy + Into<Components> + fmt::Display {
    /// Name of the model as used in CSS style function notation, e.g. `lab`.
    const NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_display_uses_name<M: Model>(model: M) {
        let text = model.to_string();
        assert!(
            text.starts_with(&format!("{}(", M::NAME)),
            "{text} does not start with {}",
            M::NAME
        );
    }

    #[test]
    fn names_drive_display() {
        assert_eq!(Srgb::NAME, "srgb");
        assert_eq!(SrgbLinear::NAME, "srgb-linear");
        assert_eq!(Lab::NAME, "lab");
        assert_eq!(Lch::NAME, "lch");

        assert_display_uses_name(Srgb::new(1.0, 0.5, 0.0));
        assert_display_uses_name(SrgbLinear::new(1.0, 0.5, 0.0));
        assert_display_uses_name(Xyz::new(0.95, 1.0, 1.09));
        assert_display_uses_name(Lab::new(50.0, 10.0, -10.0));
        assert_display_uses_name(Lch::new(50.0, 14.1, 315.0));
    }
}
