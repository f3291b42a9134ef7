//! Component storage shared by all the color models.

use bitflags::bitflags;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Returns true if none of the components are NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

bitflags! {
    /// A set of RGB channels, used to report which channels of a color fell
    /// outside of the displayable range.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Channels : u8 {
        /// The red channel.
        const RED = 1 << 0;
        /// The green channel.
        const GREEN = 1 << 1;
        /// The blue channel.
        const BLUE = 1 << 2;
    }
}

impl Channels {
    /// Build a set from a predicate evaluated on each of the three channels.
    pub fn from_predicate(values: [i32; 3], f: impl Fn(i32) -> bool) -> Self {
        let mut channels = Channels::empty();
        for (value, channel) in values.into_iter().zip([Self::RED, Self::GREEN, Self::BLUE]) {
            if f(value) {
                channels |= channel;
            }
        }
        channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(1.0, 2.0, 3.0).map(|v| v * 2.0);
        assert_eq!(c, Components(2.0, 4.0, 6.0));
    }

    #[test]
    fn finite_check() {
        assert!(Components(0.0, -1.0, 1.0e300).is_finite());
        assert!(!Components(0.0, Component::NAN, 0.0).is_finite());
        assert!(!Components(0.0, 0.0, Component::INFINITY).is_finite());
    }

    #[test]
    fn channels_from_predicate() {
        let outside = Channels::from_predicate([277, 12, -3], |v| !(0..=255).contains(&v));
        assert_eq!(outside, Channels::RED | Channels::BLUE);
        assert!(Channels::from_predicate([0, 128, 255], |v| v > 255).is_empty());
    }
}
