//! A [`Color`] holds three coordinates tagged with the color space they are
//! expressed in.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
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

    /// The elementwise affine combination of two sets of components. `t` is
    /// not clamped; values outside [0, 1] extrapolate.
    pub fn lerp(&self, other: &Self, t: Component) -> Self {
        Self(
            crate::math::lerp(self.0, other.0, t),
            crate::math::lerp(self.1, other.1, t),
            crate::math::lerp(self.2, other.2, t),
        )
    }
}

/// The color spaces a [`Color`] can be expressed in. All of them convert to
/// and from CIE-XYZ referenced to the D65 white point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space, with its 8-bit encoding as native coordinates,
    /// so the in-gamut channel range is 0..=255.
    Srgb = 0,
    /// The CIE-Lab color space.
    Cielab = 1,
    /// The Oklab color space.
    Oklab = 2,
    /// The ICtCp color space, built on the PQ (ST-2084) transfer function.
    Ictcp = 3,
    /// The IPT color space.
    Ipt = 4,
    /// The XYB color space originating from the JPEG-XL codec.
    Xyb = 5,
    /// The SRLAB2 color space.
    Srlab2 = 6,
    /// Raw CIE-XYZ coordinates; both conversion directions are the identity.
    Linear = 7,
}

/// Associate a color model with the [`Space`] its coordinates are expressed
/// in.
pub trait HasSpace {
    /// The color space of the model.
    const SPACE: Space;
}

/// A color triplet in any of the supported color spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up the color.
    pub components: Components,
    /// The color space in which the components are expressed.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] with the given components.
    pub fn new(space: Space, c0: Component, c1: Component, c2: Component) -> Self {
        Self {
            components: Components(c0, c1, c2),
            space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Oklab, 0.1, 0.2, 0.3);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.space, Space::Oklab);
    }

    #[test]
    fn lerp_reproduces_the_endpoints_exactly() {
        let a = Components(12.5, -3.0, 100.0);
        let b = Components(-7.25, 42.0, 0.5);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_extrapolates_outside_the_unit_interval() {
        let a = Components(0.0, 0.0, 0.0);
        let b = Components(1.0, 2.0, 4.0);
        assert_eq!(a.lerp(&b, 2.0), Components(2.0, 4.0, 8.0));
        assert_eq!(a.lerp(&b, -1.0), Components(-1.0, -2.0, -4.0));
    }
}
