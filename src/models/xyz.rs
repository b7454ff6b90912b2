//! Model a color in the CIE-XYZ color space with a D65 white point, the
//! interchange hub every other model converts through.

use crate::color::{Component, Components, HasSpace, Space};

/// The D65 reference white, at the 4-decimal precision the conversion
/// matrices are fixed to.
pub const D65_WHITE: Components = Components(0.9505, 1.0, 1.0888);

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

gradia_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space. These are also the
    /// native coordinates of [`Space::Linear`].
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl HasSpace for Xyz {
    const SPACE: Space = Space::Linear;
}

impl ToXyz for Xyz {
    fn to_xyz(&self) -> Xyz {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn both_directions_are_the_identity() {
        let xyz = Xyz::new(0.25, 0.5, -0.125);
        assert_eq!(xyz.to_xyz().to_components(), xyz.to_components());

        let color = xyz.to_color();
        assert_eq!(color.space, Space::Linear);
        assert_eq!(color.components, Components(0.25, 0.5, -0.125));
        assert_eq!(
            Xyz::to_model(&color).to_components(),
            Components(0.25, 0.5, -0.125)
        );
    }
}
