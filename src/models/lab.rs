//! Model a color in the CIE-Lab color space.

use crate::{
    color::{Component, HasSpace, Space},
    models::xyz::{ToXyz, Xyz, D65_WHITE},
    transfer::{cielab_f, cielab_f_inv},
};

gradia_macros::gen_model! {
    /// A model for a color in the CIE-Lab color space.
    pub struct Cielab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl HasSpace for Cielab {
    const SPACE: Space = Space::Cielab;
}

impl From<Xyz> for Cielab {
    fn from(value: Xyz) -> Self {
        // Normalizing straight against the white point is the "wrong von
        // Kries" transformation, faithful to the CIE specification.
        let f0 = cielab_f(value.x / D65_WHITE.0);
        let f1 = cielab_f(value.y / D65_WHITE.1);
        let f2 = cielab_f(value.z / D65_WHITE.2);

        Self::new(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
    }
}

impl ToXyz for Cielab {
    fn to_xyz(&self) -> Xyz {
        let l = (self.lightness + 16.0) / 116.0;

        Xyz::new(
            D65_WHITE.0 * cielab_f_inv(l + self.a / 500.0),
            cielab_f_inv(l),
            D65_WHITE.2 * cielab_f_inv(l - self.b / 200.0),
        )
    }
}
