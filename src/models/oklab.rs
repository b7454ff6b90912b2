//! Model a color in the Oklab color space.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
};

// From the Oklab article, rounded to 4 decimals.
#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
    0.8189, 0.3619, -0.1289,
    0.0330, 0.9293,  0.0361,
    0.0482, 0.2644,  0.6339,
);

#[rustfmt::skip]
const LMS_TO_OKLAB: Transform = transform_3x3(
    0.2105,  0.7936, -0.0041,
    1.9780, -2.4286,  0.4506,
    0.0259,  0.7828, -0.8087,
);

#[rustfmt::skip]
const OKLAB_TO_LMS: Transform = transform_3x3(
    1.0,  0.3963,  0.2158,
    1.0, -0.1056, -0.0639,
    1.0, -0.0895, -1.2915,
);

#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
     1.2270, -0.5578,  0.2813,
    -0.0406,  1.1123, -0.0717,
    -0.0764, -0.4215,  1.5862,
);

gradia_macros::gen_model! {
    /// A model for a color in the Oklab color space.
    pub struct Oklab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl HasSpace for Oklab {
    const SPACE: Space = Space::Oklab;
}

impl From<Xyz> for Oklab {
    fn from(value: Xyz) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl ToXyz for Oklab {
    fn to_xyz(&self) -> Xyz {
        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_XYZ, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_is_unit_lightness_with_no_chroma() {
        let lab = Oklab::from(Xyz::new(0.9505, 1.0, 1.089));
        assert_component_eq!(lab.lightness, 1.0, 1.0e-3);
        assert_component_eq!(lab.a, 0.0, 1.0e-3);
        assert_component_eq!(lab.b, 0.0, 1.0e-3);
    }

    #[test]
    fn xyz_round_trips_through_oklab() {
        let xyz = Xyz::new(0.3183, 0.2390, 0.0416);
        let back = Oklab::from(xyz.clone()).to_xyz();
        assert_component_eq!(back.x, xyz.x, 1.0e-3);
        assert_component_eq!(back.y, xyz.y, 1.0e-3);
        assert_component_eq!(back.z, xyz.z, 1.0e-3);
    }
}
