//! Model a color in the SRLAB2 color space, a CIE-Lab-like space with
//! revised chromatic adaptation matrices.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
    transfer::{srlab2_f, srlab2_f_inv},
};

#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.4240,  0.6933, -0.0884,
    -0.2037,  1.1537,  0.0367,
    -0.0008, -0.0010,  0.9199,
);

#[rustfmt::skip]
const LMS_TO_LAB: Transform = transform_3x3(
     37.0950,   62.9054,   -0.0008,
    663.4684, -750.5078,   87.0328,
     63.9569,  108.4576, -172.4152,
);

#[rustfmt::skip]
const LAB_TO_LMS: Transform = transform_3x3(
    0.01,  0.000904127,  0.000456344,
    0.01, -0.000533159, -0.000269178,
    0.01,  0.0,         -0.0058,
);

#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
    1.8307, -1.1000,  0.2198,
    0.3231,  0.6726,  0.0042,
    0.0019, -0.0002,  1.0873,
);

gradia_macros::gen_model! {
    /// A model for a color in the SRLAB2 color space.
    pub struct Srlab2 {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

impl HasSpace for Srlab2 {
    const SPACE: Space = Space::Srlab2;
}

impl From<Xyz> for Srlab2 {
    fn from(value: Xyz) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(srlab2_f);
        transform(&LMS_TO_LAB, lms).into()
    }
}

impl ToXyz for Srlab2 {
    fn to_xyz(&self) -> Xyz {
        let lms = transform(&LAB_TO_LMS, self.to_components());
        let lms = lms.map(srlab2_f_inv);
        transform(&LMS_TO_XYZ, lms).into()
    }
}
