//! Model a color in the IPT color space.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
    transfer::{ipt_curve, ipt_curve_inv},
};

#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.4002, 0.7075, -0.0807,
    -0.2280, 1.1500,  0.0612,
     0.0000, 0.0000,  0.9184,
);

#[rustfmt::skip]
const LMS_TO_IPT: Transform = transform_3x3(
    0.4000,  0.4000,  0.2000,
    4.4550, -4.8510,  0.3960,
    0.8056,  0.3572, -1.1628,
);

#[rustfmt::skip]
const IPT_TO_LMS: Transform = transform_3x3(
    1.0,  0.0976,  0.2052,
    1.0, -0.1139,  0.1332,
    1.0,  0.0326, -0.6769,
);

#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
    1.8502, -1.1383,  0.2384,
    0.3668,  0.6439, -0.0107,
    0.0000,  0.0000,  1.0889,
);

gradia_macros::gen_model! {
    /// A model for a color in the IPT color space.
    pub struct Ipt {
        /// The intensity component.
        pub intensity: Component,
        /// The red-green (protan) component.
        pub p: Component,
        /// The blue-yellow (tritan) component.
        pub t: Component,
    }
}

impl HasSpace for Ipt {
    const SPACE: Space = Space::Ipt;
}

impl From<Xyz> for Ipt {
    fn from(value: Xyz) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(ipt_curve);
        transform(&LMS_TO_IPT, lms).into()
    }
}

impl ToXyz for Ipt {
    fn to_xyz(&self) -> Xyz {
        let lms = transform(&IPT_TO_LMS, self.to_components());
        let lms = lms.map(ipt_curve_inv);
        transform(&LMS_TO_XYZ, lms).into()
    }
}
