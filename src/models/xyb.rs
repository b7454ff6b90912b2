//! Model a color in the XYB color space, the internal color model of the
//! JPEG-XL codec.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
    transfer::{xyb_cbrt, xyb_cbrt_inv},
};

#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
    0.3739,  0.6896, -0.0413,
    0.0792,  0.9286, -0.0035,
    0.6212, -0.1027,  0.4704,
);

#[rustfmt::skip]
const LMS_TO_XYB: Transform = transform_3x3(
    0.5, -0.5, 0.0,
    0.5,  0.5, 0.0,
    0.0,  0.0, 1.0,
);

#[rustfmt::skip]
const XYB_TO_LMS: Transform = transform_3x3(
     1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0,
     0.0, 0.0, 1.0,
);

#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
     2.7253, -1.9993,  0.2245,
    -0.2462,  1.2585, -0.0122,
    -3.6527,  2.9148,  1.8268,
);

gradia_macros::gen_model! {
    /// A model for a color in the XYB color space.
    pub struct Xyb {
        /// The X (red-green opponent) component.
        pub x: Component,
        /// The Y (luminance-like) component.
        pub y: Component,
        /// The B (blue) component.
        pub b: Component,
    }
}

impl HasSpace for Xyb {
    const SPACE: Space = Space::Xyb;
}

impl From<Xyz> for Xyb {
    fn from(value: Xyz) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(xyb_cbrt);
        transform(&LMS_TO_XYB, lms).into()
    }
}

impl ToXyz for Xyb {
    fn to_xyz(&self) -> Xyz {
        let lms = transform(&XYB_TO_LMS, self.to_components());
        let lms = lms.map(xyb_cbrt_inv);
        transform(&LMS_TO_XYZ, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn black_is_the_origin() {
        let xyb = Xyb::from(Xyz::new(0.0, 0.0, 0.0));
        assert_component_eq!(xyb.x, 0.0, 1.0e-4);
        assert_component_eq!(xyb.y, 0.0, 1.0e-4);
        assert_component_eq!(xyb.b, 0.0, 1.0e-4);
    }

    #[test]
    fn xyz_round_trips_through_xyb() {
        let xyz = Xyz::new(0.3183, 0.2390, 0.0416);
        let back = Xyb::from(xyz.clone()).to_xyz();
        assert_component_eq!(back.x, xyz.x, 1.0e-3);
        assert_component_eq!(back.y, xyz.y, 1.0e-3);
        assert_component_eq!(back.z, xyz.z, 1.0e-3);
    }
}
