//! Model a color in the ICtCp color space, built on the PQ (ST-2084)
//! transfer function.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
    transfer::{pq_eotf, pq_eotf_inv},
};

// Dolby ICtCp white paper, rounded to 4 decimals.
#[rustfmt::skip]
const XYZ_TO_LMS: Transform = transform_3x3(
     0.3593, 0.6976, -0.0359,
    -0.1921, 1.1005,  0.0754,
     0.0071, 0.0748,  0.8433,
);

#[rustfmt::skip]
const LMS_TO_ITP: Transform = transform_3x3(
    0.5000,  0.5000,  0.0000,
    1.6138, -3.3235,  1.7097,
    4.3782, -4.2456, -0.1326,
);

#[rustfmt::skip]
const ITP_TO_LMS: Transform = transform_3x3(
    1.0,  0.0086,  0.1110,
    1.0, -0.0086, -0.1110,
    1.0,  0.5600, -0.3206,
);

#[rustfmt::skip]
const LMS_TO_XYZ: Transform = transform_3x3(
     2.0703, -1.3265,  0.2067,
     0.3647,  0.6806, -0.0453,
    -0.0498, -0.0492,  1.1881,
);

gradia_macros::gen_model! {
    /// A model for a color in the ICtCp color space.
    pub struct Ictcp {
        /// The intensity component.
        pub intensity: Component,
        /// The blue-yellow (tritan) chroma component.
        pub ct: Component,
        /// The red-green (protan) chroma component.
        pub cp: Component,
    }
}

impl HasSpace for Ictcp {
    const SPACE: Space = Space::Ictcp;
}

impl From<Xyz> for Ictcp {
    fn from(value: Xyz) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(pq_eotf_inv);
        transform(&LMS_TO_ITP, lms).into()
    }
}

impl ToXyz for Ictcp {
    fn to_xyz(&self) -> Xyz {
        let lms = transform(&ITP_TO_LMS, self.to_components());
        let lms = lms.map(pq_eotf);
        transform(&LMS_TO_XYZ, lms).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_has_no_chroma() {
        let itp = Ictcp::from(Xyz::new(0.9505, 1.0, 1.089));
        assert_component_eq!(itp.intensity, 0.579135, 1.0e-3);
        assert_component_eq!(itp.ct, 0.0, 1.0e-3);
        assert_component_eq!(itp.cp, 0.0, 1.0e-3);
    }

    #[test]
    fn xyz_round_trips_through_ictcp() {
        let xyz = Xyz::new(0.3183, 0.2390, 0.0416);
        let back = Ictcp::from(xyz.clone()).to_xyz();
        assert_component_eq!(back.x, xyz.x, 1.0e-3);
        assert_component_eq!(back.y, xyz.y, 1.0e-3);
        assert_component_eq!(back.z, xyz.z, 1.0e-3);
    }
}
