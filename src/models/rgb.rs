//! Model a color in the sRGB color space, with the 8-bit encoding as its
//! native coordinates.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz},
    transfer::{srgb_eotf, srgb_eotf_inv},
};

// Wikipedia sRGB article, rounded to 4 decimals.
#[rustfmt::skip]
const SRGB_TO_XYZ: Transform = transform_3x3(
    0.4124, 0.3576, 0.1805,
    0.2126, 0.7152, 0.0722,
    0.0193, 0.1192, 0.9505,
);

#[rustfmt::skip]
const XYZ_TO_SRGB: Transform = transform_3x3(
     3.2410, -1.5374, -0.4986,
    -0.9692,  1.8760,  0.0416,
     0.0556, -0.2040,  1.0570,
);

gradia_macros::gen_model! {
    /// A model for a color in the sRGB color space. Channels hold the 8-bit
    /// encoding, so the in-gamut range is 0..=255.
    pub struct Srgb {
        /// The red channel.
        pub red: Component,
        /// The green channel.
        pub green: Component,
        /// The blue channel.
        pub blue: Component,
    }
}

impl HasSpace for Srgb {
    const SPACE: Space = Space::Srgb;
}

impl ToXyz for Srgb {
    fn to_xyz(&self) -> Xyz {
        let linear = self.to_components().map(|v| srgb_eotf(v / 255.0));
        transform(&SRGB_TO_XYZ, linear).into()
    }
}

impl From<Xyz> for Srgb {
    /// Channels are rounded to the nearest integer. Out-of-gamut XYZ values
    /// produce channels outside 0..=255; they are not clamped here.
    fn from(value: Xyz) -> Self {
        let linear = transform(&XYZ_TO_SRGB, value.to_components());
        linear.map(|v| (255.0 * srgb_eotf_inv(v)).round()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_maps_to_the_d65_white_point() {
        let xyz = Srgb::new(255.0, 255.0, 255.0).to_xyz();
        assert!((xyz.x - 0.9505).abs() < 1.0e-4);
        assert!((xyz.y - 1.0).abs() < 1.0e-4);
        assert!((xyz.z - 1.089).abs() < 1.0e-3);
    }

    #[test]
    fn primaries_round_trip_through_xyz() {
        for c in [
            (255.0, 0.0, 0.0),
            (0.0, 0.0, 255.0),
            (255.0, 255.0, 255.0),
            (0.0, 0.0, 0.0),
            (128.0, 128.0, 128.0),
        ] {
            let back = Srgb::from(Srgb::new(c.0, c.1, c.2).to_xyz());
            assert!((back.red - c.0).abs() <= 1.0);
            assert!((back.green - c.1).abs() <= 1.0);
            assert!((back.blue - c.2).abs() <= 1.0);
        }
    }

    #[test]
    fn out_of_gamut_xyz_is_not_clamped() {
        // Well above the white point in every channel.
        let srgb = Srgb::from(Xyz::new(1.2, 1.3, 1.2));
        assert!(srgb.red > 255.0 || srgb.green > 255.0 || srgb.blue > 255.0);
    }
}
