//! Conversions between color spaces, composed through the CIE-XYZ hub.
//!
//! Every model knows how to convert itself to XYZ and back, so a conversion
//! between any two spaces is at most two hops: into XYZ, out of XYZ.

use crate::{
    color::{Color, Components, Space},
    models::{Cielab, Ictcp, Ipt, Model, Oklab, Srgb, Srlab2, ToXyz, Xyb, Xyz},
};

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space == space {
            return self.clone();
        }

        macro_rules! to_xyz {
            ($m:ident) => {{
                $m::to_model(self).to_xyz()
            }};
        }

        let xyz = match self.space {
            S::Srgb => to_xyz!(Srgb),
            S::Cielab => to_xyz!(Cielab),
            S::Oklab => to_xyz!(Oklab),
            S::Ictcp => to_xyz!(Ictcp),
            S::Ipt => to_xyz!(Ipt),
            S::Xyb => to_xyz!(Xyb),
            S::Srlab2 => to_xyz!(Srlab2),
            S::Linear => to_xyz!(Xyz),
        };

        match space {
            S::Srgb => Srgb::from(xyz).to_color(),
            S::Cielab => Cielab::from(xyz).to_color(),
            S::Oklab => Oklab::from(xyz).to_color(),
            S::Ictcp => Ictcp::from(xyz).to_color(),
            S::Ipt => Ipt::from(xyz).to_color(),
            S::Xyb => Xyb::from(xyz).to_color(),
            S::Srlab2 => Srlab2::from(xyz).to_color(),
            S::Linear => xyz.to_color(),
        }
    }
}

/// Convert native color coordinates from one color space to another,
/// composed through XYZ.
pub fn convert(components: Components, from: Space, to: Space) -> Components {
    Color { components, space: from }.to_space(to).components
}
