//! Typed models for each supported color space. Each model implements
//! [`ToXyz`] and `From<Xyz>`, making CIE-XYZ the hub all conversions pass
//! through.

use crate::color::Color;

pub mod ictcp;
pub mod ipt;
pub mod lab;
pub mod oklab;
pub mod rgb;
pub mod srlab2;
pub mod xyb;
pub mod xyz;

pub use ictcp::Ictcp;
pub use ipt::Ipt;
pub use lab::Cielab;
pub use oklab::Oklab;
pub use rgb::Srgb;
pub use srlab2::Srlab2;
pub use xyb::Xyb;
pub use xyz::{ToXyz, Xyz};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model.
    fn to_model(color: &Color) -> Self;
}
