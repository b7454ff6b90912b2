//! A color conversion engine and gradient sampler.
//!
//! Colors are carried as untyped [`Color`] values tagged with a [`Space`].
//! Each supported space also has a strongly typed model in [`models`] that
//! knows how to reach the CIE-XYZ (D65) hub, so any space can be converted
//! to any other in at most two hops.
//!
//! ```rust
//! use gradia::{Color, Space};
//!
//! let chocolate = Color::new(Space::Srgb, 210.0, 105.0, 30.0);
//! let oklab = chocolate.to_space(Space::Oklab);
//! assert_eq!(oklab.space, Space::Oklab);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod gradient;
mod math;
pub mod models;
mod transfer;

#[cfg(test)]
mod test;

pub use color::{Color, Component, Components, HasSpace, Space};
pub use convert::convert;
pub use gradient::{sample_gradient, GradientError};
