//! Sample one-dimensional gradients between two sRGB endpoints,
//! interpolated in any of the supported color spaces.

use thiserror::Error;

use crate::{
    color::{Component, Components, Space},
    convert::convert,
};

/// A gradient request that fails validation cannot produce a meaningful
/// result -- these are returned instead of substituting defaults.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GradientError {
    /// The quantization level must lie in `(0, 1]`.
    #[error("quantization level must be in (0, 1], got {0}")]
    QuantizationOutOfRange(Component),
    /// The sample width must be at least one pixel.
    #[error("gradient width must be at least 1")]
    ZeroWidth,
}

/// The number of discrete bands a gradient quantized with level `q < 1`
/// falls into. Diverges as `q` approaches 1.
fn step_count(q: Component) -> Component {
    (2.0 / (1.0 - q.cbrt())).round()
}

/// Sample a `width`-long row of sRGB triplets fading from `a` to `b`,
/// interpolated in the native coordinates of `space`.
///
/// `q` is the quantization level: 1 renders a continuous gradient, smaller
/// values snap the gradient into fewer, coarser bands.
///
/// Channels in the returned row are rounded to the nearest integer but not
/// clamped; interpolants that leave the sRGB gamut can land outside 0..=255.
/// Rendering the row into a two-dimensional buffer is the caller's job, by
/// repeating it for every output line.
pub fn sample_gradient(
    a: [u8; 3],
    b: [u8; 3],
    space: Space,
    q: Component,
    width: usize,
) -> Result<Vec<Components>, GradientError> {
    // NaN fails the first comparison and is rejected along with q <= 0.
    if !(q > 0.0 && q <= 1.0) {
        return Err(GradientError::QuantizationOutOfRange(q));
    }
    if width < 1 {
        return Err(GradientError::ZeroWidth);
    }

    let a = convert(srgb_components(a), Space::Srgb, space);
    let b = convert(srgb_components(b), Space::Srgb, space);

    // q == 1 must bypass the step count entirely; it diverges there.
    let n_steps = if q < 1.0 { Some(step_count(q)) } else { None };

    let mut row = Vec::with_capacity(width);
    for x in 0..width {
        let t = if width == 1 {
            0.0
        } else {
            x as Component / (width - 1) as Component
        };
        // Snap to the nearest lower quantization boundary.
        let t = match n_steps {
            Some(n) => ((t * (n + 1.0)).floor() / n).min(1.0),
            None => t,
        };
        // Converting out of sRGB already rounds, but interpolating in sRGB
        // itself never leaves the space, so round here unconditionally.
        row.push(convert(a.lerp(&b, t), space, Space::Srgb).map(Component::round));
    }

    Ok(row)
}

fn srgb_components(c: [u8; 3]) -> Components {
    Components(
        c[0] as Component,
        c[1] as Component,
        c[2] as Component,
    )
}
