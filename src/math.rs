//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 color conversion matrix.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the nine entries of a 3x3 matrix, given in the
/// row-major order the color science references publish them in. The entries
/// are transposed into euclid's row-vector layout, so [`transform`] computes
/// the usual matrix times column-vector product.
#[rustfmt::skip]
pub const fn transform_3x3(
    r11: Component, r12: Component, r13: Component,
    r21: Component, r22: Component, r23: Component,
    r31: Component, r32: Component, r33: Component,
) -> Transform {
    Transform::new(
        r11, r21, r31, 0.0,
        r12, r22, r32, 0.0,
        r13, r23, r33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(
        components.0,
        components.1,
        components.2,
    ));
    Components(x, y, z)
}

/// The affine combination `a + (b - a) * t`. `t` is not clamped; values
/// outside [0, 1] extrapolate.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_multiplies_rows_with_the_vector() {
        #[rustfmt::skip]
        const M: Transform = transform_3x3(
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
            7.0, 8.0, 9.0,
        );

        let result = transform(&M, Components(1.0, 0.5, -1.0));
        assert_eq!(result, Components(-1.0, 0.5, 2.0));
    }

    #[test]
    fn identity_transform_leaves_components_untouched() {
        #[rustfmt::skip]
        const I: Transform = transform_3x3(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        );

        let c = Components(0.25, -0.5, 1.5);
        assert_eq!(transform(&I, c), c);
    }

    #[test]
    fn lerp_hits_the_endpoints_exactly() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
    }
}
