/// Check for equality between two components allowing for small rounding
/// errors. An explicit epsilon widens the tolerance for components on larger
/// scales, like the 0..=100 CIE-Lab lightness axis.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0 / i16::MAX as $crate::Component);
    }};
    ($actual:expr,$expected:expr,$epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
