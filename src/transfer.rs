//! Scalar transfer functions shared by the color space models. Each curve
//! reproduces its published reference, with a single branch at a fixed
//! threshold.

use crate::color::Component;

/// The sRGB electro-optical transfer function; encoded signal in [0, 1] to
/// linear light.
pub(crate) fn srgb_eotf(u: Component) -> Component {
    if u < 0.04045 {
        u / 12.92
    } else {
        ((u + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_eotf`]. Negative inputs fall into the linear segment
/// and stay finite.
pub(crate) fn srgb_eotf_inv(u: Component) -> Component {
    if u < 0.0031308 {
        u * 12.92
    } else {
        1.055 * u.powf(1.0 / 2.4) - 0.055
    }
}

const LAB_DELTA: Component = 6.0 / 29.0;

/// The CIE-Lab `f` function.
pub(crate) fn cielab_f(t: Component) -> Component {
    if t < LAB_DELTA * LAB_DELTA * LAB_DELTA {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    } else {
        t.cbrt()
    }
}

/// Inverse of [`cielab_f`].
pub(crate) fn cielab_f_inv(t: Component) -> Component {
    if t < LAB_DELTA {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    } else {
        t * t * t
    }
}

// Algebraically these are the CIE-Lab pair up to scaling, but they are kept
// in the form the SRLAB2 derivation publishes them in.

/// The SRLAB2 `f` function.
pub(crate) fn srlab2_f(t: Component) -> Component {
    if t < 216.0 / 24389.0 {
        t * (24389.0 / 2700.0)
    } else {
        1.16 * t.cbrt() - 0.16
    }
}

/// Inverse of [`srlab2_f`].
pub(crate) fn srlab2_f_inv(t: Component) -> Component {
    if t < 0.08 {
        t * (2700.0 / 24389.0)
    } else {
        let v = (t + 0.16) / 1.16;
        v * v * v
    }
}

// ST-2084 constants.
const PQ_M1: Component = 2610.0 / 16384.0;
const PQ_M2: Component = 2523.0 / 4096.0 * 128.0;
const PQ_C2: Component = 2413.0 / 4096.0 * 32.0;
const PQ_C3: Component = 2392.0 / 4096.0 * 32.0;
const PQ_C1: Component = PQ_C3 - PQ_C2 + 1.0;

/// Peak luminance assumed by the PQ curve, in nits.
const PQ_PEAK_LUMINANCE: Component = 10000.0;

/// Luminance of the reference display, in nits. sRGB nominally specifies 80,
/// which is dimmer than typical SDR displays.
const PQ_DISPLAY_LUMINANCE: Component = 200.0;

/// Inverse of the PQ (ST-2084) EOTF; display-relative linear luminance to
/// the encoded signal. Negative luminance is treated as black.
pub(crate) fn pq_eotf_inv(n: Component) -> Component {
    let y = (n * PQ_DISPLAY_LUMINANCE / PQ_PEAK_LUMINANCE).max(0.0);
    let ym1 = y.powf(PQ_M1);
    ((PQ_C1 + PQ_C2 * ym1) / (1.0 + PQ_C3 * ym1)).powf(PQ_M2)
}

/// The PQ (ST-2084) EOTF; encoded signal to display-relative linear
/// luminance. The numerator is floored at zero so signals below the black
/// point decode to black instead of NaN.
pub(crate) fn pq_eotf(x: Component) -> Component {
    let v_p = x.max(0.0).powf(1.0 / PQ_M2);
    let n = (v_p - PQ_C1).max(0.0);
    let l = (n / (PQ_C2 - PQ_C3 * v_p)).powf(1.0 / PQ_M1);
    l * PQ_PEAK_LUMINANCE / PQ_DISPLAY_LUMINANCE
}

const IPT_EXPONENT: Component = 0.43;

/// The IPT power curve, with the signed-power convention so negative
/// out-of-gamut values stay finite.
pub(crate) fn ipt_curve(x: Component) -> Component {
    x.signum() * x.abs().powf(IPT_EXPONENT)
}

/// Inverse of [`ipt_curve`].
pub(crate) fn ipt_curve_inv(x: Component) -> Component {
    x.signum() * x.abs().powf(1.0 / IPT_EXPONENT)
}

/// Bias keeping the derivative of the XYB cube root finite near zero.
const XYB_BIAS: Component = 0.00379307;

/// The biased cube root used by XYB.
pub(crate) fn xyb_cbrt(x: Component) -> Component {
    (x + XYB_BIAS).cbrt() - XYB_BIAS.cbrt()
}

/// Inverse of [`xyb_cbrt`].
pub(crate) fn xyb_cbrt_inv(x: Component) -> Component {
    let v = x + XYB_BIAS.cbrt();
    v * v * v - XYB_BIAS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn srgb_eotf_round_trips_across_the_threshold() {
        for u in [0.0, 0.001, 0.0031, 0.04, 0.05, 0.5, 1.0] {
            assert_component_eq!(srgb_eotf_inv(srgb_eotf(u)), u);
        }
    }

    #[test]
    fn cielab_f_round_trips_across_the_threshold() {
        for t in [0.0, 0.004, 0.008, 0.009, 0.1, 0.5, 1.0] {
            assert_component_eq!(cielab_f_inv(cielab_f(t)), t);
        }
    }

    #[test]
    fn srlab2_f_round_trips_across_the_threshold() {
        for t in [0.0, 0.004, 0.008, 0.009, 0.1, 0.5, 1.0] {
            assert_component_eq!(srlab2_f_inv(srlab2_f(t)), t);
        }
    }

    #[test]
    fn pq_round_trips_on_the_signal_range() {
        for n in [0.0, 0.01, 0.1, 0.5, 1.0, 5.0] {
            assert_component_eq!(pq_eotf(pq_eotf_inv(n)), n, 1.0e-3);
        }
    }

    #[test]
    fn pq_decodes_out_of_range_signals_to_black() {
        assert_eq!(pq_eotf(-0.25), 0.0);
        assert_eq!(pq_eotf_inv(-1.0), pq_eotf_inv(0.0));
    }

    #[test]
    fn ipt_curve_is_odd_and_invertible() {
        for x in [0.0, 0.2, 0.9, 1.0] {
            assert_component_eq!(ipt_curve_inv(ipt_curve(x)), x);
            assert_component_eq!(ipt_curve(-x), -ipt_curve(x));
        }
    }

    #[test]
    fn xyb_cbrt_round_trips_including_negatives() {
        for x in [-0.1, -0.001, 0.0, 0.0005, 0.1, 1.0] {
            assert_component_eq!(xyb_cbrt_inv(xyb_cbrt(x)), x);
        }
    }

    #[test]
    fn xyb_cbrt_is_zero_at_zero() {
        assert_component_eq!(xyb_cbrt(0.0), 0.0);
    }
}
