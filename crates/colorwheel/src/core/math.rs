use crate::color::limits::{LAB_AB_MAX, LAB_AB_MIN, REF_X, REF_Y, REF_Z};
use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}

// --------------------------------------------------------------------------------------------------------------------

/// Clamp the value to the closed range, mapping not-a-number to the fallback.
#[inline]
fn clamp_or(value: Float, min: Float, max: Float, fallback: Float) -> Float {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Sanitize a percentile channel such as saturation, lightness, value, or
/// one of the CMYK channels. The result ranges `0..=100`.
#[inline]
pub fn sanitize_percentile(value: Float) -> Float {
    clamp_or(value, 0.0, 100.0, 0.0)
}

/// Sanitize a hue. The result ranges `0..360`.
///
/// Finite hues wrap around the color wheel, so that `-30` becomes `330` and
/// `720` becomes `0`. Not-a-number and infinite hues become `0`.
pub fn sanitize_radial(value: Float) -> Float {
    if !value.is_finite() {
        return 0.0;
    }

    // rem_euclid() rounds tiny negative numbers up to 360.
    let hue = value.rem_euclid(360.0);
    if hue < 360.0 {
        hue
    } else {
        0.0
    }
}

/// Sanitize an RGB channel. The result is an integral number `0..=255`.
#[inline]
pub fn sanitize_byte(value: Float) -> Float {
    clamp_or(value.round(), 0.0, 255.0, 0.0)
}

/// Sanitize an alpha channel. The result ranges `0..=1`. Not-a-number
/// becomes fully opaque.
#[inline]
pub fn sanitize_alpha(value: Float) -> Float {
    clamp_or(value, 0.0, 1.0, 1.0)
}

/// Sanitize CIELAB's lightness L. The result ranges `0..=100`.
#[inline]
pub fn sanitize_lab_l(value: Float) -> Float {
    clamp_or(value, 0.0, 100.0, 0.0)
}

/// Sanitize one of CIELAB's a and b axes. The axes have no theoretical
/// bounds but this crate limits them to the practical range
/// [`LAB_AB_MIN`]`..=`[`LAB_AB_MAX`].
#[inline]
pub fn sanitize_lab_ab(value: Float) -> Float {
    clamp_or(value, LAB_AB_MIN, LAB_AB_MAX, 0.0)
}

/// Sanitize XYZ's x. The result ranges `0..=`[`REF_X`].
#[inline]
pub fn sanitize_xyz_x(value: Float) -> Float {
    clamp_or(value, 0.0, REF_X, 0.0)
}

/// Sanitize XYZ's y. The result ranges `0..=`[`REF_Y`].
#[inline]
pub fn sanitize_xyz_y(value: Float) -> Float {
    clamp_or(value, 0.0, REF_Y, 0.0)
}

/// Sanitize XYZ's z. The result ranges `0..=`[`REF_Z`].
#[inline]
pub fn sanitize_xyz_z(value: Float) -> Float {
    clamp_or(value, 0.0, REF_Z, 0.0)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a linear sRGB channel `0..=1` to its gamma-corrected form using
/// sRGB's transfer function.
#[inline]
pub fn apply_gamma_correction(value: Float) -> Float {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

/// Convert a gamma-corrected sRGB channel `0..=1` to its linear form using
/// sRGB's transfer function.
#[inline]
pub fn remove_gamma_correction(value: Float) -> Float {
    if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Interpolate one RGB channel for HSL to RGB conversion.
///
/// The hue `t` is a fraction of the full circle offset by the channel's
/// primary, i.e., `h + 1/3` for red, `h` for green, and `h - 1/3` for blue.
/// `p` and `q` are the two interpolation points derived from saturation and
/// lightness.
pub fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ====================================================================================================================
