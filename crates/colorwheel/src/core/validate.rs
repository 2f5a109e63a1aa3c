use crate::color::limits::{LAB_AB_MAX, LAB_AB_MIN, REF_X, REF_Y, REF_Z};
use crate::{Cmyk, Color, Float, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};

#[inline]
fn is_within(value: Float, min: Float, max: Float) -> bool {
    value.is_finite() && min <= value && value <= max
}

/// Determine whether the value is a valid percentile `0..=100`.
#[inline]
pub fn is_percentile(value: Float) -> bool {
    is_within(value, 0.0, 100.0)
}

/// Determine whether the value is a valid hue `0..360`.
#[inline]
pub fn is_radial(value: Float) -> bool {
    value.is_finite() && 0.0 <= value && value < 360.0
}

/// Determine whether the value is a valid RGB channel `0..=255`.
#[inline]
pub fn is_byte(value: Float) -> bool {
    is_within(value, 0.0, 255.0)
}

/// Determine whether the value is a valid alpha `0..=1`.
#[inline]
pub fn is_alpha(value: Float) -> bool {
    is_within(value, 0.0, 1.0)
}

/// Determine whether the value is a valid CIELAB a or b.
#[inline]
pub fn is_lab_ab(value: Float) -> bool {
    is_within(value, LAB_AB_MIN, LAB_AB_MAX)
}

/// Determine whether the string is a hashed hexadecimal color with six or
/// eight digits. Case does not matter.
pub fn is_hex_string(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        (digits.len() == 6 || digits.len() == 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the CMYK record is valid.
pub fn is_valid_cmyk(color: &Cmyk) -> bool {
    is_percentile(color.cyan)
        && is_percentile(color.magenta)
        && is_percentile(color.yellow)
        && is_percentile(color.key)
        && is_alpha(color.alpha)
}

/// Determine whether the hexadecimal record is valid.
///
/// Besides a well-formed `hex` string, the `alpha` digits and the numeric
/// `num_alpha` must agree. If `hex` includes alpha digits, they must match
/// `alpha`, too.
pub fn is_valid_hex(color: &Hex) -> bool {
    if !is_hex_string(&color.hex) || !is_alpha(color.num_alpha) {
        return false;
    }

    if color.alpha.len() != 2 || !color.alpha.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    let Ok(alpha_byte) = u8::from_str_radix(&color.alpha, 16) else {
        return false;
    };
    if (color.num_alpha * 255.0).round() != alpha_byte as Float {
        return false;
    }

    // The hex string is all ASCII, so slicing at byte offsets is safe.
    color.hex.len() == 7 || color.hex[7..].eq_ignore_ascii_case(&color.alpha)
}

/// Determine whether the HSL record is valid.
pub fn is_valid_hsl(color: &Hsl) -> bool {
    is_radial(color.hue)
        && is_percentile(color.saturation)
        && is_percentile(color.lightness)
        && is_alpha(color.alpha)
}

/// Determine whether the HSV record is valid.
pub fn is_valid_hsv(color: &Hsv) -> bool {
    is_radial(color.hue)
        && is_percentile(color.saturation)
        && is_percentile(color.value)
        && is_alpha(color.alpha)
}

/// Determine whether the CIELAB record is valid.
pub fn is_valid_lab(color: &Lab) -> bool {
    is_percentile(color.l) && is_lab_ab(color.a) && is_lab_ab(color.b) && is_alpha(color.alpha)
}

/// Determine whether the RGB record is valid.
pub fn is_valid_rgb(color: &Rgb) -> bool {
    is_byte(color.red) && is_byte(color.green) && is_byte(color.blue) && is_alpha(color.alpha)
}

/// Determine whether the SL record is valid.
pub fn is_valid_sl(color: &Sl) -> bool {
    is_percentile(color.saturation) && is_percentile(color.lightness) && is_alpha(color.alpha)
}

/// Determine whether the SV record is valid.
pub fn is_valid_sv(color: &Sv) -> bool {
    is_percentile(color.saturation) && is_percentile(color.value) && is_alpha(color.alpha)
}

/// Determine whether the XYZ record is valid.
pub fn is_valid_xyz(color: &Xyz) -> bool {
    is_within(color.x, 0.0, REF_X)
        && is_within(color.y, 0.0, REF_Y)
        && is_within(color.z, 0.0, REF_Z)
        && is_alpha(color.alpha)
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! guard {
    ($name:ident, $variant:ident, $check:ident, $label:literal) => {
        #[doc = concat!("Determine whether the color is a valid ", $label, " color.")]
        pub fn $name(color: &Color) -> bool {
            matches!(color, Color::$variant(c) if $check(c))
        }
    };
}

guard!(is_cmyk_color, Cmyk, is_valid_cmyk, "CMYK");
guard!(is_hex_color, Hex, is_valid_hex, "hexadecimal");
guard!(is_hsl_color, Hsl, is_valid_hsl, "HSL");
guard!(is_hsv_color, Hsv, is_valid_hsv, "HSV");
guard!(is_lab_color, Lab, is_valid_lab, "CIELAB");
guard!(is_rgb_color, Rgb, is_valid_rgb, "RGB");
guard!(is_sl_color, Sl, is_valid_sl, "SL");
guard!(is_sv_color, Sv, is_valid_sv, "SV");
guard!(is_xyz_color, Xyz, is_valid_xyz, "XYZ");

/// Determine whether the color, whatever its format, is valid.
pub fn is_valid_color(color: &Color) -> bool {
    match color {
        Color::Cmyk(c) => is_valid_cmyk(c),
        Color::Hex(c) => is_valid_hex(c),
        Color::Hsl(c) => is_valid_hsl(c),
        Color::Hsv(c) => is_valid_hsv(c),
        Color::Lab(c) => is_valid_lab(c),
        Color::Rgb(c) => is_valid_rgb(c),
        Color::Sl(c) => is_valid_sl(c),
        Color::Sv(c) => is_valid_sv(c),
        Color::Xyz(c) => is_valid_xyz(c),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rgb;

    #[test]
    fn test_guards() {
        let red = rgb!(255, 0, 0);
        assert!(is_rgb_color(&red));
        assert!(!is_hsl_color(&red));
        assert!(!is_rgb_color(&rgb!(256, 0, 0)));
        assert!(!is_rgb_color(&rgb!(Float::NAN, 0, 0)));
        assert!(!is_rgb_color(&Color::Rgb(Rgb::new(0.0, 0.0, 0.0).with_alpha(1.5))));

        assert!(is_hsl_color(&Color::Hsl(Hsl::new(359.5, 100.0, 0.0))));
        assert!(!is_hsl_color(&Color::Hsl(Hsl::new(360.0, 100.0, 0.0))));
        assert!(!is_hsv_color(&Color::Hsv(Hsv::new(-1.0, 0.0, 0.0))));

        assert!(is_cmyk_color(&Color::Cmyk(Cmyk::new(0.0, 50.0, 100.0, 0.0))));
        assert!(!is_cmyk_color(&Color::Cmyk(Cmyk::new(0.0, 50.0, 100.1, 0.0))));

        assert!(is_lab_color(&Color::Lab(Lab::new(50.0, -125.0, 125.0))));
        assert!(!is_lab_color(&Color::Lab(Lab::new(50.0, -126.0, 0.0))));

        assert!(is_xyz_color(&Color::Xyz(Xyz::new(REF_X, REF_Y, REF_Z))));
        assert!(!is_xyz_color(&Color::Xyz(Xyz::new(0.0, 100.5, 0.0))));

        assert!(is_sl_color(&Color::Sl(Sl::new(10.0, 20.0))));
        assert!(is_sv_color(&Color::Sv(Sv::new(10.0, 20.0))));
        assert!(!is_sv_color(&Color::Sl(Sl::new(10.0, 20.0))));
    }

    #[test]
    fn test_hex() {
        assert!(is_hex_string("#00ff00"));
        assert!(is_hex_string("#00FF00CC"));
        assert!(!is_hex_string("00ff00"));
        assert!(!is_hex_string("#0f0"));
        assert!(!is_hex_string("#00ff0g"));
        assert!(!is_hex_string("#00ff00c"));

        let good = Hex::from_rgb(0, 255, 0, 0.8);
        assert!(is_hex_color(&Color::Hex(good.clone())));

        let short = Hex {
            hex: "#00ff00".to_string(),
            ..good.clone()
        };
        assert!(is_valid_hex(&short));

        let mismatched_digits = Hex {
            alpha: "FF".to_string(),
            ..good.clone()
        };
        assert!(!is_valid_hex(&mismatched_digits));

        let mismatched_number = Hex {
            num_alpha: 0.1,
            ..good
        };
        assert!(!is_valid_hex(&mismatched_number));
    }

    #[test]
    fn test_valid_color() {
        assert!(is_valid_color(&Color::default_for(crate::ColorFormat::Hex)));
        assert!(!is_valid_color(&Color::Sl(Sl::new(Float::INFINITY, 0.0))));
    }
}
