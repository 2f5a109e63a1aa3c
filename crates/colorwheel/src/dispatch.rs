//! Dispatching conversions by color format.
//!
//! [`CONVERSION_MAP`] is a table indexed by source and target
//! [`ColorFormat`]. Its entries wrap the record-level conversion functions,
//! so that they can be applied to [`Color`]s without knowing the formats at
//! compile time. [`conversion_fn`] looks up an entry, and
//! [`gen_all_color_values`] applies all entries for one source format.
//!
//! ```
//! # use colorwheel::{conversion_fn, rgb, Color, ColorFormat, Hsl};
//! let converter = conversion_fn(ColorFormat::Rgb, ColorFormat::Hsl)
//!     .expect("rgb converts to hsl");
//! let hsl = converter.convert(&rgb!(0, 255, 0));
//! assert_eq!(hsl, Color::Hsl(Hsl::new(120.0, 100.0, 50.0)));
//!
//! assert!(conversion_fn(ColorFormat::Xyz, ColorFormat::Hex).is_none());
//! ```

use std::collections::BTreeMap;

use crate::core::{hsl_to_sl, hsv_to_sv};
use crate::{Color, ColorFormat};

/// A function converting between two colors of fixed formats.
pub type ConversionFn = fn(&Color) -> Color;

/// The type of the conversion table.
pub type ConversionMap = [[Option<ConversionFn>; ColorFormat::COUNT]; ColorFormat::COUNT];

/// A color in every format reachable from some source color.
pub type ColorValues = BTreeMap<ColorFormat, Color>;

/// Log the mismatched color and return the target format's default.
#[cold]
fn mismatch(from: ColorFormat, to: ColorFormat, color: &Color) -> Color {
    log::warn!(
        "converter from {} to {} rejects {} color {:?} and returns default",
        from,
        to,
        color.format(),
        color
    );
    Color::default_for(to)
}

macro_rules! conversions {
    ($($conversion:ident: $from:ident => $to:ident;)*) => {
        mod adapt {
            use crate::{Color, ColorFormat};

            $(
                pub(super) fn $conversion(color: &Color) -> Color {
                    match color {
                        Color::$from(c) => Color::$to(crate::core::$conversion(c)),
                        _ => super::mismatch(ColorFormat::$from, ColorFormat::$to, color),
                    }
                }
            )*
        }

        const fn build_map() -> ConversionMap {
            let mut map: ConversionMap = [[None; ColorFormat::COUNT]; ColorFormat::COUNT];
            $(
                map[ColorFormat::$from.index()][ColorFormat::$to.index()] =
                    Some(adapt::$conversion as ConversionFn);
            )*
            map
        }
    };
}

conversions! {
    cmyk_to_hex: Cmyk => Hex;
    cmyk_to_hsl: Cmyk => Hsl;
    cmyk_to_hsv: Cmyk => Hsv;
    cmyk_to_lab: Cmyk => Lab;
    cmyk_to_rgb: Cmyk => Rgb;
    cmyk_to_xyz: Cmyk => Xyz;

    hex_to_cmyk: Hex => Cmyk;
    hex_to_hsl: Hex => Hsl;
    hex_to_hsv: Hex => Hsv;
    hex_to_lab: Hex => Lab;
    hex_to_rgb: Hex => Rgb;
    hex_to_xyz: Hex => Xyz;

    hsl_to_cmyk: Hsl => Cmyk;
    hsl_to_hex: Hsl => Hex;
    hsl_to_hsv: Hsl => Hsv;
    hsl_to_lab: Hsl => Lab;
    hsl_to_rgb: Hsl => Rgb;
    hsl_to_xyz: Hsl => Xyz;

    hsv_to_cmyk: Hsv => Cmyk;
    hsv_to_hex: Hsv => Hex;
    hsv_to_hsl: Hsv => Hsl;
    hsv_to_lab: Hsv => Lab;
    hsv_to_rgb: Hsv => Rgb;
    hsv_to_xyz: Hsv => Xyz;

    lab_to_cmyk: Lab => Cmyk;
    lab_to_hex: Lab => Hex;
    lab_to_hsl: Lab => Hsl;
    lab_to_hsv: Lab => Hsv;
    lab_to_rgb: Lab => Rgb;
    lab_to_xyz: Lab => Xyz;

    rgb_to_cmyk: Rgb => Cmyk;
    rgb_to_hex: Rgb => Hex;
    rgb_to_hsl: Rgb => Hsl;
    rgb_to_hsv: Rgb => Hsv;
    rgb_to_lab: Rgb => Lab;
    rgb_to_xyz: Rgb => Xyz;

    xyz_to_cmyk: Xyz => Cmyk;
    xyz_to_hsl: Xyz => Hsl;
    xyz_to_hsv: Xyz => Hsv;
    xyz_to_lab: Xyz => Lab;
    xyz_to_rgb: Xyz => Rgb;
}

/// The table of conversions, indexed by source and target format.
///
/// Entries for the same source and target format, for SL and SV, and for XYZ
/// to hexadecimal are `None`.
pub static CONVERSION_MAP: ConversionMap = build_map();

// --------------------------------------------------------------------------------------------------------------------

/// A conversion from one color format to another.
///
/// Converters are cheap to copy and hold no state besides the conversion
/// function. Every invocation of [`Converter::convert`] returns a new color.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    from: ColorFormat,
    to: ColorFormat,
    function: ConversionFn,
}

impl Converter {
    /// Get the source format.
    pub const fn source(&self) -> ColorFormat {
        self.from
    }

    /// Get the target format.
    pub const fn target(&self) -> ColorFormat {
        self.to
    }

    /// Convert the color.
    ///
    /// If the color does not have this converter's source format or is
    /// invalid, this method logs a warning and returns the target format's
    /// default color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn convert(&self, color: &Color) -> Color {
        (self.function)(color)
    }
}

/// Look up the converter between the two formats.
///
/// This function returns `None` if the formats are the same, if either is SL
/// or SV, or for XYZ to hexadecimal.
pub fn conversion_fn(from: ColorFormat, to: ColorFormat) -> Option<Converter> {
    CONVERSION_MAP[from.index()][to.index()].map(|function| Converter { from, to, function })
}

/// Convert the color into every format reachable from it.
///
/// The result includes the color itself, its XYZ form, and the SL and SV
/// projections of its HSL and HSV forms. Only colors in one of the
/// [primary](ColorFormat::PRIMARY) formats have a full set of values. For
/// other colors, this function logs a warning and returns an empty map.
pub fn gen_all_color_values(color: &Color) -> ColorValues {
    let from = color.format();
    let mut values = ColorValues::new();

    if !from.is_primary() {
        log::warn!("cannot generate all color values for {} color", from);
        return values;
    }

    values.insert(from, color.clone());
    for to in ColorFormat::CONVERTIBLE {
        if let Some(converter) = conversion_fn(from, to) {
            values.insert(to, converter.convert(color));
        }
    }

    if let Some(Color::Hsl(hsl)) = values.get(&ColorFormat::Hsl) {
        let sl = hsl_to_sl(hsl);
        values.insert(ColorFormat::Sl, Color::Sl(sl));
    }
    if let Some(Color::Hsv(hsv)) = values.get(&ColorFormat::Hsv) {
        let sv = hsv_to_sv(hsv);
        values.insert(ColorFormat::Sv, Color::Sv(sv));
    }

    values
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_same_color, rgb, Hsl, Hsv, Lab, Sl, Sv, Xyz};

    #[test]
    fn test_map() {
        let mut count = 0;
        for from in [
            ColorFormat::Cmyk,
            ColorFormat::Hex,
            ColorFormat::Hsl,
            ColorFormat::Hsv,
            ColorFormat::Lab,
            ColorFormat::Rgb,
            ColorFormat::Sl,
            ColorFormat::Sv,
            ColorFormat::Xyz,
        ] {
            assert!(conversion_fn(from, from).is_none());
            assert!(conversion_fn(from, ColorFormat::Sl).is_none());
            assert!(conversion_fn(ColorFormat::Sv, from).is_none());

            for to in ColorFormat::CONVERTIBLE {
                if let Some(converter) = conversion_fn(from, to) {
                    assert_eq!(converter.source(), from);
                    assert_eq!(converter.target(), to);
                    count += 1;
                }
            }
        }

        assert!(conversion_fn(ColorFormat::Xyz, ColorFormat::Hex).is_none());
        assert!(conversion_fn(ColorFormat::Hex, ColorFormat::Xyz).is_some());
        assert_eq!(count, 41);
    }

    #[test]
    fn test_determinism() {
        let converter = conversion_fn(ColorFormat::Rgb, ColorFormat::Hsl);
        assert!(converter.is_some());

        if let Some(converter) = converter {
            let color = rgb!(12, 200, 99);
            let one = converter.convert(&color);
            let mut two = converter.convert(&color);
            assert_eq!(one, two);

            if let Color::Hsl(ref mut hsl) = two {
                hsl.hue = 0.0;
            }
            assert_ne!(one, two);
            assert_eq!(one, converter.convert(&color));
        }
    }

    #[test]
    fn test_mismatch() {
        let converter = conversion_fn(ColorFormat::Rgb, ColorFormat::Hsv);
        let hsl = Color::Hsl(Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(
            converter.map(|c| c.convert(&hsl)),
            Some(Color::Hsv(Hsv::default()))
        );
    }

    #[test]
    fn test_all_color_values() {
        let values = gen_all_color_values(&rgb!(255, 0, 0));
        assert_eq!(values.len(), ColorFormat::COUNT);
        assert_eq!(values.get(&ColorFormat::Rgb), Some(&rgb!(255, 0, 0)));
        assert_eq!(
            values.get(&ColorFormat::Hex).map(Color::to_string),
            Some("#FF0000FF".to_string())
        );
        assert_eq!(
            values.get(&ColorFormat::Sl),
            Some(&Color::Sl(Sl::new(100.0, 50.0)))
        );
        assert_eq!(
            values.get(&ColorFormat::Sv),
            Some(&Color::Sv(Sv::new(100.0, 100.0)))
        );

        let hsl = Color::Hsl(Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(
            gen_all_color_values(&hsl).get(&ColorFormat::Hsl),
            Some(&hsl)
        );

        assert!(gen_all_color_values(&Color::Sl(Sl::new(1.0, 2.0))).is_empty());
        assert!(gen_all_color_values(&Color::Xyz(Xyz::new(1.0, 2.0, 3.0))).is_empty());
    }

    #[test]
    fn test_all_color_values_round_trip() {
        for color in [
            rgb!(215, 40, 39),
            Color::Hsl(Hsl::new(200.0, 60.0, 40.0)),
            Color::Lab(Lab::new(60.0, -20.0, 30.0)),
        ] {
            let from = color.format();
            for (format, value) in gen_all_color_values(&color) {
                if let Some(converter) = conversion_fn(format, from) {
                    assert_same_color!(converter.convert(&value), color, 1.5);
                }
            }
        }
    }
}
