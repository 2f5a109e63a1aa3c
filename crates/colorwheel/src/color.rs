//! Colors and their channels.
//!
//! A [`Color`] tags one channel record per [`ColorFormat`]. Records are
//! plain data with public fields, so that rendering and persistence layers
//! can read and write them directly. The [`validate`](crate::validate)
//! predicates determine whether a record's channels are in range, and the
//! conversion functions sanitize all channels they produce.

use std::str::FromStr;

use crate::core::{
    format_cmyk, format_hex, format_hsl, format_hsv, format_lab, format_rgb, format_sl, format_sv,
    format_xyz, is_valid_color, parse, parse_hex,
};
use crate::error::ColorFormatError;
use crate::{ColorFormat, Float};

/// Limits for channels without an obvious range.
pub mod limits {
    use crate::Float;

    /// The D65 reference white's x.
    pub const REF_X: Float = 95.047;
    /// The D65 reference white's y.
    pub const REF_Y: Float = 100.0;
    /// The D65 reference white's z.
    pub const REF_Z: Float = 108.883;

    /// The smallest a or b accepted for CIELAB colors.
    pub const LAB_AB_MIN: Float = -125.0;
    /// The largest a or b accepted for CIELAB colors.
    pub const LAB_AB_MAX: Float = 125.0;
}

/// Create a new RGB color from its red, green, and blue channels.
///
/// The macro accepts any numeric expressions and casts them to [`Float`].
///
/// ```
/// # use colorwheel::{rgb, Color, Rgb};
/// assert_eq!(rgb!(255, 0, 0), Color::Rgb(Rgb::new(255.0, 0.0, 0.0)));
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::Rgb($crate::Rgb::new(
            $r as $crate::Float,
            $g as $crate::Float,
            $b as $crate::Float,
        ))
    };
}

// ====================================================================================================================

/// A CMYK color with cyan, magenta, yellow, and key percentages `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cmyk {
    pub cyan: Float,
    pub magenta: Float,
    pub yellow: Float,
    pub key: Float,
    pub alpha: Float,
}

impl Cmyk {
    /// Create a new, opaque CMYK color.
    pub const fn new(cyan: Float, magenta: Float, yellow: Float, key: Float) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Cmyk {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// A color in hashed hexadecimal notation.
///
/// The `hex` string has the form `#RRGGBBAA`, the `alpha` string repeats the
/// two alpha digits, and `num_alpha` is the same alpha as a number `0..=1`.
/// Colors produced by this crate always use upper case digits and keep all
/// three consistent. For input, `hex` may also omit the alpha digits.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Hex {
    pub hex: String,
    pub alpha: String,
    pub num_alpha: Float,
}

impl Hex {
    /// Parse a hashed hexadecimal color with 3, 4, 6, or 8 digits.
    ///
    /// Three and four digit colors are expanded by repeating each digit.
    /// Missing alpha digits default to `FF`.
    ///
    /// ```
    /// # use colorwheel::{error::ColorFormatError, Hex};
    /// let hex = Hex::parse("#f80")?;
    /// assert_eq!(hex.hex, "#FF8800FF");
    /// assert_eq!(hex.alpha, "FF");
    /// assert_eq!(hex.num_alpha, 1.0);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        parse_hex(s)
    }

    /// Create a new hexadecimal color from 24-bit coordinates and an alpha
    /// `0..=1`.
    ///
    /// The alpha is quantized to two hexadecimal digits and `num_alpha`
    /// reflects the quantized value.
    pub fn from_rgb(red: u8, green: u8, blue: u8, alpha: Float) -> Self {
        let alpha_byte = (crate::core::sanitize_alpha(alpha) * 255.0).round() as u8;
        let digits = format!("{:02X}", alpha_byte);

        Self {
            hex: format!("#{:02X}{:02X}{:02X}{}", red, green, blue, digits),
            alpha: digits,
            num_alpha: alpha_byte as Float / 255.0,
        }
    }
}

impl Default for Hex {
    fn default() -> Self {
        Self::from_rgb(0, 0, 0, 1.0)
    }
}

/// An HSL color with hue `0..360` and saturation and lightness `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub hue: Float,
    pub saturation: Float,
    pub lightness: Float,
    pub alpha: Float,
}

impl Hsl {
    /// Create a new, opaque HSL color.
    pub const fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// An HSV color with hue `0..360` and saturation and value `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    pub hue: Float,
    pub saturation: Float,
    pub value: Float,
    pub alpha: Float,
}

impl Hsv {
    /// Create a new, opaque HSV color.
    pub const fn new(hue: Float, saturation: Float, value: Float) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// A CIELAB color with lightness `0..=100` and a and b axes in the practical
/// range [`LAB_AB_MIN`](limits::LAB_AB_MIN)`..=`[`LAB_AB_MAX`](limits::LAB_AB_MAX).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    pub l: Float,
    pub a: Float,
    pub b: Float,
    pub alpha: Float,
}

impl Lab {
    /// Create a new, opaque CIELAB color.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self {
            l,
            a,
            b,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Lab {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// An sRGB color with red, green, and blue channels `0..=255`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    pub red: Float,
    pub green: Float,
    pub blue: Float,
    pub alpha: Float,
}

impl Rgb {
    /// Create a new, opaque RGB color.
    pub const fn new(red: Float, green: Float, blue: Float) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }

    /// Get the channels as bytes, after clamping and rounding.
    pub fn to_24bit(&self) -> [u8; 3] {
        use crate::core::sanitize_byte;

        [
            sanitize_byte(self.red) as u8,
            sanitize_byte(self.green) as u8,
            sanitize_byte(self.blue) as u8,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// The saturation and lightness of an HSL color, both `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sl {
    pub saturation: Float,
    pub lightness: Float,
    pub alpha: Float,
}

impl Sl {
    /// Create a new, opaque saturation and lightness pair.
    pub const fn new(saturation: Float, lightness: Float) -> Self {
        Self {
            saturation,
            lightness,
            alpha: 1.0,
        }
    }
}

impl Default for Sl {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// The saturation and value of an HSV color, both `0..=100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sv {
    pub saturation: Float,
    pub value: Float,
    pub alpha: Float,
}

impl Sv {
    /// Create a new, opaque saturation and value pair.
    pub const fn new(saturation: Float, value: Float) -> Self {
        Self {
            saturation,
            value,
            alpha: 1.0,
        }
    }
}

impl Default for Sv {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A CIE XYZ color relative to the D65 reference white, scaled so that the
/// white has `y = 100`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Xyz {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub alpha: Float,
}

impl Xyz {
    /// Create a new, opaque XYZ color.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self {
            x,
            y,
            z,
            alpha: 1.0,
        }
    }

    /// Replace this color's alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Float) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Xyz {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

// ====================================================================================================================

/// A color in one of the nine color formats.
///
/// Each variant wraps the channel record for its [`ColorFormat`], hence the
/// format determines the channels. With the `serde` feature, colors
/// serialize as an object with the `format` and the `value` record, e.g.,
/// `{"format": "rgb", "value": {"red": 255.0, ...}}`.
///
/// # Examples
///
/// ```
/// # use colorwheel::{error::ColorFormatError, Color, ColorFormat, Hsl};
/// let red: Color = "hsl(0, 100%, 50%)".parse()?;
/// assert_eq!(red, Color::Hsl(Hsl::new(0.0, 100.0, 50.0)));
/// assert_eq!(red.format(), ColorFormat::Hsl);
///
/// let hex = red.to(ColorFormat::Hex).expect("hsl converts to hex");
/// assert_eq!(hex.to_string(), "#FF0000FF");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "format", content = "value", rename_all = "lowercase")
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Cmyk(Cmyk),
    Hex(Hex),
    Hsl(Hsl),
    Hsv(Hsv),
    Lab(Lab),
    Rgb(Rgb),
    Sl(Sl),
    Sv(Sv),
    Xyz(Xyz),
}

impl Color {
    /// Get the default color for the given format.
    ///
    /// All channels are zero and alpha is one, which makes for opaque black
    /// in every format but SL and SV.
    pub fn default_for(format: ColorFormat) -> Self {
        match format {
            ColorFormat::Cmyk => Self::Cmyk(Cmyk::default()),
            ColorFormat::Hex => Self::Hex(Hex::default()),
            ColorFormat::Hsl => Self::Hsl(Hsl::default()),
            ColorFormat::Hsv => Self::Hsv(Hsv::default()),
            ColorFormat::Lab => Self::Lab(Lab::default()),
            ColorFormat::Rgb => Self::Rgb(Rgb::default()),
            ColorFormat::Sl => Self::Sl(Sl::default()),
            ColorFormat::Sv => Self::Sv(Sv::default()),
            ColorFormat::Xyz => Self::Xyz(Xyz::default()),
        }
    }

    /// Get this color's format.
    pub const fn format(&self) -> ColorFormat {
        match *self {
            Self::Cmyk(_) => ColorFormat::Cmyk,
            Self::Hex(_) => ColorFormat::Hex,
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Hsv(_) => ColorFormat::Hsv,
            Self::Lab(_) => ColorFormat::Lab,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Sl(_) => ColorFormat::Sl,
            Self::Sv(_) => ColorFormat::Sv,
            Self::Xyz(_) => ColorFormat::Xyz,
        }
    }

    /// Get this color's alpha `0..=1`.
    pub fn alpha(&self) -> Float {
        match self {
            Self::Cmyk(c) => c.alpha,
            Self::Hex(c) => c.num_alpha,
            Self::Hsl(c) => c.alpha,
            Self::Hsv(c) => c.alpha,
            Self::Lab(c) => c.alpha,
            Self::Rgb(c) => c.alpha,
            Self::Sl(c) => c.alpha,
            Self::Sv(c) => c.alpha,
            Self::Xyz(c) => c.alpha,
        }
    }

    /// Get the numeric channels in declaration order, with alpha last.
    ///
    /// Hexadecimal colors have no numeric channels and produce an empty
    /// vector.
    pub fn channels(&self) -> Vec<Float> {
        match self {
            Self::Cmyk(c) => vec![c.cyan, c.magenta, c.yellow, c.key, c.alpha],
            Self::Hex(_) => Vec::new(),
            Self::Hsl(c) => vec![c.hue, c.saturation, c.lightness, c.alpha],
            Self::Hsv(c) => vec![c.hue, c.saturation, c.value, c.alpha],
            Self::Lab(c) => vec![c.l, c.a, c.b, c.alpha],
            Self::Rgb(c) => vec![c.red, c.green, c.blue, c.alpha],
            Self::Sl(c) => vec![c.saturation, c.lightness, c.alpha],
            Self::Sv(c) => vec![c.saturation, c.value, c.alpha],
            Self::Xyz(c) => vec![c.x, c.y, c.z, c.alpha],
        }
    }

    /// Get the hue for HSL and HSV colors.
    pub fn hue(&self) -> Option<Float> {
        match self {
            Self::Hsl(c) => Some(c.hue),
            Self::Hsv(c) => Some(c.hue),
            _ => None,
        }
    }

    /// Determine whether this color's channels are all finite and in range.
    pub fn is_valid(&self) -> bool {
        is_valid_color(self)
    }

    /// Convert this color to the given format.
    ///
    /// This method looks up the converter with
    /// [`conversion_fn`](crate::conversion_fn). It returns a clone for the
    /// same format and `None` for unsupported pairs.
    pub fn to(&self, format: ColorFormat) -> Option<Color> {
        if self.format() == format {
            return Some(self.clone());
        }

        crate::conversion_fn(self.format(), format).map(|converter| converter.convert(self))
    }
}

macro_rules! from_record {
    ($($record:ident),*) => {
        $(
            impl From<$record> for Color {
                fn from(value: $record) -> Self {
                    Self::$record(value)
                }
            }
        )*
    };
}

from_record!(Cmyk, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz);

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a color from its string representation.
    ///
    /// This method recognizes hashed hexadecimal colors with 3, 4, 6, or 8
    /// digits as well as the functional notations `cmyk()`, `hsl()`,
    /// `hsv()`, `lab()`, `rgb()`, `sl()`, `sv()`, and `xyz()` with
    /// comma-separated channels and an optional trailing alpha. Channels may
    /// carry a `%` suffix, which is ignored. Parsing does not validate
    /// channel ranges; use [`Color::is_valid`] for that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_cmyk(self, f)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hex(self, f)
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hsl(self, f)
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hsv(self, f)
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_lab(self, f)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_rgb(self, f)
    }
}

impl std::fmt::Display for Sl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_sl(self, f)
    }
}

impl std::fmt::Display for Sv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_sv(self, f)
    }
}

impl std::fmt::Display for Xyz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_xyz(self, f)
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// Hexadecimal colors format as `#RRGGBBAA`. All other colors format in
    /// functional notation with comma-separated channels, percentages for
    /// percentile channels, and a trailing alpha. The formatter's precision
    /// determines the number of digits past the decimal, defaulting to 2,
    /// and trailing zeros are dropped.
    ///
    /// ```
    /// # use colorwheel::{Color, Hsl, Lab};
    /// let orange = Color::Hsl(Hsl::new(30.0, 100.0, 50.0));
    /// assert_eq!(orange.to_string(), "hsl(30, 100%, 50%, 1)");
    ///
    /// let lab = Color::Lab(Lab::new(53.2408, 80.0925, 67.2032));
    /// assert_eq!(format!("{:.1}", lab), "lab(53.2, 80.1, 67.2, 1)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmyk(c) => format_cmyk(c, f),
            Self::Hex(c) => format_hex(c, f),
            Self::Hsl(c) => format_hsl(c, f),
            Self::Hsv(c) => format_hsv(c, f),
            Self::Lab(c) => format_lab(c, f),
            Self::Rgb(c) => format_rgb(c, f),
            Self::Sl(c) => format_sl(c, f),
            Self::Sv(c) => format_sv(c, f),
            Self::Xyz(c) => format_xyz(c, f),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        for format in [
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
            let color = Color::default_for(format);
            assert_eq!(color.format(), format);
            assert_eq!(color.alpha(), 1.0);
            assert!(color.is_valid(), "{:?}", color);

            let channels = color.channels();
            if let Some((alpha, rest)) = channels.split_last() {
                assert_eq!(*alpha, 1.0);
                assert!(rest.iter().all(|c| *c == 0.0));
            }
        }

        assert_eq!(Hex::default().hex, "#000000FF");
    }

    #[test]
    fn test_hex_from_rgb() {
        let hex = Hex::from_rgb(0x12, 0xab, 0xff, 0.5);
        assert_eq!(hex.hex, "#12ABFF80");
        assert_eq!(hex.alpha, "80");
        assert_eq!(hex.num_alpha, 128.0 / 255.0);

        let hex = Hex::from_rgb(0, 0, 0, Float::NAN);
        assert_eq!(hex.hex, "#000000FF");
    }

    #[test]
    fn test_from_record() {
        let color: Color = Lab::new(50.0, 10.0, -10.0).into();
        assert_eq!(color.format(), ColorFormat::Lab);
        assert_eq!(color.hue(), None);

        let color: Color = Hsv::new(200.0, 10.0, 10.0).with_alpha(0.25).into();
        assert_eq!(color.hue(), Some(200.0));
        assert_eq!(color.alpha(), 0.25);
    }

    #[test]
    fn test_to_same_format() {
        let color = rgb!(1, 2, 3);
        let copy = color.to(ColorFormat::Rgb);
        assert_eq!(copy, Some(color));
        assert_eq!(rgb!(1, 2, 3).to(ColorFormat::Sl), None);
    }

    #[test]
    fn test_to_24bit() {
        assert_eq!(Rgb::new(254.6, -4.0, 300.0).to_24bit(), [255, 0, 255]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        use serde_json::json;

        let value = serde_json::to_value(rgb!(255, 0, 0))?;
        assert_eq!(
            value,
            json!({
                "format": "rgb",
                "value": { "red": 255.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 }
            })
        );

        let hex: Color = serde_json::from_str(
            r##"{"format": "hex", "value": {"hex": "#FF8000FF", "alpha": "FF", "numAlpha": 1.0}}"##,
        )?;
        assert_eq!(hex.format(), ColorFormat::Hex);
        assert!(crate::validate::is_valid_color(&hex));

        let lab: Color = serde_json::from_str(
            r#"{"format": "lab", "value": {"l": 50.0, "a": 200.0, "b": 0.0, "alpha": 1.0}}"#,
        )?;
        assert!(!lab.is_valid());
        Ok(())
    }
}
