#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;

/// The enumeration of supported color formats.
///
/// # Primary Formats
///
/// Six formats are *primary*, i.e., they serve as both inputs and outputs
/// for conversion as well as color spaces for palette generation:
///
///   * [CMYK](https://en.wikipedia.org/wiki/CMYK_color_model) with cyan,
///     magenta, yellow, and key (black) percentages;
///   * hashed hexadecimal notation, always with two digits of alpha;
///   * [HSL and HSV](https://en.wikipedia.org/wiki/HSL_and_HSV), which
///     combine a hue angle with saturation and lightness or value
///     percentages;
///   * [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) with the
///     D65 reference white;
///   * 24-bit sRGB with byte-sized channels.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) connects sRGB
/// and CIELAB. It converts to and from every primary format but hexadecimal
/// notation. It is not a color space for palette generation.
///
/// # Auxiliary Formats
///
/// SL and SV are projections of HSL and HSV without hue. They exist so that
/// the saturation and lightness or value of a color can be handled on their
/// own. They do not participate in conversion other than as a target of
/// [`gen_all_color_values`](crate::gen_all_color_values).
///
/// All color formats have an alpha channel ranging `0..=1`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorwheel")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorFormat {
    Cmyk,
    Hex,
    Hsl,
    Hsv,
    Lab,
    Rgb,
    Sl,
    Sv,
    Xyz,
}

impl ColorFormat {
    /// The primary color formats.
    pub const PRIMARY: [ColorFormat; 6] = [
        ColorFormat::Cmyk,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Lab,
        ColorFormat::Rgb,
    ];

    /// The color formats with conversion functions, i.e., the primary
    /// formats and XYZ.
    pub const CONVERTIBLE: [ColorFormat; 7] = [
        ColorFormat::Cmyk,
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Hsv,
        ColorFormat::Lab,
        ColorFormat::Rgb,
        ColorFormat::Xyz,
    ];

    /// The number of color formats.
    pub const COUNT: usize = 9;

    /// Get this format's index `0..COUNT`.
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorFormat {
    /// Determine whether this format is one of the six primary formats.
    pub const fn is_primary(&self) -> bool {
        !matches!(*self, Self::Sl | Self::Sv | Self::Xyz)
    }

    /// Determine whether this format is one of the two auxiliary formats.
    pub const fn is_auxiliary(&self) -> bool {
        matches!(*self, Self::Sl | Self::Sv)
    }

    /// Determine whether this format has a hue channel.
    pub const fn has_hue(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hsv)
    }

    /// Get this format's lowercase name.
    pub const fn name(&self) -> &'static str {
        use ColorFormat::*;

        match *self {
            Cmyk => "cmyk",
            Hex => "hex",
            Hsl => "hsl",
            Hsv => "hsv",
            Lab => "lab",
            Rgb => "rgb",
            Sl => "sl",
            Sv => "sv",
            Xyz => "xyz",
        }
    }

    /// Create a human-readable representation for this color format. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorFormatError;

    /// Parse a color format from its name, ignoring ASCII case and
    /// surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ColorFormat::*;

        let lowercase = s.trim().to_ascii_lowercase();
        let format = match lowercase.as_str() {
            "cmyk" => Cmyk,
            "hex" => Hex,
            "hsl" => Hsl,
            "hsv" => Hsv,
            "lab" => Lab,
            "rgb" => Rgb,
            "sl" => Sl,
            "sv" => Sv,
            "xyz" => Xyz,
            _ => return Err(ColorFormatError::UnknownFormatName),
        };

        Ok(format)
    }
}

#[cfg(test)]
mod test {
    use super::ColorFormat;
    use crate::error::ColorFormatError;

    #[test]
    fn test_names() -> Result<(), ColorFormatError> {
        for (index, format) in [
            ColorFormat::Cmyk,
            ColorFormat::Hex,
            ColorFormat::Hsl,
            ColorFormat::Hsv,
            ColorFormat::Lab,
            ColorFormat::Rgb,
            ColorFormat::Sl,
            ColorFormat::Sv,
            ColorFormat::Xyz,
        ]
        .into_iter()
        .enumerate()
        {
            assert_eq!(format.index(), index);
            assert_eq!(format.to_string().parse::<ColorFormat>()?, format);
        }

        assert_eq!(" HSL ".parse::<ColorFormat>()?, ColorFormat::Hsl);
        assert_eq!(
            "oklab".parse::<ColorFormat>(),
            Err(ColorFormatError::UnknownFormatName)
        );
        Ok(())
    }

    #[test]
    fn test_classification() {
        assert!(ColorFormat::PRIMARY.iter().all(ColorFormat::is_primary));
        assert!(!ColorFormat::Xyz.is_primary());
        assert!(!ColorFormat::Xyz.is_auxiliary());
        assert!(ColorFormat::Sv.is_auxiliary());
        assert!(ColorFormat::Hsv.has_hue());
        assert!(!ColorFormat::Lab.has_hue());
    }
}
