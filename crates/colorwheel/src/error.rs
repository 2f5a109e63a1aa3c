//! Utility module with colorwheel's errors.
//!
//! Conversions never fail. They sanitize their results and fall back onto
//! default colors for invalid inputs. Only parsing color strings and
//! violating a palette's preconditions produce errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::palette::Scheme;

/// An erroneous color string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color string that neither starts with `#` nor with one of the
    /// function names `cmyk`, `hsl`, `hsv`, `lab`, `rgb`, `sl`, `sv`, or
    /// `xyz`.
    UnknownFormat,

    /// A hashed hexadecimal color with a digit count other than 3, 4, 6, or
    /// 8. For example, `#12345` is missing a digit.
    UnexpectedLength,

    /// A hashed hexadecimal color with a non-hexadecimal digit. For example,
    /// `#00ffgg` has two malformed digits.
    MalformedHex,

    /// A functional color without the opening parenthesis. For example,
    /// `rgb 0, 0, 0)`.
    NoOpeningParenthesis,

    /// A functional color without the closing parenthesis. For example,
    /// `hsl(0, 100%, 50%`.
    NoClosingParenthesis,

    /// A functional color with fewer channels than its format requires. For
    /// example, `rgb(1, 2)` is missing the blue channel.
    MissingChannel,

    /// A functional color with more channels than its format allows,
    /// counting the optional alpha. For example, `sl(1, 2, 0.5, 4)`.
    TooManyChannels,

    /// A functional color with a channel that is not a number, optionally
    /// followed by a percent sign. For example, `rgb(1, two, 3)`.
    MalformedChannel,

    /// A color format name other than `cmyk`, `hex`, `hsl`, `hsv`, `lab`,
    /// `rgb`, `sl`, `sv`, or `xyz`.
    UnknownFormatName,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color string should start with `#` or a known color function such as `rgb()`",
            ),
            UnexpectedLength => {
                f.write_str("hexadecimal color should have 3, 4, 6, or 8 digits but does not")
            }
            MalformedHex => f.write_str("hexadecimal color should contain hex digits only"),
            NoOpeningParenthesis => {
                f.write_str("color function should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color function should include a closing parenthesis but has none")
            }
            MissingChannel => f.write_str("color function is missing a channel"),
            TooManyChannels => f.write_str("color function has too many channels"),
            MalformedChannel => f.write_str("color function channels should be numbers"),
            UnknownFormatName => f.write_str(
                "color format should be one of cmyk, hex, hsl, hsv, lab, rgb, sl, sv, or xyz",
            ),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A violated palette precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// A request for fewer swatches than the harmony scheme needs to express
    /// itself. For example, a triadic palette needs at least three swatches.
    TooFewSwatches {
        scheme: Scheme,
        minimum: usize,
        requested: usize,
    },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::TooFewSwatches {
                scheme,
                minimum,
                requested,
            } => f.write_fmt(format_args!(
                "{} palette requires at least {} swatches but {} were requested",
                scheme, minimum, requested
            )),
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(feature = "pyffi")]
impl From<PaletteError> for PyErr {
    fn from(value: PaletteError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
