//! # Colorwheel
//!
//! Colorwheel converts colors between seven color formats and generates
//! palettes from color harmonies.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Python integration requires the `pyffi` feature."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Items that are only available in Python are decorated with <i
class=python-only>Python only!</i>."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorwheel's main abstractions are:
//!
//!   * [`Color`] tags a channel record, e.g., [`Rgb`] or [`Hsl`], with its
//!     [`ColorFormat`]. Records are plain data with public fields. Colors
//!     format as and parse from strings such as `#FF0000FF`,
//!     `rgb(255, 0, 0, 1)`, or `hsl(0, 100%, 50%, 1)`.
//!   * The [`conversion`] module has one function for every pair of
//!     convertible formats, e.g.,
//!     [`rgb_to_hsl`](conversion::rgb_to_hsl). Conversions never fail.
//!     Invalid input results in the target format's default color and a
//!     warning logged through the [`log`](https://docs.rs/log) facade.
//!   * [`conversion_fn`] looks up a [`Converter`](dispatch::Converter) for
//!     two formats determined at runtime, and [`gen_all_color_values`]
//!     converts a color into every format reachable from it.
//!   * The [`palette`] module generates palettes for nine color harmonies.
//!     [`PaletteGenerator`](palette::PaletteGenerator) owns the source of
//!     randomness, so seeded generators produce reproducible palettes.
//!   * The [`validate`] and [`sanitize`] modules check and clamp individual
//!     channels as well as whole colors.
//!
//!
//! ## 2. Conversion
//!
//! ```
//! # use colorwheel::{error::ColorFormatError, Color, ColorFormat};
//! let orange: Color = "#ff8000".parse()?;
//! let hsl = orange.to(ColorFormat::Hsl).expect("hex converts to hsl");
//! assert_eq!(format!("{:.0}", hsl), "hsl(30, 100%, 50%, 1)");
//!
//! let cmyk = orange.to(ColorFormat::Cmyk).expect("hex converts to cmyk");
//! assert_eq!(format!("{:.0}", cmyk), "cmyk(0%, 50%, 100%, 0%, 1)");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! XYZ serves as intermediary between sRGB and CIELAB and converts to every
//! primary format but hexadecimal notation. SL and SV are projections of HSL
//! and HSV without hue. They only result from
//! [`gen_all_color_values`].
//!
//!
//! ## 3. Palettes
//!
//! ```
//! # use colorwheel::{rgb, ColorFormat};
//! # use colorwheel::palette::gen_tetradic_palette;
//! let base = rgb!(215, 40, 39);
//! let palette = gen_tetradic_palette(5, Some(&base), ColorFormat::Hex);
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette[0].to_string(), "#D72827FF");
//!
//! // A tetradic palette needs at least four swatches.
//! assert!(gen_tetradic_palette(3, Some(&base), ColorFormat::Hex).is_empty());
//! ```
//!
//!
//! ## 4. Optional Features
//!
//!   * `f64` (default) selects `f64` as [`Float`], otherwise `f32`.
//!   * `serde` enables (de)serialization of colors as objects with a
//!     `format` and a `value` record.
//!   * `pyffi` builds the Python extension module with PyO3.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod color;
mod core;
pub mod dispatch;
pub mod error;
pub mod palette;

pub mod conversion {
    //! Conversion functions for every pair of convertible color formats.
    //!
    //! Each function validates its input, converts by way of sRGB
    //! coordinates (CIELAB and XYZ convert directly), and sanitizes the
    //! result. Invalid input results in the target format's default color.
    //! There is no conversion from XYZ to hexadecimal notation.
    pub use crate::core::{
        cmyk_to_hex, cmyk_to_hsl, cmyk_to_hsv, cmyk_to_lab, cmyk_to_rgb, cmyk_to_xyz,
        hex_to_cmyk, hex_to_hsl, hex_to_hsv, hex_to_lab, hex_to_rgb, hex_to_xyz, hsl_to_cmyk,
        hsl_to_hex, hsl_to_hsv, hsl_to_lab, hsl_to_rgb, hsl_to_sl, hsl_to_xyz, hsv_to_cmyk,
        hsv_to_hex, hsv_to_hsl, hsv_to_lab, hsv_to_rgb, hsv_to_sv, hsv_to_xyz, lab_to_cmyk,
        lab_to_hex, lab_to_hsl, lab_to_hsv, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_hex,
        rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_cmyk, xyz_to_hsl, xyz_to_hsv,
        xyz_to_lab, xyz_to_rgb,
    };
}

pub mod sanitize {
    //! Clamping of channels into their ranges.
    //!
    //! These functions never fail. Not-a-number becomes zero, except for
    //! alpha, where it becomes one. Also included are the gamma correction
    //! and HSL interpolation helpers used by the conversions.
    pub use crate::core::{
        apply_gamma_correction, hue_to_rgb, remove_gamma_correction, sanitize_alpha,
        sanitize_byte, sanitize_lab_ab, sanitize_lab_l, sanitize_percentile, sanitize_radial,
        sanitize_xyz_x, sanitize_xyz_y, sanitize_xyz_z,
    };
}

pub mod validate {
    //! Predicates for channels, channel records, and colors.
    pub use crate::core::{
        is_alpha, is_byte, is_cmyk_color, is_hex_color, is_hex_string, is_hsl_color,
        is_hsv_color, is_lab_ab, is_lab_color, is_percentile, is_radial, is_rgb_color,
        is_sl_color, is_sv_color, is_valid_cmyk, is_valid_color, is_valid_hex, is_valid_hsl,
        is_valid_hsv, is_valid_lab, is_valid_rgb, is_valid_sl, is_valid_sv, is_valid_xyz,
        is_xyz_color,
    };
}

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{limits, Cmyk, Color, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};
pub use core::ColorFormat;
pub use dispatch::{conversion_fn, gen_all_color_values, ColorValues};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Parse the color string and convert it to the given format. <i
/// class=python-only>Python only!</i>
///
/// This function returns the converted color's string representation or
/// `None` if there is no conversion between the formats.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "convert")]
pub fn py_convert(text: &str, to: ColorFormat) -> PyResult<Option<String>> {
    let color: Color = text.parse()?;
    Ok(color.to(to).map(|c| c.to_string()))
}

/// Generate a palette and return its swatches as strings. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "palette", signature = (scheme, num_boxes, base=None, space=ColorFormat::Hex))]
pub fn py_palette(
    scheme: palette::Scheme,
    num_boxes: usize,
    base: Option<&str>,
    space: ColorFormat,
) -> PyResult<Vec<String>> {
    let base = base.map(str::parse::<Color>).transpose()?;
    let swatches = palette::PaletteGenerator::new().try_generate(
        scheme,
        num_boxes,
        base.as_ref(),
        space,
    )?;
    Ok(swatches.iter().map(Color::to_string).collect())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorwheel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ColorFormat>()?;
    m.add_class::<palette::Scheme>()?;
    m.add_function(wrap_pyfunction!(py_convert, m)?)?;
    m.add_function(wrap_pyfunction!(py_palette, m)?)?;
    Ok(())
}
