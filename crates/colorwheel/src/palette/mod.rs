//! Palettes based on color harmonies.
//!
//! A palette is a sequence of swatches. Its first swatch is the base color,
//! either a custom color or a random one. The remaining swatches combine
//! hues derived from the base color's hue with random saturation and
//! lightness. The [`Scheme`] determines how hues are derived, and the
//! [`hues`] module implements the arithmetic. [`PaletteGenerator`] owns the
//! random source, which makes palettes reproducible with a seeded generator.
//!
//! ```
//! # use colorwheel::{Color, ColorFormat, Hsl};
//! # use colorwheel::palette::PaletteGenerator;
//! # use rand::{rngs::StdRng, SeedableRng};
//! let base = Color::Hsl(Hsl::new(30.0, 80.0, 50.0));
//! let mut generator = PaletteGenerator::with_rng(StdRng::seed_from_u64(665));
//! let palette = generator.triadic(3, Some(&base), ColorFormat::Hsl);
//!
//! assert_eq!(palette.len(), 3);
//! assert_eq!(palette[0], base);
//! assert_eq!(palette[1].hue(), Some(150.0));
//! assert_eq!(palette[2].hue(), Some(270.0));
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

mod generator;
pub mod hues;

pub use generator::{
    gen_analogous_palette, gen_complementary_palette, gen_diadic_palette, gen_hexadic_palette,
    gen_monochromatic_palette, gen_random_palette, gen_split_complementary_palette,
    gen_tetradic_palette, gen_triadic_palette, random_color, random_hsl, PaletteGenerator,
};

use crate::core::sanitize_percentile;
use crate::Float;

/// The color harmony schemes.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colorwheel")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// The base hue and its opposite.
    Complementary,
    /// Three hues evenly spaced around the color wheel.
    Triadic,
    /// Two pairs of opposite hues.
    Tetradic,
    /// Neighboring hues.
    Analogous,
    /// The base hue and the two neighbors of its opposite.
    SplitComplementary,
    /// Three pairs of opposite hues.
    Hexadic,
    /// The base hue and one nearby hue.
    Diadic,
    /// The base hue only.
    Monochromatic,
    /// No relationship at all.
    Random,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Scheme {
    /// Get the smallest number of swatches that expresses this scheme.
    pub const fn minimum_swatches(&self) -> usize {
        use Scheme::*;

        match *self {
            Complementary | Analogous | Diadic | Monochromatic => 2,
            Triadic | SplitComplementary => 3,
            Tetradic => 4,
            Hexadic => 6,
            Random => 1,
        }
    }

    /// Get this scheme's name.
    pub const fn name(&self) -> &'static str {
        use Scheme::*;

        match *self {
            Complementary => "complementary",
            Triadic => "triadic",
            Tetradic => "tetradic",
            Analogous => "analogous",
            SplitComplementary => "split-complementary",
            Hexadic => "hexadic",
            Diadic => "diadic",
            Monochromatic => "monochromatic",
            Random => "random",
        }
    }

    /// Create a human-readable representation for this scheme. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Scheme {
    /// All schemes.
    pub const ALL: [Scheme; 9] = [
        Scheme::Complementary,
        Scheme::Triadic,
        Scheme::Tetradic,
        Scheme::Analogous,
        Scheme::SplitComplementary,
        Scheme::Hexadic,
        Scheme::Diadic,
        Scheme::Monochromatic,
        Scheme::Random,
    ];
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Options for palette generation.
///
/// By default, saturation and lightness of non-base swatches are drawn from
/// the full range `0..=100` and extra swatches deviate from the scheme's
/// hues by up to 5 degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteOptions {
    saturation: [Float; 2],
    lightness: [Float; 2],
    hue_jitter: Float,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            saturation: [0.0, 100.0],
            lightness: [0.0, 100.0],
            hue_jitter: 5.0,
        }
    }
}

/// Sanitize and order the range's bounds.
fn percentile_range(min: Float, max: Float) -> [Float; 2] {
    let min = sanitize_percentile(min);
    let max = sanitize_percentile(max);
    if min <= max {
        [min, max]
    } else {
        [max, min]
    }
}

impl PaletteOptions {
    /// Update the range for random saturation. Bounds are clamped to
    /// `0..=100` and swapped if necessary.
    #[must_use = "method returns new options and does not mutate original value"]
    pub fn with_saturation(self, min: Float, max: Float) -> Self {
        Self {
            saturation: percentile_range(min, max),
            ..self
        }
    }

    /// Update the range for random lightness. Bounds are clamped to
    /// `0..=100` and swapped if necessary.
    #[must_use = "method returns new options and does not mutate original value"]
    pub fn with_lightness(self, min: Float, max: Float) -> Self {
        Self {
            lightness: percentile_range(min, max),
            ..self
        }
    }

    /// Update the largest hue deviation for extra swatches. Negative and
    /// non-finite values become zero, values beyond 180 become 180.
    #[must_use = "method returns new options and does not mutate original value"]
    pub fn with_hue_jitter(self, degrees: Float) -> Self {
        let hue_jitter = if degrees.is_finite() {
            degrees.clamp(0.0, 180.0)
        } else {
            0.0
        };
        Self { hue_jitter, ..self }
    }

    /// Get the saturation range.
    pub const fn saturation(&self) -> [Float; 2] {
        self.saturation
    }

    /// Get the lightness range.
    pub const fn lightness(&self) -> [Float; 2] {
        self.lightness
    }

    /// Get the hue jitter.
    pub const fn hue_jitter(&self) -> Float {
        self.hue_jitter
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{PaletteOptions, Scheme};

    #[test]
    fn test_scheme() {
        let minimums: Vec<usize> = Scheme::ALL.iter().map(Scheme::minimum_swatches).collect();
        assert_eq!(minimums, vec![2, 3, 4, 2, 3, 6, 2, 2, 1]);
        assert_eq!(Scheme::SplitComplementary.to_string(), "split-complementary");
    }

    #[test]
    fn test_options() {
        let options = PaletteOptions::default();
        assert_eq!(options.saturation(), [0.0, 100.0]);
        assert_eq!(options.lightness(), [0.0, 100.0]);
        assert_eq!(options.hue_jitter(), 5.0);

        let options = options
            .with_saturation(80.0, 20.0)
            .with_lightness(-10.0, 110.0)
            .with_hue_jitter(crate::Float::NAN);
        assert_eq!(options.saturation(), [20.0, 80.0]);
        assert_eq!(options.lightness(), [0.0, 100.0]);
        assert_eq!(options.hue_jitter(), 0.0);
    }
}
