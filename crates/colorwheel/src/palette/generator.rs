use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::ThreadRng;
use rand::Rng;

use super::hues::{
    analogous_hues, analogous_min_spread, complementary_hues, diadic_hues, hexadic_hues,
    split_complementary_hues, tetradic_hues, triadic_hues, ANALOGOUS_MAX_SPREAD,
    DIADIC_INTERVALS, HEXADIC_DISTANCE, SPLIT_COMPLEMENTARY_MODIFIER, TETRADIC_OFFSET,
};
use super::{PaletteOptions, Scheme};
use crate::core::{hsl_to_hsv, hsl_to_sl, hsv_to_sv, is_valid_color, sanitize_radial};
use crate::error::PaletteError;
use crate::{conversion_fn, Color, ColorFormat, Float, Hsl};

/// Create a random, opaque HSL color with uniformly distributed channels.
pub fn random_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    Hsl::new(
        rng.random_range(0.0..360.0),
        rng.random_range(0.0..=100.0),
        rng.random_range(0.0..=100.0),
    )
}

/// Create a random color in the given format.
///
/// The color is a random HSL color converted to the format. For SL and SV,
/// it is the projection of a random HSL or HSV color.
pub fn random_color<R: Rng + ?Sized>(format: ColorFormat, rng: &mut R) -> Color {
    let hsl = random_hsl(rng);

    match format {
        ColorFormat::Hsl => Color::Hsl(hsl),
        ColorFormat::Sl => Color::Sl(hsl_to_sl(&hsl)),
        ColorFormat::Sv => Color::Sv(hsv_to_sv(&hsl_to_hsv(&hsl))),
        _ => convert_hsl(hsl, format),
    }
}

/// Convert the HSL color to the format, falling back on HSL if there is no
/// conversion.
fn convert_hsl(hsl: Hsl, format: ColorFormat) -> Color {
    let color = Color::Hsl(hsl);
    match conversion_fn(ColorFormat::Hsl, format) {
        Some(converter) => converter.convert(&color),
        None => color,
    }
}

/// Determine the format for swatches. Palettes are generated in primary
/// formats only.
fn resolve_space(space: ColorFormat) -> ColorFormat {
    if space.is_primary() {
        space
    } else {
        log::warn!("cannot generate palette in {}, using hsl instead", space);
        ColorFormat::Hsl
    }
}

// ====================================================================================================================

/// A generator of color palettes.
///
/// The generator owns a source of randomness and the [`PaletteOptions`].
/// With [`PaletteGenerator::new`], it uses the thread-local random number
/// generator. With [`PaletteGenerator::with_rng`], it uses any other random
/// number generator, including a seeded one for reproducible palettes.
///
/// All palette methods take the same three arguments: the number of swatches,
/// an optional custom base color, and the format for the swatches. If the
/// number of swatches is smaller than the scheme's
/// [minimum](Scheme::minimum_swatches), they log a warning and return an
/// empty palette. [`PaletteGenerator::try_generate`] returns an error
/// instead.
#[derive(Debug)]
pub struct PaletteGenerator<R: Rng> {
    rng: R,
    options: PaletteOptions,
}

impl PaletteGenerator<ThreadRng> {
    /// Create a new palette generator using the thread-local random number
    /// generator and default options.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PaletteGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaletteGenerator<R> {
    /// Create a new palette generator using the given random number generator
    /// and default options.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            options: PaletteOptions::default(),
        }
    }

    /// Replace this generator's options.
    #[must_use = "method consumes the generator and returns a new one"]
    pub fn with_options(self, options: PaletteOptions) -> Self {
        Self { options, ..self }
    }

    /// Get this generator's options.
    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    /// Generate a complementary palette.
    pub fn complementary(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Complementary, num_boxes, custom, space)
    }

    /// Generate a triadic palette.
    pub fn triadic(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Triadic, num_boxes, custom, space)
    }

    /// Generate a tetradic palette.
    pub fn tetradic(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Tetradic, num_boxes, custom, space)
    }

    /// Generate an analogous palette.
    pub fn analogous(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Analogous, num_boxes, custom, space)
    }

    /// Generate a split-complementary palette.
    pub fn split_complementary(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::SplitComplementary, num_boxes, custom, space)
    }

    /// Generate a hexadic palette.
    pub fn hexadic(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Hexadic, num_boxes, custom, space)
    }

    /// Generate a diadic palette.
    pub fn diadic(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Diadic, num_boxes, custom, space)
    }

    /// Generate a monochromatic palette.
    ///
    /// All swatches share the base hue. Swatches with zero saturation or with
    /// lightness at either extreme are gray, black, or white, and formats
    /// without hue do not preserve it for them. Narrow the ranges with
    /// [`PaletteOptions`] to keep every swatch chromatic.
    pub fn monochromatic(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Monochromatic, num_boxes, custom, space)
    }

    /// Generate a random palette.
    pub fn random(
        &mut self,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        self.generate(Scheme::Random, num_boxes, custom, space)
    }

    /// Generate a palette for the given scheme.
    ///
    /// If the palette cannot be generated, this method logs a warning and
    /// returns an empty vector.
    pub fn generate(
        &mut self,
        scheme: Scheme,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Vec<Color> {
        match self.try_generate(scheme, num_boxes, custom, space) {
            Ok(palette) => palette,
            Err(error) => {
                log::warn!("{}", error);
                Vec::new()
            }
        }
    }

    /// Generate a palette for the given scheme.
    ///
    /// # Errors
    ///
    /// This method returns [`PaletteError::TooFewSwatches`] if `num_boxes` is
    /// smaller than the scheme's minimum number of swatches.
    pub fn try_generate(
        &mut self,
        scheme: Scheme,
        num_boxes: usize,
        custom: Option<&Color>,
        space: ColorFormat,
    ) -> Result<Vec<Color>, PaletteError> {
        let minimum = scheme.minimum_swatches();
        if num_boxes < minimum {
            return Err(PaletteError::TooFewSwatches {
                scheme,
                minimum,
                requested: num_boxes,
            });
        }

        let space = resolve_space(space);
        log::debug!(
            "generating {} palette with {} swatches in {}",
            scheme,
            num_boxes,
            space
        );

        let (base, hue) = self.resolve_base(custom, space);
        let mut palette = Vec::with_capacity(num_boxes);
        palette.push(base);

        if scheme == Scheme::Random {
            while palette.len() < num_boxes {
                palette.push(random_color(space, &mut self.rng));
            }
            return Ok(palette);
        }

        let hues = self.scheme_hues(scheme, hue, num_boxes);
        for index in 1..num_boxes {
            let hue = match hues.get(index - 1) {
                Some(hue) => *hue,
                None if scheme == Scheme::Monochromatic => hue,
                None => self.extra_hue(hue, &hues),
            };

            let swatch = self.swatch(hue);
            palette.push(convert_hsl(swatch, space));
        }

        Ok(palette)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the base color in the given format and its hue.
    ///
    /// A valid custom color in the format is used as is. A valid custom color
    /// in another format is converted. Without a usable custom color, the
    /// base color is random.
    fn resolve_base(&mut self, custom: Option<&Color>, space: ColorFormat) -> (Color, Float) {
        let base = match custom {
            Some(color) if !is_valid_color(color) => {
                log::warn!("invalid custom color {:?}, using random base color", color);
                None
            }
            Some(color) if color.format() == space => Some(color.clone()),
            Some(color) => {
                let converted = conversion_fn(color.format(), space).map(|c| c.convert(color));
                if converted.is_none() {
                    log::warn!(
                        "cannot convert {} color to {}, using random base color",
                        color.format(),
                        space
                    );
                }
                converted
            }
            None => None,
        };

        let base = match base {
            Some(color) => color,
            None => random_color(space, &mut self.rng),
        };

        let hue = match base.hue() {
            Some(hue) if base.format() == ColorFormat::Hsl => hue,
            _ => conversion_fn(base.format(), ColorFormat::Hsl)
                .and_then(|c| c.convert(&base).hue())
                .unwrap_or(0.0),
        };

        (base, sanitize_radial(hue))
    }

    /// Derive the scheme's hues from the base hue, drawing random quantities
    /// as needed.
    fn scheme_hues(&mut self, scheme: Scheme, hue: Float, num_boxes: usize) -> Vec<Float> {
        let rng = &mut self.rng;

        match scheme {
            Scheme::Complementary => complementary_hues(hue).to_vec(),
            Scheme::Triadic => triadic_hues(hue).to_vec(),
            Scheme::Tetradic => {
                let [min, max] = TETRADIC_OFFSET;
                let mut offset = rng.random_range(min..=max);
                if rng.random_bool(0.5) {
                    offset = -offset;
                }
                tetradic_hues(hue, offset).to_vec()
            }
            Scheme::Analogous => {
                let min = analogous_min_spread(num_boxes);
                let spread = rng.random_range(min..=ANALOGOUS_MAX_SPREAD);
                analogous_hues(hue, num_boxes, spread)
            }
            Scheme::SplitComplementary => {
                let [min, max] = SPLIT_COMPLEMENTARY_MODIFIER;
                split_complementary_hues(hue, rng.random_range(min..=max)).to_vec()
            }
            Scheme::Hexadic => {
                let [min, max] = HEXADIC_DISTANCE;
                hexadic_hues(hue, rng.random_range(min..=max)).to_vec()
            }
            Scheme::Diadic => {
                let interval = match WeightedIndex::new(DIADIC_INTERVALS.iter().map(|(_, w)| *w)) {
                    Ok(distribution) => DIADIC_INTERVALS[distribution.sample(rng)].0,
                    Err(error) => {
                        log::warn!("cannot sample diadic intervals: {}", error);
                        DIADIC_INTERVALS[0].0
                    }
                };
                diadic_hues(hue, interval).to_vec()
            }
            Scheme::Monochromatic | Scheme::Random => Vec::new(),
        }
    }

    /// Pick the hue for a swatch beyond those prescribed by the scheme. It
    /// deviates from the base hue or one of the scheme's hues by up to the
    /// configured jitter.
    fn extra_hue(&mut self, base: Float, hues: &[Float]) -> Float {
        let index = self.rng.random_range(0..=hues.len());
        let hue = if index == 0 { base } else { hues[index - 1] };
        let jitter = self.options.hue_jitter();
        sanitize_radial(hue + self.rng.random_range(-jitter..=jitter))
    }

    /// Combine the hue with random saturation and lightness.
    fn swatch(&mut self, hue: Float) -> Hsl {
        let [s_min, s_max] = self.options.saturation();
        let [l_min, l_max] = self.options.lightness();
        Hsl::new(
            hue,
            self.rng.random_range(s_min..=s_max),
            self.rng.random_range(l_min..=l_max),
        )
    }
}

// ====================================================================================================================

macro_rules! palette_fn {
    ($name:ident, $method:ident, $label:literal) => {
        #[doc = concat!(
            "Generate ", $label, " palette with the thread-local random number generator.\n\n",
            "See [`PaletteGenerator`] for details."
        )]
        pub fn $name(num_boxes: usize, custom: Option<&Color>, space: ColorFormat) -> Vec<Color> {
            PaletteGenerator::new().$method(num_boxes, custom, space)
        }
    };
}

palette_fn!(gen_complementary_palette, complementary, "a complementary");
palette_fn!(gen_triadic_palette, triadic, "a triadic");
palette_fn!(gen_tetradic_palette, tetradic, "a tetradic");
palette_fn!(gen_analogous_palette, analogous, "an analogous");
palette_fn!(gen_split_complementary_palette, split_complementary, "a split-complementary");
palette_fn!(gen_hexadic_palette, hexadic, "a hexadic");
palette_fn!(gen_diadic_palette, diadic, "a diadic");
palette_fn!(gen_monochromatic_palette, monochromatic, "a monochromatic");
palette_fn!(gen_random_palette, random, "a random");

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::assert_close_enough;
    use crate::core::rgb_to_hsl;
    use crate::{rgb, Rgb};

    fn seeded(seed: u64) -> PaletteGenerator<StdRng> {
        PaletteGenerator::with_rng(StdRng::seed_from_u64(seed))
    }

    fn hue_of(color: &Color) -> Option<Float> {
        match color {
            Color::Hsl(hsl) => Some(hsl.hue),
            Color::Rgb(rgb) => Some(rgb_to_hsl(rgb).hue),
            _ => None,
        }
    }

    #[test]
    fn test_length() {
        let mut generator = seeded(1);
        for scheme in Scheme::ALL {
            let minimum = scheme.minimum_swatches();
            for num_boxes in minimum..minimum + 8 {
                for space in ColorFormat::PRIMARY {
                    let palette = generator.generate(scheme, num_boxes, None, space);
                    assert_eq!(palette.len(), num_boxes, "{} {}", scheme, space);
                    assert!(palette.iter().all(|c| c.format() == space));
                    assert!(palette.iter().all(Color::is_valid), "{:?}", palette);
                }
            }
        }
    }

    #[test]
    fn test_too_few_swatches() {
        let mut generator = seeded(2);
        let red = rgb!(255, 0, 0);
        assert!(generator.triadic(2, Some(&red), ColorFormat::Rgb).is_empty());
        assert!(generator.hexadic(4, Some(&red), ColorFormat::Rgb).is_empty());
        assert!(generator.tetradic(3, None, ColorFormat::Hex).is_empty());
        assert!(generator.complementary(1, None, ColorFormat::Hsl).is_empty());
        assert!(generator.random(0, None, ColorFormat::Hsl).is_empty());
        assert_eq!(generator.random(1, Some(&red), ColorFormat::Rgb), vec![red]);

        assert_eq!(
            generator.try_generate(Scheme::Hexadic, 5, None, ColorFormat::Lab),
            Err(PaletteError::TooFewSwatches {
                scheme: Scheme::Hexadic,
                minimum: 6,
                requested: 5
            })
        );
    }

    #[test]
    fn test_complementary() {
        let mut generator = seeded(3);
        for hue in [0.0, 45.5, 180.0, 300.0] {
            let base = Color::Hsl(Hsl::new(hue, 70.0, 40.0));
            let palette = generator.complementary(2, Some(&base), ColorFormat::Hsl);
            assert_eq!(palette[0], base);
            assert_eq!(palette[1].hue(), Some((hue + 180.0) % 360.0));
        }
    }

    #[test]
    fn test_triadic() {
        let mut generator = seeded(4);
        let base = Color::Hsl(Hsl::new(0.0, 100.0, 50.0));
        let palette = generator.triadic(5, Some(&base), ColorFormat::Hsl);
        assert_eq!(palette.len(), 5);
        assert_eq!(palette[1].hue(), Some(120.0));
        assert_eq!(palette[2].hue(), Some(240.0));

        // Extra swatches stay within the jitter of a scheme hue.
        for color in &palette[3..] {
            let hue = color.hue().unwrap_or(Float::NAN);
            let near = [0.0, 120.0, 240.0, 360.0]
                .iter()
                .any(|scheme_hue| (hue - scheme_hue).abs() <= 5.0);
            assert!(near, "hue {}", hue);
        }
    }

    #[test]
    fn test_monochromatic() {
        let options = PaletteOptions::default()
            .with_saturation(20.0, 100.0)
            .with_lightness(20.0, 80.0);
        let mut generator = seeded(5).with_options(options);

        let blue = rgb!(0, 0, 255);
        let palette = generator.monochromatic(3, Some(&blue), ColorFormat::Rgb);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[0], blue);
        for color in &palette {
            assert_eq!(hue_of(color), Some(240.0), "{:?}", color);
        }
    }

    #[test]
    fn test_monochromatic_defaults() {
        let blue = rgb!(0, 0, 255);
        for seed in 0..50 {
            let palette = seeded(seed).monochromatic(4, Some(&blue), ColorFormat::Rgb);
            assert_eq!(palette.len(), 4);
            for color in &palette {
                let Color::Rgb(rgb) = color else {
                    panic!("not an rgb color: {:?}", color);
                };
                let hsl = rgb_to_hsl(rgb);
                if hsl.saturation > 0.0 {
                    assert_close_enough!(hsl.hue, 240.0);
                }
            }
        }
    }

    #[test]
    fn test_scheme_hues() {
        let mut generator = seeded(6);
        let base = Color::Hsl(Hsl::new(100.0, 50.0, 50.0));

        let palette = generator.split_complementary(3, Some(&base), ColorFormat::Hsl);
        let hues: Vec<Float> = palette.iter().filter_map(Color::hue).collect();
        let modifier = hues[1] - 280.0;
        assert!((20.0..=30.0).contains(&modifier), "{:?}", hues);
        assert!((hues[2] - (280.0 - modifier)).abs() < 1e-9, "{:?}", hues);

        let palette = generator.tetradic(4, Some(&base), ColorFormat::Hsl);
        let hues: Vec<Float> = palette.iter().filter_map(Color::hue).collect();
        assert_eq!(hues[1], 280.0);
        let offset = (hues[2] - 190.0).abs();
        assert!((20.0..=66.0).contains(&offset), "{:?}", hues);
        assert_eq!(hues[3], sanitize_radial(hues[2] + 180.0));

        let palette = generator.hexadic(6, Some(&base), ColorFormat::Hsl);
        let hues: Vec<Float> = palette.iter().filter_map(Color::hue).collect();
        assert_eq!(hues[1], 280.0);
        let distance = hues[2] - 100.0;
        assert!((10.0..=80.0).contains(&distance), "{:?}", hues);

        for _ in 0..20 {
            let palette = generator.diadic(2, Some(&base), ColorFormat::Hsl);
            let interval = palette[1].hue().unwrap_or(Float::NAN) - 100.0;
            assert!(DIADIC_INTERVALS.iter().any(|(i, _)| *i == interval));
        }

        let palette = generator.analogous(4, Some(&base), ColorFormat::Hsl);
        let hues: Vec<Float> = palette.iter().filter_map(Color::hue).collect();
        let step = hues[1] - 100.0;
        assert!((28.0 / 3.0..=20.0).contains(&step), "{:?}", hues);
        assert!((hues[2] - hues[1] - step).abs() < 1e-9, "{:?}", hues);
        assert!((hues[3] - hues[2] - step).abs() < 1e-9, "{:?}", hues);
    }

    #[test]
    fn test_base_color() {
        let mut generator = seeded(7);

        // Custom colors in other formats are converted.
        let red = rgb!(255, 0, 0);
        let palette = generator.complementary(2, Some(&red), ColorFormat::Hex);
        assert_eq!(palette[0].to_string(), "#FF0000FF");
        assert_eq!(palette[1].format(), ColorFormat::Hex);

        // Auxiliary formats and XYZ fall back onto HSL.
        for space in [ColorFormat::Sl, ColorFormat::Sv, ColorFormat::Xyz] {
            let palette = generator.triadic(3, None, space);
            assert_eq!(palette.len(), 3);
            assert!(palette.iter().all(|c| c.format() == ColorFormat::Hsl));
        }

        // Invalid custom colors are replaced by random ones.
        for space in [ColorFormat::Rgb, ColorFormat::Hsl] {
            let palette = generator.complementary(2, Some(&rgb!(300, -5, 0)), space);
            assert_eq!(palette.len(), 2);
            assert_ne!(palette[0], rgb!(300, -5, 0));
            assert!(palette.iter().all(Color::is_valid), "{:?}", palette);
        }

        // Random base colors are valid.
        let palette = generator.analogous(2, None, ColorFormat::Lab);
        assert!(palette[0].is_valid());
    }

    #[test]
    fn test_determinism() {
        let base = Color::Rgb(Rgb::new(10.0, 120.0, 200.0));
        let one = seeded(8).tetradic(7, Some(&base), ColorFormat::Cmyk);
        let two = seeded(8).tetradic(7, Some(&base), ColorFormat::Cmyk);
        assert_eq!(one, two);
    }

    #[test]
    fn test_random_color() {
        let mut rng = StdRng::seed_from_u64(9);
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
            let color = random_color(format, &mut rng);
            assert_eq!(color.format(), format);
            assert!(color.is_valid(), "{:?}", color);
        }
    }
}
