use std::io::{stdout, Result, Write};

use colorwheel::palette::{PaletteGenerator, PaletteOptions, Scheme};
use colorwheel::{Color, ColorFormat};

/// Write the swatch as a block with 24-bit background color and its string.
fn write_swatch<W: Write>(out: &mut W, swatch: &Color) -> Result<()> {
    let [r, g, b] = match swatch.to(ColorFormat::Rgb) {
        Some(Color::Rgb(rgb)) => rgb.to_24bit(),
        _ => [0, 0, 0],
    };

    writeln!(out, "\x1b[48;2;{};{};{}m      \x1b[m  {:.1}", r, g, b, swatch)
}

fn main() -> Result<()> {
    let base = std::env::args()
        .nth(1)
        .map(|text| text.parse::<Color>())
        .transpose()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let options = PaletteOptions::default()
        .with_saturation(40.0, 90.0)
        .with_lightness(30.0, 70.0);
    let mut generator = PaletteGenerator::new().with_options(options);

    let mut out = stdout().lock();
    for scheme in Scheme::ALL {
        writeln!(out, "\n{}", scheme)?;
        let num_boxes = scheme.minimum_swatches().max(4);
        for swatch in generator.generate(scheme, num_boxes, base.as_ref(), ColorFormat::Hsl) {
            write_swatch(&mut out, &swatch)?;
        }
    }

    Ok(())
}
