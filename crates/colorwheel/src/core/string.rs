use crate::error::ColorFormatError;
use crate::{Cmyk, Color, Float, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};

/// Parse a color in hashed hexadecimal format.
///
/// This function accepts 3, 4, 6, and 8 digits in either case. It expands
/// single-digit channels by repeating them, adds an opaque alpha if missing,
/// and normalizes the result to upper case `#RRGGBBAA`.
pub(crate) fn parse_hex(s: &str) -> Result<Hex, ColorFormatError> {
    let digits = s
        .trim()
        .strip_prefix('#')
        .ok_or(ColorFormatError::UnknownFormat)?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    // All ASCII now, hence byte offsets are character offsets.
    let factor = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedLength),
    };

    let channel = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedLength)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let red = channel(0)?;
    let green = channel(1)?;
    let blue = channel(2)?;
    let alpha = if digits.len() == 4 * factor {
        channel(3)?
    } else {
        0xff
    };

    Ok(Hex::from_rgb(red, green, blue, alpha as Float / 255.0))
}

// --------------------------------------------------------------------------------------------------------------------

const FUNCTIONS: [(&str, usize); 8] = [
    ("cmyk", 4),
    ("hsl", 3),
    ("hsv", 3),
    ("lab", 3),
    ("rgb", 3),
    ("sl", 2),
    ("sv", 2),
    ("xyz", 3),
];

/// Parse a color in functional notation.
///
/// The channels are comma-separated numbers, each optionally followed by a
/// percent sign, which is ignored. After the channels required by the
/// format, an optional alpha may follow. Opaque alpha is the default.
fn parse_function(s: &str) -> Result<Color, ColorFormatError> {
    // Munge function name
    let (name, arity, rest) = FUNCTIONS
        .iter()
        .filter_map(|(name, arity)| s.strip_prefix(name).map(|rest| (*name, *arity, rest)))
        .next()
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    #[inline]
    fn parse_channel(s: &str) -> Result<Float, ColorFormatError> {
        let t = s.trim();
        let t = t.strip_suffix('%').unwrap_or(t).trim_end();
        if t.is_empty() {
            return Err(ColorFormatError::MissingChannel);
        }
        t.parse().map_err(|_| ColorFormatError::MalformedChannel)
    }

    // Munge channels
    let mut channels = [0.0; 5];
    let mut count = 0;
    for part in body.split(',') {
        if count == arity + 1 {
            return Err(ColorFormatError::TooManyChannels);
        }
        channels[count] = parse_channel(part)?;
        count += 1;
    }

    if count < arity {
        return Err(ColorFormatError::MissingChannel);
    }
    let alpha = if count > arity { channels[arity] } else { 1.0 };

    let [c1, c2, c3, c4, _] = channels;
    Ok(match name {
        "cmyk" => Color::Cmyk(Cmyk::new(c1, c2, c3, c4).with_alpha(alpha)),
        "hsl" => Color::Hsl(Hsl::new(c1, c2, c3).with_alpha(alpha)),
        "hsv" => Color::Hsv(Hsv::new(c1, c2, c3).with_alpha(alpha)),
        "lab" => Color::Lab(Lab::new(c1, c2, c3).with_alpha(alpha)),
        "rgb" => Color::Rgb(Rgb::new(c1, c2, c3).with_alpha(alpha)),
        "sl" => Color::Sl(Sl {
            saturation: c1,
            lightness: c2,
            alpha,
        }),
        "sv" => Color::Sv(Sv {
            saturation: c1,
            value: c2,
            alpha,
        }),
        _ => Color::Xyz(Xyz::new(c1, c2, c3).with_alpha(alpha)),
    })
}

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal notation and the functional
/// notations `cmyk()`, `hsl()`, `hsv()`, `lab()`, `rgb()`, `sl()`, `sv()`,
/// and `xyz()`. Before parsing, it trims leading and trailing white space and
/// converts ASCII letters to lowercase. It does not validate channel ranges.
pub(crate) fn parse(s: &str) -> Result<Color, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        Ok(Color::Hex(parse_hex(s)?))
    } else {
        parse_function(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Write the number with the given rounding factor and without trailing zeros.
fn format_number(
    value: Float,
    factor: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    // Formatting floats with a precision produces trailing zeros. Rounding
    // avoids them, for the most part. If the fractional part is zero, we do
    // need an explicit precision of zero.
    let c = (value * factor).round() / factor;
    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

/// Write the channels in functional notation.
///
/// Each channel is a pair of number and percent flag. This function respects
/// the formatter's precision, defaulting to 2 digits past the decimal, and
/// drops trailing zeros. The alpha always comes last.
fn format_function(
    name: &str,
    channels: &[(Float, bool)],
    alpha: Float,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let factor = (10.0 as Float).powi(f.precision().unwrap_or(2) as i32);

    f.write_str(name)?;
    f.write_str("(")?;
    for &(value, percent) in channels {
        format_number(value, factor, f)?;
        f.write_str(if percent { "%, " } else { ", " })?;
    }
    format_number(alpha, factor, f)?;
    f.write_str(")")
}

pub(crate) fn format_cmyk(color: &Cmyk, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "cmyk",
        &[
            (color.cyan, true),
            (color.magenta, true),
            (color.yellow, true),
            (color.key, true),
        ],
        color.alpha,
        f,
    )
}

pub(crate) fn format_hex(color: &Hex, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&color.hex)
}

pub(crate) fn format_hsl(color: &Hsl, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "hsl",
        &[
            (color.hue, false),
            (color.saturation, true),
            (color.lightness, true),
        ],
        color.alpha,
        f,
    )
}

pub(crate) fn format_hsv(color: &Hsv, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "hsv",
        &[
            (color.hue, false),
            (color.saturation, true),
            (color.value, true),
        ],
        color.alpha,
        f,
    )
}

pub(crate) fn format_lab(color: &Lab, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "lab",
        &[(color.l, false), (color.a, false), (color.b, false)],
        color.alpha,
        f,
    )
}

pub(crate) fn format_rgb(color: &Rgb, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "rgb",
        &[
            (color.red, false),
            (color.green, false),
            (color.blue, false),
        ],
        color.alpha,
        f,
    )
}

pub(crate) fn format_sl(color: &Sl, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "sl",
        &[(color.saturation, true), (color.lightness, true)],
        color.alpha,
        f,
    )
}

pub(crate) fn format_sv(color: &Sv, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "sv",
        &[(color.saturation, true), (color.value, true)],
        color.alpha,
        f,
    )
}

pub(crate) fn format_xyz(color: &Xyz, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    format_function(
        "xyz",
        &[(color.x, false), (color.y, false), (color.z, false)],
        color.alpha,
        f,
    )
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_function, parse_hex, ColorFormatError};
    use crate::{rgb, Cmyk, Color, Hsl, Lab, Rgb, Sl, Sv, Xyz};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        let hex = parse_hex("#123")?;
        assert_eq!(hex.hex, "#112233FF");
        assert_eq!(hex.alpha, "FF");
        assert_eq!(hex.num_alpha, 1.0);

        let hex = parse_hex("#abcdef80")?;
        assert_eq!(hex.hex, "#ABCDEF80");
        assert_eq!(hex.alpha, "80");
        assert_eq!(hex.num_alpha, 128.0 / 255.0);

        assert_eq!(parse_hex("#1234")?.hex, "#11223344");
        assert_eq!(parse_hex("  #C0FFEE ")?.hex, "#C0FFEEFF");

        assert_eq!(parse_hex("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hex("#ff"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#12345"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#\u{1F4A9}00"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+f0"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(parse_function("rgb(255, 0, 0)"), Ok(rgb!(255, 0, 0)));
        assert_eq!(
            parse_function("hsl (120, 50%, 25%, 0.5)"),
            Ok(Color::Hsl(Hsl::new(120.0, 50.0, 25.0).with_alpha(0.5)))
        );
        assert_eq!(
            parse_function("cmyk(0%, 100%, 100%, 0%)"),
            Ok(Color::Cmyk(Cmyk::new(0.0, 100.0, 100.0, 0.0)))
        );
        assert_eq!(
            parse_function("lab(53.2,80.1,-67.2)"),
            Ok(Color::Lab(Lab::new(53.2, 80.1, -67.2)))
        );
        assert_eq!(
            parse_function("sl(10%, 20%)"),
            Ok(Color::Sl(Sl::new(10.0, 20.0)))
        );
        assert_eq!(
            parse_function("sv(10, 20, 0)"),
            Ok(Color::Sv(Sv {
                saturation: 10.0,
                value: 20.0,
                alpha: 0.0
            }))
        );
        assert_eq!(
            parse_function("xyz(1, 2, 3)"),
            Ok(Color::Xyz(Xyz::new(1.0, 2.0, 3.0)))
        );

        assert_eq!(
            parse_function("oklab(1, 1, 1)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_function("rgb 1, 2, 3)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_function("rgb(1, 2, 3"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_function("rgb(1, 2)"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_function("rgb(1, , 3)"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_function("rgb()"),
            Err(ColorFormatError::MissingChannel)
        );
        assert_eq!(
            parse_function("sl(1, 2, 0.5, 4)"),
            Err(ColorFormatError::TooManyChannels)
        );
        assert_eq!(
            parse_function("rgb(1, two, 3)"),
            Err(ColorFormatError::MalformedChannel)
        );
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("   RGB(1, 2, 3)  ")?, rgb!(1, 2, 3));
        assert_eq!(parse("#FfF")?.to_string(), "#FFFFFFFF");
        assert_eq!(parse("whatever"), Err(ColorFormatError::UnknownFormat));
        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(rgb!(255, 0, 0).to_string(), "rgb(255, 0, 0, 1)");
        assert_eq!(
            Color::Cmyk(Cmyk::new(0.0, 100.0, 100.0, 0.0)).to_string(),
            "cmyk(0%, 100%, 100%, 0%, 1)"
        );
        assert_eq!(
            Color::Hsl(Hsl::new(210.125, 33.375, 50.0).with_alpha(0.5)).to_string(),
            "hsl(210.13, 33.38%, 50%, 0.5)"
        );
        assert_eq!(
            format!("{:.0}", Color::Hsl(Hsl::new(210.75, 33.25, 50.0))),
            "hsl(211, 33%, 50%, 1)"
        );
        assert_eq!(
            format!("{:.3}", Color::Xyz(Xyz::new(41.24, 21.26, 1.9333))),
            "xyz(41.24, 21.26, 1.933, 1)"
        );
        assert_eq!(
            Color::Sl(Sl::new(100.0, 50.0)).to_string(),
            "sl(100%, 50%, 1)"
        );
        assert_eq!(Rgb::new(1.0, 2.0, 3.0).to_string(), "rgb(1, 2, 3, 1)");
    }

    #[test]
    fn test_format_then_parse() -> Result<(), ColorFormatError> {
        for color in [
            rgb!(12, 34, 56),
            Color::Hsl(Hsl::new(12.5, 34.25, 56.75).with_alpha(0.25)),
            Color::Cmyk(Cmyk::new(1.0, 2.0, 3.0, 4.0)),
            Color::Sv(Sv::new(5.0, 6.0)),
        ] {
            assert_eq!(parse(&color.to_string())?, color);
        }
        Ok(())
    }
}
