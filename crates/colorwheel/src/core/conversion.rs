use super::math::{
    apply_gamma_correction, hue_to_rgb, remove_gamma_correction, sanitize_alpha, sanitize_byte,
    sanitize_lab_ab, sanitize_lab_l, sanitize_percentile, sanitize_radial, sanitize_xyz_x,
    sanitize_xyz_y, sanitize_xyz_z,
};
use super::validate::{
    is_valid_cmyk, is_valid_hex, is_valid_hsl, is_valid_hsv, is_valid_lab, is_valid_rgb,
    is_valid_xyz,
};
use crate::color::limits::{REF_X, REF_Y, REF_Z};
use crate::{Cmyk, Float, Hex, Hsl, Hsv, Lab, Rgb, Sl, Sv, Xyz};

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Determine the hue in degrees for the given sRGB coordinates, their
/// maximum, and the difference between maximum and minimum.
#[inline]
fn hue_sector(r: Float, g: Float, b: Float, max: Float, delta: Float) -> Float {
    if delta == 0.0 {
        return 0.0;
    }

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    h * 60.0
}

// --------------------------------------------------------------------------------------------------------------------
// All coordinate functions below use sRGB with unit range as their hub.

/// Convert sRGB coordinates to hue, saturation, and lightness.
fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let saturation = if delta == 0.0 {
        0.0
    } else if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    [
        hue_sector(r, g, b, max, delta),
        saturation * 100.0,
        lightness * 100.0,
    ]
}

/// Convert hue, saturation, and lightness to sRGB coordinates.
fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

/// Convert sRGB coordinates to hue, saturation, and value.
fn srgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    [
        hue_sector(r, g, b, max, delta),
        saturation * 100.0,
        max * 100.0,
    ]
}

/// Convert hue, saturation, and value to sRGB coordinates.
fn hsv_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *value;
    let s = s / 100.0;
    let v = v / 100.0;

    let sector = h / 60.0;
    let f = sector - sector.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (sector.floor() as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert sRGB coordinates to cyan, magenta, yellow, and key percentages.
fn srgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let key = 1.0 - r.max(g).max(b);

    if key >= 1.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let white = 1.0 - key;
    [
        (1.0 - r - key) / white * 100.0,
        (1.0 - g - key) / white * 100.0,
        (1.0 - b - key) / white * 100.0,
        key * 100.0,
    ]
}

/// Convert cyan, magenta, yellow, and key percentages to sRGB coordinates.
fn cmyk_to_srgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = *value;
    let white = 1.0 - k / 100.0;

    [
        (1.0 - c / 100.0) * white,
        (1.0 - m / 100.0) * white,
        (1.0 - y / 100.0) * white,
    ]
}

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2406, -1.5372, -0.4986 ],
    [ -0.9689,  1.8758,  0.0415 ],
    [  0.0557, -0.2040,  1.0570 ],
];

/// Convert sRGB coordinates to XYZ scaled to `0..=100`.
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear = [
        remove_gamma_correction(value[0]) * 100.0,
        remove_gamma_correction(value[1]) * 100.0,
        remove_gamma_correction(value[2]) * 100.0,
    ];
    multiply(&LINEAR_SRGB_TO_XYZ, &linear)
}

/// Convert XYZ scaled to `0..=100` to sRGB coordinates, clipping them to
/// unit range.
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *value;
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &[x / 100.0, y / 100.0, z / 100.0]);

    [
        apply_gamma_correction(r).clamp(0.0, 1.0),
        apply_gamma_correction(g).clamp(0.0, 1.0),
        apply_gamma_correction(b).clamp(0.0, 1.0),
    ]
}

const EPSILON: Float = 0.008856;
const KAPPA_SLOPE: Float = 7.787;
const OFFSET: Float = 16.0 / 116.0;

/// Convert XYZ to CIELAB using the D65 reference white.
fn xyz_to_cielab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA_SLOPE * t + OFFSET
        }
    }

    let fx = f(value[0] / REF_X);
    let fy = f(value[1] / REF_Y);
    let fz = f(value[2] / REF_Z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIELAB to XYZ using the D65 reference white.
fn cielab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inverse(t: Float) -> Float {
        let cube = t.powi(3);
        if cube > EPSILON {
            cube
        } else {
            (t - OFFSET) / KAPPA_SLOPE
        }
    }

    let [l, a, b] = *value;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [
        REF_X * f_inverse(fx),
        REF_Y * f_inverse(fy),
        REF_Z * f_inverse(fz),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// A color record that converts to and from sRGB coordinates.
///
/// The sRGB coordinates have unit range and are not rounded. Hence chained
/// conversions accumulate no rounding error until the target record is
/// assembled, which sanitizes all channels.
trait SrgbHub: Sized + Default + std::fmt::Debug {
    /// Determine whether this record is valid input for conversion.
    fn is_valid(&self) -> bool;

    /// Get this record's sRGB coordinates and alpha.
    fn to_srgb(&self) -> ([Float; 3], Float);

    /// Create a new, sanitized record from sRGB coordinates and alpha.
    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self;
}

impl SrgbHub for Cmyk {
    fn is_valid(&self) -> bool {
        is_valid_cmyk(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (
            cmyk_to_srgb(&[self.cyan, self.magenta, self.yellow, self.key]),
            self.alpha,
        )
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        let [c, m, y, k] = srgb_to_cmyk(coordinates);
        Self {
            cyan: sanitize_percentile(c),
            magenta: sanitize_percentile(m),
            yellow: sanitize_percentile(y),
            key: sanitize_percentile(k),
            alpha: sanitize_alpha(alpha),
        }
    }
}

impl SrgbHub for Hex {
    fn is_valid(&self) -> bool {
        is_valid_hex(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        // The digits have been validated, so slicing at byte offsets is safe.
        let channel = |index: usize| {
            self.hex
                .get(1 + 2 * index..3 + 2 * index)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .map_or(0.0, |byte| byte as Float / 255.0)
        };

        ([channel(0), channel(1), channel(2)], self.num_alpha)
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        let [r, g, b] = *coordinates;
        Hex::from_rgb(
            sanitize_byte(r * 255.0) as u8,
            sanitize_byte(g * 255.0) as u8,
            sanitize_byte(b * 255.0) as u8,
            alpha,
        )
    }
}

impl SrgbHub for Hsl {
    fn is_valid(&self) -> bool {
        is_valid_hsl(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (
            hsl_to_srgb(&[self.hue, self.saturation, self.lightness]),
            self.alpha,
        )
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        let [h, s, l] = srgb_to_hsl(coordinates);
        Self {
            hue: sanitize_radial(h),
            saturation: sanitize_percentile(s),
            lightness: sanitize_percentile(l),
            alpha: sanitize_alpha(alpha),
        }
    }
}

impl SrgbHub for Hsv {
    fn is_valid(&self) -> bool {
        is_valid_hsv(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (
            hsv_to_srgb(&[self.hue, self.saturation, self.value]),
            self.alpha,
        )
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        let [h, s, v] = srgb_to_hsv(coordinates);
        Self {
            hue: sanitize_radial(h),
            saturation: sanitize_percentile(s),
            value: sanitize_percentile(v),
            alpha: sanitize_alpha(alpha),
        }
    }
}

impl SrgbHub for Lab {
    fn is_valid(&self) -> bool {
        is_valid_lab(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (
            xyz_to_srgb(&cielab_to_xyz(&[self.l, self.a, self.b])),
            self.alpha,
        )
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        lab_record(&xyz_to_cielab(&srgb_to_xyz(coordinates)), alpha)
    }
}

impl SrgbHub for Rgb {
    fn is_valid(&self) -> bool {
        is_valid_rgb(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (
            [self.red / 255.0, self.green / 255.0, self.blue / 255.0],
            self.alpha,
        )
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        let [r, g, b] = *coordinates;
        Self {
            red: sanitize_byte(r * 255.0),
            green: sanitize_byte(g * 255.0),
            blue: sanitize_byte(b * 255.0),
            alpha: sanitize_alpha(alpha),
        }
    }
}

impl SrgbHub for Xyz {
    fn is_valid(&self) -> bool {
        is_valid_xyz(self)
    }

    fn to_srgb(&self) -> ([Float; 3], Float) {
        (xyz_to_srgb(&[self.x, self.y, self.z]), self.alpha)
    }

    fn from_srgb(coordinates: &[Float; 3], alpha: Float) -> Self {
        xyz_record(&srgb_to_xyz(coordinates), alpha)
    }
}

#[inline]
fn lab_record(value: &[Float; 3], alpha: Float) -> Lab {
    Lab {
        l: sanitize_lab_l(value[0]),
        a: sanitize_lab_ab(value[1]),
        b: sanitize_lab_ab(value[2]),
        alpha: sanitize_alpha(alpha),
    }
}

#[inline]
fn xyz_record(value: &[Float; 3], alpha: Float) -> Xyz {
    Xyz {
        x: sanitize_xyz_x(value[0]),
        y: sanitize_xyz_y(value[1]),
        z: sanitize_xyz_z(value[2]),
        alpha: sanitize_alpha(alpha),
    }
}

/// Log the rejected input and return the default for the target format.
#[cold]
fn reject<T: Default>(name: &str, input: &dyn std::fmt::Debug) -> T {
    log::warn!("{} rejects invalid color {:?} and returns default", name, input);
    T::default()
}

/// Convert the color by way of sRGB coordinates.
#[inline]
fn via_srgb<F: SrgbHub, T: SrgbHub>(name: &str, color: &F) -> T {
    if !color.is_valid() {
        return reject(name, color);
    }

    let (coordinates, alpha) = color.to_srgb();
    T::from_srgb(&coordinates, alpha)
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! via_srgb {
    ($($name:ident: $from:ident => $to:ident;)*) => {
        $(
            #[doc = concat!(
                "Convert a color from ", stringify!($from), " to ", stringify!($to), ".\n\n",
                "Invalid input results in the default ", stringify!($to), " color."
            )]
            #[must_use = "function returns a new color and does not mutate original value"]
            pub fn $name(color: &$from) -> $to {
                via_srgb(stringify!($name), color)
            }
        )*
    };
}

via_srgb! {
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

    rgb_to_cmyk: Rgb => Cmyk;
    rgb_to_hex: Rgb => Hex;
    rgb_to_hsl: Rgb => Hsl;
    rgb_to_hsv: Rgb => Hsv;
    rgb_to_lab: Rgb => Lab;
    rgb_to_xyz: Rgb => Xyz;

    xyz_to_cmyk: Xyz => Cmyk;
    xyz_to_hsl: Xyz => Hsl;
    xyz_to_hsv: Xyz => Hsv;
    xyz_to_rgb: Xyz => Rgb;
}

/// Convert a color from CIELAB to XYZ without a detour through sRGB.
///
/// Invalid input results in the default Xyz color.
#[must_use = "function returns a new color and does not mutate original value"]
pub fn lab_to_xyz(color: &Lab) -> Xyz {
    if !is_valid_lab(color) {
        return reject("lab_to_xyz", color);
    }
    xyz_record(&cielab_to_xyz(&[color.l, color.a, color.b]), color.alpha)
}

/// Convert a color from XYZ to CIELAB without a detour through sRGB.
///
/// Invalid input results in the default Lab color.
#[must_use = "function returns a new color and does not mutate original value"]
pub fn xyz_to_lab(color: &Xyz) -> Lab {
    if !is_valid_xyz(color) {
        return reject("xyz_to_lab", color);
    }
    lab_record(&xyz_to_cielab(&[color.x, color.y, color.z]), color.alpha)
}

/// Project an HSL color onto its saturation and lightness.
///
/// Invalid input results in the default Sl color.
#[must_use = "function returns a new color and does not mutate original value"]
pub fn hsl_to_sl(color: &Hsl) -> Sl {
    if !is_valid_hsl(color) {
        return reject("hsl_to_sl", color);
    }
    Sl {
        saturation: color.saturation,
        lightness: color.lightness,
        alpha: color.alpha,
    }
}

/// Project an HSV color onto its saturation and value.
///
/// Invalid input results in the default Sv color.
#[must_use = "function returns a new color and does not mutate original value"]
pub fn hsv_to_sv(color: &Hsv) -> Sv {
    if !is_valid_hsv(color) {
        return reject("hsv_to_sv", color);
    }
    Sv {
        saturation: color.saturation,
        value: color.value,
        alpha: color.alpha,
    }
}

// ====================================================================================================================
