mod conversion;
mod equality;
mod format;
mod math;
mod string;
mod validate;

// conversion
pub use conversion::{
    cmyk_to_hex, cmyk_to_hsl, cmyk_to_hsv, cmyk_to_lab, cmyk_to_rgb, cmyk_to_xyz, hex_to_cmyk,
    hex_to_hsl, hex_to_hsv, hex_to_lab, hex_to_rgb, hex_to_xyz, hsl_to_cmyk, hsl_to_hex,
    hsl_to_hsv, hsl_to_lab, hsl_to_rgb, hsl_to_sl, hsl_to_xyz, hsv_to_cmyk, hsv_to_hex,
    hsv_to_hsl, hsv_to_lab, hsv_to_rgb, hsv_to_sv, hsv_to_xyz, lab_to_cmyk, lab_to_hex,
    lab_to_hsl, lab_to_hsv, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_hex,
    rgb_to_hsl, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_cmyk, xyz_to_hsl, xyz_to_hsv,
    xyz_to_lab, xyz_to_rgb,
};

// equality
pub use equality::to_eq_bits;

// format
pub use format::ColorFormat;

// math
pub(crate) use math::FloatExt;
pub use math::{
    apply_gamma_correction, hue_to_rgb, remove_gamma_correction, sanitize_alpha, sanitize_byte,
    sanitize_lab_ab, sanitize_lab_l, sanitize_percentile, sanitize_radial, sanitize_xyz_x,
    sanitize_xyz_y, sanitize_xyz_z,
};

// string
pub(crate) use string::{
    format_cmyk, format_hex, format_hsl, format_hsv, format_lab, format_rgb, format_sl, format_sv,
    format_xyz, parse, parse_hex,
};

// validate
pub use validate::{
    is_alpha, is_byte, is_cmyk_color, is_hex_color, is_hex_string, is_hsl_color, is_hsv_color,
    is_lab_ab, is_lab_color, is_percentile, is_radial, is_rgb_color, is_sl_color, is_sv_color,
    is_valid_cmyk, is_valid_color, is_valid_hex, is_valid_hsl, is_valid_hsv, is_valid_lab,
    is_valid_rgb, is_valid_sl, is_valid_sv, is_valid_xyz, is_xyz_color,
};
