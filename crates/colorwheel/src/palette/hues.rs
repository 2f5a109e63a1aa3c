//! Hue arithmetic for color harmonies.
//!
//! Each function computes the hues a scheme derives from the base hue,
//! excluding the base hue itself. All results are wrapped into `0..360`.
//! Where a scheme involves randomness, the caller draws the random
//! quantity and passes it in, so that these functions remain pure.

use crate::core::sanitize_radial;
use crate::Float;

/// The intervals for diadic palettes in degrees, each paired with its
/// weight.
pub const DIADIC_INTERVALS: [(Float, u32); 7] = [
    (40.0, 10),
    (45.0, 15),
    (50.0, 20),
    (55.0, 30),
    (60.0, 15),
    (65.0, 5),
    (70.0, 5),
];

/// The range of tetradic offsets in degrees.
pub const TETRADIC_OFFSET: [Float; 2] = [20.0, 66.0];

/// The range of split-complementary modifiers in degrees.
pub const SPLIT_COMPLEMENTARY_MODIFIER: [Float; 2] = [20.0, 30.0];

/// The range of hexadic distances in degrees.
pub const HEXADIC_DISTANCE: [Float; 2] = [10.0, 80.0];

/// The largest spread of analogous hues in degrees.
pub const ANALOGOUS_MAX_SPREAD: Float = 60.0;

/// Compute the complementary hue.
///
/// ```
/// # use colorwheel::palette::hues::complementary_hues;
/// assert_eq!(complementary_hues(200.0), [20.0]);
/// ```
pub fn complementary_hues(hue: Float) -> [Float; 1] {
    [sanitize_radial(hue + 180.0)]
}

/// Compute the two triadic hues.
///
/// ```
/// # use colorwheel::palette::hues::triadic_hues;
/// assert_eq!(triadic_hues(0.0), [120.0, 240.0]);
/// ```
pub fn triadic_hues(hue: Float) -> [Float; 2] {
    [sanitize_radial(hue + 120.0), sanitize_radial(hue + 240.0)]
}

/// Compute the three tetradic hues.
///
/// The first hue is opposite the base hue. The second hue is 90 degrees
/// plus the signed offset away from the base hue, and the third is opposite
/// the second. The offset's magnitude should fall into [`TETRADIC_OFFSET`].
pub fn tetradic_hues(hue: Float, offset: Float) -> [Float; 3] {
    let third = hue + 90.0 + offset;
    [
        sanitize_radial(hue + 180.0),
        sanitize_radial(third),
        sanitize_radial(third + 180.0),
    ]
}

/// Determine the smallest spread of analogous hues for a palette with the
/// given number of swatches.
///
/// The spread grows by 9 degrees per swatch, starting at 10 degrees for two
/// swatches and capped at [`ANALOGOUS_MAX_SPREAD`].
pub fn analogous_min_spread(num_boxes: usize) -> Float {
    let extra = num_boxes.saturating_sub(2).min(6) as Float;
    (10.0 + extra * 9.0).min(ANALOGOUS_MAX_SPREAD)
}

/// Compute the analogous hues for a palette with the given number of
/// swatches.
///
/// The spread is divided evenly into `num_boxes - 1` steps and the hues
/// follow the base hue at one step each, with the last hue at the full
/// spread. The result has one hue less than `num_boxes`.
///
/// ```
/// # use colorwheel::palette::hues::analogous_hues;
/// assert_eq!(analogous_hues(350.0, 4, 45.0), vec![5.0, 20.0, 35.0]);
/// ```
pub fn analogous_hues(hue: Float, num_boxes: usize, spread: Float) -> Vec<Float> {
    if num_boxes < 2 {
        return Vec::new();
    }

    let step = spread / (num_boxes - 1) as Float;
    (1..num_boxes)
        .map(|index| sanitize_radial(hue + index as Float * step))
        .collect()
}

/// Compute the two split-complementary hues, which neighbor the
/// complementary hue at the given modifier's distance.
pub fn split_complementary_hues(hue: Float, modifier: Float) -> [Float; 2] {
    [
        sanitize_radial(hue + 180.0 + modifier),
        sanitize_radial(hue + 180.0 - modifier),
    ]
}

/// Compute the five hexadic hues.
///
/// The hues are opposite the base hue, the given distance away in both
/// directions, and opposite those two.
pub fn hexadic_hues(hue: Float, distance: Float) -> [Float; 5] {
    [
        sanitize_radial(hue + 180.0),
        sanitize_radial(hue + distance),
        sanitize_radial(hue + distance + 180.0),
        sanitize_radial(hue - distance),
        sanitize_radial(hue - distance + 180.0),
    ]
}

/// Compute the diadic hue at the given interval.
pub fn diadic_hues(hue: Float, interval: Float) -> [Float; 1] {
    [sanitize_radial(hue + interval)]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fixed_schemes() {
        assert_eq!(complementary_hues(0.0), [180.0]);
        assert_eq!(complementary_hues(270.0), [90.0]);
        assert_eq!(triadic_hues(300.0), [60.0, 180.0]);
        assert_eq!(diadic_hues(340.0, 55.0), [35.0]);
    }

    #[test]
    fn test_tetradic() {
        assert_eq!(tetradic_hues(0.0, 30.0), [180.0, 120.0, 300.0]);
        assert_eq!(tetradic_hues(10.0, -20.0), [190.0, 80.0, 260.0]);
    }

    #[test]
    fn test_split_complementary() {
        assert_eq!(split_complementary_hues(0.0, 25.0), [205.0, 155.0]);
        assert_eq!(split_complementary_hues(170.0, 20.0), [10.0, 330.0]);
    }

    #[test]
    fn test_hexadic() {
        assert_eq!(
            hexadic_hues(0.0, 30.0),
            [180.0, 30.0, 210.0, 330.0, 150.0]
        );
    }

    #[test]
    fn test_analogous() {
        assert_eq!(analogous_min_spread(2), 10.0);
        assert_eq!(analogous_min_spread(3), 19.0);
        assert_eq!(analogous_min_spread(7), 55.0);
        assert_eq!(analogous_min_spread(8), 60.0);
        assert_eq!(analogous_min_spread(100), 60.0);

        assert_eq!(analogous_hues(0.0, 2, 10.0), vec![10.0]);
        assert_eq!(analogous_hues(0.0, 3, 25.0), vec![12.5, 25.0]);
        assert!(analogous_hues(0.0, 1, 60.0).is_empty());
        assert_eq!(analogous_hues(0.0, 10, 60.0).len(), 9);

        // Large palettes still spread out.
        let hues = analogous_hues(100.0, 70, 60.0);
        assert_eq!(hues.len(), 69);
        assert!(hues.windows(2).all(|pair| pair[1] > pair[0]), "{:?}", hues);
        assert!((hues[68] - 160.0).abs() < 1e-9, "{:?}", hues);
    }

    #[test]
    fn test_diadic_table() {
        assert_eq!(DIADIC_INTERVALS.iter().map(|(_, w)| w).sum::<u32>(), 100);
        assert!(DIADIC_INTERVALS
            .iter()
            .all(|(interval, _)| (40.0..=70.0).contains(interval)));
    }
}
