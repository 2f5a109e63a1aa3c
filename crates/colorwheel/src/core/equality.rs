use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two colors have the same format and
/// channels differing by less than the given tolerance.
///
/// Hexadecimal colors have no numeric channels and must be equal.
///
/// # Panics
///
/// This macro panics if the formats differ or a channel differs by the
/// tolerance or more. Its message places the colors below each other at the
/// beginning of subsequent lines for easy comparability.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr, $tolerance:expr $(,)?) => {
        let (c1, c2, tolerance) = (&$c1, &$c2, $tolerance);
        assert_eq!(
            c1.format(),
            c2.format(),
            "color formats differ:\n{:?}\n{:?}",
            c1,
            c2
        );
        let channels1 = c1.channels();
        let channels2 = c2.channels();
        if channels1.is_empty() {
            assert_eq!(c1, c2, "colors differ:\n{:?}\n{:?}", c1, c2);
        }
        for (n1, n2) in channels1.iter().zip(channels2.iter()) {
            assert!(
                (n1 - n2).abs() < tolerance,
                "color channels differ:\n{:?}\n{:?}",
                c1,
                c2
            );
        }
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::to_eq_bits;
    use crate::Float;

    #[test]
    fn test_to_eq_bits() {
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.1), to_eq_bits(0.2));
    }
}
