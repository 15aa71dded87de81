//! Fixed-precision rounding for prediction outputs.
//!
//! Every predicted metric has a fixed display precision: one decimal, two
//! decimals, or a whole count. Rounding happens once, inside the models, so
//! downstream consumers (including composite scores that fold in other
//! metrics) always see the same numbers the display shows.
//!
//! Ties round half away from zero, the behavior of [`f64::round`].

/// Rounds a value to one decimal place.
///
/// ```
/// use acetate_models::support::rounding::one_decimal;
///
/// assert_eq!(one_decimal(65.333), 65.3);
/// assert_eq!(one_decimal(4.25), 4.3);
/// ```
#[must_use]
pub fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds a value to two decimal places.
#[must_use]
pub fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds a value to the nearest whole count.
///
/// The cast saturates, so a non-physical negative input yields 0 rather
/// than wrapping.
#[must_use]
pub fn whole(value: f64) -> u32 {
    value.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn one_decimal_rounds_to_tenths() {
        assert_eq!(one_decimal(65.333_333), 65.3);
        assert_eq!(one_decimal(37.666_666), 37.7);
        assert_eq!(one_decimal(76.0), 76.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn one_decimal_ties_round_up() {
        assert_eq!(one_decimal(4.25), 4.3);
        assert_eq!(one_decimal(29.25), 29.3);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn two_decimals_rounds_to_hundredths() {
        assert_eq!(two_decimals(5.533_333), 5.53);
        assert_eq!(two_decimals(0.496_666), 0.5);
    }

    #[test]
    fn whole_rounds_half_away_from_zero() {
        assert_eq!(whole(62_333.333), 62_333);
        assert_eq!(whole(147.5), 148);
        assert_eq!(whole(98.5), 99);
    }

    #[test]
    fn whole_saturates_at_zero() {
        assert_eq!(whole(-3.0), 0);
        assert_eq!(whole(f64::NAN), 0);
    }
}
