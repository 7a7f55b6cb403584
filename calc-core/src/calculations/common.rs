//! Rounding helpers shared by the calculators.
//!
//! All rounding is half-up (midpoint away from zero), which matches how the
//! figures are presented to users.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_dp;
///
/// assert_eq!(round_dp(dec!(13.78262), 1), dec!(13.8));
/// assert_eq!(round_dp(dec!(3.63175), 4), dec!(3.6318));
/// ```
pub fn round_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3635.035)), dec!(3635.04));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_dp(value, 2)
}

/// Rounds a decimal value to the nearest whole currency unit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(105.5)), dec!(106));
/// assert_eq!(round_whole(dec!(1378.262)), dec!(1378));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    round_dp(value, 0)
}

/// Ceiling of `numerator / denominator` for room-style counts.
///
/// Returns 0 when `denominator` is 0.
pub fn div_ceil(
    numerator: u32,
    denominator: u32,
) -> u32 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(105.5)), dec!(106));
    }

    #[test]
    fn round_whole_rounds_to_nearest_unit() {
        assert_eq!(round_whole(dec!(251.6888)), dec!(252));
        assert_eq!(round_whole(dec!(371.0732)), dec!(371));
    }

    #[test]
    fn round_whole_drops_scale() {
        let result = round_whole(dec!(999999.999));

        assert_eq!(result, dec!(1000000));
        assert_eq!(result.scale(), 0);
    }

    // =========================================================================
    // round_dp tests
    // =========================================================================

    #[test]
    fn round_dp_to_one_place() {
        assert_eq!(round_dp(dec!(28.65587), 1), dec!(28.7));
    }

    // =========================================================================
    // div_ceil tests
    // =========================================================================

    #[test]
    fn div_ceil_rounds_up_partial_results() {
        assert_eq!(div_ceil(3, 2), 2);
        assert_eq!(div_ceil(4, 2), 2);
        assert_eq!(div_ceil(1, 2), 1);
    }

    #[test]
    fn div_ceil_handles_zero_denominator() {
        assert_eq!(div_ceil(5, 0), 0);
    }
}
