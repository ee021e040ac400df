//! Rounding and clamping shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to cents, with midpoints going away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use hvut_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7.625)), dec!(7.63));
/// assert_eq!(round_half_up(dec!(10.1666)), dec!(10.17));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative amounts to zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use hvut_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-12.00)), dec!(0));
/// assert_eq!(non_negative(dec!(96.00)), dec!(96.00));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
