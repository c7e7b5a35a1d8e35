//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits companion prices are quoted with.
pub const PRESENTMENT_SCALE: u32 = 1;

/// Convert a shop-currency amount into presentment currency.
///
/// The product is computed exactly, rounded half away from zero to one
/// fractional digit, and always carries exactly one fractional digit
/// (`5 × 2` is `10.0`, `5.0 × 1.23` is `6.2`).
///
/// Returns `None` if the multiplication overflows, or if the result is too
/// large to carry a fractional digit.
pub fn presentment_price(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    let converted = amount.checked_mul(rate)?;

    let mut rounded =
        converted.round_dp_with_strategy(PRESENTMENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRESENTMENT_SCALE);

    // rescale stops short of the target when the mantissa cannot grow
    (rounded.scale() == PRESENTMENT_SCALE).then_some(rounded)
}
