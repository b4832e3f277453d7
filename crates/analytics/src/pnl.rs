use core_types::{Pnl, Side};
use rust_decimal::Decimal;

/// Rounds to 2 decimal places (banker's rounding) and pins the scale at 2 so
/// persisted values always read as `10.00`, never `10`.
pub(crate) fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Derives the profit/loss pair of a closed trade.
///
/// A long gains when the exit is above the entry, a short when it is below.
/// The percentage is taken against the entry price and is defined as zero
/// when the entry price is zero. Results that leave the `Decimal` range
/// collapse to zero, so this never fails.
pub fn compute_pnl(side: Side, entry_price: Decimal, exit_price: Decimal) -> Pnl {
    let absolute = match side {
        Side::Long => exit_price.checked_sub(entry_price),
        Side::Short => entry_price.checked_sub(exit_price),
    }
    .unwrap_or(Decimal::ZERO);

    let percent = if entry_price.is_zero() {
        Decimal::ZERO
    } else {
        absolute
            .checked_div(entry_price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    };

    Pnl {
        absolute: round2(absolute),
        percent: round2(percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn long_gains_when_price_rises() {
        let pnl = compute_pnl(Side::Long, dec!(100), dec!(110));
        assert_eq!(pnl.absolute, dec!(10.00));
        assert_eq!(pnl.percent, dec!(10.00));
    }

    #[test]
    fn short_loses_when_price_rises() {
        let pnl = compute_pnl(Side::Short, dec!(100), dec!(110));
        assert_eq!(pnl.absolute, dec!(-10.00));
        assert_eq!(pnl.percent, dec!(-10.00));
    }

    #[test]
    fn zero_entry_price_yields_zero_percent() {
        let pnl = compute_pnl(Side::Long, Decimal::ZERO, dec!(42.5));
        assert_eq!(pnl.absolute, dec!(42.50));
        assert_eq!(pnl.percent, Decimal::ZERO);
    }

    #[test]
    fn percent_uses_unrounded_difference() {
        // 0.005 / 3 * 100 = 0.1666.. -> 0.17, while the absolute rounds to 0.00 (half-even).
        let pnl = compute_pnl(Side::Long, dec!(3), dec!(3.005));
        assert_eq!(pnl.absolute, dec!(0.00));
        assert_eq!(pnl.percent, dec!(0.17));
    }

    #[test]
    fn outputs_are_scaled_to_two_places() {
        let pnl = compute_pnl(Side::Long, dec!(100), dec!(110));
        assert_eq!(pnl.absolute.to_string(), "10.00");
        assert_eq!(pnl.percent.to_string(), "10.00");
    }

    #[test]
    fn negative_prices_are_accepted() {
        let pnl = compute_pnl(Side::Long, dec!(-20), dec!(-10));
        assert_eq!(pnl.absolute, dec!(10.00));
        assert_eq!(pnl.percent, dec!(-50.00));
    }

    #[test]
    fn overflow_collapses_to_zero() {
        let pnl = compute_pnl(Side::Long, Decimal::MIN, Decimal::MAX);
        assert_eq!(pnl.absolute, Decimal::ZERO);
    }
}
