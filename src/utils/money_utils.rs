use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DECIMAL_PRECISION;

/// Amount still needed to lift the absolute value of `transaction_amount` up
/// to the next whole multiple of `unit_amount`.
///
/// The quotient is taken at scale 0 with ceiling semantics, so any fractional
/// leftover counts as one more unit. Returns a value in `[0, unit_amount)`;
/// zero when the absolute amount is already an exact multiple.
///
/// `unit_amount` must be strictly positive. Rule amounts are validated
/// upstream, so no defensive check is made here.
pub fn round_up_to_multiple(transaction_amount: Decimal, unit_amount: Decimal) -> Decimal {
    let absolute = transaction_amount.abs();
    // How many whole units cover the amount
    let units = (absolute / unit_amount).ceil();
    units * unit_amount - absolute
}

/// Per-goal share of `amount` when contributing to `goal_count` goals.
///
/// A single goal receives the full amount untouched, with no rounding
/// applied. Multiple goals each receive the same quotient rounded to two
/// decimal places, any remainder rounding away from zero. The shares are not
/// reconciled against `amount`, so the aggregate across goals may drift by a
/// cent or two.
pub fn split_across_goals(amount: Decimal, goal_count: usize) -> Decimal {
    if goal_count <= 1 {
        return amount;
    }
    let share = amount / Decimal::from(goal_count as u64);
    share.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::AwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_up_to_multiple_returns_gap_to_next_multiple() {
        assert_eq!(round_up_to_multiple(dec!(-3.55), dec!(2.00)), dec!(0.45));
        assert_eq!(round_up_to_multiple(dec!(-7.51), dec!(1.5)), dec!(1.49));
    }

    #[test]
    fn round_up_to_multiple_is_zero_for_exact_multiples() {
        assert_eq!(round_up_to_multiple(dec!(-4.00), dec!(2.00)), dec!(0));
        assert_eq!(round_up_to_multiple(dec!(-1.5), dec!(0.5)), dec!(0));
        assert_eq!(round_up_to_multiple(dec!(0), dec!(2.00)), dec!(0));
    }

    #[test]
    fn round_up_to_multiple_ignores_sign() {
        assert_eq!(round_up_to_multiple(dec!(3.55), dec!(2.00)), dec!(0.45));
        assert_eq!(
            round_up_to_multiple(dec!(-3.55), dec!(2.00)),
            round_up_to_multiple(dec!(3.55), dec!(2.00))
        );
    }

    #[test]
    fn round_up_to_multiple_stays_below_unit() {
        let unit = dec!(2.00);
        for amount in [dec!(-0.01), dec!(-1.99), dec!(-2.01), dec!(-95.50), dec!(-13.14)] {
            let gap = round_up_to_multiple(amount, unit);
            assert!(gap >= dec!(0), "gap {} for {}", gap, amount);
            assert!(gap < unit, "gap {} for {}", gap, amount);
        }
    }

    #[test]
    fn split_across_goals_single_goal_is_untouched() {
        assert_eq!(split_across_goals(dec!(10.005), 1), dec!(10.005));
        assert_eq!(split_across_goals(dec!(0.45), 0), dec!(0.45));
    }

    #[test]
    fn split_across_goals_rounds_to_two_places() {
        assert_eq!(split_across_goals(dec!(100.00), 3), dec!(33.34));
        assert_eq!(split_across_goals(dec!(10.00), 3), dec!(3.34));
        assert_eq!(split_across_goals(dec!(4.50), 2), dec!(2.25));
        assert_eq!(split_across_goals(dec!(3.00), 2), dec!(1.50));
    }

    #[test]
    fn split_across_goals_scale_is_two() {
        assert_eq!(split_across_goals(dec!(10.00), 3).scale(), 2);
        assert_eq!(split_across_goals(dec!(100.00), 7).scale(), 2);
    }
}
