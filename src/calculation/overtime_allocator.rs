//! Weekly overtime allocation into double and triple tiers.
//!
//! ## Allocation Rule
//!
//! Each day's overtime is the time worked beyond the daily threshold. The
//! week carries one shared pool of double-rate hours (the weekly cap):
//! - Days are processed strictly in date order, Monday first
//! - A day's overtime draws from the pool until the pool is empty
//! - Whatever the pool cannot cover is paid at the triple rate
//!
//! Earlier days consume the pool first, so moving the same overtime to a
//! different day can change the double/triple split. The fold below can not
//! be reordered or parallelized.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overtime hours for one day and their split between tiers.
///
/// `double_hours + triple_hours == overtime_hours` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours beyond the daily threshold.
    pub overtime_hours: Decimal,
    /// Overtime hours covered by the weekly double-rate pool.
    pub double_hours: Decimal,
    /// Overtime hours left over once the pool is exhausted.
    pub triple_hours: Decimal,
    /// Double-rate hours still in the pool after this day.
    pub remaining_double_capacity: Decimal,
}

/// Returns the overtime for a single day: hours worked beyond the threshold.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::daily_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let threshold = Decimal::from_str("9.5").unwrap();
/// assert_eq!(daily_overtime(Decimal::from(12), threshold), Decimal::from_str("2.5").unwrap());
/// assert_eq!(daily_overtime(Decimal::from(8), threshold), Decimal::ZERO);
/// ```
pub fn daily_overtime(worked_hours: Decimal, daily_threshold: Decimal) -> Decimal {
    (worked_hours - daily_threshold).max(Decimal::ZERO)
}

/// Splits each day's overtime into double and triple hours under a shared weekly cap.
///
/// `daily_hours` must be in date order, Monday first. The returned splits
/// are in the same order. A negative cap is treated as zero.
///
/// # Arguments
///
/// * `daily_hours` - Worked hours per day
/// * `daily_threshold` - Hours per day after which overtime accrues
/// * `weekly_double_cap` - Double-rate hours available for the whole week
///
/// # Examples
///
/// ## Cap consumed by earlier days
///
/// ```
/// use overtime_engine::calculation::allocate_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
///
/// // Overtime of 5h on Monday and 6h on Wednesday, 9h weekly cap
/// let hours = [dec("14.5"), dec("8"), dec("15.5")];
/// let splits = allocate_overtime(&hours, dec("9.5"), dec("9"));
///
/// assert_eq!(splits[0].double_hours, dec("5"));
/// assert_eq!(splits[0].triple_hours, Decimal::ZERO);
/// assert_eq!(splits[2].double_hours, dec("4"));
/// assert_eq!(splits[2].triple_hours, dec("2"));
/// ```
pub fn allocate_overtime(
    daily_hours: &[Decimal],
    daily_threshold: Decimal,
    weekly_double_cap: Decimal,
) -> Vec<OvertimeSplit> {
    daily_hours
        .iter()
        .scan(weekly_double_cap.max(Decimal::ZERO), |remaining, &hours| {
            let overtime = daily_overtime(hours, daily_threshold);
            let double = overtime.min(*remaining);
            *remaining -= double;

            Some(OvertimeSplit {
                overtime_hours: overtime,
                double_hours: double,
                triple_hours: overtime - double,
                remaining_double_capacity: *remaining,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn hours(values: &[&str]) -> Vec<Decimal> {
        values.iter().map(|v| dec(v)).collect()
    }

    fn threshold() -> Decimal {
        dec("9.5")
    }

    fn cap() -> Decimal {
        dec("9")
    }

    // ==========================================================================
    // OA-001: no overtime anywhere
    // ==========================================================================
    #[test]
    fn test_oa_001_no_overtime() {
        let splits = allocate_overtime(
            &hours(&["8", "9.5", "0", "9", "9.5", "0", "0"]),
            threshold(),
            cap(),
        );

        assert_eq!(splits.len(), 7);
        for split in &splits {
            assert_eq!(split.overtime_hours, Decimal::ZERO);
            assert_eq!(split.double_hours, Decimal::ZERO);
            assert_eq!(split.triple_hours, Decimal::ZERO);
            assert_eq!(split.remaining_double_capacity, cap());
        }
    }

    // ==========================================================================
    // OA-002: overtime [5, 0, 6] exhausts the cap on day three
    // ==========================================================================
    #[test]
    fn test_oa_002_cap_exhausted_mid_week() {
        let splits = allocate_overtime(&hours(&["14.5", "9.5", "15.5"]), threshold(), cap());

        assert_eq!(splits[0].double_hours, dec("5"));
        assert_eq!(splits[0].triple_hours, dec("0"));
        assert_eq!(splits[0].remaining_double_capacity, dec("4"));

        assert_eq!(splits[1].overtime_hours, dec("0"));
        assert_eq!(splits[1].remaining_double_capacity, dec("4"));

        assert_eq!(splits[2].overtime_hours, dec("6"));
        assert_eq!(splits[2].double_hours, dec("4"));
        assert_eq!(splits[2].triple_hours, dec("2"));
        assert_eq!(splits[2].remaining_double_capacity, dec("0"));
    }

    // ==========================================================================
    // OA-003: reordering the same overtime changes the split
    // ==========================================================================
    #[test]
    fn test_oa_003_order_sensitive() {
        let forward = allocate_overtime(&hours(&["14.5", "9.5", "15.5"]), threshold(), cap());
        let reversed = allocate_overtime(&hours(&["15.5", "9.5", "14.5"]), threshold(), cap());

        // Forward: 5 double, then 4 double + 2 triple
        // Reversed: 6 double, then 3 double + 2 triple
        assert_eq!(reversed[0].double_hours, dec("6"));
        assert_eq!(reversed[2].double_hours, dec("3"));
        assert_eq!(reversed[2].triple_hours, dec("2"));

        assert_ne!(forward[0].double_hours, reversed[0].double_hours);
        assert_ne!(forward[2].double_hours, reversed[2].double_hours);
    }

    // ==========================================================================
    // OA-004: once the cap is spent every later hour is triple
    // ==========================================================================
    #[test]
    fn test_oa_004_all_triple_after_exhaustion() {
        let splits = allocate_overtime(
            &hours(&["19.5", "12", "11.5", "10", "0", "13", "0"]),
            threshold(),
            cap(),
        );

        // Monday: 10h overtime, 9 double, 1 triple
        assert_eq!(splits[0].double_hours, dec("9"));
        assert_eq!(splits[0].triple_hours, dec("1"));

        for split in &splits[1..] {
            assert_eq!(split.double_hours, Decimal::ZERO);
            assert_eq!(split.triple_hours, split.overtime_hours);
            assert_eq!(split.remaining_double_capacity, Decimal::ZERO);
        }
        assert_eq!(splits[5].triple_hours, dec("3.5"));
    }

    // ==========================================================================
    // OA-005: overtime exactly equal to the cap
    // ==========================================================================
    #[test]
    fn test_oa_005_overtime_equals_cap() {
        let splits = allocate_overtime(&hours(&["18.5", "11"]), threshold(), cap());

        assert_eq!(splits[0].double_hours, dec("9"));
        assert_eq!(splits[0].triple_hours, Decimal::ZERO);
        assert_eq!(splits[1].double_hours, Decimal::ZERO);
        assert_eq!(splits[1].triple_hours, dec("1.5"));
    }

    #[test]
    fn test_fractional_overtime_splits_exactly() {
        let third = dec("1") / dec("3");
        let day = threshold() + dec("9") + third;
        let splits = allocate_overtime(&[day], threshold(), cap());

        assert_eq!(splits[0].double_hours, dec("9"));
        assert_eq!(
            splits[0].double_hours + splits[0].triple_hours,
            splits[0].overtime_hours
        );
    }

    #[test]
    fn test_zero_cap_makes_everything_triple() {
        let splits = allocate_overtime(&hours(&["12"]), threshold(), Decimal::ZERO);
        assert_eq!(splits[0].double_hours, Decimal::ZERO);
        assert_eq!(splits[0].triple_hours, dec("2.5"));
    }

    #[test]
    fn test_negative_cap_treated_as_zero() {
        let splits = allocate_overtime(&hours(&["12"]), threshold(), dec("-3"));
        assert_eq!(splits[0].double_hours, Decimal::ZERO);
        assert_eq!(splits[0].triple_hours, dec("2.5"));
        assert_eq!(splits[0].remaining_double_capacity, Decimal::ZERO);
    }

    #[test]
    fn test_empty_input() {
        assert!(allocate_overtime(&[], threshold(), cap()).is_empty());
    }

    #[test]
    fn test_daily_overtime_at_threshold_is_zero() {
        assert_eq!(daily_overtime(dec("9.5"), threshold()), Decimal::ZERO);
        assert_eq!(daily_overtime(dec("9.51"), threshold()), dec("0.01"));
    }
}
