//! Unit tests for the Money module
//!
//! Tests cover amount creation, arithmetic, checked operations and the
//! truncating application of fractional rates.

use core_kernel::{Amount, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_round_trips() {
        let a = Amount::from_minor(2000);
        assert_eq!(a.minor(), 2000);
        assert_eq!(i64::from(a), 2000);
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::ZERO.is_zero());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Amount::from_minor(-350)).unwrap();
        assert_eq!(json, "-350");

        let back: Amount = serde_json::from_str("2100").unwrap();
        assert_eq!(back, Amount::from_minor(2100));
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_sign_predicates() {
        assert!(Amount::from_minor(1).is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::ZERO.is_negative());
        assert!(Amount::from_minor(-1).is_negative());
    }

    #[test]
    fn test_abs() {
        assert_eq!(Amount::from_minor(-75).abs(), Amount::from_minor(75));
        assert_eq!(Amount::from_minor(75).abs(), Amount::from_minor(75));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_subtraction_can_go_negative() {
        let result = Amount::from_minor(100) - Amount::from_minor(450);
        assert_eq!(result, Amount::from_minor(-350));
    }

    #[test]
    fn test_add_assign() {
        let mut total = Amount::ZERO;
        total += Amount::from_minor(2000);
        total += Amount::from_minor(1800);
        assert_eq!(total, Amount::from_minor(3800));
    }

    #[test]
    fn test_sum_over_references() {
        let parts = [Amount::from_minor(2100), Amount::from_minor(450), Amount::from_minor(450)];
        let total: Amount = parts.iter().sum();
        assert_eq!(total, Amount::from_minor(3000));
    }

    #[test]
    fn test_checked_operations_detect_overflow() {
        let max = Amount::from_minor(i64::MAX);
        assert_eq!(max.checked_add(&Amount::from_minor(1)), Err(MoneyError::Overflow));
        assert_eq!(
            Amount::from_minor(i64::MIN).checked_sub(&Amount::from_minor(1)),
            Err(MoneyError::Overflow)
        );
        assert_eq!(max.times(2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_times() {
        assert_eq!(Amount::from_minor(400).times(3), Ok(Amount::from_minor(1200)));
        assert_eq!(Amount::from_minor(10).times(0), Ok(Amount::ZERO));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(30));
        assert_eq!(rate.as_decimal(), dec!(0.3));
        assert_eq!(rate.as_percentage(), dec!(30));
    }

    #[test]
    fn test_apply_exact() {
        let commission = Rate::from_percentage(dec!(30)).apply(&Amount::from_minor(3000));
        assert_eq!(commission, Ok(Amount::from_minor(900)));
    }

    #[test]
    fn test_apply_truncates_fraction() {
        // 0.9 * 1111 = 999.9
        let discounted = Rate::from_percentage(dec!(10)).complement().apply(&Amount::from_minor(1111));
        assert_eq!(discounted, Ok(Amount::from_minor(999)));
    }

    #[test]
    fn test_apply_half_of_odd_amount() {
        let insurance = Rate::new(dec!(0.5)).apply(&Amount::from_minor(1051));
        assert_eq!(insurance, Ok(Amount::from_minor(525)));
    }

    #[test]
    fn test_zero_and_one() {
        let amount = Amount::from_minor(1234);
        assert_eq!(Rate::ZERO.apply(&amount), Ok(Amount::ZERO));
        assert_eq!(Rate::ONE.apply(&amount), Ok(amount));
        assert_eq!(Rate::ZERO.complement(), Rate::ONE);
    }

    #[test]
    fn test_is_fraction_bounds() {
        assert!(Rate::ZERO.is_fraction());
        assert!(Rate::ONE.is_fraction());
        assert!(!Rate::new(Decimal::NEGATIVE_ONE).is_fraction());
        assert!(!Rate::new(dec!(1.01)).is_fraction());
    }
}
