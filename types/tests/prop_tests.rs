use proptest::prelude::*;

use quill_types::Amount;

proptest! {
    /// Amount raw roundtrip: new -> raw produces the same value.
    #[test]
    fn amount_raw_roundtrip(raw in i64::MIN / 2..i64::MAX / 2) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.raw(), raw);
    }

    /// clamp_to_money always lands in the valid range.
    #[test]
    fn clamp_always_in_range(raw in any::<i64>()) {
        let clamped = Amount::new(raw).clamp_to_money();
        prop_assert!(clamped.in_range());
    }

    /// clamp_to_money is the identity on already-valid amounts.
    #[test]
    fn clamp_identity_on_valid(raw in 0i64..=Amount::MAX_MONEY.raw()) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.clamp_to_money(), amount);
    }

    /// in_range matches the documented bounds.
    #[test]
    fn in_range_matches_bounds(raw in any::<i64>()) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.in_range(), raw >= 0 && raw <= Amount::MAX_MONEY.raw());
    }

    /// checked_add agrees with plain addition when no overflow occurs.
    #[test]
    fn checked_add_no_overflow(a in 0i64..i64::MAX / 2, b in 0i64..i64::MAX / 2) {
        let sum = Amount::new(a).checked_add(Amount::new(b));
        prop_assert_eq!(sum, Some(Amount::new(a + b)));
    }

    /// checked_sub agrees with i64::checked_sub.
    #[test]
    fn checked_sub_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        let diff = Amount::new(a).checked_sub(Amount::new(b));
        prop_assert_eq!(diff, a.checked_sub(b).map(Amount::new));
    }

    /// checked_mul agrees with i64::checked_mul.
    #[test]
    fn checked_mul_matches_i64(raw in -1_000_000i64..1_000_000, factor in 0i64..1_000_000) {
        let product = Amount::new(raw).checked_mul(factor);
        prop_assert_eq!(product, raw.checked_mul(factor).map(Amount::new));
    }

    /// is_zero matches raw == 0.
    #[test]
    fn is_zero_matches(raw in -1_000i64..1_000) {
        prop_assert_eq!(Amount::new(raw).is_zero(), raw == 0);
    }
}
