use proptest::prelude::*;

use quill_fields::{AmountEntry, AmountSpin, AssetAmountEntry};
use quill_types::{Amount, TextValidator, ValidationState};
use quill_units::{asset_factor, Unit};

fn any_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.as_slice())
}

proptest! {
    /// set_value then value round-trips over the whole valid range, for
    /// every display unit.
    #[test]
    fn set_get_roundtrip(raw in 0i64..=Amount::MAX_MONEY.raw(), unit in any_unit()) {
        let mut spin = AmountSpin::new();
        spin.set_display_unit(unit);
        spin.set_value(Amount::new(raw));
        prop_assert_eq!(spin.value(), (Amount::new(raw), true));
    }

    /// A valid value is always within monetary bounds; anything else reads
    /// back as (ZERO, false).
    #[test]
    fn value_always_bounded(text in "\\PC{0,24}") {
        let mut spin = AmountSpin::new();
        spin.set_text(text);
        let (value, valid) = spin.value();
        if valid {
            prop_assert!(value.in_range());
        } else {
            prop_assert_eq!(value, Amount::ZERO);
        }
    }

    /// Live validation never returns Acceptable, and empty is always
    /// Intermediate.
    #[test]
    fn live_validate_never_accepts(text in "\\PC{0,24}", unit in any_unit()) {
        let mut spin = AmountSpin::new();
        spin.set_display_unit(unit);
        prop_assert_ne!(spin.validate(&text), ValidationState::Acceptable);
        prop_assert_eq!(spin.validate(""), ValidationState::Intermediate);
    }

    /// Stepping from any valid value stays clamped in [0, MAX_MONEY].
    #[test]
    fn stepping_stays_clamped(
        raw in 0i64..=Amount::MAX_MONEY.raw(),
        steps in -1000i64..1000,
        step_size in 1i64..=Amount::MAX_MONEY.raw(),
    ) {
        let mut spin = AmountSpin::new();
        spin.set_single_step(Amount::new(step_size));
        spin.set_value(Amount::new(raw));
        spin.step_by(steps);
        let (value, valid) = spin.value();
        prop_assert!(valid);
        prop_assert!(value.in_range());
    }

    /// Changing the display unit preserves a valid value exactly.
    #[test]
    fn unit_change_preserves_value(
        raw in 0i64..=Amount::MAX_MONEY.raw(),
        from in any_unit(),
        to in any_unit(),
    ) {
        let mut entry = AmountEntry::new();
        entry.set_display_unit(from);
        entry.set_value(Amount::new(raw));
        entry.set_display_unit(to);
        prop_assert_eq!(entry.value(), (Amount::new(raw), true));
    }

    /// Fixup is idempotent: normalizing twice equals normalizing once.
    #[test]
    fn fixup_idempotent(text in "[0-9,.]{0,16}", unit in any_unit()) {
        let mut spin = AmountSpin::new();
        spin.set_display_unit(unit);
        spin.set_text(text);
        spin.fixup();
        let once = spin.text().to_string();
        spin.fixup();
        prop_assert_eq!(spin.text(), once);
    }

    /// Asset normalization law: value() equals magnitude * 10^(8 - scale).
    #[test]
    fn asset_normalization(magnitude in 0i64..10_000_000, scale in 0u8..=8) {
        let mut entry = AssetAmountEntry::new();
        entry.set_scale(scale);
        entry.set_value(Amount::new(magnitude * asset_factor(8 - scale)));
        let (value, valid) = entry.value();
        prop_assert!(valid);
        prop_assert_eq!(value.raw(), magnitude * asset_factor(8 - scale));
    }
}
