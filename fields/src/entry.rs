//! Container fields: spin controller plus the invalid-marker handshake.
//!
//! The embedding widget owns layout, focus, and styling; these wrappers
//! only expose the value API, a `validate()` boolean for driving invalid
//! styling, and the focus-in hook that clears it.

use crate::spin::{AmountSpin, StepEnabled};
use quill_types::Amount;
use quill_units::{asset_factor, Unit, MAX_ASSET_SCALE};
use tracing::debug;

/// Amount field with a display-unit selector.
#[derive(Clone, Debug, Default)]
pub struct AmountEntry {
    spin: AmountSpin,
    marked_invalid: bool,
}

impl AmountEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        self.spin.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.spin.set_text(text);
    }

    pub fn value(&self) -> (Amount, bool) {
        self.spin.value()
    }

    pub fn set_value(&mut self, value: Amount) {
        self.spin.set_value(value);
    }

    /// Clear the text and reset the unit selector to its first entry.
    pub fn clear(&mut self) {
        self.spin.clear();
        self.spin.set_display_unit(Unit::ALL[0]);
    }

    pub fn display_unit(&self) -> Unit {
        self.spin.display_unit()
    }

    pub fn set_display_unit(&mut self, unit: Unit) {
        self.spin.set_display_unit(unit);
    }

    pub fn set_single_step(&mut self, step: Amount) {
        self.spin.set_single_step(step);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.spin.set_enabled(enabled);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.spin.set_read_only(read_only);
    }

    pub fn step_by(&mut self, steps: i64) {
        self.spin.step_by(steps);
    }

    pub fn step_enabled(&self) -> StepEnabled {
        self.spin.step_enabled()
    }

    /// Re-run parsing and record the result; the caller uses the boolean
    /// to apply or remove invalid styling.
    pub fn validate(&mut self) -> bool {
        let (_, valid) = self.spin.value();
        self.marked_invalid = !valid;
        valid
    }

    /// Focus-in hook: clear the invalid marker so the user edits cleanly.
    pub fn focus_in(&mut self) {
        self.marked_invalid = false;
    }

    /// Defocus hook: normalize the display text if it parses.
    pub fn finalize(&mut self) {
        self.spin.fixup();
    }

    pub fn is_marked_invalid(&self) -> bool {
        self.marked_invalid
    }
}

/// Amount field for a specific asset: no unit selector, only the asset's
/// own decimal-place count.
///
/// The spin controller works in asset-local minimal units; `value` and
/// `set_value` translate to and from base units with the fixed conversion
/// factor `10^(8 - scale)`, so every asset denomination lands in one
/// common base-unit space.
#[derive(Clone, Debug)]
pub struct AssetAmountEntry {
    spin: AmountSpin,
    scale: u8,
    marked_invalid: bool,
}

impl AssetAmountEntry {
    pub fn new() -> Self {
        let mut spin = AmountSpin::new();
        spin.set_asset_scale(MAX_ASSET_SCALE);
        Self {
            spin,
            scale: MAX_ASSET_SCALE,
            marked_invalid: false,
        }
    }

    pub fn text(&self) -> &str {
        self.spin.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.spin.set_text(text);
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// Change the asset scale (clamped to [`MAX_ASSET_SCALE`]), preserving
    /// the asset-local magnitude when the current text parses.
    pub fn set_scale(&mut self, scale: u8) {
        self.scale = scale.min(MAX_ASSET_SCALE);
        self.spin.set_asset_scale(self.scale);
    }

    fn factor(&self) -> i64 {
        asset_factor(8 - self.scale)
    }

    /// Current value in base units.
    ///
    /// The parsed asset-local magnitude is normalized by the conversion
    /// factor; a product that overflows or leaves `[0, MAX_MONEY]` is
    /// reported as invalid, the same as any out-of-range parse.
    pub fn value(&self) -> (Amount, bool) {
        let (magnitude, valid) = self.spin.value();
        if !valid {
            return (Amount::ZERO, false);
        }
        match magnitude.checked_mul(self.factor()) {
            Some(normalized) if normalized.in_range() => (normalized, true),
            _ => {
                debug!(magnitude = magnitude.raw(), scale = self.scale, "asset value out of range");
                (Amount::ZERO, false)
            }
        }
    }

    /// Set the value from base units, rendering the asset-local magnitude.
    pub fn set_value(&mut self, value: Amount) {
        self.spin.set_value(Amount::new(value.raw() / self.factor()));
    }

    /// Clear the text and reset the scale to the maximum.
    pub fn clear(&mut self) {
        self.spin.clear();
        self.set_scale(MAX_ASSET_SCALE);
    }

    pub fn set_single_step(&mut self, step: Amount) {
        self.spin.set_single_step(step);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.spin.set_enabled(enabled);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.spin.set_read_only(read_only);
    }

    pub fn validate(&mut self) -> bool {
        let (_, valid) = self.value();
        self.marked_invalid = !valid;
        valid
    }

    pub fn focus_in(&mut self) {
        self.marked_invalid = false;
    }

    pub fn finalize(&mut self) {
        self.spin.fixup();
    }

    pub fn is_marked_invalid(&self) -> bool {
        self.marked_invalid
    }
}

impl Default for AssetAmountEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_marks_and_focus_clears() {
        let mut entry = AmountEntry::new();
        entry.set_text("bogus");
        assert!(!entry.validate());
        assert!(entry.is_marked_invalid());

        entry.focus_in();
        assert!(!entry.is_marked_invalid());

        entry.set_text("2");
        assert!(entry.validate());
        assert!(!entry.is_marked_invalid());
    }

    #[test]
    fn clear_resets_unit() {
        let mut entry = AmountEntry::new();
        entry.set_display_unit(Unit::MicroQuill);
        entry.set_value(Amount::new(12_345));
        entry.clear();
        assert_eq!(entry.text(), "");
        assert_eq!(entry.display_unit(), Unit::ALL[0]);
    }

    #[test]
    fn unit_change_preserves_base_value() {
        let mut entry = AmountEntry::new();
        entry.set_text("0.5");
        let (v, valid) = entry.value();
        assert!(valid);
        entry.set_display_unit(Unit::MicroQuill);
        assert_eq!(entry.value(), (v, true));
    }

    #[test]
    fn asset_value_scenario() {
        let mut entry = AssetAmountEntry::new();
        entry.set_scale(2);
        entry.set_text("10.00");
        assert_eq!(entry.value(), (Amount::new(1_000_000_000), true));
    }

    #[test]
    fn asset_scale_eight_is_identity() {
        let mut entry = AssetAmountEntry::new();
        assert_eq!(entry.scale(), 8);
        entry.set_text("1.00000000");
        assert_eq!(entry.value(), (Amount::new(100_000_000), true));
    }

    #[test]
    fn asset_set_get_roundtrip() {
        let mut entry = AssetAmountEntry::new();
        entry.set_scale(2);
        entry.set_value(Amount::new(1_000_000_000));
        assert_eq!(entry.text(), "10.00");
        assert_eq!(entry.value(), (Amount::new(1_000_000_000), true));
    }

    #[test]
    fn asset_invalid_text_is_zero_false() {
        let mut entry = AssetAmountEntry::new();
        entry.set_text("1.2.3");
        assert_eq!(entry.value(), (Amount::ZERO, false));
        assert!(!entry.validate());
        assert!(entry.is_marked_invalid());
    }

    #[test]
    fn asset_default_scale_is_max() {
        let entry = AssetAmountEntry::new();
        assert_eq!(entry.scale(), MAX_ASSET_SCALE);
    }
}
