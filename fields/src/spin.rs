//! Fixed-point spin controller behind the amount text field.

use quill_types::{Amount, TextValidator, ValidationState};
use quill_units::{self as units, SeparatorStyle, Unit, MAX_ASSET_SCALE};
use tracing::debug;

/// Default step size in base units.
const DEFAULT_SINGLE_STEP: i64 = 100_000;

/// Which step directions are currently available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEnabled {
    pub up: bool,
    pub down: bool,
}

/// Spin controller that uses fixed-point numbers internally and converts
/// to and from text with the units codec.
///
/// Owns the text buffer and the active scale selection. When an asset
/// scale is set it overrides the display unit for parsing and formatting;
/// at most one of the two modes is in effect per instance.
#[derive(Clone, Debug)]
pub struct AmountSpin {
    text: String,
    unit: Unit,
    asset_scale: Option<u8>,
    single_step: Amount,
    read_only: bool,
    enabled: bool,
}

impl AmountSpin {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            unit: Unit::default(),
            asset_scale: None,
            single_step: Amount::new(DEFAULT_SINGLE_STEP),
            read_only: false,
            enabled: true,
        }
    }

    /// Current field text, exactly as typed or last rendered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the field text (the keystroke path). No validation happens
    /// here; the widget calls [`TextValidator::validate`] per edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn display_unit(&self) -> Unit {
        self.unit
    }

    pub fn asset_scale(&self) -> Option<u8> {
        self.asset_scale
    }

    pub fn single_step(&self) -> Amount {
        self.single_step
    }

    pub fn set_single_step(&mut self, step: Amount) {
        self.single_step = step;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Parse `text` under the active scale into base units.
    ///
    /// Returns `(Amount::ZERO, false)` for anything unparseable or outside
    /// `[0, MAX_MONEY]`; empty text is simply "no value yet", not an error.
    fn parse_text(&self, text: &str) -> (Amount, bool) {
        let parsed = match self.asset_scale {
            Some(scale) => units::parse_asset(scale, text),
            None => units::parse(self.unit, text),
        };
        match parsed {
            Ok(value) if value.in_range() => (value, true),
            _ => (Amount::ZERO, false),
        }
    }

    fn render(&self, value: Amount) -> String {
        match self.asset_scale {
            Some(scale) => units::format_asset(scale, value, SeparatorStyle::Always),
            None => units::format(self.unit, value, false, SeparatorStyle::Always),
        }
    }

    /// Current value and whether the text parses.
    pub fn value(&self) -> (Amount, bool) {
        self.parse_text(&self.text)
    }

    /// Set the value, re-rendering the text under the active scale.
    pub fn set_value(&mut self, value: Amount) {
        self.text = self.render(value);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Defocus fixup: normalize the display text if it parses, otherwise
    /// leave it untouched so the user sees what was rejected.
    pub fn fixup(&mut self) {
        let (value, valid) = self.value();
        if valid {
            let rendered = self.render(value);
            debug!(text = %self.text, normalized = %rendered, "fixup");
            self.text = rendered;
        }
    }

    /// Step by `steps` increments of the single-step size, clamping into
    /// `[0, MAX_MONEY]`. Unparseable text steps from zero.
    pub fn step_by(&mut self, steps: i64) {
        let (value, _) = self.value();
        let delta = self.single_step.raw().saturating_mul(steps);
        let stepped = Amount::new(value.raw().saturating_add(delta)).clamp_to_money();
        if stepped != value {
            debug!(from = value.raw(), to = stepped.raw(), "step");
        }
        self.set_value(stepped);
    }

    /// Step availability: none when read-only, up-only from an empty
    /// field, otherwise bounded by `[0, MAX_MONEY]`.
    pub fn step_enabled(&self) -> StepEnabled {
        if self.read_only {
            return StepEnabled::default();
        }
        if self.text.is_empty() {
            return StepEnabled {
                up: true,
                down: false,
            };
        }
        let (value, valid) = self.value();
        if !valid {
            return StepEnabled::default();
        }
        StepEnabled {
            up: value < units::max_money(),
            down: value > Amount::ZERO,
        }
    }

    /// Change the display unit, preserving the held value when the current
    /// text parses and clearing the field when it does not.
    pub fn set_display_unit(&mut self, unit: Unit) {
        let (value, valid) = self.value();
        self.unit = unit;
        debug!(unit = %unit, valid, "display unit changed");
        if valid {
            self.set_value(value);
        } else {
            self.clear();
        }
    }

    /// Change the asset scale (clamped to [`MAX_ASSET_SCALE`]); same
    /// value-preserving-or-clear policy as a unit change.
    pub fn set_asset_scale(&mut self, scale: u8) {
        let scale = scale.min(MAX_ASSET_SCALE);
        let (value, valid) = self.value();
        self.asset_scale = Some(scale);
        if valid {
            self.set_value(value);
        } else {
            self.clear();
        }
    }
}

impl Default for AmountSpin {
    fn default() -> Self {
        Self::new()
    }
}

impl TextValidator for AmountSpin {
    /// Live per-keystroke classification. Parseable text reports
    /// Intermediate rather than Acceptable so that fixup still runs on
    /// defocus; Invalid fires only for text that can never become valid.
    fn validate(&self, text: &str) -> ValidationState {
        if text.is_empty() {
            return ValidationState::Intermediate;
        }
        let (_, valid) = self.parse_text(text);
        if valid {
            ValidationState::Intermediate
        } else {
            ValidationState::Invalid
        }
    }
}
