//! Entry-time and completion-time address validators.

use crate::address;
use crate::base58;
use quill_types::{TextValidator, ValidationState};

/// Entry-time sanitizer: strips whitespace and characters outside the
/// Base58 alphabet as the user types.
///
/// Removal covers ordinary spaces, tabs, newlines, and the pasted-text
/// troublemakers U+00A0 (no-break space) and U+200B (zero-width space),
/// all of which fall outside the alphabet. Partial addresses are never
/// rejected; only disallowed characters are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryValidator;

impl EntryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Filter `text`, keeping `cursor` (a char index) pointing at the same
    /// logical position in the filtered text.
    pub fn filter(&self, text: &str, cursor: usize) -> (String, usize, ValidationState) {
        let mut filtered = String::with_capacity(text.len());
        let mut new_cursor = 0;
        for (index, c) in text.chars().enumerate() {
            if base58::is_base58_char(c) {
                filtered.push(c);
                if index < cursor {
                    new_cursor += 1;
                }
            }
        }
        let state = if filtered.is_empty() {
            ValidationState::Intermediate
        } else {
            ValidationState::Acceptable
        };
        (filtered, new_cursor, state)
    }
}

impl TextValidator for EntryValidator {
    fn validate(&self, text: &str) -> ValidationState {
        if text.is_empty() {
            return ValidationState::Intermediate;
        }
        if text.chars().all(base58::is_base58_char) {
            ValidationState::Acceptable
        } else {
            // Strippable characters present; the filter pass will drop them.
            ValidationState::Intermediate
        }
    }
}

/// Completion-time structural validator: classifies a finished string via
/// full Base58Check decoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckValidator;

impl CheckValidator {
    pub fn new() -> Self {
        Self
    }
}

impl TextValidator for CheckValidator {
    fn validate(&self, text: &str) -> ValidationState {
        if text.is_empty() {
            return ValidationState::Intermediate;
        }
        if address::is_valid(text) {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }
}
