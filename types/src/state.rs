//! Tri-state validation result and the validator capability trait.

use serde::{Deserialize, Serialize};

/// Classification of in-progress user text.
///
/// `Intermediate` covers both empty text and text that parses but is still
/// being edited; only `Acceptable` permits finalization and only `Invalid`
/// should drive error styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationState {
    /// The text can never become valid by further typing.
    Invalid,
    /// The text is empty or may still become valid; keep accepting input.
    Intermediate,
    /// The text is a complete, valid value.
    Acceptable,
}

/// Per-keystroke validation capability.
///
/// Implemented by the amount controller and by both address validators;
/// the embedding widget only needs this seam to drive live feedback.
pub trait TextValidator {
    fn validate(&self, text: &str) -> ValidationState;
}
