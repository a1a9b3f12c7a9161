//! Presentation-layer input adapters.
//!
//! The numeric core accepts exactly one decimal separator (`.`); keyboard
//! conveniences are translated here, before text reaches the controller.

/// Translate a comma keystroke into the normalized decimal separator.
///
/// Lets users on numeric keypads with a comma key type decimals without
/// the core ever seeing a locale-specific separator. Every other
/// character passes through unchanged.
pub fn normalize_decimal_key(key: char) -> char {
    if key == ',' {
        '.'
    } else {
        key
    }
}
