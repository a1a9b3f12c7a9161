//! Fixed-point amount formatting and parsing.
//!
//! All functions here are pure: same text and scale in, same result out.
//! The decimal separator is always `.` and the grouping separator is always
//! `,` regardless of process locale.

use crate::unit::{SeparatorStyle, Unit};
use quill_types::Amount;
use thiserror::Error;

/// Grouping separator inserted between thousands of the integer part.
const GROUP_SEPARATOR: char = ',';

/// Decimal separator accepted and emitted.
const DECIMAL_SEPARATOR: char = '.';

/// Maximum significant digits accepted while parsing; keeps every parsed
/// value inside i64.
const MAX_PARSE_DIGITS: usize = 18;

/// Upper bound on a per-asset decimal-place count.
pub const MAX_ASSET_SCALE: u8 = 8;

/// The maximum valid amount, in base units.
pub fn max_money() -> Amount {
    Amount::MAX_MONEY
}

/// Multiplier normalizing an asset-local magnitude into base units.
///
/// An asset with `scale` decimal places uses `asset_factor(8 - scale)`.
pub fn asset_factor(exponent: u8) -> i64 {
    10i64.pow(u32::from(exponent.min(MAX_ASSET_SCALE)))
}

/// Failure modes of [`parse`] and [`parse_asset`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("empty amount text")]
    Empty,

    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),

    #[error("more than one decimal separator")]
    MultipleSeparators,

    #[error("too many decimal places (at most {max})")]
    TooManyDecimals { max: u8 },

    #[error("amount has too many digits")]
    TooManyDigits,
}

/// Render `amount` under `unit`.
///
/// `plus_sign` prefixes non-negative amounts with `+` (used by delta
/// displays, never by entry fields).
pub fn format(unit: Unit, amount: Amount, plus_sign: bool, separators: SeparatorStyle) -> String {
    format_scaled(amount, unit.decimals(), plus_sign, separators)
}

/// Render `amount` using an asset's own decimal-place convention.
pub fn format_asset(scale: u8, amount: Amount, separators: SeparatorStyle) -> String {
    format_scaled(amount, scale.min(MAX_ASSET_SCALE), false, separators)
}

fn format_scaled(amount: Amount, decimals: u8, plus_sign: bool, separators: SeparatorStyle) -> String {
    let raw = amount.raw();
    let divisor = 10i64.pow(u32::from(decimals));
    let abs = raw.unsigned_abs();
    let quotient = abs / divisor.unsigned_abs();
    let remainder = abs % divisor.unsigned_abs();

    let mut integer = quotient.to_string();
    let digit_count = integer.len();
    let grouped = match separators {
        SeparatorStyle::Always => true,
        SeparatorStyle::Standard => digit_count > 4,
        SeparatorStyle::Never => false,
    };
    if grouped {
        let mut pos = digit_count;
        while pos > 3 {
            pos -= 3;
            integer.insert(pos, GROUP_SEPARATOR);
        }
    }

    let sign = if raw < 0 {
        "-"
    } else if plus_sign {
        "+"
    } else {
        ""
    };

    if decimals == 0 {
        format!("{sign}{integer}")
    } else {
        format!(
            "{sign}{integer}{DECIMAL_SEPARATOR}{remainder:0width$}",
            width = usize::from(decimals)
        )
    }
}

/// Parse `text` as an amount displayed under `unit`, yielding base units.
///
/// Grouping separators and whitespace are stripped before parsing; the
/// fractional part may be shorter than the unit's decimal count but never
/// longer. Signs are rejected: a user-typed amount is never negative.
pub fn parse(unit: Unit, text: &str) -> Result<Amount, ParseAmountError> {
    parse_scaled(text, unit.decimals())
}

/// Parse `text` using an asset's decimal-place convention.
///
/// The result is in asset-local minimal units; callers normalize into base
/// units with [`asset_factor`].
pub fn parse_asset(scale: u8, text: &str) -> Result<Amount, ParseAmountError> {
    parse_scaled(text, scale.min(MAX_ASSET_SCALE))
}

fn parse_scaled(text: &str, decimals: u8) -> Result<Amount, ParseAmountError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != GROUP_SEPARATOR)
        .collect();
    if cleaned.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let mut parts = cleaned.splitn(3, DECIMAL_SEPARATOR);
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(ParseAmountError::MultipleSeparators);
    }
    if fraction.len() > usize::from(decimals) {
        return Err(ParseAmountError::TooManyDecimals { max: decimals });
    }
    if let Some(bad) = whole
        .chars()
        .chain(fraction.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(ParseAmountError::InvalidCharacter(bad));
    }

    let mut digits = String::with_capacity(whole.len() + usize::from(decimals));
    digits.push_str(whole);
    digits.push_str(fraction);
    for _ in fraction.len()..usize::from(decimals) {
        digits.push('0');
    }
    if digits.trim_start_matches('0').len() > MAX_PARSE_DIGITS {
        return Err(ParseAmountError::TooManyDigits);
    }

    // "." alone reduces to zero significant digits; treat it as zero, the
    // same as a lone "0".
    let value = if digits.is_empty() {
        0
    } else {
        digits
            .parse::<i64>()
            .map_err(|_| ParseAmountError::TooManyDigits)?
    };
    Ok(Amount::new(value))
}
