//! User-selectable display units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A power-of-ten display scale for rendering amounts.
///
/// Exactly one unit is active per field at a time; changing it re-renders
/// the held value rather than reinterpreting the raw text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Whole coins (8 decimal places).
    #[default]
    Quill,
    /// Thousandths of a coin (5 decimal places).
    MilliQuill,
    /// Millionths of a coin (2 decimal places).
    MicroQuill,
}

impl Unit {
    /// Every selectable unit, in selector order.
    pub const ALL: [Unit; 3] = [Unit::Quill, Unit::MilliQuill, Unit::MicroQuill];

    /// Number of decimal places shown for this unit.
    pub fn decimals(self) -> u8 {
        match self {
            Unit::Quill => 8,
            Unit::MilliQuill => 5,
            Unit::MicroQuill => 2,
        }
    }

    /// Base units per displayed unit.
    pub fn factor(self) -> i64 {
        10i64.pow(u32::from(self.decimals()))
    }

    /// Ticker-style short name.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Quill => "QUILL",
            Unit::MilliQuill => "mQUILL",
            Unit::MicroQuill => "uQUILL",
        }
    }

    /// Human-readable description for unit-selector tooltips.
    pub fn description(self) -> &'static str {
        match self {
            Unit::Quill => "Quills",
            Unit::MilliQuill => "Milli-Quills (1 / 1,000)",
            Unit::MicroQuill => "Micro-Quills (1 / 1,000,000)",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When to insert grouping separators while formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeparatorStyle {
    Never,
    /// Only when the integer part has more than four digits.
    Standard,
    Always,
}
