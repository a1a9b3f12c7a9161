//! Display units and fixed-point amount formatting/parsing.
//!
//! Stateless, locale-independent ("C"-locale) conversions between base-unit
//! integer amounts and human-readable decimal strings. Safe to call from any
//! number of field instances without coordination.

pub mod codec;
pub mod unit;

pub use codec::{
    asset_factor, format, format_asset, max_money, parse, parse_asset, ParseAmountError,
    MAX_ASSET_SCALE,
};
pub use unit::{SeparatorStyle, Unit};
