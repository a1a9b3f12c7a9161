//! Amount-entry field controllers.
//!
//! The widget-facing half of amount entry: a spin controller that owns the
//! text buffer and converts it to and from base units under the selected
//! scale, plus container wrappers that add the invalid-marker handshake
//! the embedding widget uses for styling.
//!
//! Everything here is synchronous and single-owner: each controller owns
//! its text and scale selection exclusively, and every call is a pure,
//! immediately-returning computation.

pub mod adapter;
pub mod entry;
pub mod spin;

pub use adapter::normalize_decimal_key;
pub use entry::{AmountEntry, AssetAmountEntry};
pub use spin::{AmountSpin, StepEnabled};
