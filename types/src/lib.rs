//! Fundamental types for the Quill wallet entry layer.
//!
//! This crate defines the types shared across the entry-layer crates:
//! the fixed-point monetary amount, the tri-state validation result, and
//! the validator capability trait.

pub mod amount;
pub mod state;

pub use amount::Amount;
pub use state::{TextValidator, ValidationState};
