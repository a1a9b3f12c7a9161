//! Address decoding and entry validation.
//!
//! Two-stage validation for address text fields: an entry-time sanitizer
//! that strips disallowed characters as the user types, and a
//! completion-time structural validator backed by Base58Check decoding.

pub mod address;
pub mod base58;
pub mod validator;

pub use address::{Address, AddressError};
pub use validator::{CheckValidator, EntryValidator};
