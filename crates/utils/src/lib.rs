//! Common utility for extended `std` types and shared text parsers
//!
//! These are left public for convenience.
//!
//! For example, prettier formatting for scientific numbers and splitting a
//! line of a column-based data file into floats are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod option_ext;
mod value_ext;

pub mod parsers;

// Flatten
pub use error::{Error, Result};
pub use option_ext::OptionExt;
pub use value_ext::ValueExt;
