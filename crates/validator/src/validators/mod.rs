//! Built-in validators
//!
//! There is exactly one: [`StringValidator`], for string presence and length.

pub mod length;
pub mod string;

pub use length::LengthMode;
pub use string::StringValidator;
