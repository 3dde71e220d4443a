//! # tagval-validator-macros
//!
//! `#[derive(Record)]` for `tagval-validator`. Use it through the re-export in
//! `tagval_validator`; the expansion refers to `::tagval_validator` paths.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derives the `Record` trait.
///
/// Generates the record's static field table, in declaration order, and a
/// positional value accessor.
///
/// # Attributes
///
/// ## Container attributes (`#[record(...)]` on the struct)
///
/// - `name = "..."` - Record name used in diagnostics (default: the struct name)
///
/// ## Field attributes (`#[validate(...)]`)
///
/// - `rule = "..."` - Rule text, e.g. `"min=5,max=32"` (default: no rule)
/// - `skip` - Same as `rule = "-"`
///
/// # Field types
///
/// `String`, `str` and `&str` are declared as `string`; signed integers as
/// `int`; unsigned integers as `uint`; `f32`/`f64` as `float`; `bool` as
/// `bool`. Any other type is declared by its last path segment, e.g. `Email`,
/// and hands validators an opaque value.
///
/// # Example
///
/// ```ignore
/// use tagval_validator::Record;
///
/// #[derive(Record)]
/// #[record(name = "User")]
/// struct UserForm {
///     #[validate(rule = "min=5,max=32")]
///     name: String,
///     #[validate(skip)]
///     nickname: String,
///     age: u8,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record, validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
