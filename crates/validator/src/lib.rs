//! # tagval-validator
//!
//! Field-level validation for records driven by per-field rule annotations.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagval_validator::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate(rule = "min=5,max=32")]
//!     name: String,
//!     age: i32,
//! }
//!
//! let errors = validate(&Signup { name: "Ann".into(), age: 30 });
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].message, "should be at least 5 characters long");
//! ```
//!
//! ## How a record is validated
//!
//! 1. [`describe`](record::describe) lists the fields from the record's static
//!    table, in declaration order.
//! 2. Fields with an empty rule or the `-` sentinel are skipped.
//! 3. The [`ValidatorRegistry`](registry::ValidatorRegistry) resolves a
//!    validator by declared [`TypeTag`](foundation::TypeTag). Unresolved types
//!    are skipped.
//! 4. The validator's [`Verdict`](foundation::Verdict) is turned into at most
//!    one [`ValidationError`](foundation::ValidationError) per field.
//!
//! [`RecordValidator::report`](dispatch::RecordValidator::report) keeps the
//! skipped fields visible; [`validate`] returns only failures.
//!
//! ## Rule modes
//!
//! The built-in registry shares one [`StringValidator`](validators::StringValidator)
//! (5..=12 characters, required) across every string field and never reads the
//! rule text. [`RuleMode::Parsed`](config::RuleMode::Parsed) builds a string
//! validator per field from its parsed rule instead.

// ValidationError is the error type for every check; boxing it would only add
// indirection on the hot path.
#![allow(clippy::result_large_err)]

// Lets `#[derive(Record)]` expand to `::tagval_validator::...` inside this crate.
extern crate self as tagval_validator;

pub mod config;
pub mod dispatch;
pub mod foundation;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rule;
pub mod validators;

pub use config::{RuleMode, ValidationConfig};
pub use dispatch::{RecordValidator, ValidationReport, validate};
pub use foundation::{ValidationError, ValidationErrors};
pub use record::Record;
pub use registry::ValidatorRegistry;

/// Derives [`Record`] from a struct's fields and `#[validate(rule = "...")]`
/// annotations.
#[cfg(feature = "derive")]
pub use tagval_validator_macros::Record;
