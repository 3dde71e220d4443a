//! Core validation types and traits
//!
//! This module contains the building blocks every other module is written
//! against:
//!
//! - **Traits**: [`Validate`] (typed), [`FieldValidator`] (object-safe)
//! - **Outcomes**: [`Verdict`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Field types**: [`TypeTag`], [`FieldValue`], [`AsFieldValue`]
//!
//! # Examples
//!
//! ```rust
//! use tagval_validator::foundation::{FieldValidator, FieldValue, Validate};
//! use tagval_validator::validators::StringValidator;
//!
//! let validator = StringValidator::new(5, 12, true);
//!
//! // Typed entry point
//! assert!(validator.validate("Testowe").is_ok());
//!
//! // Uniform entry point used by the dispatcher
//! assert!(validator.check(&FieldValue::Str("Testowe")).is_valid());
//! ```

// Module declarations
pub mod error;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{ValidationError, ValidationErrors};
pub use traits::{FieldValidator, Validate, Verdict};
pub use value::{AsFieldValue, FieldValue, TypeTag};
