//! Core traits for the validation system
//!
//! Two traits live here:
//!
//! - [`Validate`]: the typed form. A validator states its input type and
//!   returns `Result<(), ValidationError>`.
//! - [`FieldValidator`]: the object-safe form the registry stores. It takes a
//!   [`FieldValue`] and returns a [`Verdict`], so one dispatcher can drive
//!   validators for any field type.

use std::fmt;

use crate::foundation::{FieldValue, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A validator over a concrete input type.
///
/// # Examples
///
/// ```rust
/// use tagval_validator::foundation::{Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.trim().is_empty() {
///             Err(ValidationError::new("not_blank", "must not be blank"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("hello").is_ok());
/// assert!(NotBlank.validate("   ").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Outcome of judging a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value satisfies the validator.
    Valid,
    /// The value does not satisfy the validator.
    ///
    /// The reason is optional: a validator may reject a value without saying
    /// why. The dispatcher records no error in that case.
    Invalid(Option<ValidationError>),
}

impl Verdict {
    /// Invalid with a reason.
    #[must_use]
    pub fn invalid(reason: ValidationError) -> Self {
        Verdict::Invalid(Some(reason))
    }

    /// Returns true for [`Verdict::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&ValidationError> {
        match self {
            Verdict::Invalid(reason) => reason.as_ref(),
            Verdict::Valid => None,
        }
    }
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(reason) => Verdict::invalid(reason),
        }
    }
}

/// Object-safe validator stored in the [`ValidatorRegistry`](crate::registry::ValidatorRegistry).
///
/// Implementations hold fixed configuration and no mutable state, so one
/// instance can serve any number of fields and threads.
pub trait FieldValidator: fmt::Debug + Send + Sync {
    /// Short name used in logs and rule diagnostics.
    fn name(&self) -> &'static str;

    /// Judges a single field value.
    fn check(&self, value: &FieldValue<'_>) -> Verdict;
}

// ============================================================================
// TESTS
// ============================================================================
