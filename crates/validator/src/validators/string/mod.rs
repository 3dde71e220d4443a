//! String presence and length validator
//!
//! [`StringValidator`] is the one built-in validator. It checks, in order:
//!
//! 1. `required` and empty → `"field required"`
//! 2. shorter than `min` → `"should be at least {min} characters long"`
//! 3. `max >= min` and longer than `max` → `"should be less than {max} characters long"`
//!
//! The first failing check decides the reason; reasons never accumulate.
//! Lengths are UTF-8 byte counts unless [`StringValidator::chars`] is set.

use std::sync::Arc;

use crate::foundation::{FieldValidator, FieldValue, Validate, ValidationError, Verdict};
use crate::rule::{RuleError, RuleSet};
use crate::validators::LengthMode;

/// Validates string presence and length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringValidator {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive). Only enforced when `max >= min`.
    pub max: usize,
    /// Empty strings are rejected regardless of `min`/`max`.
    pub required: bool,
    /// How to count length.
    pub mode: LengthMode,
}

impl StringValidator {
    /// Configuration every string field gets from the built-in registry:
    /// 5..=12 characters, required.
    pub const BUILTIN: Self = Self::new(5, 12, true);

    /// Creates a validator counting UTF-8 bytes.
    #[must_use]
    pub const fn new(min: usize, max: usize, required: bool) -> Self {
        Self {
            min,
            max,
            required,
            mode: LengthMode::Bytes,
        }
    }

    /// Switches length counting to Unicode chars.
    #[must_use]
    pub const fn chars(mut self) -> Self {
        self.mode = LengthMode::Chars;
        self
    }

    /// Builds a validator from parsed rule options.
    ///
    /// `length=N` pins both bounds to `N` and cannot be combined with
    /// `min`/`max`. An absent `min` is 0 and an absent `max` is unbounded.
    pub fn from_rules(rules: &RuleSet) -> Result<Self, RuleError> {
        if let Some(flag) = rules.unrecognized.first() {
            return Err(RuleError::Unsupported {
                rule: flag.clone(),
                validator: "string",
            });
        }

        let (min, max) = match (rules.length, rules.min, rules.max) {
            (Some(length), None, None) => (length, length),
            (Some(_), _, _) => {
                return Err(RuleError::Unsupported {
                    rule: "length with min/max".to_string(),
                    validator: "string",
                });
            }
            (None, min, max) => (min.unwrap_or(0), max.unwrap_or(usize::MAX)),
        };

        Ok(Self::new(min, max, rules.required))
    }

    /// Registry builder: parses `rules` into a shared validator.
    pub fn build(rules: &RuleSet) -> Result<Arc<dyn FieldValidator>, RuleError> {
        Ok(Arc::new(Self::from_rules(rules)?))
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::BUILTIN
    }
}

impl Validate for StringValidator {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = self.mode.measure(input);

        if len == 0 && self.required {
            return Err(ValidationError::required());
        }
        if len < self.min {
            return Err(ValidationError::min_length(self.min, len));
        }
        if self.max >= self.min && len > self.max {
            return Err(ValidationError::max_length(self.max, len));
        }
        Ok(())
    }
}

impl FieldValidator for StringValidator {
    fn name(&self) -> &'static str {
        "string"
    }

    /// Non-string values are rejected without a reason.
    fn check(&self, value: &FieldValue<'_>) -> Verdict {
        match value.as_str() {
            Some(s) => self.validate(s).into(),
            None => Verdict::Invalid(None),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
