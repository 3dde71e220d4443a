//! Prelude module for convenient imports.
//!
//! ```rust
//! use tagval_validator::prelude::*;
//!
//! let validator = RecordValidator::from_config(&ValidationConfig::default());
//! assert!(validator.registry().contains(TypeTag::String));
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    AsFieldValue, FieldValidator, FieldValue, TypeTag, Validate, ValidationError,
    ValidationErrors, Verdict,
};

// ============================================================================
// RECORDS AND RULES
// ============================================================================

pub use crate::record::{FieldDescriptor, FieldSpec, Record, describe};
pub use crate::rule::{Rule, RuleError, RuleSet};

// ============================================================================
// VALIDATION
// ============================================================================

pub use crate::config::{RuleMode, ValidationConfig};
pub use crate::dispatch::{
    FieldOutcome, FieldReport, RecordValidator, ReportError, SkipReason, ValidationReport,
    validate,
};
pub use crate::registry::{Registration, ValidatorRegistry};
pub use crate::validators::{LengthMode, StringValidator};

#[cfg(feature = "derive")]
pub use tagval_validator_macros::Record;
