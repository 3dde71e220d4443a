//! Record metadata: the field table a record type declares, and the
//! descriptors the dispatcher walks.
//!
//! A record exposes its fields as a static table ([`Record::FIELDS`]) plus a
//! positional value accessor ([`Record::field_value`]). Nothing is discovered
//! at runtime; the table is written by hand or generated by
//! `#[derive(Record)]`.
//!
//! # Examples
//!
//! ```rust
//! use tagval_validator::foundation::{AsFieldValue, FieldValue, TypeTag};
//! use tagval_validator::record::{FieldSpec, Record, describe};
//!
//! struct Login {
//!     user: String,
//!     attempts: u32,
//! }
//!
//! impl Record for Login {
//!     const NAME: &'static str = "Login";
//!     const FIELDS: &'static [FieldSpec] = &[
//!         FieldSpec::new("user", TypeTag::String, "min=3"),
//!         FieldSpec::new("attempts", TypeTag::Uint, ""),
//!     ];
//!
//!     fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
//!         match index {
//!             0 => Some(self.user.as_field_value()),
//!             1 => Some(self.attempts.as_field_value()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let fields = describe::<Login>();
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[0].name, "user");
//! assert!(fields[0].is_validated());
//! assert!(!fields[1].is_validated());
//! ```

use serde::Serialize;

use crate::foundation::{FieldValue, TypeTag};
use crate::rule::Rule;

// ============================================================================
// FIELD SPEC
// ============================================================================

/// One entry of a record's static field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field name, unique within the record.
    pub name: &'static str,
    /// Declared type.
    pub type_tag: TypeTag,
    /// Raw rule text; empty when the field carries no rule.
    pub rule: &'static str,
    /// Source spelling of the field's Rust type, e.g. `"Option<&'a str>"`.
    pub rust_type: &'static str,
}

impl FieldSpec {
    /// Creates a table entry. The Rust type defaults to the tag's name.
    #[must_use]
    pub const fn new(name: &'static str, type_tag: TypeTag, rule: &'static str) -> Self {
        Self {
            name,
            type_tag,
            rule,
            rust_type: type_tag.name(),
        }
    }

    /// Sets the source spelling of the field's Rust type.
    #[must_use]
    pub const fn with_rust_type(mut self, rust_type: &'static str) -> Self {
        self.rust_type = rust_type;
        self
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A type whose fields can be validated.
pub trait Record {
    /// Record type name, for diagnostics.
    const NAME: &'static str;

    /// Field table in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Value of the field at `index` in [`FIELDS`](Self::FIELDS).
    ///
    /// Returns `None` only for an index past the end of the table.
    fn field_value(&self, index: usize) -> Option<FieldValue<'_>>;
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Read-only view of one record field, built fresh for each validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Position in declaration order.
    pub index: usize,
    /// Field name.
    pub name: &'static str,
    /// Declared type.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Raw rule.
    pub rule: Rule,
    /// Rust type as written in the record.
    pub rust_type: &'static str,
}

impl FieldDescriptor {
    /// Builds the descriptor for the table entry at `index`.
    #[must_use]
    pub const fn from_spec(index: usize, spec: &FieldSpec) -> Self {
        Self {
            index,
            name: spec.name,
            type_tag: spec.type_tag,
            rule: Rule::new(spec.rule),
            rust_type: spec.rust_type,
        }
    }

    /// Declared type name, e.g. `"string"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_tag.name()
    }

    /// True if the field's rule should be offered to a validator.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        !self.rule.is_skipped()
    }
}

/// Enumerates every field of `R` in declaration order, with or without a rule.
#[must_use]
pub fn describe<R: Record + ?Sized>() -> Vec<FieldDescriptor> {
    R::FIELDS
        .iter()
        .enumerate()
        .map(|(index, spec)| FieldDescriptor::from_spec(index, spec))
        .collect()
}
