//! Validation driver: walks a record's descriptors, resolves a validator per
//! field, runs it, and aggregates the outcome.
//!
//! [`RecordValidator::validate`] returns only the failures, in declaration
//! order. Fields without a rule, with the skip sentinel, or whose type has no
//! registered validator are skipped silently there. An empty list therefore
//! means "no detected violations", not "every field was checked";
//! [`RecordValidator::report`] keeps those skips visible.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span, trace, warn};

use crate::config::ValidationConfig;
use crate::foundation::{TypeTag, ValidationError, ValidationErrors, Verdict};
use crate::record::{FieldDescriptor, Record, describe};
use crate::registry::ValidatorRegistry;
use crate::rule::RuleError;

// ============================================================================
// OUTCOMES
// ============================================================================

/// Why a field was not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The rule text is empty.
    NoRule,
    /// The rule text is the skip sentinel `-`.
    SkipSentinel,
    /// No validator is registered for the declared type.
    NoValidator(TypeTag),
    /// The registration could not build a validator from the rule.
    RuleRejected(RuleError),
    /// The validator rejected the value without giving a reason.
    InvalidWithoutReason,
    /// The record returned no value for the field's index.
    MissingValue,
}

impl SkipReason {
    /// True if the field asked to be validated and was not.
    ///
    /// Empty rules and the skip sentinel are deliberate opt-outs; everything
    /// else is a check that silently did not happen.
    #[must_use]
    pub const fn is_unvalidated_rule(&self) -> bool {
        !matches!(self, SkipReason::NoRule | SkipReason::SkipSentinel)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoRule => f.write_str("no rule"),
            SkipReason::SkipSentinel => f.write_str("rule is `-`"),
            SkipReason::NoValidator(tag) => write!(f, "no validator registered for type {tag}"),
            SkipReason::RuleRejected(error) => fmt::Display::fmt(error, f),
            SkipReason::InvalidWithoutReason => {
                f.write_str("validator rejected the value without a reason")
            }
            SkipReason::MissingValue => f.write_str("record has no value for the field"),
        }
    }
}

/// What happened to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum FieldOutcome {
    /// Validated and passed.
    Passed,
    /// Validated and failed.
    Failed(ValidationError),
    /// Not validated.
    Skipped(SkipReason),
}

/// Outcome of one field, with its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    /// Field name.
    pub field: &'static str,
    /// Declared type.
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// Outcome.
    #[serde(flatten)]
    pub outcome: FieldOutcome,
}

/// Per-field outcomes of one validation pass, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    record: &'static str,
    strict: bool,
    fields: Vec<FieldReport>,
}

/// Why [`ValidationReport::into_result`] failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// At least one field failed its rule.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// Strict mode: some rule-carrying fields were never checked.
    #[error("record {record} has fields whose rules were not checked: {}", .fields.join(", "))]
    Unvalidated {
        /// Record type name.
        record: &'static str,
        /// Field names.
        fields: Vec<&'static str>,
    },
}

impl ValidationReport {
    /// Record type name.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Whether this report was produced in strict mode.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// All field outcomes, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldReport] {
        &self.fields
    }

    /// Failures, in declaration order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.fields.iter().filter_map(|f| match &f.outcome {
            FieldOutcome::Failed(error) => Some(error),
            _ => None,
        })
    }

    /// Number of failures.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Fields that carried a rule but were not validated, with the reason.
    pub fn unvalidated(&self) -> impl Iterator<Item = (&'static str, &SkipReason)> {
        self.fields.iter().filter_map(|f| match &f.outcome {
            FieldOutcome::Skipped(reason) if reason.is_unvalidated_rule() => {
                Some((f.field, reason))
            }
            _ => None,
        })
    }

    /// No failures were detected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Every field carrying a rule was actually checked.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.unvalidated().next().is_none()
    }

    /// The failures, in declaration order.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.fields
            .into_iter()
            .filter_map(|f| match f.outcome {
                FieldOutcome::Failed(error) => Some(error),
                _ => None,
            })
            .collect()
    }

    /// `Ok` when nothing failed and, in strict mode, nothing was left
    /// unvalidated. Failures take precedence over unvalidated fields.
    pub fn into_result(self) -> Result<(), ReportError> {
        if self.strict && self.is_clean() && !self.is_exhaustive() {
            let fields = self.unvalidated().map(|(name, _)| name).collect();
            return Err(ReportError::Unvalidated {
                record: self.record,
                fields,
            });
        }

        let errors = self.into_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ReportError::Invalid(errors.into()))
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Runs registered validators over a record's fields.
///
/// Cheap to clone; the registry is shared.
///
/// # Examples
///
/// ```rust
/// use tagval_validator::dispatch::RecordValidator;
/// use tagval_validator::foundation::{AsFieldValue, FieldValue, TypeTag};
/// use tagval_validator::record::{FieldSpec, Record};
///
/// struct Account {
///     handle: String,
/// }
///
/// impl Record for Account {
///     const NAME: &'static str = "Account";
///     const FIELDS: &'static [FieldSpec] = &[FieldSpec::new("handle", TypeTag::String, "required")];
///
///     fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
///         (index == 0).then(|| self.handle.as_field_value())
///     }
/// }
///
/// let errors = RecordValidator::default().validate(&Account { handle: String::new() });
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message, "field required");
/// ```
#[derive(Debug, Clone)]
pub struct RecordValidator {
    registry: Arc<ValidatorRegistry>,
    strict: bool,
}

impl Default for RecordValidator {
    /// Built-in registry, lenient.
    fn default() -> Self {
        Self::new(ValidatorRegistry::builtin())
    }
}

impl RecordValidator {
    /// Creates a lenient validator over `registry`.
    #[must_use]
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            strict: false,
        }
    }

    /// Creates a validator from configuration.
    #[must_use]
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(ValidatorRegistry::for_mode(config.rule_mode)).strict(config.strict)
    }

    /// Sets strict mode; see [`ValidationReport::into_result`].
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The registry in use.
    #[must_use]
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validates `record`, returning failures in declaration order.
    #[must_use]
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Vec<ValidationError> {
        self.report(record).into_errors()
    }

    /// Validates `record`, returning one outcome per field.
    #[must_use]
    pub fn report<R: Record + ?Sized>(&self, record: &R) -> ValidationReport {
        let _span = debug_span!("validate_record", record = R::NAME).entered();

        let fields: Vec<FieldReport> = describe::<R>()
            .into_iter()
            .map(|descriptor| FieldReport {
                field: descriptor.name,
                type_tag: descriptor.type_tag,
                outcome: self.check_field(&descriptor, record),
            })
            .collect();

        let report = ValidationReport {
            record: R::NAME,
            strict: self.strict,
            fields,
        };
        debug!(
            errors = report.error_count(),
            exhaustive = report.is_exhaustive(),
            "record validated"
        );
        report
    }

    fn check_field<R: Record + ?Sized>(
        &self,
        descriptor: &FieldDescriptor,
        record: &R,
    ) -> FieldOutcome {
        let field = descriptor.name;

        if descriptor.rule.is_empty() {
            return FieldOutcome::Skipped(SkipReason::NoRule);
        }
        if descriptor.rule.is_skip_sentinel() {
            return FieldOutcome::Skipped(SkipReason::SkipSentinel);
        }

        let Some(registration) = self.registry.resolve(descriptor.type_tag) else {
            trace!(field, type_tag = %descriptor.type_tag, "no validator registered");
            return FieldOutcome::Skipped(SkipReason::NoValidator(descriptor.type_tag));
        };

        let validator = match registration.instantiate(&descriptor.rule) {
            Ok(validator) => validator,
            Err(error) => {
                warn!(field, rule = %descriptor.rule, %error, "rule rejected");
                return FieldOutcome::Skipped(SkipReason::RuleRejected(error));
            }
        };

        let Some(value) = record.field_value(descriptor.index) else {
            warn!(field, index = descriptor.index, "record returned no value for field");
            return FieldOutcome::Skipped(SkipReason::MissingValue);
        };

        match validator.check(&value) {
            Verdict::Valid => {
                trace!(field, validator = validator.name(), "field passed");
                FieldOutcome::Passed
            }
            Verdict::Invalid(Some(reason)) => {
                let error = reason.with_field(field);
                debug!(field, code = %error.code, reason = %error.message, "field failed");
                FieldOutcome::Failed(error)
            }
            Verdict::Invalid(None) => {
                debug!(field, validator = validator.name(), "field rejected without a reason");
                FieldOutcome::Skipped(SkipReason::InvalidWithoutReason)
            }
        }
    }
}

/// Validates `record` against the built-in registry.
///
/// Returns one [`ValidationError`] per failed field, in declaration order.
#[must_use]
pub fn validate<R: Record + ?Sized>(record: &R) -> Vec<ValidationError> {
    RecordValidator::default().validate(record)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{AsFieldValue, FieldValidator, FieldValue};
    use crate::record::FieldSpec;
    use crate::registry::Registration;
    use pretty_assertions::assert_eq;

    struct Profile {
        nick: String,
        bio: String,
        motto: String,
        age: i32,
    }

    impl Record for Profile {
        const NAME: &'static str = "Profile";
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::new("nick", TypeTag::String, "min=5"),
            FieldSpec::new("bio", TypeTag::String, ""),
            FieldSpec::new("motto", TypeTag::String, "-"),
            FieldSpec::new("age", TypeTag::Int, "min=18"),
        ];

        fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
            match index {
                0 => Some(self.nick.as_field_value()),
                1 => Some(self.bio.as_field_value()),
                2 => Some(self.motto.as_field_value()),
                3 => Some(self.age.as_field_value()),
                _ => None,
            }
        }
    }

    fn profile(nick: &str) -> Profile {
        Profile {
            nick: nick.into(),
            bio: String::new(),
            motto: String::new(),
            age: 3,
        }
    }

    #[test]
    fn reports_every_field_in_order() {
        let report = RecordValidator::default().report(&profile("ab"));
        let outcomes: Vec<_> = report.fields().iter().map(|f| f.field).collect();
        assert_eq!(outcomes, vec!["nick", "bio", "motto", "age"]);

        assert!(matches!(report.fields()[0].outcome, FieldOutcome::Failed(_)));
        assert_eq!(
            report.fields()[1].outcome,
            FieldOutcome::Skipped(SkipReason::NoRule)
        );
        assert_eq!(
            report.fields()[2].outcome,
            FieldOutcome::Skipped(SkipReason::SkipSentinel)
        );
        assert_eq!(
            report.fields()[3].outcome,
            FieldOutcome::Skipped(SkipReason::NoValidator(TypeTag::Int))
        );
    }

    #[test]
    fn unruled_string_fields_are_never_checked() {
        // bio and motto are empty, which the built-in validator would reject.
        let errors = validate(&profile("valid"));
        assert!(errors.is_empty());
    }

    #[test]
    fn errors_carry_field_name() {
        let errors = validate(&profile("ab"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), Some("nick"));
        assert_eq!(errors[0].message, "should be at least 5 characters long");
    }

    #[test]
    fn missing_validator_is_unvalidated_not_failed() {
        let report = RecordValidator::default().report(&profile("valid"));
        assert!(report.is_clean());
        assert!(!report.is_exhaustive());
        let unvalidated: Vec<_> = report.unvalidated().map(|(name, _)| name).collect();
        assert_eq!(unvalidated, vec!["age"]);
    }

    #[test]
    fn strict_mode_fails_on_unvalidated_fields() {
        let report = RecordValidator::default()
            .strict(true)
            .report(&profile("valid"));
        assert_eq!(
            report.into_result(),
            Err(ReportError::Unvalidated {
                record: "Profile",
                fields: vec!["age"],
            })
        );

        let report = RecordValidator::default().report(&profile("valid"));
        assert_eq!(report.into_result(), Ok(()));
    }

    #[test]
    fn failures_take_precedence_in_strict_mode() {
        let report = RecordValidator::default().strict(true).report(&profile("ab"));
        assert!(matches!(report.into_result(), Err(ReportError::Invalid(e)) if e.len() == 1));
    }

    #[derive(Debug)]
    struct Silent;

    impl FieldValidator for Silent {
        fn name(&self) -> &'static str {
            "silent"
        }

        fn check(&self, _value: &FieldValue<'_>) -> Verdict {
            Verdict::Invalid(None)
        }
    }

    #[test]
    fn invalid_without_reason_records_no_error() {
        let registry = ValidatorRegistry::new().with(TypeTag::Int, Registration::shared(Silent));
        let report = RecordValidator::new(registry).report(&profile("ab"));

        assert_eq!(report.error_count(), 0);
        assert_eq!(
            report.fields()[3].outcome,
            FieldOutcome::Skipped(SkipReason::InvalidWithoutReason)
        );
    }

    #[test]
    fn rejected_rules_are_reported_in_parsed_mode() {
        struct Bad {
            code: String,
        }

        impl Record for Bad {
            const NAME: &'static str = "Bad";
            const FIELDS: &'static [FieldSpec] =
                &[FieldSpec::new("code", TypeTag::String, "min=x")];

            fn field_value(&self, index: usize) -> Option<FieldValue<'_>> {
                (index == 0).then(|| self.code.as_field_value())
            }
        }

        let validator = RecordValidator::new(ValidatorRegistry::rule_driven());
        let report = validator.report(&Bad { code: "abc".into() });
        assert!(matches!(
            report.fields()[0].outcome,
            FieldOutcome::Skipped(SkipReason::RuleRejected(RuleError::InvalidNumber { .. }))
        ));
        assert!(validator.validate(&Bad { code: String::new() }).is_empty());
    }

    #[test]
    fn missing_value_is_unvalidated() {
        struct Liar;

        impl Record for Liar {
            const NAME: &'static str = "Liar";
            const FIELDS: &'static [FieldSpec] =
                &[FieldSpec::new("ghost", TypeTag::String, "required")];

            fn field_value(&self, _index: usize) -> Option<FieldValue<'_>> {
                None
            }
        }

        let report = RecordValidator::default().report(&Liar);
        assert_eq!(
            report.unvalidated().collect::<Vec<_>>(),
            vec![("ghost", &SkipReason::MissingValue)]
        );
    }

    #[test]
    fn skip_reasons_read_as_sentences() {
        assert_eq!(
            SkipReason::NoValidator(TypeTag::Other("Email")).to_string(),
            "no validator registered for type Email"
        );
        assert_eq!(
            SkipReason::RuleRejected(RuleError::UnknownKey("pattern".into())).to_string(),
            "unknown rule option `pattern`"
        );
    }

    #[test]
    fn report_serializes_outcomes() {
        let report = RecordValidator::default().report(&profile("ab"));
        let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["record"], "Profile");
        assert_eq!(json["fields"][0]["status"], "failed");
        assert_eq!(json["fields"][0]["detail"]["code"], "min_length");
        assert_eq!(json["fields"][3]["status"], "skipped");
        assert_eq!(json["fields"][3]["detail"]["reason"], "no_validator");
        assert_eq!(json["fields"][3]["detail"]["detail"], "int");
    }
}
