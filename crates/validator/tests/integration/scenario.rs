use pretty_assertions::assert_eq;
use tagval_validator::dispatch::{FieldOutcome, SkipReason};
use tagval_validator::foundation::TypeTag;
use tagval_validator::record::describe;
use tagval_validator::{RecordValidator, validate};

use crate::User;

#[test]
fn password_is_checked_against_builtin_bounds() {
    let errors = validate(&User::sample());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), Some("password"));
    assert_eq!(errors[0].code, "max_length");
    assert_eq!(errors[0].message, "should be less than 12 characters long");
    assert_eq!(
        errors[0].to_string(),
        "Struct field \"password\" validation error: should be less than 12 characters long"
    );
}

#[test]
fn user_fields_are_described_in_order() {
    let fields: Vec<_> = describe::<User>()
        .into_iter()
        .map(|f| (f.name, f.type_name(), f.rule.raw()))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("id", "int", ""),
            ("name", "string", "min=5,max=32"),
            ("email", "Email", "regexemail"),
            ("age", "int", "min=18"),
            ("password", "string", "length=24"),
        ]
    );
}

#[test]
fn only_string_fields_reach_a_validator() {
    let report = RecordValidator::default().report(&User::sample());
    let outcomes: Vec<_> = report.fields().iter().map(|f| (f.field, &f.outcome)).collect();

    assert_eq!(outcomes[0], ("id", &FieldOutcome::Skipped(SkipReason::NoRule)));
    assert_eq!(outcomes[1], ("name", &FieldOutcome::Passed));
    assert_eq!(
        outcomes[2],
        (
            "email",
            &FieldOutcome::Skipped(SkipReason::NoValidator(TypeTag::Other("Email")))
        )
    );
    assert_eq!(
        outcomes[3],
        ("age", &FieldOutcome::Skipped(SkipReason::NoValidator(TypeTag::Int)))
    );
    assert!(matches!(outcomes[4], ("password", FieldOutcome::Failed(_))));
}

#[test]
fn multibyte_name_is_measured_in_bytes() {
    let mut user = User::sample();
    user.name = "\u{105}".repeat(7);
    user.password = "secret1".into();

    let errors = validate(&user);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), Some("name"));
    assert_eq!(errors[0].message, "should be less than 12 characters long");
}

#[test]
fn email_is_skipped_whatever_its_value() {
    let mut user = User::sample();
    user.email.0 = String::new();
    user.password = "secret1".into();

    assert!(validate(&user).is_empty());
}

#[test]
fn short_name_is_rejected_by_builtin_minimum() {
    let mut user = User::sample();
    user.name = "Ann".into();

    let errors = validate(&user);
    let messages: Vec<_> = errors.iter().map(|e| (e.field(), e.message.as_ref())).collect();
    assert_eq!(
        messages,
        vec![
            (Some("name"), "should be at least 5 characters long"),
            (Some("password"), "should be less than 12 characters long"),
        ]
    );
}

#[test]
fn empty_name_is_required() {
    let mut user = User::sample();
    user.name.clear();

    let errors = validate(&user);
    assert_eq!(errors[0].field(), Some("name"));
    assert_eq!(errors[0].message, "field required");
}

#[test]
fn validation_is_repeatable() {
    let user = User::sample();
    assert_eq!(validate(&user), validate(&user));
}
