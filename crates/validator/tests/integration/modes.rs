use pretty_assertions::assert_eq;
use rstest::rstest;
use tagval_validator::dispatch::{ReportError, SkipReason};
use tagval_validator::rule::RuleError;
use tagval_validator::{Record, RecordValidator, RuleMode, ValidationConfig};

use crate::User;

fn parsed() -> RecordValidator {
    RecordValidator::from_config(&ValidationConfig {
        rule_mode: RuleMode::Parsed,
        strict: false,
    })
}

#[rstest]
#[case::exact("123456123456123456123456", None)]
#[case::one_over("1234561234561234561234561", Some("should be less than 24 characters long"))]
#[case::one_under("12345612345612345612345", Some("should be at least 24 characters long"))]
fn parsed_mode_honours_declared_length(#[case] password: &str, #[case] expected: Option<&str>) {
    let mut user = User::sample();
    user.password = password.into();

    let errors = parsed().validate(&user);
    assert_eq!(errors.first().map(|e| e.message.as_ref()), expected);
    assert!(errors.len() <= 1);
}

#[test]
fn parsed_mode_uses_declared_name_bounds() {
    let mut user = User::sample();
    user.name = "Abcdefghijklmnopqrstuvwxyz".into();
    user.password = "123456123456123456123456".into();

    // 26 characters: over the built-in 12, within the declared 32.
    assert!(parsed().validate(&user).is_empty());
    assert_eq!(RecordValidator::default().validate(&user).len(), 2);
}

#[derive(Record)]
struct Coupon {
    #[validate(rule = "min=three")]
    code: String,
    #[validate(rule = "required,uppercase")]
    label: String,
}

#[test]
fn fixed_mode_never_reads_rule_text() {
    let coupon = Coupon {
        code: "SPRING".into(),
        label: "SPRING".into(),
    };
    assert!(RecordValidator::default().report(&coupon).is_exhaustive());
}

#[test]
fn parsed_mode_reports_rejected_rules() {
    let coupon = Coupon {
        code: "SPRING".into(),
        label: "SPRING".into(),
    };
    let report = parsed().report(&coupon);
    let unvalidated: Vec<_> = report.unvalidated().collect();

    assert_eq!(unvalidated.len(), 2);
    assert!(matches!(
        unvalidated[0],
        ("code", SkipReason::RuleRejected(RuleError::InvalidNumber { .. }))
    ));
    assert!(matches!(
        unvalidated[1],
        ("label", SkipReason::RuleRejected(RuleError::Unsupported { .. }))
    ));
}

#[test]
fn strict_config_surfaces_unvalidated_rules() {
    let config = ValidationConfig {
        rule_mode: RuleMode::Parsed,
        strict: true,
    };
    let mut user = User::sample();
    user.password = "123456123456123456123456".into();

    let result = RecordValidator::from_config(&config).report(&user).into_result();
    assert_eq!(
        result,
        Err(ReportError::Unvalidated {
            record: "User",
            fields: vec!["email", "age"],
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "record User has fields whose rules were not checked: email, age"
    );
}
