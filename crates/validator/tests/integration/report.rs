use pretty_assertions::assert_eq;
use tagval_validator::dispatch::FieldOutcome;
use tagval_validator::{Record, RecordValidator, validate};

use crate::User;

#[derive(Record)]
#[record(name = "Draft")]
struct Note {
    #[validate(rule = "-")]
    title: String,
    #[validate(skip)]
    body: String,
    #[validate(rule = "   ")]
    footer: String,
}

#[test]
fn opted_out_fields_never_produce_errors() {
    let note = Note {
        title: String::new(),
        body: String::new(),
        footer: String::new(),
    };
    let report = RecordValidator::default().report(&note);

    assert_eq!(report.record(), "Draft");
    assert!(report.is_clean());
    assert!(report.is_exhaustive());
    assert!(
        report
            .fields()
            .iter()
            .all(|f| matches!(f.outcome, FieldOutcome::Skipped(_)))
    );
    assert!(validate(&note).is_empty());
}

#[test]
fn report_errors_match_validate() {
    let user = User::sample();
    let validator = RecordValidator::default();
    let report = validator.report(&user);

    assert_eq!(report.error_count(), 1);
    assert_eq!(
        report.errors().cloned().collect::<Vec<_>>(),
        validator.validate(&user)
    );
}

#[test]
fn report_serializes_to_json() {
    let report = RecordValidator::default().report(&User::sample());
    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["record"], "User");
    assert_eq!(json["strict"], false);
    assert_eq!(json["fields"][1]["field"], "name");
    assert_eq!(json["fields"][1]["status"], "passed");
    assert_eq!(json["fields"][4]["detail"]["field"], "password");
    assert_eq!(json["fields"][4]["detail"]["params"][0], serde_json::json!(["max", "12"]));
}
