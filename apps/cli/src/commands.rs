//! Subcommand handlers. Results go to stdout; logs go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use tagval_validator::dispatch::ValidationReport;
use tagval_validator::record::{Record, describe as describe_fields};
use tagval_validator::RecordValidator;

use crate::cli::{OutputFormat, SampleArgs};
use crate::settings::Settings;
use crate::user::User;

/// Prints the record name and one line per field: name, type, quoted rule,
/// Rust type.
pub fn describe(settings: &Settings) -> anyhow::Result<ExitCode> {
    let fields = describe_fields::<User>();
    let mut out = io::stdout().lock();

    match settings.output {
        OutputFormat::Json => {
            let doc = serde_json::json!({ "name": User::NAME, "kind": "struct", "fields": fields });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Name: {}, kind: struct", User::NAME)?;
            for field in &fields {
                writeln!(
                    out,
                    "{} [{}] {:?} {}",
                    field.name,
                    field.type_tag,
                    field.rule.raw(),
                    field.rust_type
                )?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the sample record as one line of JSON.
pub fn encode(sample: SampleArgs) -> anyhow::Result<ExitCode> {
    let user = User::from(sample);
    writeln!(io::stdout().lock(), "{}", serde_json::to_string(&user)?)?;
    Ok(ExitCode::SUCCESS)
}

/// Validates the sample record and prints the outcome.
pub fn check(settings: &Settings, sample: SampleArgs) -> anyhow::Result<ExitCode> {
    let user = User::from(sample);
    let validator = RecordValidator::from_config(&settings.validation);
    tracing::debug!(
        rule_mode = %settings.validation.rule_mode,
        strict = settings.validation.strict,
        "checking sample record"
    );

    let report = validator.report(&user);
    let mut out = io::stdout().lock();
    match settings.output {
        OutputFormat::Json => writeln!(out, "{}", report.to_json_pretty()?)?,
        OutputFormat::Text => print_text(&mut out, &report)?,
    }

    match report.into_result() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            tracing::info!(%error, "validation failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_text(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    for error in report.errors() {
        writeln!(out, "{error}")?;
    }

    if report.is_strict() {
        for (field, reason) in report.unvalidated() {
            writeln!(out, "Struct field {field:?} was not validated: {reason}")?;
        }
    }

    match report.error_count() {
        0 if report.is_strict() && !report.is_exhaustive() => {
            writeln!(out, "{}: incomplete", report.record())
        }
        0 => writeln!(out, "{}: valid", report.record()),
        1 => writeln!(out, "{}: 1 error", report.record()),
        n => writeln!(out, "{}: {n} errors", report.record()),
    }
}
