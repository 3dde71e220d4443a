//! Validation rules attached to record fields.
//!
//! A [`Rule`] is the raw tag text, e.g. `"min=5,max=32"`. The dispatcher only
//! asks whether a rule is present; validators that take configuration from the
//! rule call [`Rule::parse`] to get a [`RuleSet`].
//!
//! # Grammar
//!
//! Comma-separated items, whitespace around items ignored:
//!
//! - `min=N`, `max=N`, `length=N` with `N` an unsigned integer
//! - `required`
//! - any other bare word is kept as an unrecognized flag

use std::fmt;

use serde::{Serialize, Serializer};

/// Rule text meaning "do not validate this field".
pub const SKIP_SENTINEL: &str = "-";

// ============================================================================
// RULE
// ============================================================================

/// The raw rule string of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rule {
    raw: &'static str,
}

impl Rule {
    /// Wraps raw rule text.
    #[must_use]
    pub const fn new(raw: &'static str) -> Self {
        Self { raw }
    }

    /// The text exactly as declared.
    #[must_use]
    pub const fn raw(&self) -> &'static str {
        self.raw
    }

    /// The text with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &'static str {
        self.raw.trim()
    }

    /// True if the trimmed text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// True if the trimmed text is the skip sentinel `-`.
    #[must_use]
    pub fn is_skip_sentinel(&self) -> bool {
        self.trimmed() == SKIP_SENTINEL
    }

    /// True if the field must not be offered to a validator.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.is_empty() || self.is_skip_sentinel()
    }

    /// Parses the rule text into structured options.
    pub fn parse(&self) -> Result<RuleSet, RuleError> {
        self.trimmed().parse()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.raw)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Structured options parsed from a [`Rule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// `min=N`
    pub min: Option<usize>,
    /// `max=N`
    pub max: Option<usize>,
    /// `length=N`
    pub length: Option<usize>,
    /// `required`
    pub required: bool,
    /// Bare words that are not known options, in declaration order.
    pub unrecognized: Vec<String>,
}

impl RuleSet {
    /// True if no option was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn set_number(slot: &mut Option<usize>, key: &str, value: &str) -> Result<(), RuleError> {
        if slot.is_some() {
            return Err(RuleError::Duplicate(key.to_string()));
        }
        let number = value.parse().map_err(|_| RuleError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        *slot = Some(number);
        Ok(())
    }
}

impl std::str::FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rules = RuleSet::default();

        for item in text.split(',').map(str::trim).filter(|i| !i.is_empty()) {
            match item.split_once('=') {
                Some((key, value)) => {
                    let (key, value) = (key.trim(), value.trim());
                    match key {
                        "min" => Self::set_number(&mut rules.min, key, value)?,
                        "max" => Self::set_number(&mut rules.max, key, value)?,
                        "length" => Self::set_number(&mut rules.length, key, value)?,
                        _ => return Err(RuleError::UnknownKey(key.to_string())),
                    }
                }
                None if item == "required" => {
                    if rules.required {
                        return Err(RuleError::Duplicate(item.to_string()));
                    }
                    rules.required = true;
                }
                None => rules.unrecognized.push(item.to_string()),
            }
        }

        Ok(rules)
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Why a rule could not be turned into a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RuleError {
    /// A numeric option had a non-numeric value.
    #[error("invalid value `{value}` for rule option `{key}`: expected an unsigned integer")]
    InvalidNumber {
        /// Option name.
        key: String,
        /// Offending value.
        value: String,
    },

    /// The same option appeared twice.
    #[error("rule option `{0}` is given more than once")]
    Duplicate(String),

    /// `key=value` with a key no validator understands.
    #[error("unknown rule option `{0}`")]
    UnknownKey(String),

    /// The rule parsed, but the validator cannot honour it.
    #[error("rule `{rule}` is not supported by the {validator} validator")]
    Unsupported {
        /// Offending rule item.
        rule: String,
        /// Validator name.
        validator: &'static str,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", true, false)]
    #[case("   ", true, false)]
    #[case("-", false, true)]
    #[case("  -  ", false, true)]
    #[case("min=5", false, false)]
    #[case("--", false, false)]
    fn skip_detection(#[case] raw: &'static str, #[case] empty: bool, #[case] sentinel: bool) {
        let rule = Rule::new(raw);
        assert_eq!(rule.is_empty(), empty);
        assert_eq!(rule.is_skip_sentinel(), sentinel);
        assert_eq!(rule.is_skipped(), empty || sentinel);
    }

    #[test]
    fn parses_min_and_max() {
        let rules = Rule::new("min=5,max=32").parse().unwrap();
        assert_eq!(
            rules,
            RuleSet {
                min: Some(5),
                max: Some(32),
                ..RuleSet::default()
            }
        );
    }

    #[test]
    fn parses_with_whitespace_and_flags() {
        let rules = Rule::new(" length = 24 , required ,, ").parse().unwrap();
        assert_eq!(rules.length, Some(24));
        assert!(rules.required);
        assert!(rules.unrecognized.is_empty());
    }

    #[test]
    fn keeps_unrecognized_flags() {
        let rules = Rule::new("regexemail").parse().unwrap();
        assert_eq!(rules.unrecognized, vec!["regexemail".to_string()]);
    }

    #[test]
    fn empty_rule_parses_to_empty_set() {
        assert!(Rule::new("").parse().unwrap().is_empty());
    }

    #[rstest]
    #[case("min=abc", RuleError::InvalidNumber { key: "min".into(), value: "abc".into() })]
    #[case("max=", RuleError::InvalidNumber { key: "max".into(), value: String::new() })]
    #[case("min=-1", RuleError::InvalidNumber { key: "min".into(), value: "-1".into() })]
    #[case("min=1,min=2", RuleError::Duplicate("min".into()))]
    #[case("required,required", RuleError::Duplicate("required".into()))]
    #[case("pattern=x", RuleError::UnknownKey("pattern".into()))]
    fn rejects_malformed_rules(#[case] raw: &'static str, #[case] expected: RuleError) {
        assert_eq!(Rule::new(raw).parse(), Err(expected));
    }

    #[test]
    fn error_messages_name_the_option() {
        let err = Rule::new("min=abc").parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value `abc` for rule option `min`: expected an unsigned integer"
        );
    }
}
