use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::value::{FieldValue, FormValues};

static ALLOWED_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s-]*$").expect("charset pattern"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern")
});

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Which rule produced a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    NotBlank,
    MinLength,
    MaxLength,
    Charset,
    SurroundingWhitespace,
    Email,
    PasswordComplexity,
    SpecialCharacter,
    PrintableAscii,
    Matches,
    MinItems,
    Each,
    DateOrder,
    Number,
    NumberOrder,
    OneOf,
}

/// A single validation rule.
///
/// Apart from `Required`, `NotBlank` and `MinItems`, rules accept an empty
/// value so optional fields only get checked once something is entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    /// Non-empty after trimming
    NotBlank,
    /// Minimum length of the trimmed value, in characters
    MinLength(usize),
    /// Maximum length of the trimmed value, in characters
    MaxLength(usize),
    /// `[A-Za-z0-9\s-]` only
    AllowedCharset,
    /// Raw value must equal its trimmed form
    NoSurroundingWhitespace,
    Email,
    /// At least 8 characters with an upper case letter, a lower case letter and a digit
    PasswordComplexity,
    /// At least one character outside `[A-Za-z0-9]`
    SpecialCharacter,
    PrintableAscii,
    /// Must equal the named field exactly
    Matches(&'static str),
    MinItems(usize),
    /// Applies the inner rules to every item of a list value
    Each(Vec<Rule>),
    /// Date must not be earlier than the named date field
    NotBefore(&'static str),
    Number { min: Option<f64>, max: Option<f64> },
    /// Number must not be less than the named numeric field
    NotLessThan(&'static str),
    OneOf(&'static [&'static str]),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::NotBlank => RuleKind::NotBlank,
            Rule::MinLength(_) => RuleKind::MinLength,
            Rule::MaxLength(_) => RuleKind::MaxLength,
            Rule::AllowedCharset => RuleKind::Charset,
            Rule::NoSurroundingWhitespace => RuleKind::SurroundingWhitespace,
            Rule::Email => RuleKind::Email,
            Rule::PasswordComplexity => RuleKind::PasswordComplexity,
            Rule::SpecialCharacter => RuleKind::SpecialCharacter,
            Rule::PrintableAscii => RuleKind::PrintableAscii,
            Rule::Matches(_) => RuleKind::Matches,
            Rule::MinItems(_) => RuleKind::MinItems,
            Rule::Each(_) => RuleKind::Each,
            Rule::NotBefore(_) => RuleKind::DateOrder,
            Rule::Number { .. } => RuleKind::Number,
            Rule::NotLessThan(_) => RuleKind::NumberOrder,
            Rule::OneOf(_) => RuleKind::OneOf,
        }
    }

    /// Returns `true` when `value` satisfies the rule.
    pub fn check(&self, value: Option<&FieldValue>, form: &FormValues) -> bool {
        match self {
            Rule::Required => value.map(|v| !v.is_empty()).unwrap_or(false),
            Rule::NotBlank => value
                .and_then(FieldValue::as_str)
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false),
            Rule::MinItems(min) => value
                .and_then(FieldValue::as_list)
                .map(|items| items.len() >= *min)
                .unwrap_or(*min == 0),
            _ => match value {
                None => true,
                Some(v) if v.is_empty() => true,
                Some(v) => self.check_present(v, form),
            },
        }
    }

    fn check_present(&self, value: &FieldValue, form: &FormValues) -> bool {
        match self {
            Rule::MinLength(min) => text(value).trim().chars().count() >= *min,
            Rule::MaxLength(max) => text(value).trim().chars().count() <= *max,
            Rule::AllowedCharset => ALLOWED_CHARSET.is_match(text(value)),
            Rule::NoSurroundingWhitespace => {
                let s = text(value);
                s == s.trim()
            }
            Rule::Email => EMAIL.is_match(text(value)),
            Rule::PasswordComplexity => is_complex_password(text(value)),
            Rule::SpecialCharacter => text(value)
                .chars()
                .any(|c| !c.is_ascii_alphanumeric()),
            Rule::PrintableAscii => text(value).chars().all(|c| (' '..='~').contains(&c)),
            Rule::Matches(other) => {
                let other = form.get(*other).and_then(FieldValue::as_str).unwrap_or("");
                text(value) == other
            }
            Rule::Each(rules) => value
                .as_list()
                .unwrap_or(&[])
                .iter()
                .all(|item| {
                    let item = FieldValue::Text(item.clone());
                    rules.iter().all(|r| r.check(Some(&item), form))
                }),
            Rule::NotBefore(other) => {
                match (value.as_date(), form.get(*other).and_then(FieldValue::as_date)) {
                    (Some(end), Some(start)) => end >= start,
                    _ => true,
                }
            }
            Rule::Number { min, max } => match value.as_number() {
                Some(n) if n.is_finite() => {
                    min.map(|m| n >= m).unwrap_or(true) && max.map(|m| n <= m).unwrap_or(true)
                }
                _ => false,
            },
            Rule::NotLessThan(other) => {
                match (value.as_number(), form.get(*other).and_then(FieldValue::as_number)) {
                    (Some(n), Some(floor)) => n >= floor,
                    _ => true,
                }
            }
            Rule::OneOf(allowed) => allowed.contains(&text(value)),
            Rule::Required | Rule::NotBlank | Rule::MinItems(_) => self.check(Some(value), form),
        }
    }
}

fn text(value: &FieldValue) -> &str {
    value.as_str().unwrap_or("")
}

fn is_complex_password(s: &str) -> bool {
    s.chars().count() >= PASSWORD_MIN_LENGTH
        && s.chars().any(|c| c.is_uppercase())
        && s.chars().any(|c| c.is_lowercase())
        && s.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn check(rule: Rule, value: FieldValue) -> bool {
        rule.check(Some(&value), &FormValues::new())
    }

    #[test]
    fn test_password_complexity() {
        assert!(check(Rule::PasswordComplexity, FieldValue::text("Abc12345")));
        assert!(!check(Rule::PasswordComplexity, FieldValue::text("abc12345")));
        assert!(!check(Rule::PasswordComplexity, FieldValue::text("ABC12345")));
        assert!(!check(Rule::PasswordComplexity, FieldValue::text("Abcdefgh")));
        assert!(!check(Rule::PasswordComplexity, FieldValue::text("Abc1234")));
    }

    #[test]
    fn test_special_character_and_ascii() {
        assert!(check(Rule::SpecialCharacter, FieldValue::text("Abc1234!")));
        assert!(!check(Rule::SpecialCharacter, FieldValue::text("Abc12345")));
        assert!(check(Rule::SpecialCharacter, FieldValue::text("Abc 12345")));
        assert!(check(Rule::SpecialCharacter, FieldValue::text("Abcé12345")));
        assert!(check(Rule::PrintableAscii, FieldValue::text("Abc1234!")));
        assert!(!check(Rule::PrintableAscii, FieldValue::text("Abc1234€")));
    }

    #[test]
    fn test_email() {
        assert!(check(Rule::Email, FieldValue::text("jane.doe@example.com")));
        assert!(check(Rule::Email, FieldValue::text("ops+mod@mail.example.io")));
        assert!(!check(Rule::Email, FieldValue::text("jane.doe@example")));
        assert!(!check(Rule::Email, FieldValue::text("@example.com")));
        assert!(!check(Rule::Email, FieldValue::text("jane doe@example.com")));
    }

    #[test]
    fn test_optional_values_skip_format_rules() {
        assert!(check(Rule::Email, FieldValue::text("")));
        assert!(check(Rule::MinLength(3), FieldValue::text("")));
        assert!(Rule::Number { min: None, max: None }.check(None, &FormValues::new()));
        assert!(!Rule::Required.check(None, &FormValues::new()));
    }

    #[test]
    fn test_min_items() {
        assert!(!check(Rule::MinItems(1), FieldValue::List(vec![])));
        assert!(check(Rule::MinItems(1), FieldValue::list(["a"])));
        assert!(!Rule::MinItems(1).check(None, &FormValues::new()));
    }

    #[test]
    fn test_each_item() {
        let rule = Rule::Each(vec![Rule::NotBlank, Rule::AllowedCharset]);
        assert!(check(rule.clone(), FieldValue::list(["News", "Sports-2"])));
        assert!(!check(rule.clone(), FieldValue::list(["News", "  "])));
        assert!(!check(rule, FieldValue::list(["News", "a!"])));
    }

    #[test]
    fn test_date_order() {
        let mut form = FormValues::new();
        let start = NaiveDate::from_ymd_opt(2024, 3, 10);
        form.insert("from".into(), FieldValue::Date(start));
        let rule = Rule::NotBefore("from");
        let same = FieldValue::Date(start);
        let before = FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 9));
        assert!(rule.check(Some(&same), &form));
        assert!(!rule.check(Some(&before), &form));
        assert!(rule.check(Some(&FieldValue::Date(None)), &form));
    }

    #[test]
    fn test_number_coercion_and_order() {
        let rule = Rule::Number {
            min: Some(13.0),
            max: Some(120.0),
        };
        assert!(check(rule.clone(), FieldValue::number(" 18 ")));
        assert!(!check(rule.clone(), FieldValue::number("12")));
        assert!(!check(rule, FieldValue::number("eighteen")));

        let mut form = FormValues::new();
        form.insert("ageMin".into(), FieldValue::number("30"));
        let order = Rule::NotLessThan("ageMin");
        assert!(order.check(Some(&FieldValue::number("30")), &form));
        assert!(!order.check(Some(&FieldValue::number("29")), &form));
    }

    #[test]
    fn test_one_of() {
        const GENDERS: &[&str] = &["male", "female", "other"];
        assert!(check(Rule::OneOf(GENDERS), FieldValue::choice("other")));
        assert!(!check(Rule::OneOf(GENDERS), FieldValue::choice("robot")));
    }
}
