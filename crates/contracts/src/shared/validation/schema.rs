use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rule::{Rule, RuleKind};
use super::value::FormValues;

/// Field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: RuleKind,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Field name -> first failing rule of that field.
pub type FieldErrors = BTreeMap<String, FieldError>;

#[derive(Debug, Clone)]
struct FieldRule {
    rule: Rule,
    message: String,
}

/// Ordered rules for one named field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: &'static str,
    rules: Vec<FieldRule>,
}

impl FieldSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule {
            rule,
            message: message.into(),
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// First failing rule wins.
    pub fn validate(&self, values: &FormValues) -> Option<FieldError> {
        let value = values.get(self.name);
        self.rules
            .iter()
            .find(|r| !r.rule.check(value, values))
            .map(|r| FieldError {
                kind: r.rule.kind(),
                message: r.message.clone(),
            })
    }
}

/// Standard rule chain shared by name-like text fields.
///
/// Order matters: a value such as `" ab"` passes the trimmed length checks
/// and the charset, then fails on the surrounding whitespace check.
pub fn text_field(name: &'static str, label: &str, min: usize, max: usize) -> FieldSchema {
    FieldSchema::new(name)
        .rule(Rule::Required, format!("{label} is required"))
        .rule(Rule::NotBlank, format!("{label} cannot be blank"))
        .rule(
            Rule::MinLength(min),
            format!("{label} must be at least {min} characters"),
        )
        .rule(
            Rule::MaxLength(max),
            format!("{label} must be at most {max} characters"),
        )
        .rule(
            Rule::AllowedCharset,
            format!("{label} may only contain letters, digits, spaces and hyphens"),
        )
        .rule(
            Rule::NoSurroundingWhitespace,
            format!("{label} cannot start or end with a space"),
        )
}

/// Declarative validation schema of one form.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|f| f.validate(values).map(|e| (f.name.to_string(), e)))
            .collect()
    }

    /// Validate a single field against the full form snapshot.
    ///
    /// Returns `None` for valid fields and for names the schema does not know.
    pub fn validate_field(&self, name: &str, values: &FormValues) -> Option<FieldError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.validate(values))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FieldValue;

    fn form(pairs: &[(&str, FieldValue)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let schema = Schema::new().field(text_field("name", "Name", 2, 10));

        let errors = schema.validate(&form(&[("name", FieldValue::text(""))]));
        assert_eq!(errors["name"].kind, RuleKind::Required);

        let errors = schema.validate(&form(&[("name", FieldValue::text("   "))]));
        assert_eq!(errors["name"].kind, RuleKind::NotBlank);

        let errors = schema.validate(&form(&[("name", FieldValue::text("a!"))]));
        assert_eq!(errors["name"].kind, RuleKind::Charset);
        assert_eq!(
            errors["name"].message,
            "Name may only contain letters, digits, spaces and hyphens"
        );
    }

    #[test]
    fn test_valid_fields_are_absent() {
        let schema = Schema::new()
            .field(text_field("name", "Name", 2, 10))
            .field(FieldSchema::new("email").rule(Rule::Email, "Invalid email"));
        let errors = schema.validate(&form(&[
            ("name", FieldValue::text("ab")),
            ("email", FieldValue::text("nope")),
        ]));
        assert!(!errors.contains_key("name"));
        assert_eq!(errors["email"].to_string(), "Invalid email");
    }

    #[test]
    fn test_validate_single_field() {
        let schema = Schema::new().field(text_field("name", "Name", 2, 10));
        let values = form(&[("name", FieldValue::text("abcdefghijk"))]);
        assert_eq!(
            schema.validate_field("name", &values).map(|e| e.kind),
            Some(RuleKind::MaxLength)
        );
        assert_eq!(schema.validate_field("unknown", &values), None);
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["name"]);
    }
}
