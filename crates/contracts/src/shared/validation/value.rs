use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current value of one form field, tagged by the kind of control that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    /// Free text input
    Text(String),
    /// Multi-select target
    List(Vec<String>),
    /// Single-select target; `""` is the blank sentinel
    Choice(String),
    Date(Option<NaiveDate>),
    /// Raw numeric input, coerced during validation
    Number(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn choice(value: impl Into<String>) -> Self {
        FieldValue::Choice(value.into())
    }

    pub fn number(value: impl Into<String>) -> Self {
        FieldValue::Number(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// String view of text-like kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) | FieldValue::Number(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        self.as_str().and_then(|s| s.trim().parse::<f64>().ok())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) | FieldValue::Number(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Date(d) => d.is_none(),
        }
    }
}

/// Field name -> value snapshot of a whole form.
pub type FormValues = BTreeMap<String, FieldValue>;

/// Typed reads of a form snapshot. Missing or mismatched fields read as empty.
pub trait FormValuesExt {
    fn text(&self, name: &str) -> String;
    fn list(&self, name: &str) -> Vec<String>;
    fn date(&self, name: &str) -> Option<NaiveDate>;
    /// Trimmed text, `None` when blank
    fn optional_text(&self, name: &str) -> Option<String>;
    fn number(&self, name: &str) -> Option<f64>;
}

impl FormValuesExt for FormValues {
    fn text(&self, name: &str) -> String {
        self.get(name)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
            .to_string()
    }

    fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .and_then(FieldValue::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(FieldValue::as_date)
    }

    fn optional_text(&self, name: &str) -> Option<String> {
        let text = self.text(name);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_reads() {
        let mut values = FormValues::new();
        values.insert("name".into(), FieldValue::text("  Ana "));
        values.insert("blank".into(), FieldValue::text("   "));
        values.insert("tags".into(), FieldValue::list(["a", "b"]));
        values.insert("age".into(), FieldValue::number(" 18 "));

        assert_eq!(values.text("name"), "  Ana ");
        assert_eq!(values.optional_text("name"), Some("Ana".to_string()));
        assert_eq!(values.optional_text("blank"), None);
        assert_eq!(values.list("tags"), vec!["a", "b"]);
        assert_eq!(values.number("age"), Some(18.0));
        assert!(values.list("name").is_empty());
        assert_eq!(values.text("missing"), "");
        assert_eq!(values.date("missing"), None);
    }
}
