use std::collections::BTreeMap;

use chrono::NaiveDate;
use contracts::shared::validation::{FieldError, FieldValue, FormValues, Schema};

/// One field of a form: current and initial value, last error, touched flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    pub initial: FieldValue,
    pub error: Option<FieldError>,
    pub touched: bool,
}

impl FieldState {
    fn new(value: FieldValue) -> Self {
        Self {
            initial: value.clone(),
            value,
            error: None,
            touched: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }
}

/// Values, errors and dirtiness of one drawer form, validated by a schema.
///
/// Errors of a field become visible once the field was edited or a submit
/// was attempted. Every edit re-validates all visible fields so that
/// cross-field rules (password confirmation, date and age ranges) follow the
/// field they depend on.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: Schema,
    fields: BTreeMap<String, FieldState>,
    submitted: bool,
}

impl FormState {
    pub fn new(schema: Schema, initial: FormValues) -> Self {
        let mut state = Self {
            schema,
            fields: BTreeMap::new(),
            submitted: false,
        };
        state.reset(initial);
        state
    }

    /// Replace all values and forget errors, e.g. after the edited entity was fetched.
    pub fn reset(&mut self, initial: FormValues) {
        self.fields = initial
            .into_iter()
            .map(|(name, value)| (name, FieldState::new(value)))
            .collect();
        self.submitted = false;
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.value = value;
                field.touched = true;
            }
            None => {
                let mut field = FieldState::new(value);
                field.initial = empty_like(&field.value);
                field.touched = true;
                self.fields.insert(name.to_string(), field);
            }
        }
        self.revalidate();
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|f| &f.value)
    }

    pub fn text(&self, name: &str) -> String {
        self.value(name)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
            .to_string()
    }

    pub fn list(&self, name: &str) -> Vec<String> {
        self.value(name)
            .and_then(FieldValue::as_list)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.value(name).and_then(FieldValue::as_date)
    }

    /// Visible error of a field.
    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.fields.get(name).and_then(|f| f.error.as_ref())
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, f)| (name.clone(), f.value.clone()))
            .collect()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(FieldState::is_dirty)
    }

    /// Submit attempt: shows every error and reports whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.submitted = true;
        self.revalidate();
        self.fields.values().all(|f| f.error.is_none())
    }

    fn revalidate(&mut self) {
        let values = self.values();
        let errors = self.schema.validate(&values);
        let submitted = self.submitted;
        for (name, field) in self.fields.iter_mut() {
            field.error = if submitted || field.touched {
                errors.get(name).cloned()
            } else {
                None
            };
        }
        // rules on fields the form never held (e.g. an unset select)
        if submitted {
            for (name, error) in errors {
                self.fields.entry(name).or_insert_with(|| FieldState {
                    value: FieldValue::text(""),
                    initial: FieldValue::text(""),
                    error: Some(error),
                    touched: false,
                });
            }
        }
    }
}

fn empty_like(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(_) => FieldValue::text(""),
        FieldValue::Choice(_) => FieldValue::choice(""),
        FieldValue::Number(_) => FieldValue::number(""),
        FieldValue::List(_) => FieldValue::List(Vec::new()),
        FieldValue::Date(_) => FieldValue::Date(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_admin_user::schema::{change_password_schema, fields};
    use contracts::domain::a003_category::schema::category_schema;
    use contracts::shared::validation::RuleKind;

    fn password_form() -> FormState {
        let mut initial = FormValues::new();
        for name in [
            fields::CURRENT_PASSWORD,
            fields::NEW_PASSWORD,
            fields::CONFIRM_PASSWORD,
        ] {
            initial.insert(name.to_string(), FieldValue::text(""));
        }
        FormState::new(change_password_schema(), initial)
    }

    #[test]
    fn test_untouched_fields_hide_errors_until_submit() {
        let mut form = password_form();
        form.set(fields::CURRENT_PASSWORD, FieldValue::text("old-Pass1!"));
        assert!(form.error(fields::NEW_PASSWORD).is_none());

        assert!(!form.validate());
        assert_eq!(
            form.error(fields::NEW_PASSWORD).map(|e| e.kind),
            Some(RuleKind::Required)
        );
    }

    #[test]
    fn test_confirmation_follows_primary_field() {
        let mut form = password_form();
        form.set(fields::CURRENT_PASSWORD, FieldValue::text("old-Pass1!"));
        form.set(fields::CONFIRM_PASSWORD, FieldValue::text("Abc12345!"));
        form.set(fields::NEW_PASSWORD, FieldValue::text("Abc12345?"));
        assert_eq!(
            form.error(fields::CONFIRM_PASSWORD).map(|e| e.kind),
            Some(RuleKind::Matches)
        );

        form.set(fields::NEW_PASSWORD, FieldValue::text("Abc12345!"));
        assert!(form.error(fields::CONFIRM_PASSWORD).is_none());
        assert!(form.validate());
    }

    #[test]
    fn test_dirty_tracks_initial_values() {
        let mut initial = FormValues::new();
        initial.insert("categoryName".into(), FieldValue::text("Sports"));
        initial.insert("subcategories".into(), FieldValue::list(["Football"]));
        let mut form = FormState::new(category_schema(), initial.clone());
        assert!(!form.is_dirty());

        form.set("categoryName", FieldValue::text("Sport"));
        assert!(form.is_dirty());
        form.set("categoryName", FieldValue::text("Sports"));
        assert!(!form.is_dirty());

        form.set("categoryName", FieldValue::text("x"));
        form.reset(initial);
        assert!(!form.is_dirty());
        assert!(form.error("categoryName").is_none());
    }

    #[test]
    fn test_missing_field_reported_on_submit() {
        let mut form = FormState::new(category_schema(), FormValues::new());
        assert!(!form.validate());
        assert_eq!(
            form.error("subcategories").map(|e| e.kind),
            Some(RuleKind::MinItems)
        );
        assert_eq!(form.list("subcategories"), Vec::<String>::new());
    }
}
