use crate::shared::validation::{text_field, FieldSchema, Rule, Schema};

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PLATFORMS: &str = "platforms";
    pub const SIGNUP_FROM: &str = "signupFrom";
    pub const SIGNUP_TO: &str = "signupTo";
    pub const AGE_MIN: &str = "ageMin";
    pub const AGE_MAX: &str = "ageMax";
    pub const GENDER: &str = "gender";
}

pub const PLATFORMS: &[&str] = &["ios", "android", "web"];
pub const GENDERS: &[&str] = &["any", "female", "male", "other"];

const AGE_FLOOR: f64 = 13.0;
const AGE_CEILING: f64 = 120.0;

pub fn cohort_schema() -> Schema {
    Schema::new()
        .field(text_field(fields::NAME, "Cohort name", 2, 40))
        .field(
            FieldSchema::new(fields::DESCRIPTION)
                .rule(Rule::MaxLength(250), "Description must be at most 250 characters"),
        )
        .field(
            FieldSchema::new(fields::PLATFORMS)
                .rule(Rule::MinItems(1), "Select at least one platform")
                .rule(Rule::Each(vec![Rule::OneOf(PLATFORMS)]), "Unknown platform"),
        )
        .field(FieldSchema::new(fields::SIGNUP_FROM))
        .field(
            FieldSchema::new(fields::SIGNUP_TO).rule(
                Rule::NotBefore(fields::SIGNUP_FROM),
                "End date cannot be before the start date",
            ),
        )
        .field(FieldSchema::new(fields::AGE_MIN).rule(
            Rule::Number {
                min: Some(AGE_FLOOR),
                max: Some(AGE_CEILING),
            },
            "Minimum age must be a number between 13 and 120",
        ))
        .field(
            FieldSchema::new(fields::AGE_MAX)
                .rule(
                    Rule::Number {
                        min: Some(AGE_FLOOR),
                        max: Some(AGE_CEILING),
                    },
                    "Maximum age must be a number between 13 and 120",
                )
                .rule(
                    Rule::NotLessThan(fields::AGE_MIN),
                    "Maximum age cannot be less than minimum age",
                ),
        )
        .field(
            FieldSchema::new(fields::GENDER)
                .rule(Rule::Required, "Gender is required")
                .rule(Rule::OneOf(GENDERS), "Unknown gender"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormValues, RuleKind};
    use chrono::NaiveDate;

    fn values() -> FormValues {
        let mut v = FormValues::new();
        v.insert(fields::NAME.into(), FieldValue::text("Spring signups"));
        v.insert(fields::DESCRIPTION.into(), FieldValue::text(""));
        v.insert(fields::PLATFORMS.into(), FieldValue::list(["ios", "web"]));
        v.insert(
            fields::SIGNUP_FROM.into(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 1)),
        );
        v.insert(
            fields::SIGNUP_TO.into(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 31)),
        );
        v.insert(fields::AGE_MIN.into(), FieldValue::number("18"));
        v.insert(fields::AGE_MAX.into(), FieldValue::number("35"));
        v.insert(fields::GENDER.into(), FieldValue::choice("any"));
        v
    }

    #[test]
    fn test_valid_cohort() {
        assert!(cohort_schema().validate(&values()).is_empty());
    }

    #[test]
    fn test_optional_bounds_may_be_empty() {
        let mut v = values();
        v.insert(fields::AGE_MIN.into(), FieldValue::number(""));
        v.insert(fields::AGE_MAX.into(), FieldValue::number(""));
        v.insert(fields::SIGNUP_TO.into(), FieldValue::Date(None));
        assert!(cohort_schema().validate(&v).is_empty());
    }

    #[test]
    fn test_cross_field_rules() {
        let mut v = values();
        v.insert(
            fields::SIGNUP_TO.into(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 2, 28)),
        );
        v.insert(fields::AGE_MAX.into(), FieldValue::number("17"));
        let errors = cohort_schema().validate(&v);
        assert_eq!(errors[fields::SIGNUP_TO].kind, RuleKind::DateOrder);
        assert_eq!(errors[fields::AGE_MAX].kind, RuleKind::NumberOrder);
    }

    #[test]
    fn test_enum_fields() {
        let mut v = values();
        v.insert(fields::PLATFORMS.into(), FieldValue::list(["ios", "smart-tv"]));
        v.insert(fields::GENDER.into(), FieldValue::choice(""));
        v.insert(fields::AGE_MIN.into(), FieldValue::number("abc"));
        let errors = cohort_schema().validate(&v);
        assert_eq!(errors[fields::PLATFORMS].kind, RuleKind::Each);
        assert_eq!(errors[fields::GENDER].kind, RuleKind::Required);
        assert_eq!(errors[fields::AGE_MIN].kind, RuleKind::Number);
    }
}
