use crate::shared::validation::{FieldSchema, Rule, Schema};

pub mod fields {
    pub const CATEGORY_ID: &str = "categoryId";
    pub const SUBCATEGORY_IDS: &str = "subcategoryIds";
    pub const TAGS: &str = "tags";
    pub const AGE_RATING: &str = "ageRating";
}

pub const AGE_RATINGS: &[&str] = &["everyone", "teen", "mature"];

pub fn tag_metadata_schema() -> Schema {
    Schema::new()
        .field(FieldSchema::new(fields::CATEGORY_ID).rule(Rule::Required, "Category is required"))
        .field(
            FieldSchema::new(fields::SUBCATEGORY_IDS)
                .rule(Rule::MinItems(1), "Select at least one sub-category"),
        )
        .field(
            FieldSchema::new(fields::TAGS)
                .rule(Rule::MinItems(1), "Add at least one tag")
                .rule(
                    Rule::Each(vec![
                        Rule::NotBlank,
                        Rule::MaxLength(30),
                        Rule::AllowedCharset,
                        Rule::NoSurroundingWhitespace,
                    ]),
                    "Tags must be up to 30 letters, digits, spaces or hyphens",
                ),
        )
        .field(
            FieldSchema::new(fields::AGE_RATING)
                .rule(Rule::Required, "Age rating is required")
                .rule(Rule::OneOf(AGE_RATINGS), "Unknown age rating"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormValues, RuleKind};

    fn values() -> FormValues {
        let mut v = FormValues::new();
        v.insert(fields::CATEGORY_ID.into(), FieldValue::choice("cat-1"));
        v.insert(fields::SUBCATEGORY_IDS.into(), FieldValue::list(["sub-1"]));
        v.insert(fields::TAGS.into(), FieldValue::list(["highlights", "match-day"]));
        v.insert(fields::AGE_RATING.into(), FieldValue::choice("teen"));
        v
    }

    #[test]
    fn test_valid_metadata() {
        assert!(tag_metadata_schema().validate(&values()).is_empty());
    }

    #[test]
    fn test_invalid_metadata() {
        let mut v = values();
        v.insert(fields::CATEGORY_ID.into(), FieldValue::choice(""));
        v.insert(fields::SUBCATEGORY_IDS.into(), FieldValue::List(vec![]));
        v.insert(fields::TAGS.into(), FieldValue::list(["ok", "#bad"]));
        v.insert(fields::AGE_RATING.into(), FieldValue::choice("adults"));
        let errors = tag_metadata_schema().validate(&v);
        assert_eq!(errors[fields::CATEGORY_ID].kind, RuleKind::Required);
        assert_eq!(errors[fields::SUBCATEGORY_IDS].kind, RuleKind::MinItems);
        assert_eq!(errors[fields::TAGS].kind, RuleKind::Each);
        assert_eq!(errors[fields::AGE_RATING].kind, RuleKind::OneOf);
    }
}
