use crate::shared::validation::{text_field, FieldSchema, Rule, Schema};

pub mod fields {
    pub const CATEGORY_NAME: &str = "categoryName";
    pub const SUBCATEGORIES: &str = "subcategories";
    pub const SUBCATEGORY_NAME: &str = "subcategoryName";
}

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;

pub fn category_schema() -> Schema {
    Schema::new()
        .field(text_field(fields::CATEGORY_NAME, "Category name", NAME_MIN, NAME_MAX))
        .field(
            FieldSchema::new(fields::SUBCATEGORIES)
                .rule(Rule::MinItems(1), "Add at least one sub-category")
                .rule(
                    Rule::Each(vec![
                        Rule::NotBlank,
                        Rule::MinLength(NAME_MIN),
                        Rule::MaxLength(NAME_MAX),
                        Rule::AllowedCharset,
                        Rule::NoSurroundingWhitespace,
                    ]),
                    format!(
                        "Sub-category names must be {NAME_MIN}-{NAME_MAX} letters, digits, spaces or hyphens"
                    ),
                ),
        )
}

pub fn subcategory_schema() -> Schema {
    Schema::new().field(text_field(
        fields::SUBCATEGORY_NAME,
        "Sub-category name",
        NAME_MIN,
        NAME_MAX,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormValues, RuleKind};

    fn category(name: &str) -> FormValues {
        let mut values = FormValues::new();
        values.insert(fields::CATEGORY_NAME.into(), FieldValue::text(name));
        values.insert(fields::SUBCATEGORIES.into(), FieldValue::list(["General"]));
        values
    }

    fn name_error(name: &str) -> Option<RuleKind> {
        category_schema()
            .validate(&category(name))
            .get(fields::CATEGORY_NAME)
            .map(|e| e.kind)
    }

    #[test]
    fn test_category_name_rules() {
        assert_eq!(name_error("ab"), None);
        assert_eq!(name_error("a"), Some(RuleKind::MinLength));
        assert_eq!(name_error("a!"), Some(RuleKind::Charset));
        assert_eq!(name_error(" ab"), Some(RuleKind::SurroundingWhitespace));
        assert_eq!(name_error("ab "), Some(RuleKind::SurroundingWhitespace));
        assert_eq!(name_error("Sci-fi and Fantasy"), None);
        assert_eq!(name_error(&"a".repeat(51)), Some(RuleKind::MaxLength));
    }

    #[test]
    fn test_subcategories() {
        let mut values = category("Sports");
        values.insert(fields::SUBCATEGORIES.into(), FieldValue::List(vec![]));
        let errors = category_schema().validate(&values);
        assert_eq!(errors[fields::SUBCATEGORIES].kind, RuleKind::MinItems);

        values.insert(
            fields::SUBCATEGORIES.into(),
            FieldValue::list(["Football", " Tennis"]),
        );
        let errors = category_schema().validate(&values);
        assert_eq!(errors[fields::SUBCATEGORIES].kind, RuleKind::Each);
    }

    #[test]
    fn test_subcategory_schema() {
        let mut values = FormValues::new();
        values.insert(fields::SUBCATEGORY_NAME.into(), FieldValue::text("Tennis"));
        assert!(subcategory_schema().validate(&values).is_empty());
        values.insert(fields::SUBCATEGORY_NAME.into(), FieldValue::text("T"));
        assert_eq!(
            subcategory_schema().validate(&values)[fields::SUBCATEGORY_NAME].kind,
            RuleKind::MinLength
        );
    }
}
