use crate::shared::validation::{FieldSchema, Rule, Schema};

pub mod fields {
    pub const KEYWORDS: &str = "keywords";
}

pub fn blocked_keyword_schema() -> Schema {
    Schema::new().field(
        FieldSchema::new(fields::KEYWORDS)
            .rule(Rule::MinItems(1), "Enter at least one keyword")
            .rule(
                Rule::Each(vec![
                    Rule::MinLength(2),
                    Rule::MaxLength(40),
                    Rule::AllowedCharset,
                ]),
                "Keywords must be 2-40 letters, digits, spaces or hyphens",
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_blocked_keyword::parse_keywords;
    use crate::shared::validation::{FieldValue, FormValues, RuleKind};

    #[test]
    fn test_keywords() {
        let mut v = FormValues::new();
        v.insert(
            fields::KEYWORDS.into(),
            FieldValue::List(parse_keywords("spam, free-money")),
        );
        assert!(blocked_keyword_schema().validate(&v).is_empty());

        v.insert(fields::KEYWORDS.into(), FieldValue::List(parse_keywords("x, $$$")));
        assert_eq!(
            blocked_keyword_schema().validate(&v)[fields::KEYWORDS].kind,
            RuleKind::Each
        );
    }
}
