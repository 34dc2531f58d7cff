use crate::shared::validation::{FieldSchema, Rule, Schema};

pub mod fields {
    pub const QUESTION: &str = "question";
    pub const ANSWER: &str = "answer";
    pub const CONTENT: &str = "content";
}

pub fn faq_schema() -> Schema {
    Schema::new()
        .field(
            FieldSchema::new(fields::QUESTION)
                .rule(Rule::Required, "Question is required")
                .rule(Rule::NotBlank, "Question cannot be blank")
                .rule(Rule::MinLength(5), "Question must be at least 5 characters")
                .rule(Rule::MaxLength(250), "Question must be at most 250 characters")
                .rule(
                    Rule::NoSurroundingWhitespace,
                    "Question cannot start or end with a space",
                ),
        )
        .field(
            FieldSchema::new(fields::ANSWER)
                .rule(Rule::Required, "Answer is required")
                .rule(Rule::NotBlank, "Answer cannot be blank")
                .rule(Rule::MinLength(10), "Answer must be at least 10 characters")
                .rule(Rule::MaxLength(2000), "Answer must be at most 2000 characters"),
        )
}

pub fn legal_doc_schema() -> Schema {
    Schema::new().field(
        FieldSchema::new(fields::CONTENT)
            .rule(Rule::Required, "Content is required")
            .rule(Rule::NotBlank, "Content cannot be blank")
            .rule(Rule::MinLength(20), "Content must be at least 20 characters"),
    )
}
