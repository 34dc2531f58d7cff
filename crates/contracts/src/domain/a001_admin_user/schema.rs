use crate::shared::validation::{text_field, FieldSchema, Rule, Schema};

pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const REASON: &str = "reason";
    pub const CURRENT_PASSWORD: &str = "currentPassword";
    pub const NEW_PASSWORD: &str = "newPassword";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

pub fn sub_admin_schema() -> Schema {
    Schema::new()
        .field(text_field(fields::FULL_NAME, "Full name", 2, 50))
        .field(
            FieldSchema::new(fields::EMAIL)
                .rule(Rule::Required, "Email is required")
                .rule(Rule::NoSurroundingWhitespace, "Email cannot start or end with a space")
                .rule(Rule::Email, "Enter a valid email address"),
        )
        .field(FieldSchema::new(fields::ROLE).rule(Rule::Required, "Role is required"))
}

/// Reason asked for by block/unblock, delete/reactivate and content rejection.
pub fn reason_schema() -> Schema {
    Schema::new().field(
        FieldSchema::new(fields::REASON)
            .rule(Rule::Required, "Reason is required")
            .rule(Rule::NotBlank, "Reason cannot be blank")
            .rule(Rule::MinLength(3), "Reason must be at least 3 characters")
            .rule(Rule::MaxLength(250), "Reason must be at most 250 characters"),
    )
}

pub fn change_password_schema() -> Schema {
    Schema::new()
        .field(
            FieldSchema::new(fields::CURRENT_PASSWORD)
                .rule(Rule::Required, "Current password is required"),
        )
        .field(
            FieldSchema::new(fields::NEW_PASSWORD)
                .rule(Rule::Required, "New password is required")
                .rule(
                    Rule::PasswordComplexity,
                    "Password must be at least 8 characters with upper case, lower case and a digit",
                )
                .rule(
                    Rule::SpecialCharacter,
                    "Password must contain at least one special character",
                )
                .rule(
                    Rule::PrintableAscii,
                    "Password may only contain printable ASCII characters",
                ),
        )
        .field(
            FieldSchema::new(fields::CONFIRM_PASSWORD)
                .rule(Rule::Required, "Please confirm the password")
                .rule(Rule::Matches(fields::NEW_PASSWORD), "Passwords do not match"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormValues, RuleKind};

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::text(*v)))
            .collect()
    }

    #[test]
    fn test_sub_admin_valid() {
        let errors = sub_admin_schema().validate(&values(&[
            (fields::FULL_NAME, "Jane Doe"),
            (fields::EMAIL, "jane@example.com"),
            (fields::ROLE, "role-1"),
        ]));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn test_sub_admin_errors() {
        let errors = sub_admin_schema().validate(&values(&[
            (fields::FULL_NAME, "J"),
            (fields::EMAIL, "jane@"),
        ]));
        assert_eq!(errors[fields::FULL_NAME].kind, RuleKind::MinLength);
        assert_eq!(errors[fields::EMAIL].kind, RuleKind::Email);
        assert_eq!(errors[fields::ROLE].kind, RuleKind::Required);
    }

    #[test]
    fn test_confirm_mismatch_fails_even_with_valid_password() {
        let errors = change_password_schema().validate(&values(&[
            (fields::CURRENT_PASSWORD, "old"),
            (fields::NEW_PASSWORD, "Abc1234!"),
            (fields::CONFIRM_PASSWORD, "Abc1234?"),
        ]));
        assert!(!errors.contains_key(fields::NEW_PASSWORD));
        assert_eq!(errors[fields::CONFIRM_PASSWORD].kind, RuleKind::Matches);

        let errors = change_password_schema().validate(&values(&[
            (fields::CURRENT_PASSWORD, "old"),
            (fields::NEW_PASSWORD, "abc12345"),
            (fields::CONFIRM_PASSWORD, "abc1234"),
        ]));
        assert_eq!(errors[fields::NEW_PASSWORD].kind, RuleKind::PasswordComplexity);
        assert_eq!(errors[fields::CONFIRM_PASSWORD].kind, RuleKind::Matches);
    }

    #[test]
    fn test_password_rule_order() {
        let errors = change_password_schema().validate(&values(&[
            (fields::CURRENT_PASSWORD, "old"),
            (fields::NEW_PASSWORD, "Abc12345"),
            (fields::CONFIRM_PASSWORD, "Abc12345"),
        ]));
        assert_eq!(errors[fields::NEW_PASSWORD].kind, RuleKind::SpecialCharacter);
        assert!(!errors.contains_key(fields::CONFIRM_PASSWORD));
    }

    #[test]
    fn test_reason() {
        let schema = reason_schema();
        assert!(schema.validate(&values(&[(fields::REASON, "spam links")])).is_empty());
        assert_eq!(
            schema.validate(&values(&[(fields::REASON, "  ")]))[fields::REASON].kind,
            RuleKind::NotBlank
        );
    }
}
