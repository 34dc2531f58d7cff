use crate::shared::validation::{text_field, FieldSchema, Rule, Schema};

pub mod fields {
    pub const NAME: &str = "name";
    pub const PERMISSION_IDS: &str = "permissionIds";
}

pub fn admin_role_schema() -> Schema {
    Schema::new()
        .field(text_field(fields::NAME, "Role name", 2, 30))
        .field(
            FieldSchema::new(fields::PERMISSION_IDS)
                .rule(Rule::MinItems(1), "Select at least one permission"),
        )
}
