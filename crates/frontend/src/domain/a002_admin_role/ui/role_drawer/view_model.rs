use contracts::domain::a002_admin_role::schema::{admin_role_schema, fields};
use contracts::domain::a002_admin_role::{AdminRole, RoleUpsert, UpdateRoleArgs};
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a002_admin_role::api::{CreateAdminRole, UpdateAdminRole};
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

pub fn initial_values(role: Option<&AdminRole>) -> FormValues {
    let mut values = FormValues::new();
    values.insert(
        fields::NAME.into(),
        FieldValue::text(role.map(|r| r.name.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::PERMISSION_IDS.into(),
        FieldValue::List(role.map(|r| r.permission_ids.clone()).unwrap_or_default()),
    );
    values
}

pub fn build_body(values: &FormValues) -> RoleUpsert {
    RoleUpsert {
        name: values.text(fields::NAME).trim().to_string(),
        permission_ids: values.list(fields::PERMISSION_IDS),
    }
}

#[derive(Clone, Copy)]
pub struct RoleDrawerViewModel {
    pub model: DrawerFormModel,
    /// Id of the role being edited; `None` creates a new one
    pub editing: RwSignal<Option<String>>,
    mutations: Mutations,
}

impl RoleDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(admin_role_schema()),
            editing: RwSignal::new(None),
            mutations: use_mutations(),
        }
    }

    pub fn open_new(&self) {
        self.editing.set(None);
        self.model.open_with(initial_values(None));
    }

    pub fn open_edit(&self, role: &AdminRole) {
        self.editing.set(Some(role.id.clone()));
        self.model.open_with(initial_values(Some(role)));
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let editing = self.editing;
        Signal::derive(move || editing.with(Option::is_some))
    }

    pub fn save(&self, values: FormValues) {
        let model = self.model;
        let body = build_body(&values);
        let finish = move |ok: bool| model.finish(ok);
        match self.editing.get_untracked() {
            Some(id) => self.mutations.run::<UpdateAdminRole, _>(
                UpdateRoleArgs { id, body },
                "Role updated",
                move |r| finish(r.is_ok()),
            ),
            None => self
                .mutations
                .run::<CreateAdminRole, _>(body, "Role created", move |r| finish(r.is_ok())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_values_come_from_role() {
        let role = AdminRole {
            id: "r1".into(),
            name: "Reviewers".into(),
            permission_ids: vec!["content.view".into()],
            assigned_admins: 2,
            created_at: None,
        };
        let values = initial_values(Some(&role));
        assert_eq!(values.text(fields::NAME), "Reviewers");
        assert_eq!(values.list(fields::PERMISSION_IDS), vec!["content.view"]);
        assert!(initial_values(None).list(fields::PERMISSION_IDS).is_empty());
    }

    #[test]
    fn test_body_trims_name() {
        let mut values = initial_values(None);
        values.insert(fields::NAME.into(), FieldValue::text(" Leads "));
        values.insert(fields::PERMISSION_IDS.into(), FieldValue::list(["a", "b"]));
        assert_eq!(
            build_body(&values),
            RoleUpsert {
                name: "Leads".into(),
                permission_ids: vec!["a".into(), "b".into()],
            }
        );
    }
}
